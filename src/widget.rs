use crate::format;
use crate::theme;

use iced::border;
use iced::widget::{canvas, container, text};
use iced::{Color, Element, Pixels};

pub fn logo<'a, Message: 'a>(size: impl Into<Pixels>) -> Element<'a, Message> {
    text("Pokédex").size(size).into()
}

pub fn type_badge<'a, Message: 'a>(kind: &'a str) -> Element<'a, Message> {
    let color = theme::type_color(kind);

    container(text(format::capitalize(kind)).size(11))
        .padding([3, 10])
        .style(move |_theme| container::Style {
            text_color: Some(Color::WHITE),
            ..container::Style::default()
                .background(color)
                .border(border::rounded(10))
        })
        .into()
}

pub fn pokeball<'a, Message: 'a>(size: impl Into<Pixels>) -> Element<'a, Message> {
    use iced::mouse;
    use iced::{Point, Rectangle, Renderer, Size, Theme};

    struct Pokeball;

    impl<Message> canvas::Program<Message> for Pokeball {
        type State = canvas::Cache;

        fn draw(
            &self,
            cache: &Self::State,
            renderer: &Renderer,
            theme: &Theme,
            bounds: Rectangle,
            _cursor: mouse::Cursor,
        ) -> Vec<canvas::Geometry> {
            let pokeball = cache.draw(renderer, bounds.size(), |frame| {
                const RADIUS: f32 = 100.0;
                const BAND: f32 = 24.0;

                let palette = theme.palette();

                let center = Point::new(RADIUS, RADIUS);
                let shell = canvas::Path::circle(center, RADIUS);
                let button_rim = canvas::Path::circle(center, RADIUS / 3.0);
                let button = canvas::Path::circle(center, RADIUS / 5.0);

                let lower_half = Rectangle::new(
                    Point::new(0.0, RADIUS),
                    Size::new(2.0 * RADIUS, RADIUS),
                );

                let band = Rectangle::new(
                    Point::new(0.0, RADIUS - BAND / 2.0),
                    Size::new(2.0 * RADIUS, BAND),
                );

                let scale = (bounds.width - 0.5) / (2.0 * RADIUS);

                frame.scale(scale);

                frame.fill(&shell, palette.danger);
                frame.fill_rectangle(lower_half.position(), lower_half.size(), palette.background);
                frame.fill_rectangle(band.position(), band.size(), palette.text);
                frame.fill(&button_rim, palette.text);
                frame.fill(&button, palette.background);
            });

            vec![pokeball]
        }
    }

    let size = size.into();

    canvas(Pokeball).width(size).height(size).into()
}
