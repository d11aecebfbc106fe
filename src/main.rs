use pokeapi;

mod format;
mod screen;
mod sprite;
mod theme;
mod widget;

use crate::pokeapi::Session;
use crate::screen::Screen;
use crate::screen::catalog::{self, Catalog};
use crate::screen::details::{self, Details};

use iced::{Element, Font, Subscription, Task, Theme};

pub fn main() -> iced::Result {
    tracing_subscriber::fmt::init();

    iced::application(Pokedex::new, Pokedex::update, Pokedex::view)
        .subscription(Pokedex::subscription)
        .theme(Pokedex::theme)
        .title("Pokédex")
        .default_font(Font::MONOSPACE)
        .window_size((1280.0, 900.0))
        .run()
}

struct Pokedex {
    session: Session,
    catalog: Catalog,
    screen: Screen,
}

#[derive(Debug, Clone)]
enum Message {
    Catalog(catalog::Message),
    Details(details::Message),
}

impl Pokedex {
    fn new() -> (Self, Task<Message>) {
        let session = Session::new();
        let (catalog, task) = Catalog::new(&session);

        (
            Self {
                session,
                catalog,
                screen: Screen::Catalog,
            },
            task.map(Message::Catalog),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Catalog(message) => {
                match self.catalog.update(message, &self.session) {
                    catalog::Action::None => Task::none(),
                    catalog::Action::Run(task) => task.map(Message::Catalog),
                    catalog::Action::Open(id) => {
                        let (details, task) = Details::new(id, &self.session);

                        self.screen = Screen::Details(details);

                        task.map(Message::Details)
                    }
                }
            }
            Message::Details(message) => {
                let Screen::Details(details) = &mut self.screen else {
                    return Task::none();
                };

                match details.update(message, &self.session) {
                    details::Action::None => Task::none(),
                    details::Action::Run(task) => task.map(Message::Details),
                    details::Action::Back => {
                        self.screen = Screen::Catalog;

                        // The listing is always re-fetched when navigating back
                        self.catalog.refresh(&self.session).map(Message::Catalog)
                    }
                }
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        match &self.screen {
            Screen::Catalog => self.catalog.view().map(Message::Catalog),
            Screen::Details(details) => details.view().map(Message::Details),
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        match &self.screen {
            Screen::Catalog => self.catalog.subscription().map(Message::Catalog),
            Screen::Details(details) => details.subscription().map(Message::Details),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }
}
