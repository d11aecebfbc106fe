use crate::format;
use crate::pokeapi::pokemon::{self, Stat};
use crate::pokeapi::{Pokemon, Session, Species};
use crate::sprite::Sprite;
use crate::theme;
use crate::widget::pokeball;

use iced::border;
use iced::keyboard;
use iced::widget::{
    button, center, center_x, column, container, horizontal_space, image, progress_bar, right, row,
    scrollable, text,
};
use iced::{Center, Color, ContentFit, Element, Fill, Subscription, Task, Theme};

const LANGUAGE: &str = "fr";
const NO_DESCRIPTION: &str = "Aucune description disponible.";

pub struct Details {
    state: State,
}

enum State {
    Loading,
    Loaded {
        pokemon: Pokemon,
        description: String,
        artwork: Artwork,
    },
    NotFound,
}

enum Artwork {
    Loading,
    Loaded(image::Handle),
    Errored,
}

#[derive(Debug, Clone)]
pub enum Message {
    Fetched(Result<(Pokemon, Species), pokeapi::Error>),
    ArtworkFetched(Result<Sprite, anywho::Error>),
    Back,
}

pub enum Action {
    None,
    Run(Task<Message>),
    Back,
}

impl Details {
    pub fn new(id: pokemon::Id, session: &Session) -> (Self, Task<Message>) {
        let session = session.clone();

        let fetch = async move {
            let pokemon = session.fetch_pokemon(&id.to_string()).await?;
            let species = session.fetch_species(pokemon.id).await?;

            Ok((pokemon, species))
        };

        (
            Self {
                state: State::Loading,
            },
            Task::perform(fetch, Message::Fetched),
        )
    }

    pub fn update(&mut self, message: Message, session: &Session) -> Action {
        match message {
            Message::Fetched(Ok((pokemon, species))) => {
                let description = species
                    .flavor_text(LANGUAGE)
                    .unwrap_or_else(|| NO_DESCRIPTION.to_owned());

                let url = pokemon.image_url().map(str::to_owned);

                let (artwork, task) = match url {
                    Some(url) => (
                        Artwork::Loading,
                        Some(Task::perform(
                            Sprite::fetch(url, session),
                            Message::ArtworkFetched,
                        )),
                    ),
                    None => (Artwork::Errored, None),
                };

                self.state = State::Loaded {
                    pokemon,
                    description,
                    artwork,
                };

                match task {
                    Some(task) => Action::Run(task),
                    None => Action::None,
                }
            }
            Message::ArtworkFetched(Ok(sprite)) => {
                if let State::Loaded { artwork, .. } = &mut self.state {
                    *artwork = Artwork::Loaded(image::Handle::from_rgba(
                        sprite.width,
                        sprite.height,
                        sprite.rgba,
                    ));
                }

                Action::None
            }
            Message::Back => Action::Back,
            Message::Fetched(Err(error)) => {
                log::error!("{error}");

                self.state = State::NotFound;

                Action::None
            }
            Message::ArtworkFetched(Err(error)) => {
                log::error!("{error}");

                if let State::Loaded { artwork, .. } = &mut self.state {
                    *artwork = Artwork::Errored;
                }

                Action::None
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        match &self.state {
            State::Loading => center(pokeball(64)).into(),
            State::NotFound => not_found(),
            State::Loaded {
                pokemon,
                description,
                artwork,
            } => profile(pokemon, description, artwork),
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(|key, _modifiers| {
            use keyboard::key::{Key, Named};

            match key.as_ref() {
                Key::Named(Named::Escape) => Some(Message::Back),
                _ => None,
            }
        })
    }
}

fn not_found<'a>() -> Element<'a, Message> {
    center(
        column![
            text("Pokémon non trouvé").size(24),
            button(text("Retour à l'accueil").size(14))
                .on_press(Message::Back)
                .padding([10, 20]),
        ]
        .spacing(20)
        .align_x(Center),
    )
    .into()
}

fn profile<'a>(
    pokemon: &'a Pokemon,
    description: &'a str,
    artwork: &'a Artwork,
) -> Element<'a, Message> {
    let color = theme::type_color(pokemon.types.first().map(String::as_str).unwrap_or_default());

    let back = button(text("Retour au Pokédex").size(14))
        .on_press(Message::Back)
        .style(button::text);

    let portrait: Element<_> = match artwork {
        Artwork::Loaded(handle) => image(handle)
            .width(220)
            .height(220)
            .content_fit(ContentFit::Contain)
            .into(),
        Artwork::Loading | Artwork::Errored => {
            center(pokeball(48)).width(220).height(220).into()
        }
    };

    let header = container(
        column![
            right(text(format::dex_number(pokemon.id)).size(18)),
            center_x(portrait),
            text(format::capitalize(&pokemon.name)).size(36),
            center_x(
                row(pokemon.types.iter().map(|kind| header_badge(kind))).spacing(8)
            ),
        ]
        .spacing(10)
        .align_x(Center),
    )
    .padding(30)
    .width(Fill)
    .style(move |_theme| container::Style {
        text_color: Some(Color::WHITE),
        ..container::Style::default()
            .background(color)
            .border(border::rounded(16))
    });

    let physique = column![
        section_title("Informations physiques"),
        detail("Taille", format!("{} m", pokemon.height_meters())),
        detail("Poids", format!("{} kg", pokemon.weight_kilograms())),
    ]
    .spacing(10)
    .width(Fill);

    let abilities = column![
        section_title("Capacités"),
        column(pokemon.abilities.iter().map(|name| ability(name))).spacing(5),
    ]
    .spacing(10)
    .width(Fill);

    let stats = column![
        section_title("Statistiques"),
        column(pokemon.stats.iter().map(|stat| stat_row(stat, color))).spacing(10),
    ]
    .spacing(10);

    let content = column![
        back,
        header,
        column![section_title("Description"), text(description)].spacing(10),
        row![physique, abilities].spacing(30),
        stats,
    ]
    .spacing(25)
    .padding(20)
    .max_width(820);

    scrollable(center_x(content)).into()
}

fn section_title(title: &str) -> Element<'_, Message> {
    text(title).size(20).into()
}

fn header_badge(kind: &str) -> Element<'_, Message> {
    container(text(format::capitalize(kind)).size(13))
        .padding([5, 15])
        .style(|_theme| {
            container::Style {
                text_color: Some(Color::WHITE),
                ..container::Style::default()
                    .background(Color::WHITE.scale_alpha(0.25))
                    .border(border::rounded(12))
            }
        })
        .into()
}

fn detail<'a>(label: &'a str, value: String) -> Element<'a, Message> {
    row![
        text(label).size(14).style(|theme: &Theme| {
            let palette = theme.extended_palette();

            text::Style {
                color: Some(palette.background.strong.color),
            }
        }),
        horizontal_space(),
        text(value).size(14),
    ]
    .into()
}

fn ability(name: &str) -> Element<'_, Message> {
    container(text(format::capitalize(&name.replace('-', " "))).size(14))
        .padding([5, 10])
        .width(Fill)
        .style(container::bordered_box)
        .into()
}

fn stat_row(stat: &Stat, color: Color) -> Element<'_, Message> {
    row![
        text(format::stat_label(&stat.name)).size(14).width(120),
        progress_bar(0.0..=Stat::MAX as f32, stat.base.min(Stat::MAX) as f32)
            .girth(14)
            .style(move |_theme| progress_bar::Style {
                background: Color::BLACK.scale_alpha(0.1).into(),
                bar: color.into(),
                border: border::rounded(7),
            }),
        text(stat.base.to_string()).size(14).width(40),
    ]
    .spacing(10)
    .align_y(Center)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new()
    }

    fn bulbasaur() -> Pokemon {
        serde_json::from_value(serde_json::json!({
            "id": 1,
            "name": "bulbasaur",
            "height": 7,
            "weight": 69,
            "types": [{ "type": { "name": "grass" } }, { "type": { "name": "poison" } }],
            "stats": [{ "base_stat": 45, "stat": { "name": "hp" } }],
            "abilities": [{ "ability": { "name": "overgrow" } }],
            "sprites": { "front_default": null }
        }))
        .unwrap()
    }

    fn species(entries: serde_json::Value) -> Species {
        serde_json::from_value(serde_json::json!({ "flavor_text_entries": entries })).unwrap()
    }

    #[test]
    fn failure_becomes_not_found() {
        let session = session();
        let (mut details, _task) = Details::new(pokemon::Id::from(9999), &session);

        let _ = details.update(
            Message::Fetched(Err(pokeapi::Error::NotFound("9999".to_owned()))),
            &session,
        );

        assert!(matches!(details.state, State::NotFound));
    }

    #[test]
    fn missing_language_falls_back_to_the_placeholder() {
        let session = session();
        let (mut details, _task) = Details::new(pokemon::Id::from(1), &session);

        let species = species(serde_json::json!([
            { "flavor_text": "A strange seed.", "language": { "name": "en" } }
        ]));

        let _ = details.update(Message::Fetched(Ok((bulbasaur(), species))), &session);

        let State::Loaded { description, artwork, .. } = &details.state else {
            panic!("profile did not load");
        };

        assert_eq!(description, NO_DESCRIPTION);
        assert!(matches!(artwork, Artwork::Errored));
    }

    #[test]
    fn matching_language_is_displayed() {
        let session = session();
        let (mut details, _task) = Details::new(pokemon::Id::from(1), &session);

        let species = species(serde_json::json!([
            { "flavor_text": "Il a une étrange\ngraine.", "language": { "name": "fr" } }
        ]));

        let _ = details.update(Message::Fetched(Ok((bulbasaur(), species))), &session);

        let State::Loaded { pokemon, description, .. } = &details.state else {
            panic!("profile did not load");
        };

        assert_eq!(pokemon.name, "bulbasaur");
        assert_eq!(description, "Il a une étrange graine.");
    }
}
