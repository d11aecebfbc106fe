use crate::format;
use crate::pokeapi::page;
use crate::pokeapi::pokemon;
use crate::pokeapi::{Pokemon, Session};
use crate::sprite::Sprite;
use crate::theme;
use crate::widget::{logo, pokeball, type_badge};

use iced::keyboard;
use iced::time::milliseconds;
use iced::widget::{
    button, center, center_x, column, container, grid, image, right, row, scrollable, text,
    text_input,
};
use iced::{Center, ContentFit, Element, Fill, Subscription, Task, Theme};

use function::Binary;
use std::collections::HashMap;
use tokio::time;

pub struct Catalog {
    search: String,
    page: page::Number,
    total: usize,
    state: State,
    generation: usize,
    thumbnails: HashMap<pokemon::Id, Thumbnail>,
}

enum State {
    Loading,
    Loaded { pokemon: Vec<Pokemon> },
}

enum Thumbnail {
    Loading,
    Loaded(image::Handle),
    Errored,
}

#[derive(Debug, Clone)]
pub enum Message {
    SearchChanged(String),
    PreviousPage,
    NextPage,
    ShowAll,
    PageFetched(usize, Result<page::Page, pokeapi::Error>),
    SearchFetched(usize, Result<Pokemon, pokeapi::Error>),
    Shown(pokemon::Id),
    ThumbnailFetched(pokemon::Id, Result<Sprite, anywho::Error>),
    Chosen(pokemon::Id),
}

pub enum Action {
    None,
    Run(Task<Message>),
    Open(pokemon::Id),
}

impl Catalog {
    pub fn new(session: &Session) -> (Self, Task<Message>) {
        let mut catalog = Self {
            search: String::new(),
            page: page::Number::FIRST,
            total: 0,
            state: State::Loading,
            generation: 0,
            thumbnails: HashMap::new(),
        };

        let task = catalog.load(session);

        (catalog, task)
    }

    pub fn refresh(&mut self, session: &Session) -> Task<Message> {
        let query = self.query();

        if query.is_empty() {
            self.load(session)
        } else {
            self.state = State::Loading;
            self.generation += 1;

            let session = session.clone();

            Task::perform(
                async move { session.fetch_pokemon(&query).await },
                Message::SearchFetched.with(self.generation),
            )
        }
    }

    fn load(&mut self, session: &Session) -> Task<Message> {
        self.state = State::Loading;
        self.generation += 1;

        let number = self.page;
        let session = session.clone();

        Task::perform(
            async move { session.fetch_page(number).await },
            Message::PageFetched.with(self.generation),
        )
    }

    fn query(&self) -> String {
        self.search.trim().to_lowercase()
    }

    pub fn update(&mut self, message: Message, session: &Session) -> Action {
        match message {
            Message::SearchChanged(search) => {
                self.search = search;
                self.state = State::Loading;
                self.generation += 1;

                let generation = self.generation;
                let query = self.query();
                let number = self.page;
                let session = session.clone();

                let task = if query.is_empty() {
                    Task::perform(
                        async move {
                            time::sleep(milliseconds(250)).await;
                            session.fetch_page(number).await
                        },
                        Message::PageFetched.with(generation),
                    )
                } else {
                    Task::perform(
                        async move {
                            time::sleep(milliseconds(250)).await;
                            session.fetch_pokemon(&query).await
                        },
                        Message::SearchFetched.with(generation),
                    )
                };

                Action::Run(task)
            }
            Message::PreviousPage => {
                if !self.query().is_empty() {
                    return Action::None;
                }

                let Some(previous) = self.page.previous() else {
                    return Action::None;
                };

                self.page = previous;

                Action::Run(self.load(session))
            }
            Message::NextPage => {
                if !self.query().is_empty() {
                    return Action::None;
                }

                let Some(next) = self.page.next(self.total) else {
                    return Action::None;
                };

                self.page = next;

                Action::Run(self.load(session))
            }
            Message::ShowAll => {
                self.search.clear();

                Action::Run(self.load(session))
            }
            Message::PageFetched(generation, Ok(page)) => {
                if generation != self.generation {
                    return Action::None;
                }

                self.total = page.total;
                self.state = State::Loaded {
                    pokemon: page.pokemon,
                };

                Action::None
            }
            Message::SearchFetched(generation, Ok(pokemon)) => {
                if generation != self.generation {
                    return Action::None;
                }

                self.state = State::Loaded {
                    pokemon: vec![pokemon],
                };

                Action::None
            }
            Message::Shown(id) => {
                if self.thumbnails.contains_key(&id) {
                    return Action::None;
                }

                let State::Loaded { pokemon } = &self.state else {
                    return Action::None;
                };

                let Some(entry) = pokemon.iter().find(|pokemon| pokemon.id == id) else {
                    return Action::None;
                };

                match entry.image_url() {
                    Some(url) => {
                        let _ = self.thumbnails.insert(id, Thumbnail::Loading);

                        Action::Run(Task::perform(
                            Sprite::fetch(url.to_owned(), session),
                            Message::ThumbnailFetched.with(id),
                        ))
                    }
                    None => {
                        let _ = self.thumbnails.insert(id, Thumbnail::Errored);

                        Action::None
                    }
                }
            }
            Message::ThumbnailFetched(id, Ok(sprite)) => {
                let _ = self.thumbnails.insert(
                    id,
                    Thumbnail::Loaded(image::Handle::from_rgba(
                        sprite.width,
                        sprite.height,
                        sprite.rgba,
                    )),
                );

                Action::None
            }
            Message::Chosen(id) => Action::Open(id),
            Message::PageFetched(generation, Err(error)) => {
                if generation != self.generation {
                    return Action::None;
                }

                log::error!("{error}");

                self.state = State::Loaded {
                    pokemon: Vec::new(),
                };

                Action::None
            }
            Message::SearchFetched(generation, Err(error)) => {
                if generation != self.generation {
                    return Action::None;
                }

                log::error!("{error}");

                self.state = State::Loaded {
                    pokemon: Vec::new(),
                };

                Action::None
            }
            Message::ThumbnailFetched(id, Err(error)) => {
                log::error!("{error}");

                let _ = self.thumbnails.insert(id, Thumbnail::Errored);

                Action::None
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let header = row![
            pokeball(36),
            column![logo(28), text("Découvrez tous les Pokémon").size(12)],
        ]
        .spacing(15)
        .align_y(Center);

        let search = container(
            text_input("Rechercher un Pokémon...", &self.search)
                .on_input(Message::SearchChanged)
                .padding(10),
        )
        .max_width(600);

        let tiles = row![
            tile(self.total.to_string(), "Pokémon au total"),
            tile("18".to_owned(), "Types différents"),
            tile("9".to_owned(), "Générations"),
        ]
        .spacing(20);

        let content: Element<_> = match &self.state {
            State::Loading => center(pokeball(64)).into(),
            State::Loaded { pokemon } if pokemon.is_empty() => self.empty(),
            State::Loaded { pokemon } => {
                let cards = grid(pokemon.iter().map(|pokemon| self.card(pokemon)))
                    .fluid(220)
                    .height(grid::aspect_ratio(220, 260))
                    .spacing(10);

                let listing = scrollable(cards).width(Fill).height(Fill).spacing(10);

                let pagination = self.query().is_empty().then(|| {
                    center_x(
                        row![
                            button(text("Précédent").size(14))
                                .on_press_maybe(
                                    self.page.previous().map(|_| Message::PreviousPage),
                                )
                                .padding([8, 15]),
                            text!(
                                "Page {page} sur {pages}",
                                page = self.page,
                                pages = page::Number::last(self.total),
                            )
                            .size(14),
                            button(text("Suivant").size(14))
                                .on_press_maybe(self.page.next(self.total).map(|_| Message::NextPage))
                                .padding([8, 15]),
                        ]
                        .spacing(20)
                        .align_y(Center),
                    )
                });

                column![listing].push_maybe(pagination).spacing(15).into()
            }
        };

        column![header, center_x(search), tiles, content]
            .spacing(20)
            .padding(20)
            .into()
    }

    fn card<'a>(&'a self, pokemon: &'a Pokemon) -> Element<'a, Message> {
        use iced::widget::pop;

        let id = pokemon.id;
        let color = theme::type_color(pokemon.types.first().map(String::as_str).unwrap_or_default());

        let thumbnail: Element<_> = match self.thumbnails.get(&id) {
            Some(Thumbnail::Loaded(handle)) => image(handle)
                .width(Fill)
                .height(Fill)
                .content_fit(ContentFit::Contain)
                .into(),
            Some(Thumbnail::Errored) => center(text(pokemon.name.as_str()).size(14).center()).into(),
            _ => center(pokeball(32)).into(),
        };

        let number = text(format::dex_number(id))
            .size(12)
            .style(|theme: &Theme| {
                let palette = theme.extended_palette();

                text::Style {
                    color: Some(palette.background.strong.color),
                }
            });

        let content = column![
            right(number),
            container(thumbnail).height(Fill),
            text(format::capitalize(&pokemon.name)).size(16),
            row(pokemon.types.iter().map(|kind| type_badge(kind))).spacing(5),
        ]
        .spacing(5)
        .align_x(Center);

        let card = button(
            container(content)
                .padding(10)
                .style(move |theme| {
                    container::bordered_box(theme).background(color.scale_alpha(0.1))
                })
                .width(Fill)
                .height(Fill),
        )
        .on_press(Message::Chosen(id))
        .padding(0)
        .style(button::text);

        pop(card)
            .key(pokemon.name.as_str())
            .on_show(move |_size| Message::Shown(id))
            .into()
    }

    fn empty(&self) -> Element<'_, Message> {
        center(
            column![
                text("Aucun Pokémon trouvé").size(24),
                text("Essayez un autre nom ou numéro de Pokémon").size(14),
                button(text("Voir tous les Pokémon").size(14))
                    .on_press(Message::ShowAll)
                    .padding([10, 20]),
            ]
            .spacing(15)
            .align_x(Center),
        )
        .into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(|key, modifiers| {
            use keyboard::key::{Key, Named};

            Some(match key.as_ref() {
                Key::Named(Named::ArrowLeft) if modifiers.is_empty() => Message::PreviousPage,
                Key::Named(Named::ArrowRight) if modifiers.is_empty() => Message::NextPage,
                _ => None?,
            })
        })
    }
}

fn tile<'a>(value: String, label: &'a str) -> Element<'a, Message> {
    container(
        column![text(value).size(28), text(label).size(12)]
            .spacing(5)
            .align_x(Center),
    )
    .padding(20)
    .width(Fill)
    .style(container::bordered_box)
    .into()
}
