use serde::Deserialize;

use std::fmt;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "schema::Pokemon")]
pub struct Pokemon {
    pub id: Id,
    pub name: String,
    pub types: Vec<String>,
    pub stats: Vec<Stat>,
    pub abilities: Vec<String>,
    pub height: u32,
    pub weight: u32,
    pub sprite: Option<String>,
    pub artwork: Option<String>,
}

impl Pokemon {
    pub fn image_url(&self) -> Option<&str> {
        self.artwork.as_deref().or(self.sprite.as_deref())
    }

    pub fn height_meters(&self) -> f32 {
        self.height as f32 / 10.0
    }

    pub fn weight_kilograms(&self) -> f32 {
        self.weight as f32 / 10.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(transparent)]
pub struct Id(pub(crate) u32);

impl Id {
    pub fn number(self) -> u32 {
        self.0
    }
}

impl From<u32> for Id {
    fn from(number: u32) -> Self {
        Self(number)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stat {
    pub name: String,
    pub base: u32,
}

impl Stat {
    pub const MAX: u32 = 255;

    pub fn ratio(&self) -> f32 {
        self.base.min(Self::MAX) as f32 / Self::MAX as f32
    }
}

impl From<schema::Pokemon> for Pokemon {
    fn from(pokemon: schema::Pokemon) -> Self {
        Self {
            id: pokemon.id,
            name: pokemon.name,
            types: pokemon.types.into_iter().map(|slot| slot.kind.name).collect(),
            stats: pokemon
                .stats
                .into_iter()
                .map(|slot| Stat {
                    name: slot.stat.name,
                    base: slot.base_stat,
                })
                .collect(),
            abilities: pokemon
                .abilities
                .into_iter()
                .map(|slot| slot.ability.name)
                .collect(),
            height: pokemon.height,
            weight: pokemon.weight,
            sprite: pokemon.sprites.front_default,
            artwork: pokemon.sprites.other.official_artwork.front_default,
        }
    }
}

mod schema {
    use super::Id;

    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Pokemon {
        pub id: Id,
        pub name: String,
        pub types: Vec<TypeSlot>,
        pub stats: Vec<StatSlot>,
        pub abilities: Vec<AbilitySlot>,
        pub height: u32,
        pub weight: u32,
        #[serde(default)]
        pub sprites: Sprites,
    }

    #[derive(Deserialize)]
    pub struct TypeSlot {
        #[serde(rename = "type")]
        pub kind: Named,
    }

    #[derive(Deserialize)]
    pub struct StatSlot {
        pub base_stat: u32,
        pub stat: Named,
    }

    #[derive(Deserialize)]
    pub struct AbilitySlot {
        pub ability: Named,
    }

    #[derive(Deserialize)]
    pub struct Named {
        pub name: String,
    }

    #[derive(Default, Deserialize)]
    pub struct Sprites {
        pub front_default: Option<String>,
        #[serde(default)]
        pub other: Other,
    }

    #[derive(Default, Deserialize)]
    pub struct Other {
        #[serde(default, rename = "official-artwork")]
        pub official_artwork: Artwork,
    }

    #[derive(Default, Deserialize)]
    pub struct Artwork {
        pub front_default: Option<String>,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PIKACHU: &str = r#"{
        "id": 25,
        "name": "pikachu",
        "height": 4,
        "weight": 60,
        "types": [{ "slot": 1, "type": { "name": "electric", "url": "" } }],
        "stats": [
            { "base_stat": 35, "effort": 0, "stat": { "name": "hp", "url": "" } },
            { "base_stat": 90, "effort": 2, "stat": { "name": "speed", "url": "" } }
        ],
        "abilities": [
            { "is_hidden": false, "slot": 1, "ability": { "name": "static", "url": "" } },
            { "is_hidden": true, "slot": 3, "ability": { "name": "lightning-rod", "url": "" } }
        ],
        "sprites": {
            "front_default": "https://sprites.example/25.png",
            "other": {
                "official-artwork": {
                    "front_default": "https://artwork.example/25.png"
                }
            }
        }
    }"#;

    #[test]
    fn pikachu_flattens() {
        let pokemon: Pokemon = serde_json::from_str(PIKACHU).unwrap();

        assert_eq!(pokemon.id, Id(25));
        assert_eq!(pokemon.name, "pikachu");
        assert_eq!(pokemon.types, vec!["electric".to_owned()]);
        assert_eq!(
            pokemon.stats,
            vec![
                Stat {
                    name: "hp".to_owned(),
                    base: 35
                },
                Stat {
                    name: "speed".to_owned(),
                    base: 90
                },
            ]
        );
        assert_eq!(
            pokemon.abilities,
            vec!["static".to_owned(), "lightning-rod".to_owned()]
        );
    }

    #[test]
    fn artwork_is_preferred() {
        let pokemon: Pokemon = serde_json::from_str(PIKACHU).unwrap();

        assert_eq!(pokemon.image_url(), Some("https://artwork.example/25.png"));
    }

    #[test]
    fn sprite_is_the_fallback() {
        let mut pokemon: Pokemon = serde_json::from_str(PIKACHU).unwrap();
        pokemon.artwork = None;

        assert_eq!(pokemon.image_url(), Some("https://sprites.example/25.png"));

        pokemon.sprite = None;

        assert_eq!(pokemon.image_url(), None);
    }

    #[test]
    fn display_units_divide_by_ten() {
        let pokemon: Pokemon = serde_json::from_str(PIKACHU).unwrap();

        assert_eq!(pokemon.height_meters(), 0.4);
        assert_eq!(pokemon.weight_kilograms(), 6.0);

        // Bulbasaur is 7 decimeters tall
        assert_eq!(
            Pokemon {
                height: 7,
                ..pokemon
            }
            .height_meters(),
            0.7
        );
    }

    #[test]
    fn stat_ratio_is_clamped() {
        let stat = Stat {
            name: "attack".to_owned(),
            base: 300,
        };

        assert_eq!(stat.ratio(), 1.0);
    }
}
