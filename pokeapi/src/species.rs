use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "schema::Species")]
pub struct Species {
    pub flavor_texts: Vec<FlavorText>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FlavorText {
    pub language: String,
    pub text: String,
}

impl Species {
    pub fn flavor_text(&self, language: &str) -> Option<String> {
        let entry = self
            .flavor_texts
            .iter()
            .find(|flavor| flavor.language == language)?;

        // Flavor text ships with raw form feeds and line breaks
        Some(
            entry
                .text
                .chars()
                .map(|c| if c.is_control() { ' ' } else { c })
                .collect(),
        )
    }
}

impl From<schema::Species> for Species {
    fn from(species: schema::Species) -> Self {
        Self {
            flavor_texts: species
                .flavor_text_entries
                .into_iter()
                .map(|entry| FlavorText {
                    language: entry.language.name,
                    text: entry.flavor_text,
                })
                .collect(),
        }
    }
}

mod schema {
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Species {
        pub flavor_text_entries: Vec<FlavorTextEntry>,
    }

    #[derive(Deserialize)]
    pub struct FlavorTextEntry {
        pub flavor_text: String,
        pub language: Named,
    }

    #[derive(Deserialize)]
    pub struct Named {
        pub name: String,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BULBASAUR: &str = "{
        \"flavor_text_entries\": [
            {
                \"flavor_text\": \"A strange seed was\\nplanted on its\\fback at birth.\",
                \"language\": { \"name\": \"en\", \"url\": \"\" }
            },
            {
                \"flavor_text\": \"Il a une étrange\\ngraine plantée\\fsur son dos.\",
                \"language\": { \"name\": \"fr\", \"url\": \"\" }
            }
        ]
    }";

    #[test]
    fn matching_language_is_selected() {
        let species: Species = serde_json::from_str(BULBASAUR).unwrap();

        assert_eq!(
            species.flavor_text("fr").as_deref(),
            Some("Il a une étrange graine plantée sur son dos.")
        );
    }

    #[test]
    fn control_characters_become_spaces() {
        let species: Species = serde_json::from_str(BULBASAUR).unwrap();
        let text = species.flavor_text("en").unwrap();

        assert!(!text.chars().any(char::is_control));
        assert_eq!(text, "A strange seed was planted on its back at birth.");
    }

    #[test]
    fn missing_language_yields_none() {
        let species: Species = serde_json::from_str(BULBASAUR).unwrap();

        assert_eq!(species.flavor_text("ja"), None);
    }
}
