use crate::pokeapi::pokemon;

pub fn capitalize(token: &str) -> String {
    let mut chars = token.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn dex_number(id: pokemon::Id) -> String {
    format!("#{:03}", id.number())
}

pub fn stat_label(name: &str) -> &str {
    match name {
        "hp" => "PV",
        "attack" => "Attaque",
        "defense" => "Défense",
        "special-attack" => "Att. Spé.",
        "special-defense" => "Déf. Spé.",
        "speed" => "Vitesse",
        _ => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_uppercases_the_first_letter() {
        assert_eq!(capitalize("pikachu"), "Pikachu");
        assert_eq!(capitalize("mr-mime"), "Mr-mime");
        assert_eq!(capitalize("Pikachu"), "Pikachu");
    }

    #[test]
    fn capitalize_of_empty_is_empty() {
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn dex_numbers_are_zero_padded() {
        assert_eq!(dex_number(pokemon::Id::from(25)), "#025");
        assert_eq!(dex_number(pokemon::Id::from(6)), "#006");
        assert_eq!(dex_number(pokemon::Id::from(1302)), "#1302");
    }

    #[test]
    fn stat_labels_are_localized() {
        assert_eq!(stat_label("hp"), "PV");
        assert_eq!(stat_label("special-defense"), "Déf. Spé.");
        assert_eq!(stat_label("evasion"), "evasion");
    }
}
