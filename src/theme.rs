use iced::Color;

pub const DEFAULT: Color = Color::from_rgb8(0x68, 0xA0, 0x90);

pub fn type_color(kind: &str) -> Color {
    match kind {
        "normal" => Color::from_rgb8(0xA8, 0xA8, 0x78),
        "fighting" => Color::from_rgb8(0xC0, 0x30, 0x28),
        "flying" => Color::from_rgb8(0xA8, 0x90, 0xF0),
        "poison" => Color::from_rgb8(0xA0, 0x40, 0xA0),
        "ground" => Color::from_rgb8(0xE0, 0xC0, 0x68),
        "rock" => Color::from_rgb8(0xB8, 0xA0, 0x38),
        "bug" => Color::from_rgb8(0xA8, 0xB8, 0x20),
        "ghost" => Color::from_rgb8(0x70, 0x58, 0x98),
        "steel" => Color::from_rgb8(0xB8, 0xB8, 0xD0),
        "fire" => Color::from_rgb8(0xF0, 0x80, 0x30),
        "water" => Color::from_rgb8(0x68, 0x90, 0xF0),
        "grass" => Color::from_rgb8(0x78, 0xC8, 0x50),
        "electric" => Color::from_rgb8(0xF8, 0xD0, 0x30),
        "psychic" => Color::from_rgb8(0xF8, 0x58, 0x88),
        "ice" => Color::from_rgb8(0x98, 0xD8, 0xD8),
        "dragon" => Color::from_rgb8(0x70, 0x38, 0xF8),
        "dark" => Color::from_rgb8(0x70, 0x58, 0x48),
        "fairy" => Color::from_rgb8(0xEE, 0x99, 0xAC),
        _ => DEFAULT,
    }
}
