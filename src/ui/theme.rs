use ratatui::style::Color;

pub const DEX_RED: Color = Color::Rgb(0xef, 0x53, 0x50);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const MUTED_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);

/// Badge color per elemental type; unknown types fall back to gray.
pub fn type_color(name: &str) -> Color {
    match name {
        "normal" => Color::Rgb(0xa8, 0xa8, 0x78),
        "fire" => Color::Rgb(0xf0, 0x80, 0x30),
        "water" => Color::Rgb(0x68, 0x90, 0xf0),
        "electric" => Color::Rgb(0xf8, 0xd0, 0x30),
        "grass" => Color::Rgb(0x78, 0xc8, 0x50),
        "ice" => Color::Rgb(0x98, 0xd8, 0xd8),
        "fighting" => Color::Rgb(0xc0, 0x30, 0x28),
        "poison" => Color::Rgb(0xa0, 0x40, 0xa0),
        "ground" => Color::Rgb(0xe0, 0xc0, 0x68),
        "flying" => Color::Rgb(0xa8, 0x90, 0xf0),
        "psychic" => Color::Rgb(0xf8, 0x58, 0x88),
        "bug" => Color::Rgb(0xa8, 0xb8, 0x20),
        "rock" => Color::Rgb(0xb8, 0xa0, 0x38),
        "ghost" => Color::Rgb(0x70, 0x58, 0x98),
        "dragon" => Color::Rgb(0x70, 0x38, 0xf8),
        "dark" => Color::Rgb(0x70, 0x58, 0x48),
        "steel" => Color::Rgb(0xb8, 0xb8, 0xd0),
        "fairy" => Color::Rgb(0xee, 0x99, 0xac),
        _ => Color::Rgb(0x68, 0x68, 0x68),
    }
}
