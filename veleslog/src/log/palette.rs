//! The fixed 14-color palette for log domains.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Display color of a log domain.
///
/// The discriminants are the palette indices used by
/// [`Logger::get_color_by_index`](super::Logger::get_color_by_index).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    LightRed = 0,
    Red,
    LightBlue,
    Blue,
    Green,
    Yellow,
    Orange,
    White,
    LightCyan,
    Cyan,
    Reset,
    High,
    LightViolet,
    Violet,
}

/// Number of palette entries.
pub const PALETTE_SIZE: usize = 14;

/// Color used when none is specified.
pub const DEFAULT_COLOR: Color = Color::White;

impl Color {
    /// All palette entries in index order.
    pub const ALL: [Color; PALETTE_SIZE] = [
        Color::LightRed,
        Color::Red,
        Color::LightBlue,
        Color::Blue,
        Color::Green,
        Color::Yellow,
        Color::Orange,
        Color::White,
        Color::LightCyan,
        Color::Cyan,
        Color::Reset,
        Color::High,
        Color::LightViolet,
        Color::Violet,
    ];

    /// Palette entry for any index; wraps around the palette size.
    pub const fn from_index(index: u32) -> Color {
        Self::ALL[index as usize % PALETTE_SIZE]
    }

    /// Position of this color in the palette.
    pub const fn index(&self) -> u32 {
        *self as u32
    }

    /// ANSI escape sequence selecting this color.
    pub const fn ansi_code(&self) -> &'static str {
        match self {
            Color::LightRed => "\x1b[31;1m",
            Color::Red => "\x1b[31m",
            Color::LightBlue => "\x1b[34;1m",
            Color::Blue => "\x1b[34m",
            Color::Green => "\x1b[32;1m",
            Color::Yellow => "\x1b[33;1m",
            Color::Orange => "\x1b[0;33m",
            Color::White => "\x1b[37;1m",
            Color::LightCyan => "\x1b[36;1m",
            Color::Cyan => "\x1b[36m",
            Color::Reset => "\x1b[0m",
            Color::High => "\x1b[1m",
            Color::LightViolet => "\x1b[35;1m",
            Color::Violet => "\x1b[35m",
        }
    }

    /// Snake-case name, as accepted by [`FromStr`].
    pub const fn name(&self) -> &'static str {
        match self {
            Color::LightRed => "light_red",
            Color::Red => "red",
            Color::LightBlue => "light_blue",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Orange => "orange",
            Color::White => "white",
            Color::LightCyan => "light_cyan",
            Color::Cyan => "cyan",
            Color::Reset => "reset",
            Color::High => "high",
            Color::LightViolet => "light_violet",
            Color::Violet => "violet",
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        DEFAULT_COLOR
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = String;

    /// Accepts palette names case-insensitively, with `-`, `_` or nothing
    /// between words (`light_red`, `LightRed`, `light-red`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();
        Color::ALL
            .into_iter()
            .find(|c| c.name().replace('_', "") == wanted)
            .ok_or_else(|| format!("unknown color '{}'", s.trim()))
    }
}

/// Resolve a color tag into the escape sequence to render.
///
/// Palette names map to their ANSI code and tags starting with `ESC [` are
/// used as given. Anything else, including an empty tag, maps to
/// [`DEFAULT_COLOR`].
pub fn resolve_color(tag: &str) -> Cow<'_, str> {
    if tag.starts_with("\x1b[") {
        return Cow::Borrowed(tag);
    }
    match tag.parse::<Color>() {
        Ok(color) => Cow::Borrowed(color.ansi_code()),
        Err(_) => Cow::Borrowed(DEFAULT_COLOR.ansi_code()),
    }
}

/// Remove `ESC [ ... final` escape sequences from `text`.
pub fn strip_ansi(text: &str) -> Cow<'_, str> {
    if !text.contains('\x1b') {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\x1b' {
            out.push(c);
            continue;
        }
        if chars.clone().next() == Some('[') {
            chars.next();
            for c in chars.by_ref() {
                if ('@'..='~').contains(&c) {
                    break;
                }
            }
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_order_matches_indices() {
        for (i, color) in Color::ALL.iter().enumerate() {
            assert_eq!(color.index() as usize, i);
            assert_eq!(Color::from_index(i as u32), *color);
        }
    }

    #[test]
    fn test_from_index_wraps() {
        assert_eq!(Color::from_index(14), Color::LightRed);
        assert_eq!(Color::from_index(16), Color::LightBlue);
        for i in [0u32, 13, 14, 27, 1000, u32::MAX - 1, u32::MAX] {
            assert_eq!(Color::from_index(i), Color::from_index(i % 14));
        }
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("blue".parse::<Color>(), Ok(Color::Blue));
        assert_eq!("LightRed".parse::<Color>(), Ok(Color::LightRed));
        assert_eq!("light-violet".parse::<Color>(), Ok(Color::LightViolet));
        assert_eq!(" CYAN ".parse::<Color>(), Ok(Color::Cyan));
        assert!("magenta".parse::<Color>().is_err());
    }

    #[test]
    fn test_names_round_trip() {
        for color in Color::ALL {
            assert_eq!(color.name().parse::<Color>(), Ok(color));
        }
    }

    #[test]
    fn test_resolve_color() {
        assert_eq!(resolve_color("blue"), "\x1b[34m");
        assert_eq!(resolve_color(""), DEFAULT_COLOR.ansi_code());
        assert_eq!(resolve_color("\x1b[38;5;208m"), "\x1b[38;5;208m");
    }

    #[test]
    fn test_unknown_tags_use_default_color() {
        assert_eq!(resolve_color("magenta"), DEFAULT_COLOR.ansi_code());
        assert_eq!(resolve_color("  "), DEFAULT_COLOR.ansi_code());
        assert_eq!(resolve_color("[34m"), DEFAULT_COLOR.ansi_code());
    }

    #[test]
    fn test_strip_ansi() {
        let colored = format!(
            "{}Net::Connection{}",
            Color::Blue.ansi_code(),
            Color::Reset.ansi_code()
        );
        assert_eq!(strip_ansi(&colored), "Net::Connection");
        assert_eq!(strip_ansi("\x1b[38;5;208mx"), "x");
        assert!(matches!(strip_ansi("plain"), Cow::Borrowed("plain")));
    }

    #[test]
    fn test_ansi_codes_are_distinct() {
        let mut codes: Vec<_> = Color::ALL.iter().map(|c| c.ansi_code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), PALETTE_SIZE);
    }
}
