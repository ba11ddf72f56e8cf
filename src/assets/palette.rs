use serde::Serialize;
use tiny_skia::Color;

use super::layout::Ink;
use crate::config::{ThemeTokens, BLACK, NEUTRAL_950, WHITE};

/// Light or dark variant of an asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

/// Hex colors used to paint one asset
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeColors {
    pub background: &'static str,
    pub text: &'static str,
    pub primary: &'static str,
}

impl ThemeColors {
    pub fn for_mode(mode: ThemeMode, tokens: &ThemeTokens) -> Self {
        match mode {
            ThemeMode::Light => Self {
                background: WHITE,
                text: BLACK,
                primary: tokens.primary_500(),
            },
            ThemeMode::Dark => Self {
                background: NEUTRAL_950,
                text: WHITE,
                primary: tokens.primary_500(),
            },
        }
    }

    pub fn ink(&self, ink: Ink) -> &'static str {
        match ink {
            Ink::Text => self.text,
            Ink::Primary => self.primary,
        }
    }
}

/// Parse `#rgb` or `#rrggbb`
pub fn parse_hex(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    let (r, g, b) = match digits.len() {
        3 => {
            let expand = |i: usize| channel(&digits[i..i + 1]).map(|v| v * 17);
            (expand(0)?, expand(1)?, expand(2)?)
        }
        6 => (
            channel(&digits[0..2])?,
            channel(&digits[2..4])?,
            channel(&digits[4..6])?,
        ),
        _ => return None,
    };
    Some(Color::from_rgba8(r, g, b, 255))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palettes() {
        let tokens = ThemeTokens::default();
        let light = ThemeColors::for_mode(ThemeMode::Light, &tokens);
        let dark = ThemeColors::for_mode(ThemeMode::Dark, &tokens);
        assert_eq!(light.background, "#ffffff");
        assert_eq!(dark.background, "#0a0a0a");
        assert_eq!(light.primary, dark.primary);
        assert_eq!(dark.ink(Ink::Text), "#ffffff");
        assert_eq!(light.ink(Ink::Primary), "#8b5cf6");
    }

    #[test]
    fn test_parse_hex() {
        let violet = parse_hex("#8b5cf6").unwrap().to_color_u8();
        assert_eq!((violet.red(), violet.green(), violet.blue()), (0x8b, 0x5c, 0xf6));
        let grey = parse_hex("#333").unwrap().to_color_u8();
        assert_eq!(grey.red(), 0x33);
        assert!(parse_hex("8b5cf6").is_none());
        assert!(parse_hex("#zzzzzz").is_none());
    }
}
