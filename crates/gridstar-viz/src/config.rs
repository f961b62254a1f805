//! Display and search settings.
//!
//! Every field has a default, so a config file only needs to name what it
//! changes:
//!
//! ```json
//! { "plain": true, "glyphs": { "path": "o" }, "search": { "tie_break": "fifo" } }
//! ```

use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::str::FromStr;

use gridstar_paths::SearchConfig;
use serde::{Deserialize, Serialize};

use crate::error::VizError;

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// An RGB colour packed into a `u32` (0x00RRGGBB). Written as `"#rrggbb"`
/// in config files.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Self = Self::from_rgb(0, 0, 0);
    pub const WHITE: Self = Self::from_rgb(255, 255, 255);
    pub const RED: Self = Self::from_rgb(255, 0, 0);
    pub const GREEN: Self = Self::from_rgb(0, 255, 0);
    pub const BLUE: Self = Self::from_rgb(0, 0, 255);

    /// Construct from individual RGB components.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    /// Red component.
    #[inline]
    pub const fn r(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    /// Green component.
    #[inline]
    pub const fn g(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    /// Blue component.
    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 & 0xFF) as u8
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(format!("color {s:?} is not #rrggbb"));
        }
        u32::from_str_radix(hex, 16)
            .map(Self)
            .map_err(|_| format!("color {s:?} is not #rrggbb"))
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.to_string()
    }
}

// ---------------------------------------------------------------------------
// Glyphs / Palette
// ---------------------------------------------------------------------------

/// Characters used in plain-text output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Glyphs {
    pub free: char,
    pub blocked: char,
    pub explored: char,
    pub path: char,
    pub start: char,
    pub goal: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            free: '.',
            blocked: '#',
            explored: 'x',
            path: '*',
            start: 'S',
            goal: 'G',
        }
    }
}

/// Cell colours used in terminal output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub free: Color,
    pub blocked: Color,
    pub explored: Color,
    pub path: Color,
    pub start: Color,
    pub goal: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            free: Color::WHITE,
            blocked: Color::BLACK,
            explored: Color::RED,
            path: Color::BLUE,
            start: Color::GREEN,
            goal: Color::RED,
        }
    }
}

// ---------------------------------------------------------------------------
// VizConfig
// ---------------------------------------------------------------------------

/// Settings for one `gridstar` run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VizConfig {
    /// Print glyphs instead of coloured cells.
    pub plain: bool,
    pub glyphs: Glyphs,
    pub palette: Palette,
    pub search: SearchConfig,
}

impl VizConfig {
    /// Read a config from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, VizError> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    /// Parse a config from a JSON string.
    pub fn from_json(s: &str) -> Result<Self, VizError> {
        Ok(serde_json::from_str(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridstar_paths::TieBreak;

    #[test]
    fn color_components() {
        let c = Color::from_rgb(0x12, 0x34, 0x56);
        assert_eq!((c.r(), c.g(), c.b()), (0x12, 0x34, 0x56));
        assert_eq!(c.to_string(), "#123456");
        assert_eq!("#123456".parse::<Color>(), Ok(c));
        assert!("#12345".parse::<Color>().is_err());
        assert!("zzzzzz".parse::<Color>().is_err());
    }

    #[test]
    fn empty_config_is_default() {
        assert_eq!(VizConfig::from_json("{}").unwrap(), VizConfig::default());
    }

    #[test]
    fn partial_config_overrides_only_named_fields() {
        let cfg = VizConfig::from_json(
            r##"{
                "plain": true,
                "glyphs": { "path": "o" },
                "palette": { "explored": "#ff8080" },
                "search": { "tie_break": "fifo" }
            }"##,
        )
        .unwrap();
        assert!(cfg.plain);
        assert_eq!(cfg.glyphs.path, 'o');
        assert_eq!(cfg.glyphs.blocked, '#');
        assert_eq!(cfg.palette.explored, Color::from_rgb(0xff, 0x80, 0x80));
        assert_eq!(cfg.palette.path, Color::BLUE);
        assert_eq!(cfg.search.tie_break, TieBreak::Fifo);
    }

    #[test]
    fn bad_color_is_rejected() {
        let err = VizConfig::from_json(r#"{ "palette": { "free": "white" } }"#).unwrap_err();
        assert!(matches!(err, VizError::Json(_)));
    }

    #[test]
    fn color_needs_six_hex_digits() {
        assert_eq!("#1a2B3c".parse::<Color>(), Ok(Color::from_rgb(0x1a, 0x2b, 0x3c)));
        assert_eq!("00ff00".parse::<Color>(), Ok(Color::from_rgb(0, 255, 0)));
        for bad in ["+12345", "#+12345", "-12345", "#12345", "#12 345", "#12345g"] {
            assert!(bad.parse::<Color>().is_err(), "{bad} parsed");
        }
    }
}
