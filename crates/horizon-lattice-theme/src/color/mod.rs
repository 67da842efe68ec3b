//! HTML color code parsing.
//!
//! Theme slots hold colors as free-form strings. [`ColorNames`] turns the
//! common forms into an [`Rgb`] value:
//!
//! - long hex codes: `#007AFF`
//! - short hex codes: `#0AF` (each digit doubled, as in CSS)
//! - color names: `AliceBlue`, `teal` (case-insensitive)
//!
//! The name table is immutable once built. [`ColorNames::standard`] shares a
//! single instance across the process; parsers that need a different table
//! can build their own and pass it by reference.

mod names;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use crate::{Error, Result};

const HEX_PATTERN: &str = r"^#(?:(?P<long>[0-9a-fA-F]{6})|(?P<short>[0-9a-fA-F]{3}))$";

/// An opaque 8-bit RGB color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a color from its components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Unpack a `0xRRGGBB` value. Bits above the low 24 are ignored.
    pub const fn from_packed(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }

    /// Pack into a `0xRRGGBB` value.
    pub const fn to_packed(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Format as an uppercase `#RRGGBB` code.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = Error;

    /// Parse with the [standard](ColorNames::standard) name table.
    fn from_str(code: &str) -> Result<Self> {
        ColorNames::standard().parse(code)
    }
}

/// Case-insensitive color name table plus hex code parser.
#[derive(Debug, Clone)]
pub struct ColorNames {
    /// Lowercased name to packed `0xRRGGBB`.
    by_name: HashMap<String, u32>,
}

/// Hex code pattern shared by every table, compiled on first use.
fn hex_pattern() -> Result<&'static Regex> {
    static HEX: OnceLock<std::result::Result<Regex, regex::Error>> = OnceLock::new();
    HEX.get_or_init(|| Regex::new(HEX_PATTERN))
        .as_ref()
        .map_err(|e| Error::Pattern(e.clone()))
}

impl ColorNames {
    /// Build the table of HTML color names.
    pub fn new() -> Self {
        Self::from_entries(names::HTML_COLOR_NAMES.iter().copied())
    }

    /// Build a table from custom `(name, 0xRRGGBB)` entries.
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = (&'a str, u32)>) -> Self {
        let by_name = entries
            .into_iter()
            .map(|(name, value)| (name.to_ascii_lowercase(), value & 0x00FF_FFFF))
            .collect();

        Self { by_name }
    }

    /// The process-wide table of HTML color names.
    pub fn standard() -> &'static ColorNames {
        static STANDARD: OnceLock<ColorNames> = OnceLock::new();
        STANDARD.get_or_init(ColorNames::new)
    }

    /// Look up a color by name, ignoring ASCII case.
    pub fn lookup(&self, name: &str) -> Option<Rgb> {
        self.by_name
            .get(&name.to_ascii_lowercase())
            .copied()
            .map(Rgb::from_packed)
    }

    /// Number of known color names.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Check if the table has no names.
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Parse a hex code or color name.
    ///
    /// Surrounding whitespace is ignored. Blank input, malformed hex codes
    /// and unknown names yield [`Error::InvalidColor`].
    ///
    /// Hex codes must start with `#`; a bare `007AFF` is looked up as a name
    /// and rejected. Short codes follow CSS and double each digit, so `#0AF`
    /// is `#00AAFF`. Parsers that read `#0AF` as the low-nibble triple
    /// `(0x00, 0x0A, 0x0F)` disagree with this one on every short code.
    pub fn parse(&self, code: &str) -> Result<Rgb> {
        let trimmed = code.trim();
        if trimmed.is_empty() {
            return Err(Error::invalid_color(code));
        }

        if let Some(caps) = hex_pattern()?.captures(trimmed) {
            let rgb = if let Some(long) = caps.name("long") {
                parse_long_hex(long.as_str())
            } else {
                caps.name("short").and_then(|short| parse_short_hex(short.as_str()))
            };
            return rgb.ok_or_else(|| Error::invalid_color(code));
        }

        self.lookup(trimmed).ok_or_else(|| Error::invalid_color(code))
    }
}

impl Default for ColorNames {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_long_hex(digits: &str) -> Option<Rgb> {
    let r = u8::from_str_radix(digits.get(0..2)?, 16).ok()?;
    let g = u8::from_str_radix(digits.get(2..4)?, 16).ok()?;
    let b = u8::from_str_radix(digits.get(4..6)?, 16).ok()?;
    Some(Rgb::new(r, g, b))
}

fn parse_short_hex(digits: &str) -> Option<Rgb> {
    let mut channels = digits.chars().map(|c| c.to_digit(16).map(|d| (d * 17) as u8));
    let r = channels.next()??;
    let g = channels.next()??;
    let b = channels.next()??;
    Some(Rgb::new(r, g, b))
}
