//! Color and label tables for diplomacy display

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::core::types::PlayerIndex;
use crate::diplomacy::{DiplomacyLedger, Liking};

/// RGBA color (0.0 to 1.0 per channel)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    #[serde(default = "opaque")]
    pub a: f32,
}

fn opaque() -> f32 {
    1.0
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

pub const FRIENDS_GREEN: Color = Color::new(0.0, 0.78, 0.0, 1.0);
pub const LIKE_GREEN: Color = Color::new(0.6, 0.9, 0.3, 1.0);
pub const NEUTRAL_AMBER: Color = Color::new(1.0, 0.78, 0.0, 1.0);
pub const DISLIKE_ORANGE: Color = Color::new(1.0, 0.5, 0.0, 1.0);
pub const HATE_RED: Color = Color::new(0.86, 0.0, 0.0, 1.0);
/// Fallback for anything without a palette entry
pub const UNKNOWN_GREY: Color = Color::new(0.63, 0.63, 0.63, 1.0);

pub const UNKNOWN_LABEL: &str = "Unknown";

pub fn liking_label(liking: Liking) -> &'static str {
    match liking {
        Liking::Neutral => "Neutral",
        Liking::Dislike => "Dislike",
        Liking::Hate => "Hate",
        Liking::Like => "Like",
        Liking::Friends => "Friends",
    }
}

pub fn liking_color(liking: Liking) -> Color {
    match liking {
        Liking::Neutral => NEUTRAL_AMBER,
        Liking::Dislike => DISLIKE_ORANGE,
        Liking::Hate => HATE_RED,
        Liking::Like => LIKE_GREEN,
        Liking::Friends => FRIENDS_GREEN,
    }
}

/// Label for how the ledger's owner feels about player `index`
pub fn liking_as_string(ledger: &DiplomacyLedger, index: PlayerIndex) -> &'static str {
    liking_label(ledger.liking(index))
}

/// Color for how the ledger's owner feels about player `index`
pub fn liking_as_color(ledger: &DiplomacyLedger, index: PlayerIndex) -> Color {
    liking_color(ledger.liking(index))
}

/// Label and color shown for one band
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Swatch {
    pub label: String,
    pub color: Color,
}

impl Swatch {
    fn new(label: &str, color: Color) -> Self {
        Self {
            label: label.to_string(),
            color,
        }
    }
}

/// Band to label/color table, overridable from TOML
///
/// Bands left out of a TOML palette fall back to `unknown`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub hate: Option<Swatch>,
    pub dislike: Option<Swatch>,
    pub neutral: Option<Swatch>,
    pub like: Option<Swatch>,
    pub friends: Option<Swatch>,
    #[serde(default = "unknown_swatch")]
    pub unknown: Swatch,
}

fn unknown_swatch() -> Swatch {
    Swatch::new(UNKNOWN_LABEL, UNKNOWN_GREY)
}

impl Default for Palette {
    fn default() -> Self {
        let swatch = |liking| Some(Swatch::new(liking_label(liking), liking_color(liking)));
        Self {
            hate: swatch(Liking::Hate),
            dislike: swatch(Liking::Dislike),
            neutral: swatch(Liking::Neutral),
            like: swatch(Liking::Like),
            friends: swatch(Liking::Friends),
            unknown: unknown_swatch(),
        }
    }
}

impl Palette {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_toml(&content)
    }

    pub fn parse_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn swatch(&self, liking: Liking) -> &Swatch {
        let entry = match liking {
            Liking::Hate => &self.hate,
            Liking::Dislike => &self.dislike,
            Liking::Neutral => &self.neutral,
            Liking::Like => &self.like,
            Liking::Friends => &self.friends,
        };
        entry.as_ref().unwrap_or(&self.unknown)
    }

    pub fn label(&self, liking: Liking) -> &str {
        &self.swatch(liking).label
    }

    pub fn color(&self, liking: Liking) -> Color {
        self.swatch(liking).color
    }
}
