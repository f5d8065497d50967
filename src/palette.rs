//! Colors and the fixed status palette
//!
//! A `Palette` is the immutable name -> color table the generator walks.
//! It is built once and handed to the driver explicitly.

use crate::error::{DotError, DotResult};
use image::Rgba;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// An RGBA color with 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DotColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl DotColor {
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Build a color from wider integer channels.
    ///
    /// Any channel above 255 is rejected with a configuration error; values
    /// are never clamped.
    pub fn from_channels(channels: [u32; 4]) -> DotResult<Self> {
        let names = ["red", "green", "blue", "alpha"];
        let mut out = [0u8; 4];

        for (i, (&value, name)) in channels.iter().zip(names).enumerate() {
            out[i] = u8::try_from(value).map_err(|_| {
                DotError::configuration(format!(
                    "{} channel {} is outside 0..=255",
                    name, value
                ))
            })?;
        }

        Ok(Self::new(out[0], out[1], out[2], out[3]))
    }

    /// `#rrggbb`, alpha is dropped
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    pub fn to_rgba(self) -> Rgba<u8> {
        Rgba([self.red, self.green, self.blue, self.alpha])
    }
}

impl From<DotColor> for Rgba<u8> {
    fn from(color: DotColor) -> Self {
        color.to_rgba()
    }
}

/// The service state a dot emoji stands for in status messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Available,
    Unavailable,
    Degraded,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Available => "AVAILABLE",
            Status::Unavailable => "UNAVAILABLE",
            Status::Degraded => "DEGRADED",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = DotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AVAILABLE" => Ok(Status::Available),
            "UNAVAILABLE" => Ok(Status::Unavailable),
            "DEGRADED" => Ok(Status::Degraded),
            _ => Err(DotError::configuration(format!(
                "Unknown status: {}. Available statuses: AVAILABLE, UNAVAILABLE, DEGRADED",
                s
            ))),
        }
    }
}

/// One named dot in the palette
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteEntry {
    pub name: String,
    pub color: DotColor,
    pub status: Status,
}

impl PaletteEntry {
    pub fn new<N: Into<String>>(name: N, color: DotColor, status: Status) -> Self {
        Self {
            name: name.into(),
            color,
            status,
        }
    }

    /// Emoji short name as it is uploaded, e.g. `green_dot`
    pub fn emoji_name(&self) -> String {
        format!("{}_dot", self.name)
    }

    pub fn file_name(&self) -> String {
        format!("{}.png", self.emoji_name())
    }
}

/// Ordered, read-only table of dots to generate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

impl Palette {
    /// Validate and freeze a list of entries.
    ///
    /// Names must be non-empty, unique and limited to ASCII alphanumerics,
    /// `-` and `_` so the derived file name stays inside the output directory.
    pub fn new(entries: Vec<PaletteEntry>) -> DotResult<Self> {
        if entries.is_empty() {
            return Err(DotError::configuration("Palette must contain at least one color"));
        }

        let mut seen = HashSet::new();
        for entry in &entries {
            if entry.name.is_empty() {
                return Err(DotError::configuration("Palette entry name can't be empty"));
            }
            if !entry
                .name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
            {
                return Err(DotError::configuration(format!(
                    "Palette entry name {:?} may only contain ASCII letters, digits, '-' and '_'",
                    entry.name
                )));
            }
            if !seen.insert(entry.name.as_str()) {
                return Err(DotError::configuration(format!(
                    "Duplicate palette entry: {}",
                    entry.name
                )));
            }
        }

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    pub fn get(&self, name: &str) -> Option<&PaletteEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            entries: vec![
                // #2ecc71 - operational
                PaletteEntry::new("green", DotColor::new(46, 204, 113, 255), Status::Available),
                // #e74c3c - critical
                PaletteEntry::new("red", DotColor::new(231, 76, 60, 255), Status::Unavailable),
                // #f39c12 - degraded
                PaletteEntry::new("orange", DotColor::new(243, 156, 18, 255), Status::Degraded),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette_keeps_order_and_colors() {
        let palette = Palette::default();
        let names: Vec<&str> = palette.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["green", "red", "orange"]);

        assert_eq!(palette.get("green").unwrap().color.hex(), "#2ecc71");
        assert_eq!(palette.get("red").unwrap().color.hex(), "#e74c3c");
        assert_eq!(palette.get("orange").unwrap().color.hex(), "#f39c12");
        assert!(palette.entries().iter().all(|e| e.color.alpha == 255));
    }

    #[test]
    fn default_palette_passes_validation() {
        let default = Palette::default();
        let validated = Palette::new(default.entries().to_vec()).unwrap();
        assert_eq!(default, validated);
    }

    #[test]
    fn file_names_follow_entry_names() {
        let palette = Palette::default();
        let files: Vec<String> = palette.entries().iter().map(|e| e.file_name()).collect();
        assert_eq!(files, ["green_dot.png", "red_dot.png", "orange_dot.png"]);
    }

    #[test]
    fn out_of_range_channel_is_rejected_every_time() {
        for _ in 0..3 {
            let err = DotColor::from_channels([300, 0, 0, 255]).unwrap_err();
            assert!(err.is_configuration());
            assert!(err.to_string().contains("red channel 300"));
        }
    }

    #[test]
    fn in_range_channels_are_accepted() {
        let color = DotColor::from_channels([46, 204, 113, 255]).unwrap();
        assert_eq!(color, DotColor::new(46, 204, 113, 255));
        assert_eq!(color.to_rgba(), Rgba([46, 204, 113, 255]));
    }

    #[test]
    fn palette_rejects_bad_names() {
        let color = DotColor::new(0, 0, 0, 255);
        assert!(Palette::new(vec![]).unwrap_err().is_configuration());
        assert!(Palette::new(vec![PaletteEntry::new("", color, Status::Available)]).is_err());
        assert!(
            Palette::new(vec![PaletteEntry::new("../up", color, Status::Available)]).is_err()
        );
        assert!(Palette::new(vec![
            PaletteEntry::new("blue", color, Status::Available),
            PaletteEntry::new("blue", color, Status::Degraded),
        ])
        .is_err());
    }

    #[test]
    fn status_round_trips_through_its_name() {
        for status in [Status::Available, Status::Unavailable, Status::Degraded] {
            assert_eq!(status.as_str().parse::<Status>().unwrap(), status);
        }
        assert!("UNKNOWN".parse::<Status>().is_err());
    }
}
