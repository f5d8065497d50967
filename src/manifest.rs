//! emojis.json data model
//!
//! Describes the generated dots for whoever uploads them: which file holds
//! which emoji, its color, and the service status it is meant to represent.
//! The bot side looks emojis up by status, so the status travels with each
//! entry.

use crate::dot_gen::write_atomically;
use crate::error::DotResult;
use crate::palette::{Palette, PaletteEntry, Status};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// File name of the manifest written next to the PNGs
pub const MANIFEST_FILE_NAME: &str = "emojis.json";

/// Root structure of emojis.json
#[derive(Serialize, Debug, Clone)]
pub struct EmojiManifest {
    /// One entry per generated dot, in palette order
    pub emojis: Vec<EmojiEntry>,

    /// Versioning and authorship information
    pub info: Info,
}

/// A single uploaded emoji
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct EmojiEntry {
    /// Short name to upload the emoji under (e.g. "green_dot")
    pub name: String,

    /// PNG file holding the emoji, relative to the manifest
    pub filename: String,

    /// Fill color as `#rrggbb`
    pub color: String,

    /// Status this dot stands for
    pub status: Status,
}

#[derive(Serialize, Debug, Clone)]
pub struct Info {
    pub author: String,
    pub version: u32,
}

impl EmojiManifest {
    pub fn new(author: String) -> Self {
        Self {
            emojis: Vec::new(),
            info: Info { author, version: 1 },
        }
    }

    pub fn from_palette(palette: &Palette) -> Self {
        let mut manifest = Self::new("status-dots".to_string());
        for entry in palette.entries() {
            manifest.add_emoji(EmojiEntry::from(entry));
        }
        manifest
    }

    pub fn add_emoji(&mut self, emoji: EmojiEntry) {
        self.emojis.push(emoji);
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl From<&PaletteEntry> for EmojiEntry {
    fn from(entry: &PaletteEntry) -> Self {
        Self {
            name: entry.emoji_name(),
            filename: entry.file_name(),
            color: entry.color.hex(),
            status: entry.status,
        }
    }
}

/// Write emojis.json for `palette` into `out_dir` and return its path
pub fn write_manifest(out_dir: &Path, palette: &Palette) -> DotResult<PathBuf> {
    let manifest = EmojiManifest::from_palette(palette);
    let path = out_dir.join(MANIFEST_FILE_NAME);

    write_atomically(&path, |w| {
        serde_json::to_writer_pretty(&mut *w, &manifest)?;
        w.write_all(b"\n")
    })?;

    Ok(path)
}
