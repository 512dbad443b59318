//! Serde representation of a sound catalog.
//!
//! The types mirror `schema/sound_catalog.schema.json` so helpers and tests
//! can reason about board content without ad-hoc JSON handling. Use
//! `CatalogIndex` for validation and group lookup; use these structs when the
//! raw catalog surface is required (palette, declaration order, overrides).
//!
//! Accessors here never resolve a sound's `group_name` — the reference is a
//! plain string key, and dangling references are the validation pass's job to
//! surface and the consumer's job to handle.

use crate::catalog::identity::{CatalogKey, GroupKey, HexColor};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// Full sound catalog as stored on disk or constructed in code.
pub struct SoundCatalog {
    pub schema_version: String,
    pub key: CatalogKey,
    pub title: String,
    #[serde(default)]
    pub palette: BTreeMap<String, HexColor>,
    pub groups: Vec<GroupDef>,
    pub sounds: Vec<Sound>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// One visual category of the board.
///
/// Declaration order across the `groups` sequence is display order.
pub struct GroupDef {
    pub key: GroupKey,
    pub title: String,
    #[serde(default)]
    pub icon_html: Option<String>,
    #[serde(default)]
    pub collapsed: bool,
    pub color: ColorTheme,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// Resolved color theme for a group header/body card.
pub struct ColorTheme {
    pub header: ColorPair,
    pub border: HexColor,
    pub body: ColorPair,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorPair {
    pub bg: HexColor,
    pub text: HexColor,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// One playable item on the board.
///
/// Multiple `sound_entries` are random-choice variants of the same logical
/// sound, not a playlist; the playback consumer picks one per trigger.
pub struct Sound {
    pub title: String,
    pub group_name: GroupKey,
    #[serde(default)]
    pub icon_html: Option<String>,
    /// `None` inherits the owning group's theme.
    #[serde(default)]
    pub color: Option<ColorTheme>,
    #[serde(default)]
    pub loopable: bool,
    pub sound_entries: Vec<String>,
}

impl Sound {
    /// True when the loop hint should be honored by a player.
    ///
    /// The authoring convention is that looping only applies to sounds backed
    /// by exactly one file.
    pub fn loop_hint(&self) -> bool {
        self.loopable && self.sound_entries.len() == 1
    }
}

impl SoundCatalog {
    /// The complete named color palette of this board.
    pub fn palette(&self) -> &BTreeMap<String, HexColor> {
        &self.palette
    }

    /// Groups as `(key, definition)` pairs in display order.
    pub fn groups(&self) -> impl Iterator<Item = (&GroupKey, &GroupDef)> {
        self.groups.iter().map(|group| (&group.key, group))
    }

    /// All sounds in display order.
    pub fn sounds(&self) -> &[Sound] {
        &self.sounds
    }

    /// Sounds whose `group_name` equals `key`, in display order.
    pub fn sounds_in_group<'a>(&'a self, key: &'a GroupKey) -> impl Iterator<Item = &'a Sound> {
        self.sounds.iter().filter(move |sound| &sound.group_name == key)
    }

    /// Look up a group definition by key.
    pub fn group(&self, key: &GroupKey) -> Option<&GroupDef> {
        self.groups.iter().find(|group| &group.key == key)
    }
}

/// Read and parse a catalog from disk without additional validation.
pub fn load_catalog_from_path(path: &Path) -> Result<SoundCatalog> {
    let data = fs::read_to_string(path)?;
    let catalog: SoundCatalog = serde_json::from_str(&data)?;
    Ok(catalog)
}
