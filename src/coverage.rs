//! Coverage accounting between declared groups and authored sounds.
//!
//! Helpers here build a group→sound mapping used by the validate tooling and
//! tests to identify gaps: a group nobody targets renders as an empty card,
//! which usually means a sound was filed under the wrong key.

use crate::catalog::SoundCatalog;
use anyhow::{Result, bail};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize)]
/// Whether a group has one or more sounds plus the titles of those sounds.
pub struct CoverageEntry {
    pub has_sound: bool,
    pub sound_titles: Vec<String>,
}

/// Build a mapping of group key to sound coverage.
///
/// Rejects dangling group references so authoring regressions surface
/// immediately; run the validation pass first when a partial answer is
/// acceptable. Titles are kept in display order.
pub fn build_group_coverage_map(catalog: &SoundCatalog) -> Result<BTreeMap<String, CoverageEntry>> {
    let mut map: BTreeMap<String, CoverageEntry> = catalog
        .groups()
        .map(|(key, _)| {
            (
                key.0.clone(),
                CoverageEntry {
                    has_sound: false,
                    sound_titles: Vec::new(),
                },
            )
        })
        .collect();

    for sound in catalog.sounds() {
        let Some(entry) = map.get_mut(&sound.group_name.0) else {
            bail!(
                "sound '{}' references unknown group '{}'",
                sound.title,
                sound.group_name.0
            );
        };
        entry.has_sound = true;
        entry.sound_titles.push(sound.title.clone());
    }

    Ok(map)
}

/// Keys of groups that no sound targets.
pub fn empty_groups(map: &BTreeMap<String, CoverageEntry>) -> Vec<String> {
    map.iter()
        .filter(|(_, entry)| !entry.has_sound)
        .map(|(key, _)| key.clone())
        .collect()
}
