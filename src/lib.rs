//! Shared library for the soundboard content catalog.
//!
//! The crate owns the declarative content of the board: the named color
//! palette, the ordered sound groups with their themes, and the sound entries
//! that reference groups by key and audio files by relative path. Public
//! functions here form the contract the helper binaries depend on: board root
//! discovery, audio asset resolution, and the catalog types re-exported from
//! [`catalog`].
//!
//! Everything exposed is a synchronous read of data constructed at load time;
//! nothing mutates a catalog after construction, so any number of concurrent
//! readers are safe by construction.

use anyhow::{Context, Result, bail};
use std::collections::BTreeSet;
use std::{
    env, fs,
    path::{Path, PathBuf},
};

pub mod catalog;
pub mod coverage;
mod schema_loader;
pub mod validation;

pub use catalog::{
    CatalogIndex, CatalogKey, CatalogRepository, ColorPair, ColorTheme, GroupDef, GroupKey,
    HexColor, SCHEMA_VERSION, Sound, SoundCatalog, builtin, load_catalog_from_path, palette,
    validate_catalog_file,
};
pub use coverage::{CoverageEntry, build_group_coverage_map, empty_groups};
pub use validation::{
    Severity, Violation, audit_sound_entries, errors, has_errors, validate_catalog,
};

const ROOT_SENTINEL: &str = "schema/sound_catalog.schema.json";
const SOUNDS_DIR: &str = "sounds";

/// File extensions treated as playable audio assets.
pub const AUDIO_EXTENSIONS: &[&str] = &["ogg", "mp3", "wav", "flac"];

/// Returns true when `candidate` looks like a board root.
///
/// Root detection is intentionally strict: a board root must carry both the
/// canonical catalog schema and a `sounds/` tree, so helpers never resolve
/// assets against an unrelated directory.
fn is_board_root(candidate: &Path) -> bool {
    candidate.join(ROOT_SENTINEL).is_file() && candidate.join(SOUNDS_DIR).is_dir()
}

/// Verifies that an explicit `SOUNDBOARD_ROOT` hint points at a valid root.
fn board_root_from_hint(hint: &str) -> Option<PathBuf> {
    if hint.is_empty() {
        return None;
    }
    let hint_path = PathBuf::from(hint);
    if !hint_path.exists() || !is_board_root(&hint_path) {
        return None;
    }
    fs::canonicalize(hint_path).ok()
}

fn search_upwards(start: &Path) -> Option<PathBuf> {
    let mut dir = fs::canonicalize(start).ok()?;
    loop {
        if is_board_root(&dir) {
            return Some(dir);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

/// Locate the board root.
///
/// Search order: honor `SOUNDBOARD_ROOT` if it points at a real board, fall
/// back to climbing up from the current executable, then use the build-time
/// hint. Callers can treat failure as fatal because asset resolution cannot
/// run without the board layout.
pub fn find_board_root() -> Result<PathBuf> {
    if let Ok(env_root) = env::var("SOUNDBOARD_ROOT") {
        if let Some(root) = board_root_from_hint(&env_root) {
            return Ok(root);
        }
    }

    if let Ok(exe_path) = env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            if let Some(root) = search_upwards(exe_dir) {
                return Ok(root);
            }
        }
    }

    if let Some(hint) = option_env!("SOUNDBOARD_ROOT_HINT") {
        if let Some(root) = board_root_from_hint(hint) {
            return Ok(root);
        }
    }

    bail!("Unable to locate a soundboard root. Set SOUNDBOARD_ROOT to the board directory.");
}

/// Returns the canonical `sounds/` root for a board.
pub fn canonical_sounds_root(board_root: &Path) -> Result<PathBuf> {
    let sounds_root = board_root.join(SOUNDS_DIR);
    fs::canonicalize(&sounds_root).with_context(|| {
        format!(
            "Unable to canonicalize sounds dir at {}",
            sounds_root.display()
        )
    })
}

/// Resolve a catalog `sound_entries` path to a file under `sounds/`.
///
/// Entries are authored relative to the board root (`./sounds/...`). The
/// resolver canonicalizes the candidate and rejects anything outside the
/// `sounds/` tree, guarding against symlinks or `..` segments that would
/// escape the board.
pub fn resolve_sound_entry(board_root: &Path, entry: &str) -> Result<PathBuf> {
    let sounds_root = canonical_sounds_root(board_root)?;
    let trimmed = entry.trim();
    if trimmed.is_empty() {
        bail!("Empty sound entry requested");
    }
    let trimmed = trimmed.strip_prefix("./").unwrap_or(trimmed);

    let candidate = if Path::new(trimmed).is_absolute() {
        PathBuf::from(trimmed)
    } else {
        board_root.join(trimmed)
    };

    if !candidate.is_file() {
        bail!("Sound file not found: {entry}");
    }
    let canonical = fs::canonicalize(&candidate)
        .with_context(|| format!("Unable to canonicalize {}", candidate.display()))?;
    if !canonical.starts_with(&sounds_root) {
        bail!("Sound entry escapes the sounds directory: {entry}");
    }
    Ok(canonical)
}

/// List every audio file under a board's `sounds/` tree.
///
/// Only [`AUDIO_EXTENSIONS`] are considered; results are sorted by path so
/// repeated listings are deterministic.
pub fn list_sound_files(board_root: &Path) -> Result<Vec<PathBuf>> {
    let sounds_root = canonical_sounds_root(board_root)?;
    let mut results: BTreeSet<PathBuf> = BTreeSet::new();
    collect_audio_files(&sounds_root, &mut results)?;

    if results.is_empty() {
        bail!(
            "No audio files found under {}",
            sounds_root.to_string_lossy()
        );
    }

    Ok(results.into_iter().collect())
}

fn collect_audio_files(dir: &Path, acc: &mut BTreeSet<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            collect_audio_files(&path, acc)?;
        } else if let Some(ext) = path.extension().and_then(|ext| ext.to_str()) {
            if AUDIO_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()) {
                acc.insert(fs::canonicalize(&path)?);
            }
        }
    }
    Ok(())
}
