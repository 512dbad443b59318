//! Catalog integrity checks.
//!
//! `validate_catalog` sweeps a whole board and returns every violation rather
//! than short-circuiting, so callers can surface all authoring issues at
//! once. `audit_sound_entries` cross-checks the declared audio paths against
//! the files actually present under a board root.

use crate::catalog::{ColorTheme, GroupKey, SoundCatalog};
use crate::resolve_sound_entry;
use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Severity {
    /// The board cannot be rendered faithfully; indexing rejects the catalog.
    Error,
    /// Documented-but-unenforced authoring convention; reported, tolerated.
    Warning,
}

impl Severity {
    pub fn is_error(self) -> bool {
        matches!(self, Severity::Error)
    }

    pub fn label(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
/// One integrity violation found in a catalog.
pub enum Violation {
    /// A sound's `group_name` has no matching group definition.
    UnknownGroupReference { sound: String, group: GroupKey },
    /// A sound declares zero file paths.
    EmptySoundEntries { sound: String },
    /// A color string is not a 3/6/8-digit hex literal.
    MalformedColor { location: String, value: String },
    /// Two groups share the same key; lookup would be ambiguous.
    DuplicateGroupKey { key: GroupKey },
    /// A group or sound title is empty.
    EmptyTitle { location: String },
    /// `loopable` set on a sound with more than one entry; players only honor
    /// the hint for single-file sounds.
    LoopOnMultiEntry { sound: String, entries: usize },
}

impl Violation {
    pub fn severity(&self) -> Severity {
        match self {
            Violation::UnknownGroupReference { .. }
            | Violation::EmptySoundEntries { .. }
            | Violation::MalformedColor { .. }
            | Violation::DuplicateGroupKey { .. } => Severity::Error,
            Violation::EmptyTitle { .. } | Violation::LoopOnMultiEntry { .. } => Severity::Warning,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::UnknownGroupReference { sound, group } => {
                write!(f, "sound '{sound}' references unknown group '{}'", group.0)
            }
            Violation::EmptySoundEntries { sound } => {
                write!(f, "sound '{sound}' declares no sound entries")
            }
            Violation::MalformedColor { location, value } => {
                write!(f, "{location}: '{value}' is not a valid hex color")
            }
            Violation::DuplicateGroupKey { key } => {
                write!(f, "duplicate group key '{}'", key.0)
            }
            Violation::EmptyTitle { location } => {
                write!(f, "{location} has an empty title")
            }
            Violation::LoopOnMultiEntry { sound, entries } => {
                write!(
                    f,
                    "sound '{sound}' is loopable but declares {entries} entries; the loop hint only applies to single-file sounds"
                )
            }
        }
    }
}

/// True when any violation in the list is error severity.
pub fn has_errors(violations: &[Violation]) -> bool {
    violations
        .iter()
        .any(|violation| violation.severity().is_error())
}

/// The error-severity subset of a violation list.
pub fn errors(violations: &[Violation]) -> Vec<&Violation> {
    violations
        .iter()
        .filter(|violation| violation.severity().is_error())
        .collect()
}

/// Check a whole catalog and return every violation found.
pub fn validate_catalog(catalog: &SoundCatalog) -> Vec<Violation> {
    let mut violations = Vec::new();

    for (name, color) in &catalog.palette {
        if !color.is_wellformed() {
            violations.push(Violation::MalformedColor {
                location: format!("palette entry '{name}'"),
                value: color.0.clone(),
            });
        }
    }

    let mut group_keys: BTreeSet<GroupKey> = BTreeSet::new();
    for group in &catalog.groups {
        if !group_keys.insert(group.key.clone()) {
            violations.push(Violation::DuplicateGroupKey {
                key: group.key.clone(),
            });
        }
        if group.title.trim().is_empty() {
            violations.push(Violation::EmptyTitle {
                location: format!("group '{}'", group.key.0),
            });
        }
        check_theme(
            &group.color,
            &format!("group '{}'", group.key.0),
            &mut violations,
        );
    }

    for sound in &catalog.sounds {
        let display = if sound.title.trim().is_empty() {
            violations.push(Violation::EmptyTitle {
                location: format!("sound in group '{}'", sound.group_name.0),
            });
            "(untitled)".to_string()
        } else {
            sound.title.clone()
        };

        if !group_keys.contains(&sound.group_name) {
            violations.push(Violation::UnknownGroupReference {
                sound: display.clone(),
                group: sound.group_name.clone(),
            });
        }

        if sound.sound_entries.is_empty() {
            violations.push(Violation::EmptySoundEntries {
                sound: display.clone(),
            });
        } else if sound.loopable && sound.sound_entries.len() > 1 {
            violations.push(Violation::LoopOnMultiEntry {
                sound: display.clone(),
                entries: sound.sound_entries.len(),
            });
        }

        if let Some(theme) = &sound.color {
            check_theme(theme, &format!("sound '{display}'"), &mut violations);
        }
    }

    violations
}

fn check_theme(theme: &ColorTheme, location: &str, violations: &mut Vec<Violation>) {
    let fields = [
        ("header.bg", &theme.header.bg),
        ("header.text", &theme.header.text),
        ("border", &theme.border),
        ("body.bg", &theme.body.bg),
        ("body.text", &theme.body.text),
    ];
    for (field, color) in fields {
        if !color.is_wellformed() {
            violations.push(Violation::MalformedColor {
                location: format!("{location} {field}"),
                value: color.0.clone(),
            });
        }
    }
}

/// Cross-check every declared audio path against the board root.
///
/// Returns a list of problems rather than short-circuiting so callers can
/// surface every missing asset at once. Paths that resolve outside the
/// `sounds/` tree are reported alongside plainly missing files.
pub fn audit_sound_entries(catalog: &SoundCatalog, board_root: &Path) -> Vec<String> {
    let mut problems = Vec::new();
    for sound in &catalog.sounds {
        for entry in &sound.sound_entries {
            if let Err(err) = resolve_sound_entry(board_root, entry) {
                problems.push(format!("sound '{}': {err:#}", sound.title));
            }
        }
    }
    problems
}
