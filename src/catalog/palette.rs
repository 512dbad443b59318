//! Named color palette shared by the builtin boards.
//!
//! Hex values come from the Bootstrap variable set the original board was
//! themed with. Group and sound themes reference these constants at
//! definition time, so everything downstream sees resolved hex strings.

use crate::catalog::identity::HexColor;
use std::collections::BTreeMap;

pub const BLUE: &str = "#0d6efd";
pub const INDIGO: &str = "#6610f2";
pub const PURPLE: &str = "#6f42c1";
pub const PINK: &str = "#d63384";
pub const RED: &str = "#dc3545";
pub const ORANGE: &str = "#fd7e14";
pub const YELLOW: &str = "#ffc107";
pub const GREEN: &str = "#198754";
pub const TEAL: &str = "#20c997";
pub const CYAN: &str = "#0dcaf0";
pub const BLACK: &str = "#000";
pub const WHITE: &str = "#fff";
pub const GRAY: &str = "#6c757d";
pub const GRAY_LIGHT: &str = "#e9ecef";
pub const GRAY_DARK: &str = "#343a40";

const NAMED: &[(&str, &str)] = &[
    ("blue", BLUE),
    ("indigo", INDIGO),
    ("purple", PURPLE),
    ("pink", PINK),
    ("red", RED),
    ("orange", ORANGE),
    ("yellow", YELLOW),
    ("green", GREEN),
    ("teal", TEAL),
    ("cyan", CYAN),
    ("black", BLACK),
    ("white", WHITE),
    ("gray", GRAY),
    ("grayLight", GRAY_LIGHT),
    ("grayDark", GRAY_DARK),
];

/// The complete name-to-hex mapping.
pub fn named() -> BTreeMap<String, HexColor> {
    NAMED
        .iter()
        .map(|(name, hex)| (name.to_string(), HexColor::from(*hex)))
        .collect()
}
