use serde::{Deserialize, Serialize};

/// Versioned key for one catalog dataset (e.g., `rpg_tavern_en_v1`).
///
/// Stored alongside exported boards so consumers can tell which snapshot a
/// group or sound came from when several catalogs are registered.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatalogKey(pub String);

/// Short key naming a sound group (`town`, `combat`).
///
/// Sounds reference groups by this key; the reference is a plain string
/// lookup, never an owning link.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupKey(pub String);

/// A hex color literal such as `#0d6efd` or `#fff`.
///
/// Deserialization accepts any string; wellformedness is reported by the
/// validation pass so a single malformed value cannot abort loading before
/// the full violation list is collected.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HexColor(pub String);

impl HexColor {
    /// True when the value is a `#`-prefixed 3-, 6-, or 8-digit hex literal.
    pub fn is_wellformed(&self) -> bool {
        let Some(digits) = self.0.strip_prefix('#') else {
            return false;
        };
        matches!(digits.len(), 3 | 6 | 8) && digits.chars().all(|c| c.is_ascii_hexdigit())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<&str> for HexColor {
    fn from(value: &str) -> Self {
        HexColor(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_color_wellformedness() {
        for good in ["#fff", "#000", "#0d6efd", "#343a40", "#20c997ff", "#ABCDEF"] {
            assert!(HexColor::from(good).is_wellformed(), "{good} should pass");
        }
        for bad in ["", "#", "0d6efd", "#0d6ef", "#12", "#xyzxyz", "#0d6efd0", "blue"] {
            assert!(!HexColor::from(bad).is_wellformed(), "{bad} should fail");
        }
    }

    #[test]
    fn keys_round_trip_as_plain_strings() {
        let key = CatalogKey("rpg_tavern_en_v1".to_string());
        let serialized = serde_json::to_string(&key).unwrap();
        assert_eq!(serialized, "\"rpg_tavern_en_v1\"");
        let parsed: CatalogKey = serde_json::from_str(&serialized).unwrap();
        assert_eq!(parsed, key);

        let group = GroupKey("town".to_string());
        let serialized_group = serde_json::to_string(&group).unwrap();
        assert_eq!(serialized_group, "\"town\"");
        let parsed_group: GroupKey = serde_json::from_str(&serialized_group).unwrap();
        assert_eq!(parsed_group, group);
    }

    #[test]
    fn hex_color_round_trips() {
        let color = HexColor::from("#6f42c1");
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, "\"#6f42c1\"");
        let back: HexColor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, color);
    }
}
