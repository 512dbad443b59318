//! Sound catalog wiring.
//!
//! This module owns the board content: the named palette, the builtin
//! datasets, and the serde model for catalogs stored under
//! `schema/sound_catalog.schema.json`'s contract. Callers use `CatalogIndex`
//! for validated group lookups and `CatalogRepository` when multiple boards
//! are registered.

pub mod builtin;
pub mod identity;
pub mod index;
pub mod model;
pub mod palette;
pub mod repository;

pub use identity::{CatalogKey, GroupKey, HexColor};
pub use index::{CatalogIndex, validate_catalog_file};
pub use model::{ColorPair, ColorTheme, GroupDef, Sound, SoundCatalog};
pub use repository::CatalogRepository;

pub use model::load_catalog_from_path;

/// Schema version every catalog in this crate declares.
pub const SCHEMA_VERSION: &str = "sound_catalog_v1";
