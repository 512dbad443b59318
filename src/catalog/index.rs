//! Indexed view of one sound catalog.
//!
//! The index enforces the expected catalog schema version and provides fast
//! group lookup by key while keeping declaration order. It is intentionally
//! strict: a catalog with any error-severity violation is rejected with the
//! full aggregated list, so consumers never render a board whose references
//! are known to dangle.

use crate::catalog::load_catalog_from_path;
use crate::catalog::{CatalogKey, GroupDef, GroupKey, SCHEMA_VERSION, SoundCatalog};
use crate::schema_loader::{SchemaLoadOptions, load_json_schema};
use crate::validation::{Violation, validate_catalog};
use anyhow::{Context, Result, bail};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::path::PathBuf;

#[derive(Debug)]
/// Sound catalog plus a derived index keyed by group key.
pub struct CatalogIndex {
    catalog_key: CatalogKey,
    catalog: SoundCatalog,
    by_key: BTreeMap<GroupKey, GroupDef>,
    order: Vec<GroupKey>,
}

impl CatalogIndex {
    /// Load and validate a catalog file from disk.
    ///
    /// Validates the file against the catalog schema, checks the declared
    /// `schema_version` against the allowed set, then runs the full violation
    /// pass via [`CatalogIndex::from_catalog`].
    pub fn load(path: &Path) -> Result<Self> {
        validate_against_schema(path)?;

        let catalog =
            load_catalog_from_path(path).with_context(|| format!("loading {}", path.display()))?;
        validate_schema_version(&catalog.schema_version)?;
        Self::from_catalog(catalog)
    }

    /// Build an index over an already-constructed catalog.
    ///
    /// Rejects the catalog with every error-severity violation joined into a
    /// single message; warnings are tolerated (a loop hint on a multi-entry
    /// sound does not make the board unrenderable).
    pub fn from_catalog(catalog: SoundCatalog) -> Result<Self> {
        validate_catalog_key(&catalog.key)?;
        let errors: Vec<Violation> = validate_catalog(&catalog)
            .into_iter()
            .filter(|violation| violation.severity().is_error())
            .collect();
        if !errors.is_empty() {
            let details = errors
                .iter()
                .map(Violation::to_string)
                .collect::<Vec<_>>()
                .join("\n");
            bail!("catalog {} failed validation:\n{}", catalog.key.0, details);
        }

        let mut by_key = BTreeMap::new();
        let mut order = Vec::with_capacity(catalog.groups.len());
        for group in &catalog.groups {
            // Duplicate keys are an error-severity violation, so the insert
            // cannot clobber here.
            by_key.insert(group.key.clone(), group.clone());
            order.push(group.key.clone());
        }

        Ok(Self {
            catalog_key: catalog.key.clone(),
            catalog,
            by_key,
            order,
        })
    }

    /// The catalog key declared in the loaded board.
    pub fn key(&self) -> &CatalogKey {
        &self.catalog_key
    }

    /// Resolve a group by key.
    ///
    /// Returns `None` instead of erroring; callers surface errors with the
    /// context that referenced the missing key.
    pub fn group(&self, key: &GroupKey) -> Option<&GroupDef> {
        self.by_key.get(key)
    }

    /// Iterates group keys in display (declaration) order.
    pub fn keys(&self) -> impl Iterator<Item = &GroupKey> {
        self.order.iter()
    }

    /// Access the underlying catalog (palette, sounds, overrides).
    pub fn catalog(&self) -> &SoundCatalog {
        &self.catalog
    }
}

/// Check a catalog file against the schema contract without building an index.
///
/// Used by tooling that wants to report the violation pass separately from
/// structural file errors.
pub fn validate_catalog_file(path: &Path) -> Result<()> {
    validate_against_schema(path)?;
    let catalog =
        load_catalog_from_path(path).with_context(|| format!("loading {}", path.display()))?;
    validate_schema_version(&catalog.schema_version)?;
    validate_catalog_key(&catalog.key)
}

fn validate_schema_version(schema_version: &str) -> Result<()> {
    if schema_version.is_empty() {
        bail!("schema_version must not be empty");
    }

    if !schema_version
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
    {
        bail!(
            "schema_version must match ^[A-Za-z0-9_.-]+$, got {}",
            schema_version
        );
    }

    let allowed = allowed_schema_versions();
    if !allowed.contains(schema_version) {
        bail!(
            "schema_version '{}' not in allowed set {:?}",
            schema_version,
            allowed
        );
    }

    Ok(())
}

fn allowed_schema_versions() -> BTreeSet<String> {
    BTreeSet::from_iter([default_catalog_schema_version()])
}

fn default_catalog_schema_version() -> String {
    catalog_schema_version_from_disk().unwrap_or_else(|| SCHEMA_VERSION.to_string())
}

fn catalog_schema_version_from_disk() -> Option<String> {
    let path = canonical_catalog_schema_path();
    let file = File::open(path).ok()?;
    let value: Value = serde_json::from_reader(BufReader::new(file)).ok()?;
    value
        .pointer("/properties/schema_version/const")
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn canonical_catalog_schema_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("schema/sound_catalog.schema.json")
}

fn validate_catalog_key(key: &CatalogKey) -> Result<()> {
    if key.0.is_empty() {
        bail!("catalog key must not be empty");
    }

    if !key
        .0
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
    {
        bail!("catalog key must match ^[A-Za-z0-9_.-]+$, got {}", key.0);
    }

    Ok(())
}

fn validate_against_schema(catalog_path: &Path) -> Result<()> {
    let catalog_file = File::open(catalog_path)
        .with_context(|| format!("opening catalog {}", catalog_path.display()))?;
    let catalog_value: Value = serde_json::from_reader(BufReader::new(catalog_file))
        .with_context(|| format!("parsing catalog {}", catalog_path.display()))?;

    let catalog_version = catalog_value
        .get("schema_version")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let schema_path = resolve_catalog_schema_path(catalog_path);
    let allowed = allowed_schema_versions();
    let schema = load_json_schema(
        &schema_path,
        SchemaLoadOptions {
            allowed_versions: Some(&allowed),
            expected_version: Some(&catalog_version),
            patch_schema_version_const: true,
            ..Default::default()
        },
    )
    .with_context(|| format!("loading catalog schema {}", schema_path.display()))?;

    if let Err(errors) = schema.compiled.validate(&catalog_value) {
        let details = errors
            .map(|err| err.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        bail!(
            "sound catalog {} failed schema validation ({}):\n{}",
            catalog_path.display(),
            schema.schema_version,
            details
        );
    }
    Ok(())
}

fn resolve_catalog_schema_path(catalog_path: &Path) -> PathBuf {
    if let Some(base) = catalog_path.parent().and_then(|p| p.parent()) {
        let candidate = base.join("schema/sound_catalog.schema.json");
        if candidate.exists() {
            return candidate;
        }
    }

    canonical_catalog_schema_path()
}
