// Centralized integration suite for the catalog crate; exercises the builtin
// boards, schema validation, the violation pass, asset resolution, and the
// helper binaries so changes surface in one place.
mod support;

use anyhow::{Context, Result};
use serde_json::Value;
use soundboard::catalog::builtin::{self, DEFAULT_BOARD, GERMAN_BOARD};
use soundboard::{
    CatalogIndex, CatalogKey, CatalogRepository, GroupKey, SoundCatalog, Violation,
    audit_sound_entries, has_errors, load_catalog_from_path, validate_catalog,
    validate_catalog_file,
};
use std::fs;
use std::path::Path;
use std::process::Command;
use support::{helper_binary, repo_root, run_command};
use tempfile::TempDir;

const GROUP_ORDER: [&str; 5] = ["town", "combat", "travelling", "nature", "weather"];

// Writes the fake audio tree plus schema sentinel for a catalog so the
// directory passes board-root detection and every declared entry resolves.
fn materialize_board(catalog: &SoundCatalog) -> TempDir {
    let temp = TempDir::new().expect("temp dir");
    let root = temp.path();
    fs::create_dir_all(root.join("schema")).expect("schema dir");
    fs::copy(
        repo_root().join("schema/sound_catalog.schema.json"),
        root.join("schema/sound_catalog.schema.json"),
    )
    .expect("copy schema");
    fs::create_dir_all(root.join("sounds")).expect("sounds dir");
    for sound in &catalog.sounds {
        for entry in &sound.sound_entries {
            let rel = entry.strip_prefix("./").unwrap_or(entry);
            let path = root.join(rel);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).expect("entry dir");
            }
            fs::write(&path, b"fixture-audio").expect("entry file");
        }
    }
    temp
}

fn write_catalog_file(dir: &Path, name: &str, value: &Value) -> std::path::PathBuf {
    let catalogs = dir.join("catalogs");
    fs::create_dir_all(&catalogs).expect("catalogs dir");
    let path = catalogs.join(name);
    fs::write(&path, serde_json::to_string_pretty(value).expect("render")).expect("write catalog");
    path
}

#[test]
fn default_board_has_town_group_with_loopable_docks() {
    let catalog = builtin::default_catalog();
    let town = GroupKey("town".to_string());

    let group = catalog.group(&town).expect("town group exists");
    assert_eq!(group.title, "Town");
    assert_eq!(group.icon_html.as_deref(), Some("🏰"));
    assert!(group.collapsed);

    let docks = catalog
        .sounds_in_group(&town)
        .find(|sound| sound.title == "Docks")
        .expect("docks sound exists");
    assert!(docks.loopable);
    assert!(docks.loop_hint());
    assert_eq!(docks.sound_entries.len(), 1);
    assert!(docks.sound_entries[0].ends_with(".ogg"));
    // The docks card is the one explicit per-sound theme override.
    assert!(docks.color.is_some());
}

#[test]
fn alternate_board_uses_german_titles() {
    let catalog = builtin::german_catalog();
    let town = GroupKey("town".to_string());
    assert_eq!(catalog.group(&town).map(|g| g.title.as_str()), Some("Stadt"));
    assert!(catalog.sounds().iter().any(|sound| sound.title == "Hafen"));
    assert_eq!(catalog.key, CatalogKey(GERMAN_BOARD.to_string()));
}

#[test]
fn display_order_is_declaration_order_across_loads() {
    let first = builtin::default_catalog();
    let second = builtin::default_catalog();
    assert_eq!(first, second);

    let keys: Vec<&str> = first.groups().map(|(key, _)| key.0.as_str()).collect();
    assert_eq!(keys, GROUP_ORDER);

    assert_eq!(first.sounds()[0].title, "Docks");
    let first_titles: Vec<&str> = first.sounds().iter().map(|s| s.title.as_str()).collect();
    let second_titles: Vec<&str> = second.sounds().iter().map(|s| s.title.as_str()).collect();
    assert_eq!(first_titles, second_titles);

    assert_eq!(builtin::shared(), &builtin::default_catalog());
}

#[test]
fn palette_matches_source_values() {
    let catalog = builtin::default_catalog();
    let palette = catalog.palette();
    assert_eq!(palette.len(), 15);
    assert_eq!(palette["blue"].as_str(), "#0d6efd");
    assert_eq!(palette["grayDark"].as_str(), "#343a40");
    for (name, color) in palette {
        assert!(color.is_wellformed(), "palette entry {name}");
    }
}

#[test]
fn catalog_round_trips_through_json() {
    for key in builtin::builtin_keys() {
        let catalog = builtin::builtin(&key).expect("builtin board");
        let rendered = serde_json::to_string(&catalog).expect("serialize");
        let parsed: SoundCatalog = serde_json::from_str(&rendered).expect("parse");
        assert_eq!(parsed, catalog, "round trip for {}", key.0);
    }
}

// Regression guard for the known authoring inconsistency: the English board's
// music entries reference a group that was never declared. The violation must
// be reported, never silently accepted or patched over.
#[test]
fn default_board_reports_dangling_music_reference() {
    let catalog = builtin::default_catalog();
    let violations = validate_catalog(&catalog);
    assert!(has_errors(&violations));

    let music = GroupKey("music".to_string());
    let dangling: Vec<&Violation> = violations
        .iter()
        .filter(|violation| {
            matches!(
                violation,
                Violation::UnknownGroupReference { group, .. } if group == &music
            )
        })
        .collect();
    assert_eq!(dangling.len(), 2, "both music tracks dangle");
    assert_eq!(violations.len(), 2, "no other violations expected");
}

#[test]
fn german_board_validates_clean() {
    assert!(validate_catalog(&builtin::german_catalog()).is_empty());
}

#[test]
fn index_accepts_german_board_and_preserves_order() {
    let index = CatalogIndex::from_catalog(builtin::german_catalog()).expect("valid board");
    assert_eq!(index.key(), &CatalogKey(GERMAN_BOARD.to_string()));

    let keys: Vec<&str> = index.keys().map(|key| key.0.as_str()).collect();
    assert_eq!(keys, GROUP_ORDER);

    let combat = GroupKey("combat".to_string());
    assert_eq!(
        index.group(&combat).map(|group| group.title.as_str()),
        Some("Kampf")
    );
    assert!(index.group(&GroupKey("music".to_string())).is_none());

    let combat_sounds: Vec<&str> = index
        .catalog()
        .sounds_in_group(&combat)
        .map(|sound| sound.title.as_str())
        .collect();
    assert!(combat_sounds.contains(&"Schwerthieb"));
}

#[test]
fn index_rejects_default_board_with_aggregated_errors() {
    let err = CatalogIndex::from_catalog(builtin::default_catalog()).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("failed validation"));
    assert!(message.contains("darkest-dungeon-the-cove-battle"));
    assert!(message.contains("skyrim-ost-blood-and-steel"));
    assert!(message.contains("unknown group 'music'"));
}

#[test]
fn repository_serves_builtin_boards() {
    let repo = CatalogRepository::with_builtins();
    for key in builtin::builtin_keys() {
        assert!(repo.get(&key).is_some(), "missing builtin {}", key.0);
    }

    let german = CatalogKey(GERMAN_BOARD.to_string());
    let weather = GroupKey("weather".to_string());
    assert_eq!(
        repo.find_group(&german, &weather).map(|g| g.title.as_str()),
        Some("Wetter")
    );
    assert!(repo.get(&CatalogKey("missing_board".to_string())).is_none());
}

#[test]
fn external_catalog_file_loads_through_schema() -> Result<()> {
    let board = materialize_board(&builtin::german_catalog());
    let value = serde_json::to_value(builtin::german_catalog())?;
    let path = write_catalog_file(board.path(), "tavern.json", &value);

    validate_catalog_file(&path)?;
    let index = CatalogIndex::load(&path)?;
    assert_eq!(index.key(), &CatalogKey(GERMAN_BOARD.to_string()));
    assert_eq!(index.catalog(), &builtin::german_catalog());

    let reloaded = load_catalog_from_path(&path)?;
    assert_eq!(reloaded, builtin::german_catalog());
    Ok(())
}

#[test]
fn external_catalog_rejects_unknown_schema_version() -> Result<()> {
    let board = materialize_board(&builtin::german_catalog());
    let mut value = serde_json::to_value(builtin::german_catalog())?;
    value["schema_version"] = Value::String("sound_catalog_v9".to_string());
    let path = write_catalog_file(board.path(), "future.json", &value);

    let err = CatalogIndex::load(&path).unwrap_err();
    assert!(format!("{err:#}").contains("not in allowed set"));
    Ok(())
}

#[test]
fn external_catalog_rejects_malformed_shapes() -> Result<()> {
    let board = materialize_board(&builtin::german_catalog());

    let mut bad_color = serde_json::to_value(builtin::german_catalog())?;
    bad_color["groups"][0]["color"]["border"] = Value::String("#12345".to_string());
    let path = write_catalog_file(board.path(), "bad_color.json", &bad_color);
    let err = CatalogIndex::load(&path).unwrap_err();
    assert!(format!("{err:#}").contains("failed schema validation"));

    let mut extra_field = serde_json::to_value(builtin::german_catalog())?;
    extra_field["unexpected"] = Value::Bool(true);
    let path = write_catalog_file(board.path(), "extra_field.json", &extra_field);
    let err = CatalogIndex::load(&path).unwrap_err();
    assert!(format!("{err:#}").contains("failed schema validation"));
    Ok(())
}

#[test]
fn external_catalog_with_dangling_reference_fails_indexing() -> Result<()> {
    let board = materialize_board(&builtin::default_catalog());
    let value = serde_json::to_value(builtin::default_catalog())?;
    let path = write_catalog_file(board.path(), "dangling.json", &value);

    // The file is structurally valid; only the violation pass rejects it.
    validate_catalog_file(&path)?;
    let err = CatalogIndex::load(&path).unwrap_err();
    assert!(err.to_string().contains("unknown group 'music'"));
    Ok(())
}

#[test]
fn asset_audit_resolves_and_reports_missing_entries() {
    let catalog = builtin::german_catalog();
    let board = materialize_board(&catalog);

    assert!(audit_sound_entries(&catalog, board.path()).is_empty());

    fs::remove_file(board.path().join("sounds/ambient/docks.ogg")).expect("remove fixture");
    let problems = audit_sound_entries(&catalog, board.path());
    assert_eq!(problems.len(), 1);
    assert!(problems[0].contains("Hafen"));
    assert!(problems[0].contains("docks.ogg"));
}

#[test]
fn export_binary_round_trips_builtin_board() -> Result<()> {
    let repo_root = repo_root();
    let export = helper_binary(&repo_root, "catalog-export");

    let mut cmd = Command::new(&export);
    cmd.arg("--builtin").arg(GERMAN_BOARD);
    let output = run_command(cmd)?;
    let parsed: SoundCatalog =
        serde_json::from_slice(&output.stdout).context("parsing exported catalog")?;
    assert_eq!(parsed, builtin::german_catalog());

    let mut list_cmd = Command::new(&export);
    list_cmd.arg("--list-builtins");
    let output = run_command(list_cmd)?;
    let listed: Vec<String> = String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect();
    assert_eq!(listed, vec![DEFAULT_BOARD.to_string(), GERMAN_BOARD.to_string()]);
    Ok(())
}

#[test]
fn validate_binary_flags_default_board_and_passes_german() -> Result<()> {
    let repo_root = repo_root();
    let validate = helper_binary(&repo_root, "catalog-validate");

    let mut clean_cmd = Command::new(&validate);
    clean_cmd.arg("--builtin").arg(GERMAN_BOARD).arg("--coverage");
    let output = run_command(clean_cmd)?;
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("0 errors"));
    assert!(stdout.contains("group 'town'"));

    let mut failing_cmd = Command::new(&validate);
    failing_cmd.arg("--builtin").arg(DEFAULT_BOARD);
    let output = failing_cmd.output().context("running catalog-validate")?;
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("unknown group 'music'"));
    assert!(stdout.contains("2 errors"));
    Ok(())
}

#[test]
fn audit_binary_honors_root_flag_and_env() -> Result<()> {
    let repo_root = repo_root();
    let audit = helper_binary(&repo_root, "asset-audit");
    let board = materialize_board(&builtin::german_catalog());

    let mut ok_cmd = Command::new(&audit);
    ok_cmd
        .arg("--builtin")
        .arg(GERMAN_BOARD)
        .arg("--root")
        .arg(board.path());
    let output = run_command(ok_cmd)?;
    assert!(String::from_utf8_lossy(&output.stdout).contains("0 problems"));

    // Same board via SOUNDBOARD_ROOT instead of --root.
    let mut env_cmd = Command::new(&audit);
    env_cmd
        .arg("--builtin")
        .arg(GERMAN_BOARD)
        .env("SOUNDBOARD_ROOT", board.path());
    let output = run_command(env_cmd)?;
    assert!(String::from_utf8_lossy(&output.stdout).contains("0 problems"));

    fs::remove_file(board.path().join("sounds/effects/ooze-1.ogg"))?;
    let mut missing_cmd = Command::new(&audit);
    missing_cmd
        .arg("--builtin")
        .arg(GERMAN_BOARD)
        .arg("--root")
        .arg(board.path());
    let output = missing_cmd.output().context("running asset-audit")?;
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains("ooze-1.ogg"));
    Ok(())
}
