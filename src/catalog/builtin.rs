//! Statically-defined boards shipped with the crate.
//!
//! Two near-duplicate datasets exist: the English default board and the
//! German alternate it was translated from. Both are constructed once,
//! resolve every palette reference to a hex string at definition time, and
//! are never mutated afterwards.
//!
//! The English board's music entries still reference a `music` group that was
//! never added to its group list. The data is kept as authored; the
//! validation pass reports the dangling reference instead of guessing a home
//! for those sounds.

use crate::catalog::identity::{CatalogKey, GroupKey, HexColor};
use crate::catalog::model::{ColorPair, ColorTheme, GroupDef, Sound, SoundCatalog};
use crate::catalog::{SCHEMA_VERSION, palette};
use std::sync::OnceLock;

/// Key of the default (English) board.
pub const DEFAULT_BOARD: &str = "rpg_tavern_en_v1";
/// Key of the German alternate board.
pub const GERMAN_BOARD: &str = "rpg_tavern_de_v1";

/// Keys of every builtin board, default first.
pub fn builtin_keys() -> Vec<CatalogKey> {
    vec![
        CatalogKey(DEFAULT_BOARD.to_string()),
        CatalogKey(GERMAN_BOARD.to_string()),
    ]
}

/// Construct a builtin board by key.
pub fn builtin(key: &CatalogKey) -> Option<SoundCatalog> {
    match key.0.as_str() {
        DEFAULT_BOARD => Some(default_catalog()),
        GERMAN_BOARD => Some(german_catalog()),
        _ => None,
    }
}

/// The default board, freshly constructed.
pub fn default_catalog() -> SoundCatalog {
    tavern_board(Language::English)
}

/// The German alternate board, freshly constructed.
pub fn german_catalog() -> SoundCatalog {
    tavern_board(Language::German)
}

/// Process-wide snapshot of the default board.
///
/// Safe for unlimited concurrent readers: the catalog is built once and never
/// mutated.
pub fn shared() -> &'static SoundCatalog {
    static SHARED: OnceLock<SoundCatalog> = OnceLock::new();
    SHARED.get_or_init(default_catalog)
}

#[derive(Clone, Copy)]
enum Language {
    English,
    German,
}

const TOWN: &str = "town";
const COMBAT: &str = "combat";
const TRAVELLING: &str = "travelling";
const NATURE: &str = "nature";
const WEATHER: &str = "weather";
// Referenced by the English music entries but never declared as a group.
const MUSIC: &str = "music";

fn tavern_board(language: Language) -> SoundCatalog {
    let (key, title) = match language {
        Language::English => (DEFAULT_BOARD, "RPG Tavern Board"),
        Language::German => (GERMAN_BOARD, "RPG Wirtshaus-Brett"),
    };
    SoundCatalog {
        schema_version: SCHEMA_VERSION.to_string(),
        key: CatalogKey(key.to_string()),
        title: title.to_string(),
        palette: palette::named(),
        groups: groups(language),
        sounds: sounds(language),
    }
}

fn groups(language: Language) -> Vec<GroupDef> {
    let titles: [&str; 5] = match language {
        Language::English => ["Town", "Combat", "Travelling", "Nature", "Weather"],
        Language::German => ["Stadt", "Kampf", "Reise", "Natur", "Wetter"],
    };
    vec![
        group(TOWN, titles[0], "🏰", theme(palette::PURPLE, palette::YELLOW, palette::PURPLE)),
        group(COMBAT, titles[1], "⚔", theme(palette::RED, palette::WHITE, palette::RED)),
        group(
            TRAVELLING,
            titles[2],
            "🏕",
            theme(palette::GRAY_DARK, palette::WHITE, palette::GRAY_DARK),
        ),
        group(NATURE, titles[3], "🏞", theme(palette::GREEN, palette::WHITE, palette::GREEN)),
        group(WEATHER, titles[4], "🌦", theme(palette::BLUE, palette::WHITE, palette::BLUE)),
    ]
}

fn sounds(language: Language) -> Vec<Sound> {
    let docks_title = match language {
        Language::English => "Docks",
        Language::German => "Hafen",
    };
    let ambient: [(&str, &str, &str, &str); 10] = match language {
        Language::English => [
            ("Dripping Cave", NATURE, "⛰", "./sounds/ambient/dripping-cave.ogg"),
            ("Evening Town", TOWN, "🌆", "./sounds/ambient/evening-town.ogg"),
            ("Forest (daytime)", NATURE, "🌳", "./sounds/ambient/forest-daytime.ogg"),
            ("Horseback Travel", TRAVELLING, "🐎", "./sounds/ambient/horseback-travelling.ogg"),
            ("Night Camp", TRAVELLING, "🏕", "./sounds/ambient/night-camp.ogg"),
            ("Rapid River", NATURE, "🏞", "./sounds/ambient/rapid-river.ogg"),
            ("Small Marketplace", TOWN, "💰", "./sounds/ambient/small-marketplace.ogg"),
            ("Thunderstorm", WEATHER, "🌩", "./sounds/ambient/thunderstorm.ogg"),
            ("Town Square (daytime)", TOWN, "🏘", "./sounds/ambient/town-square-daytime.ogg"),
            ("Woodland Village", TOWN, "🏘", "./sounds/ambient/woodland-village.ogg"),
        ],
        Language::German => [
            ("Tropfsteinhöhle", NATURE, "⛰", "./sounds/ambient/dripping-cave.ogg"),
            ("Stadt (abends)", TOWN, "🌆", "./sounds/ambient/evening-town.ogg"),
            ("Wald (tagsüber)", NATURE, "🌳", "./sounds/ambient/forest-daytime.ogg"),
            ("Reiten", TRAVELLING, "🐎", "./sounds/ambient/horseback-travelling.ogg"),
            ("Nachtlager", TRAVELLING, "🏕", "./sounds/ambient/night-camp.ogg"),
            ("Fluss (schnell)", NATURE, "🏞", "./sounds/ambient/rapid-river.ogg"),
            ("Marktplatz (klein)", TOWN, "💰", "./sounds/ambient/small-marketplace.ogg"),
            ("Gewitter", WEATHER, "🌩", "./sounds/ambient/thunderstorm.ogg"),
            ("Stadtplatz (tagsüber)", TOWN, "🏘", "./sounds/ambient/town-square-daytime.ogg"),
            ("Dorf (Wald)", TOWN, "🏘", "./sounds/ambient/woodland-village.ogg"),
        ],
    };

    // The German board files the music tracks under `combat`; the English one
    // still says `music`, which no group declares.
    let music_group = match language {
        Language::English => MUSIC,
        Language::German => COMBAT,
    };

    let effects: [(&str, &str, Option<&str>, &[&str]); 9] = {
        let titles: [&str; 9] = match language {
            Language::English => [
                "Slam",
                "Sword Clash",
                "Arrows",
                "Dragon Bite",
                "Owlbear Roar",
                "Ooze",
                "Swimming",
                "Thunder Clap",
                "Wave Crash",
            ],
            Language::German => [
                "Schlag",
                "Schwerthieb",
                "Pfeile",
                "Drachenbiss",
                "Eulenbär",
                "Schlamm",
                "Schwimmen",
                "Donnerschlag",
                "Welle",
            ],
        };
        [
            (titles[0], COMBAT, Some("👊"), &[
                "./sounds/effects/dirt-slam-1.ogg",
                "./sounds/effects/dirt-slam-2.ogg",
                "./sounds/effects/dirt-slam-3.ogg",
                "./sounds/effects/dirt-slam-4.ogg",
            ]),
            (titles[1], COMBAT, Some("⚔"), &[
                "./sounds/effects/sword-clash-1.ogg",
                "./sounds/effects/sword-clash-2.ogg",
                "./sounds/effects/sword-clash-3.ogg",
            ]),
            (titles[2], COMBAT, Some("🏹"), &[
                "./sounds/effects/arrow-loose-and-hit-1.ogg",
                "./sounds/effects/arrow-loose-and-hit-2.ogg",
                "./sounds/effects/arrow-loose-and-hit-3.ogg",
                "./sounds/effects/arrow-loose-and-hit-4.ogg",
                "./sounds/effects/arrow-loose-and-hit-5.ogg",
                "./sounds/effects/arrow-loose-and-hit-6.ogg",
                "./sounds/effects/arrow-loose-and-hit-7.ogg",
            ]),
            (titles[3], COMBAT, Some("🐲"), &[
                "./sounds/effects/dragon-bite-1.ogg",
                "./sounds/effects/dragon-bite-2.ogg",
            ]),
            (titles[4], COMBAT, Some("🐻"), &[
                "./sounds/effects/owlbear-roar-1.ogg",
                "./sounds/effects/owlbear-roar-2.ogg",
                "./sounds/effects/owlbear-roar-3.ogg",
                "./sounds/effects/owlbear-roar-4.ogg",
            ]),
            (titles[5], NATURE, None, &[
                "./sounds/effects/ooze-1.ogg",
                "./sounds/effects/ooze-2.ogg",
                "./sounds/effects/ooze-3.ogg",
                "./sounds/effects/ooze-4.ogg",
                "./sounds/effects/ooze-5.ogg",
            ]),
            (titles[6], TRAVELLING, Some("🏊"), &[
                "./sounds/effects/swimming-1.ogg",
                "./sounds/effects/swimming-2.ogg",
                "./sounds/effects/swimming-3.ogg",
                "./sounds/effects/swimming-4.ogg",
                "./sounds/effects/swimming-5.ogg",
                "./sounds/effects/swimming-6.ogg",
            ]),
            (titles[7], WEATHER, Some("🌩"), &[
                "./sounds/effects/thunder-clap-1.ogg",
                "./sounds/effects/thunder-clap-2.ogg",
                "./sounds/effects/thunder-clap-3.ogg",
                "./sounds/effects/thunder-clap-4.ogg",
            ]),
            (titles[8], NATURE, Some("🌊"), &[
                "./sounds/effects/wave-crash-1.ogg",
                "./sounds/effects/wave-crash-2.ogg",
                "./sounds/effects/wave-crash-3.ogg",
                "./sounds/effects/wave-crash-4.ogg",
            ]),
        ]
    };

    let mut out = Vec::new();

    // Ambient loops. The docks entry carries the one explicit color override
    // on the board.
    out.push(Sound {
        title: docks_title.to_string(),
        group_name: GroupKey(TOWN.to_string()),
        icon_html: Some("⚓".to_string()),
        color: Some(theme(palette::BLUE, palette::WHITE, palette::BLUE)),
        loopable: true,
        sound_entries: vec!["./sounds/ambient/docks.ogg".to_string()],
    });
    for (title, group, icon, path) in ambient {
        out.push(loop_sound(title, group, icon, path));
    }

    out.push(music(
        "darkest-dungeon-the-cove-battle",
        music_group,
        "./sounds/music/darkest-dungeon-the-cove-battle.ogg",
    ));
    out.push(music(
        "skyrim-ost-blood-and-steel",
        music_group,
        "./sounds/music/skyrim-ost-blood-and-steel.ogg",
    ));

    for (title, group, icon, entries) in effects {
        out.push(effect(title, group, icon, entries));
    }

    out
}

fn group(key: &str, title: &str, icon: &str, color: ColorTheme) -> GroupDef {
    GroupDef {
        key: GroupKey(key.to_string()),
        title: title.to_string(),
        icon_html: Some(icon.to_string()),
        collapsed: true,
        color,
    }
}

fn theme(header_bg: &str, header_text: &str, border: &str) -> ColorTheme {
    ColorTheme {
        header: ColorPair {
            bg: HexColor::from(header_bg),
            text: HexColor::from(header_text),
        },
        border: HexColor::from(border),
        body: ColorPair {
            bg: HexColor::from(palette::WHITE),
            text: HexColor::from(palette::BLACK),
        },
    }
}

fn loop_sound(title: &str, group: &str, icon: &str, path: &str) -> Sound {
    Sound {
        title: title.to_string(),
        group_name: GroupKey(group.to_string()),
        icon_html: Some(icon.to_string()),
        color: None,
        loopable: true,
        sound_entries: vec![path.to_string()],
    }
}

fn music(title: &str, group: &str, path: &str) -> Sound {
    Sound {
        title: title.to_string(),
        group_name: GroupKey(group.to_string()),
        icon_html: None,
        color: None,
        loopable: true,
        sound_entries: vec![path.to_string()],
    }
}

fn effect(title: &str, group: &str, icon: Option<&str>, entries: &[&str]) -> Sound {
    Sound {
        title: title.to_string(),
        group_name: GroupKey(group.to_string()),
        icon_html: icon.map(str::to_string),
        color: None,
        loopable: false,
        sound_entries: entries.iter().map(|entry| entry.to_string()).collect(),
    }
}
