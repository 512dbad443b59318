//! Cross-check a catalog's sound entries against the files on disk.
//!
//! Resolves every declared audio path under the board root's `sounds/` tree
//! and reports entries that are missing or escape the tree. Exits non-zero
//! when any entry fails to resolve.

use anyhow::{Context, Result, bail};
use soundboard::catalog::builtin;
use soundboard::{
    CatalogKey, SoundCatalog, audit_sound_entries, find_board_root, load_catalog_from_path,
};
use std::env;
use std::path::PathBuf;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = CliArgs::parse()?;
    let board_root = match args.root {
        Some(root) => root,
        None => find_board_root()?,
    };
    let catalog = args.source.load()?;

    let problems = audit_sound_entries(&catalog, &board_root);
    for problem in &problems {
        println!("{problem}");
    }

    let total: usize = catalog
        .sounds
        .iter()
        .map(|sound| sound.sound_entries.len())
        .sum();
    println!(
        "{}: {} entries checked against {}, {} problems",
        catalog.key.0,
        total,
        board_root.display(),
        problems.len()
    );

    if !problems.is_empty() {
        std::process::exit(1);
    }
    Ok(())
}

enum CatalogSource {
    Builtin(CatalogKey),
    File(PathBuf),
}

impl CatalogSource {
    fn load(&self) -> Result<SoundCatalog> {
        match self {
            CatalogSource::Builtin(key) => builtin::builtin(key)
                .ok_or_else(|| anyhow::anyhow!("unknown builtin board '{}'", key.0)),
            CatalogSource::File(path) => {
                load_catalog_from_path(path).with_context(|| format!("loading {}", path.display()))
            }
        }
    }
}

struct CliArgs {
    source: CatalogSource,
    root: Option<PathBuf>,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        let mut args = env::args_os().skip(1);
        let mut source: Option<CatalogSource> = None;
        let mut root: Option<PathBuf> = None;

        while let Some(arg_os) = args.next() {
            let arg = arg_os
                .into_string()
                .map_err(|_| anyhow::anyhow!("argument is not valid UTF-8"))?;
            match arg.as_str() {
                "--catalog" => {
                    let path = next_value(&mut args, "--catalog")?;
                    if source.is_some() {
                        bail!("--catalog/--builtin may only be provided once");
                    }
                    source = Some(CatalogSource::File(PathBuf::from(path)));
                }
                "--builtin" => {
                    let key = next_value(&mut args, "--builtin")?;
                    if source.is_some() {
                        bail!("--catalog/--builtin may only be provided once");
                    }
                    source = Some(CatalogSource::Builtin(CatalogKey(key)));
                }
                "--root" => {
                    let path = next_value(&mut args, "--root")?;
                    if root.is_some() {
                        bail!("--root may only be provided once");
                    }
                    root = Some(PathBuf::from(path));
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                other => bail!("unknown flag: {other}"),
            }
        }

        let source = source.unwrap_or_else(|| {
            CatalogSource::Builtin(CatalogKey(builtin::DEFAULT_BOARD.to_string()))
        });

        Ok(CliArgs { source, root })
    }
}

fn next_value(args: &mut impl Iterator<Item = std::ffi::OsString>, flag: &str) -> Result<String> {
    args.next()
        .map(|os| {
            os.into_string()
                .map_err(|_| anyhow::anyhow!("value for {flag} is not valid UTF-8"))
        })
        .transpose()?
        .ok_or_else(|| anyhow::anyhow!("missing value for {flag}"))
}

fn print_usage() {
    println!(
        "Usage: asset-audit [--builtin KEY | --catalog PATH] [--root PATH]\n\n\
         Checks every declared sound entry against the board root's sounds/ tree.\n\
         The root defaults to SOUNDBOARD_ROOT or the nearest board above the executable.",
    );
}
