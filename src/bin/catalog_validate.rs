//! Validate a sound catalog and print every violation.
//!
//! Checks either a builtin board or a catalog file on disk. Violations are
//! printed one per line with their severity; the exit code is non-zero when
//! any error-severity violation exists (or any warning under `--strict`).

use anyhow::{Context, Result, bail};
use soundboard::catalog::builtin;
use soundboard::{
    CatalogKey, SoundCatalog, build_group_coverage_map, empty_groups, load_catalog_from_path,
    validate_catalog, validate_catalog_file,
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
    let catalog = args.source.load()?;

    let violations = validate_catalog(&catalog);
    let mut error_count = 0usize;
    let mut warning_count = 0usize;
    for violation in &violations {
        let severity = violation.severity();
        if severity.is_error() {
            error_count += 1;
        } else {
            warning_count += 1;
        }
        println!("{}: {violation}", severity.label());
    }

    if args.coverage {
        match build_group_coverage_map(&catalog) {
            Ok(map) => {
                for (key, entry) in &map {
                    println!("group '{key}': {} sounds", entry.sound_titles.len());
                }
                for key in empty_groups(&map) {
                    println!("warning: group '{key}' has no sounds");
                }
            }
            // Coverage needs resolvable references; the dangling ones were
            // already printed above.
            Err(err) => println!("coverage unavailable: {err}"),
        }
    }

    println!(
        "{}: {} sounds, {} groups, {error_count} errors, {warning_count} warnings",
        catalog.key.0,
        catalog.sounds.len(),
        catalog.groups.len()
    );

    if error_count > 0 || (args.strict && warning_count > 0) {
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
            CatalogSource::Builtin(key) => builtin::builtin(key).ok_or_else(|| {
                anyhow::anyhow!(
                    "unknown builtin board '{}' (available: {})",
                    key.0,
                    builtin_key_list()
                )
            }),
            CatalogSource::File(path) => {
                validate_catalog_file(path)?;
                load_catalog_from_path(path)
                    .with_context(|| format!("loading {}", path.display()))
            }
        }
    }
}

fn builtin_key_list() -> String {
    builtin::builtin_keys()
        .iter()
        .map(|key| key.0.clone())
        .collect::<Vec<_>>()
        .join(", ")
}

struct CliArgs {
    source: CatalogSource,
    strict: bool,
    coverage: bool,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        let mut args = env::args_os().skip(1);
        let mut source: Option<CatalogSource> = None;
        let mut strict = false;
        let mut coverage = false;

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
                "--strict" => strict = true,
                "--coverage" => coverage = true,
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

        Ok(CliArgs {
            source,
            strict,
            coverage,
        })
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
        "Usage: catalog-validate [--builtin KEY | --catalog PATH] [--strict] [--coverage]\n\n\
         Validates a sound catalog and prints every violation.\n\
         Defaults to the builtin '{}' board. Available builtins: {}.",
        builtin::DEFAULT_BOARD,
        builtin_key_list()
    );
}
