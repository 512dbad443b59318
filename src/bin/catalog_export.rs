//! Export a sound catalog as transport JSON.
//!
//! Prints the full catalog (palette, groups in display order, sounds in
//! display order) to stdout for the rendering layer or an API response.
//! Export does not validate; pair with catalog-validate when integrity
//! matters.

use anyhow::{Context, Result, bail};
use soundboard::catalog::builtin;
use soundboard::{CatalogKey, SoundCatalog, load_catalog_from_path};
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

    if args.list_builtins {
        for key in builtin::builtin_keys() {
            println!("{}", key.0);
        }
        return Ok(());
    }

    let catalog = args.source.load()?;
    let rendered = if args.pretty {
        serde_json::to_string_pretty(&catalog)?
    } else {
        serde_json::to_string(&catalog)?
    };
    println!("{rendered}");
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
    pretty: bool,
    list_builtins: bool,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        let mut args = env::args_os().skip(1);
        let mut source: Option<CatalogSource> = None;
        let mut pretty = false;
        let mut list_builtins = false;

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
                "--pretty" => pretty = true,
                "--list-builtins" => list_builtins = true,
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
            pretty,
            list_builtins,
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
        "Usage: catalog-export [--builtin KEY | --catalog PATH] [--pretty] [--list-builtins]\n\n\
         Prints a sound catalog as JSON. Defaults to the builtin '{}' board.",
        builtin::DEFAULT_BOARD
    );
}
