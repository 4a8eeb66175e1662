//! swissmatch — Command-line interface for swissmatch-core
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ swissmatch stats
//!
//! - Zip code by ordering number, by code + add-on, by code + name
//!   $ swissmatch zip-code 4384
//!   $ swissmatch zip-code 8000 00
//!   $ swissmatch zip-code 8000 Zurigo
//!
//! - All zip codes sharing a code, or matching a name
//!   $ swissmatch zip-codes 8000
//!   $ swissmatch zip-codes Zuerich
//!
//! - Names used by a code, in Italian, domicile types only
//!   $ swissmatch cities 8000 --type 10 --type 20 --locale it
//!
//! Data source
//! -----------
//!
//! By default the CLI loads the dataset bundled with `swissmatch-core` and
//! caches a binary copy next to it. Use `--input <path>` for a custom JSON
//! (optionally gzipped) file, or `--input <path> --binary` for a file written
//! by `swissmatch compile`.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use swissmatch_core::prelude::*;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_zip(z: &ZipCode) {
    println!(
        "{} (ONRP {}, add-on {:02}, type {}, {})",
        z,
        z.ordering_number,
        z.add_on,
        z.zip_type.code(),
        z.canton
    );
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    let source = match (&args.input, args.binary) {
        (Some(path), true) => DataFiles::binary(path),
        (Some(path), false) => DataFiles::json(path),
        (None, _) => DataFiles::default(),
    };
    let handle = SwissMatch::load(Some(&source))
        .with_context(|| format!("loading {}", source.path().display()))?;
    let db = handle.snapshot();
    tracing::debug!(stats = ?db.stats(), "dataset ready");

    match args.command {
        Commands::Stats => {
            let stats = db.stats();
            println!("Dataset statistics:");
            println!("  Cantons: {}", stats.cantons);
            println!("  Communities: {}", stats.communities);
            println!("  Zip codes: {}", stats.zip_codes);
        }

        Commands::Canton { id } => match db.canton(&id)? {
            Some(c) => {
                println!("Canton: {}", c.name());
                println!("Abbreviation: {}", c.abbreviation);
                println!("Plate code: {}", c.plate_code);
            }
            None => eprintln!("No canton found for: {id}"),
        },

        Commands::Cantons => {
            for c in db.cantons() {
                println!("{c}");
            }
        }

        Commands::Community { number } => match db.community(&number)? {
            Some(c) => println!("{} {}", c.community_number, c),
            None => eprintln!("No community found for: {number}"),
        },

        Commands::Communities { name } => {
            for c in db.communities(name.as_deref()) {
                println!("{} {}", c.community_number, c);
            }
        }

        Commands::ZipCode {
            code,
            add_on_or_name,
        } => {
            let second = add_on_or_name.as_ref().map(Arg::from);
            match db.zip_code(&code, second)? {
                Some(z) => print_zip(z),
                None => eprintln!("No zip code found"),
            }
        }

        Commands::ZipCodes { code_or_name } => {
            let zips = db.zip_codes(code_or_name.as_ref().map(Arg::from))?;
            if zips.is_empty() {
                println!("No zip codes found");
            }
            for z in zips {
                print_zip(z);
            }
        }

        Commands::City { name } => {
            let zips = db.city(&name);
            if zips.is_empty() {
                println!("No zip codes found matching: {name}");
            }
            for z in zips {
                print_zip(z);
            }
        }

        Commands::Cities {
            code,
            types,
            locale,
        } => {
            let types = types
                .into_iter()
                .map(ZipType::try_from)
                .collect::<Result<Vec<_>>>()?;
            let only_types = (!types.is_empty()).then_some(types.as_slice());
            let locale = locale.as_deref().map(str::parse::<Locale>).transpose()?;
            for name in db.cities_for_zip_code(&code, only_types, locale)? {
                println!("{name}");
            }
        }

        Commands::Compile { out } => {
            db.to_records()
                .save_as(&out)
                .with_context(|| format!("writing {out}"))?;
            println!("Wrote {out}");
        }
    }

    Ok(())
}
