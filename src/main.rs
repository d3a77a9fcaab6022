//! Wrapgen CLI entry point

use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use wrapgen::cli::{Cli, Commands, ScanStrategy};
use wrapgen::emit::{self, Mode};
use wrapgen::error::Result;
use wrapgen::{output, scan, Manifest, NameSet};

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only generated code
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_env("WRAPGEN_LOG"))
        .init();

    let cli = Cli::parse();

    match cli.command {
        None => generate(
            None,
            PathBuf::from("."),
            ScanStrategy::Declarations,
            Mode::Body,
        ),
        Some(Commands::Header {
            manifest,
            root,
            strategy,
        }) => generate(manifest, root, strategy, Mode::Header),
        Some(Commands::Body {
            manifest,
            root,
            strategy,
        }) => generate(manifest, root, strategy, Mode::Body),
        Some(Commands::Names {
            manifest,
            root,
            strategy,
            json,
        }) => {
            let names = extract(manifest, &root, strategy)?;
            if json {
                println!("{}", output::format_names_json(&names)?);
            } else {
                println!("{}", output::format_names_human(&names));
            }
            Ok(())
        }
    }
}

fn generate(
    manifest: Option<PathBuf>,
    root: PathBuf,
    strategy: ScanStrategy,
    mode: Mode,
) -> Result<()> {
    let names = extract(manifest, &root, strategy)?;
    print!("{}", emit::render(&names, mode));
    Ok(())
}

fn extract(manifest: Option<PathBuf>, root: &Path, strategy: ScanStrategy) -> Result<NameSet> {
    let manifest = match manifest {
        Some(path) => Manifest::load(&path)?,
        None => Manifest::default(),
    };
    let strategy = scan::Strategy::from(strategy);
    let files = manifest.resolved(root, strategy);
    scan::scan_files(strategy, &files)
}
