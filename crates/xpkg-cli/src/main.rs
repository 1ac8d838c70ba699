//! xpkg - package digests and identifiers CLI

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use xpkg_cli::cmd;
use xpkg_cli::{Cli, Commands};

/// Exit code for a file that was hashed but did not match. clap already
/// uses 2 for usage errors.
const EXIT_MISMATCH: u8 = 3;

fn main() -> Result<ExitCode> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config()?;
    tracing::debug!(?config, "resolved configuration");

    match cli.command {
        Commands::Hash { files } => cmd::hash::hash(&files, cli.json)?,
        Commands::Verify {
            file,
            sha256,
            delete,
        } => {
            if !cmd::verify::verify(&config, &file, &sha256, delete)? {
                return Ok(ExitCode::from(EXIT_MISMATCH));
            }
        }
        Commands::Pkgver { pkgvers } => cmd::pkgver::pkgver(&pkgvers, cli.json)?,
        Commands::Pattern { patterns } => cmd::pattern::pattern(&patterns, cli.json)?,
        Commands::Paths { repo, binpkg } => {
            cmd::paths::paths(&config, repo.as_deref(), binpkg.as_deref(), cli.json)?;
        }
    }
    Ok(ExitCode::SUCCESS)
}
