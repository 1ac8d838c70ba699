//! Verify command

use anyhow::{Context, Result};
use std::path::Path;
use xpkg_core::config::FLAG_FORCE;
use xpkg_core::{Config, Verification, prompt, verify_file};
use xpkg_schema::Sha256Hash;

/// Check `file` against `expected`.
///
/// Returns `Ok(true)` on a match and `Ok(false)` on a mismatch, so the caller
/// can pick a distinct exit code. Errors mean the file could not be hashed.
pub fn verify(config: &Config, file: &Path, expected: &Sha256Hash, delete: bool) -> Result<bool> {
    let outcome = verify_file(file, expected.as_str())
        .with_context(|| format!("Failed to verify {}", file.display()))?;

    match outcome {
        Verification::Match => {
            println!("{}: OK", file.display());
            Ok(true)
        }
        Verification::Mismatch { expected, actual } => {
            eprintln!("{}: SHA256 mismatch", file.display());
            eprintln!("  expected {expected}");
            eprintln!("  actual   {actual}");
            if delete {
                remove_corrupt(config, file)?;
            }
            Ok(false)
        }
    }
}

fn remove_corrupt(config: &Config, file: &Path) -> Result<()> {
    let question = format!("Remove {}?", file.display());
    if config.has_flag(FLAG_FORCE) || prompt::confirm(&question, false)? {
        std::fs::remove_file(file)
            .with_context(|| format!("Failed to remove {}", file.display()))?;
        tracing::info!(file = %file.display(), "removed file with bad digest");
    }
    Ok(())
}
