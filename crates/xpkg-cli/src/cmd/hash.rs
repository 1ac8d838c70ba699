//! Hash command

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use xpkg_core::hash_file;
use xpkg_schema::FileDigest;

#[derive(Debug, Serialize)]
struct HashLine<'a> {
    file: &'a Path,
    sha256: FileDigest,
}

/// Compute SHA256 hash of files
pub fn hash(files: &[PathBuf], json: bool) -> Result<()> {
    for file in files {
        let digest =
            hash_file(file).with_context(|| format!("Failed to hash {}", file.display()))?;
        if json {
            let line = HashLine {
                file,
                sha256: digest,
            };
            println!("{}", serde_json::to_string(&line)?);
        } else {
            println!("{} {}", digest, file.display());
        }
    }
    Ok(())
}
