//! Paths command

use anyhow::Result;
use serde::Serialize;
use std::path::PathBuf;
use xpkg_core::config::FLAG_VERBOSE;
use xpkg_core::Config;
use xpkg_core::paths as repo_paths;

#[derive(Debug, Serialize)]
struct Resolved {
    rootdir: PathBuf,
    cachedir: PathBuf,
    metadir: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    remote: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    index: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    binpkg: Option<PathBuf>,
}

/// Print the directories and, if a repository is given, its file locations.
pub fn paths(config: &Config, repo: Option<&str>, binpkg: Option<&str>, json: bool) -> Result<()> {
    let resolved = Resolved {
        rootdir: config.rootdir().to_path_buf(),
        cachedir: config.cachedir().to_path_buf(),
        metadir: config.metadir(),
        remote: repo.map(repo_paths::is_remote_repo),
        index: repo.map(|uri| repo_paths::pkg_index_plist(config, uri)),
        binpkg: repo.zip(binpkg).map(|(uri, file)| {
            repo_paths::binpkg_local_path(config, uri, repo_paths::machine_arch(), file)
        }),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&resolved)?);
        return Ok(());
    }

    println!("rootdir  {}", resolved.rootdir.display());
    println!("cachedir {}", resolved.cachedir.display());
    if config.has_flag(FLAG_VERBOSE) {
        println!("metadir  {}", resolved.metadir.display());
    }
    if let Some(index) = &resolved.index {
        println!("index    {}", index.display());
    }
    if let Some(binpkg) = &resolved.binpkg {
        println!("binpkg   {}", binpkg.display());
    }
    Ok(())
}
