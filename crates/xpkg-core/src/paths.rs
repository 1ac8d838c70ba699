//! Repository and binary package locations.

use crate::config::Config;
use std::path::PathBuf;

/// File name of a repository's package index.
pub const PKG_INDEX: &str = "pkg-index.plist";

/// URL schemes that mark a repository as remote.
const REMOTE_SCHEMES: [&str; 3] = ["https://", "http://", "ftp://"];

/// Whether `uri` points at a network repository rather than a local directory.
pub fn is_remote_repo(uri: &str) -> bool {
    REMOTE_SCHEMES.iter().any(|scheme| uri.starts_with(scheme))
}

/// Directory name under the metadata dir used for a remote repository.
///
/// The scheme is dropped and `.`, `/` and `:` become `_`, so
/// `http://repo.example.org/pub` maps to `repo_example_org_pub`.
/// Returns `None` for local repositories.
pub fn remote_repo_dir(uri: &str) -> Option<String> {
    let rest = REMOTE_SCHEMES
        .iter()
        .find_map(|scheme| uri.strip_prefix(scheme))?;
    let rest = rest.trim_end_matches('/');
    Some(
        rest.chars()
            .map(|c| if matches!(c, '.' | '/' | ':') { '_' } else { c })
            .collect(),
    )
}

/// Location of the package index for a repository.
///
/// Remote repositories are mirrored under `<root>/var/db/xbps/<repo_dir>/`;
/// local ones keep their index at `<uri>/<arch>/`.
pub fn pkg_index_plist(config: &Config, uri: &str) -> PathBuf {
    match remote_repo_dir(uri) {
        Some(dir) => config.metadir().join(dir).join(PKG_INDEX),
        None => PathBuf::from(uri).join(machine_arch()).join(PKG_INDEX),
    }
}

/// Where a binary package file lives on disk.
///
/// Local repositories are read in place at `<repo>/<arch>/<filename>`; packages
/// from remote repositories are downloaded into the cache directory.
pub fn binpkg_local_path(config: &Config, repo: &str, arch: &str, filename: &str) -> PathBuf {
    if is_remote_repo(repo) {
        config.cachedir().join(filename)
    } else {
        PathBuf::from(repo).join(arch).join(filename)
    }
}

/// Architecture of the running machine, as used in repository layouts.
pub fn machine_arch() -> &'static str {
    std::env::consts::ARCH
}
