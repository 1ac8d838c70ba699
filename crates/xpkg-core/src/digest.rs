//! SHA-256 digests of package artifacts.
//!
//! Files are memory-mapped read-only and hashed in one pass. The mapping is
//! owned by a local [`memmap2::Mmap`] and is unmapped on every return path.

use memmap2::MmapOptions;
use std::fs::File;
use std::path::{Path, PathBuf};
use xpkg_schema::FileDigest;

/// Largest file size accepted for mapping.
pub const MAX_FILE_SIZE: u64 = isize::MAX as u64 - 1;

/// Errors from computing a file digest.
#[derive(thiserror::Error, Debug)]
pub enum DigestError {
    /// The file could not be opened, stat-ed or mapped.
    #[error("Cannot read {}: {source}", path.display())]
    Io {
        /// File being hashed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is too large to map safely.
    #[error("{} is too large to hash ({size} bytes)", path.display())]
    SizeTooLarge {
        /// File being hashed.
        path: PathBuf,
        /// Size reported by `stat`.
        size: u64,
    },

    /// The mapped bytes could not be fed to the hash function.
    #[error("Failed to hash {}: {reason}", path.display())]
    Hash {
        /// File being hashed.
        path: PathBuf,
        /// What went wrong.
        reason: String,
    },
}

impl DigestError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Whether the file simply does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

/// Outcome of comparing a file against an expected digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verification {
    /// The file hashes to the expected value.
    Match,
    /// The file was hashed, but to something else.
    Mismatch {
        /// Value the caller asked for.
        expected: String,
        /// Value actually computed.
        actual: String,
    },
}

impl Verification {
    /// Whether the digest matched.
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Match)
    }
}

/// Mapping geometry for a file of a given size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapPlan {
    /// Number of bytes fed to the hash function.
    pub size: usize,
    /// Length of the read-only mapping, guard page included.
    pub map_len: usize,
    /// Whether a trailing guard page was reserved.
    pub guard: bool,
}

impl MapPlan {
    /// Compute the mapping for `size` bytes with the given page size.
    ///
    /// The file length is rounded up to whole pages. When it already is a
    /// whole number of pages (including zero) one extra page is reserved past
    /// the end, so the byte after the data is always mapped. That page is
    /// never read.
    ///
    /// Returns `None` if `page_size` is not a power of two, if `size` exceeds
    /// [`MAX_FILE_SIZE`], or if the rounding overflows.
    pub fn new(size: u64, page_size: usize) -> Option<Self> {
        if !page_size.is_power_of_two() || size > MAX_FILE_SIZE {
            return None;
        }
        let size = usize::try_from(size).ok()?;
        let mask = page_size - 1;
        let rounded = size.checked_add(mask)? & !mask;
        let guard = size & mask == 0;
        let map_len = if guard {
            rounded.checked_add(page_size)?
        } else {
            rounded
        };
        Some(Self {
            size,
            map_len,
            guard,
        })
    }
}

/// System page size.
#[cfg(unix)]
#[allow(unsafe_code)]
pub fn page_size() -> usize {
    // SAFETY: sysconf has no preconditions and only reads system configuration.
    let size = unsafe { libc::sysconf(libc::_SC_PAGESIZE) };
    usize::try_from(size)
        .ok()
        .filter(|s| s.is_power_of_two())
        .unwrap_or(4096)
}

/// System page size.
#[cfg(not(unix))]
pub fn page_size() -> usize {
    4096
}

/// Compute the SHA-256 digest of an in-memory buffer.
pub fn hash_bytes(data: &[u8]) -> FileDigest {
    FileDigest::compute(data)
}

/// Compute the SHA-256 digest of the file at `path`.
///
/// Exactly the file's length is hashed; an empty file yields the digest of
/// empty input.
///
/// # Errors
///
/// Returns [`DigestError::Io`] if the file cannot be opened, stat-ed or
/// mapped, [`DigestError::SizeTooLarge`] if it exceeds [`MAX_FILE_SIZE`], and
/// [`DigestError::Hash`] if the mapping does not cover the file's length.
#[allow(unsafe_code)]
pub fn hash_file(path: &Path) -> Result<FileDigest, DigestError> {
    let file = File::open(path).map_err(|e| DigestError::io(path, e))?;
    let size = file.metadata().map_err(|e| DigestError::io(path, e))?.len();

    let plan = MapPlan::new(size, page_size()).ok_or_else(|| DigestError::SizeTooLarge {
        path: path.to_path_buf(),
        size,
    })?;
    tracing::debug!(
        path = %path.display(),
        size,
        map_len = plan.map_len,
        guard = plan.guard,
        "hashing file"
    );

    // SAFETY: the mapping is private and read-only, and only the first
    // `plan.size` bytes (backed by the file) are ever read from it.
    let mmap = unsafe { MmapOptions::new().len(plan.map_len).map(&file) }
        .map_err(|e| DigestError::io(path, e))?;
    drop(file);

    let Some(data) = mmap.get(..plan.size) else {
        return Err(DigestError::Hash {
            path: path.to_path_buf(),
            reason: format!("mapped {} bytes, expected {}", mmap.len(), plan.size),
        });
    };
    let digest = hash_bytes(data);
    drop(mmap);

    Ok(digest)
}

/// Hash `path` and compare it to `expected`, a lowercase hex string.
///
/// The comparison is exact and case-sensitive. A mismatch is reported as
/// [`Verification::Mismatch`], not as an error, so callers can tell a bad
/// download apart from a file that could not be read.
///
/// # Errors
///
/// Propagates any [`DigestError`] from [`hash_file`].
pub fn verify_file(path: &Path, expected: &str) -> Result<Verification, DigestError> {
    let actual = hash_file(path)?.to_hex();
    if actual == expected {
        return Ok(Verification::Match);
    }

    tracing::warn!(
        path = %path.display(),
        expected,
        actual = %actual,
        "digest mismatch"
    );
    Ok(Verification::Mismatch {
        expected: expected.to_string(),
        actual,
    })
}
