use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

const MARKER_EXTENSION: &str = "hash";

/// Whether content was already fetched, with its SHA-256 hex digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Seen {
    New(String),
    Duplicate(String),
}

impl Seen {
    pub fn digest(&self) -> &str {
        match self {
            Seen::New(digest) | Seen::Duplicate(digest) => digest,
        }
    }
}

/// Zero-byte `<digest>.hash` files recording every payload seen so far.
///
/// Markers are only ever created, so the set persists across runs.
#[derive(Debug, Clone)]
pub struct HashMarkers {
    dir: PathBuf,
}

impl HashMarkers {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn marker_path(&self, digest: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", digest, MARKER_EXTENSION))
    }

    /// Records `content` as seen, reporting whether it had been seen before.
    ///
    /// Check and mark are one `create_new` call, so two callers can never both get `New`.
    pub fn check_and_mark(&self, content: &[u8]) -> io::Result<Seen> {
        let digest = digest_hex(content);
        let marker = self.marker_path(&digest);

        match OpenOptions::new().write(true).create_new(true).open(&marker) {
            Ok(_) => {
                tracing::debug!(marker = %marker.display(), "recorded new content hash");
                Ok(Seen::New(digest))
            }
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => Ok(Seen::Duplicate(digest)),
            Err(err) => Err(err),
        }
    }
}

/// SHA-256 of `content` as lowercase hex.
pub fn digest_hex(content: &[u8]) -> String {
    hex::encode(Sha256::digest(content))
}
