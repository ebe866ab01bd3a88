use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use freq_logging::freq_debug;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{path:?} is not valid UTF-8 (first invalid byte at offset {valid_up_to})")]
    Decode { path: PathBuf, valid_up_to: usize },
}

impl LoadError {
    pub fn path(&self) -> &Path {
        match self {
            LoadError::Read { path, .. } | LoadError::Decode { path, .. } => path,
        }
    }
}

/// Read the whole file at `path` as UTF-8 text.
///
/// The file handle is released before this returns, on success and failure.
/// A leading byte order mark is kept as part of the text.
pub fn load(path: &Path) -> Result<String, LoadError> {
    let bytes = fs::read(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    freq_debug!("Read {} bytes from {:?}", bytes.len(), path);

    String::from_utf8(bytes).map_err(|err| LoadError::Decode {
        path: path.to_path_buf(),
        valid_up_to: err.utf8_error().valid_up_to(),
    })
}
