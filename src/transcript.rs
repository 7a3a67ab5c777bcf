use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TranscriptError {
    #[error("failed to read chat file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("chat file {path} is not valid JSON")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Reads the saved conversation as UTF-8 JSON. The transcript is opaque to
/// this program; it is forwarded to the endpoint unmodified.
pub fn load_chat_data(path: &Path) -> Result<Value, TranscriptError> {
    let content = fs::read_to_string(path).map_err(|source| TranscriptError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| TranscriptError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
