//! Loading the policy knowledge corpus from disk.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::warn;

use crate::error::{EngineError, EngineResult};
use crate::models::DocumentSection;

/// Loads policy document sections from a JSON corpus file.
///
/// The file holds an array of sections, each with a heading, body text
/// and (optionally) a precomputed embedding vector. A missing file is
/// not an error: the fallback search simply has nothing to match, so
/// this logs a warning and returns an empty corpus.
pub fn load_corpus<P: AsRef<Path>>(path: P) -> EngineResult<Vec<DocumentSection>> {
    let path = path.as_ref();

    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(error) if error.kind() == ErrorKind::NotFound => {
            warn!(path = %path.display(), "Knowledge corpus not found, policy search disabled");
            return Ok(Vec::new());
        }
        Err(_) => {
            return Err(EngineError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }
    };

    serde_json::from_str(&raw).map_err(|error| EngineError::ConfigParse {
        path: path.display().to_string(),
        message: error.to_string(),
    })
}
