//! JSON file implementation of the persistence gateway.
//!
//! The whole application state is kept as a single JSON document, the
//! file-system analog of the browser's local key-value storage.

use std::{fs, io::ErrorKind, path::PathBuf};

use crate::Error;

use super::{PersistedState, PersistenceGateway};

/// Stores the application state as one JSON document on disk.
#[derive(Debug, Clone)]
pub struct JsonFileGateway {
    path: PathBuf,
}

impl JsonFileGateway {
    /// Create a gateway that reads and writes `path`.
    ///
    /// The file is not touched until the first load or save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PersistenceGateway for JsonFileGateway {
    fn load(&self) -> Result<Option<PersistedState>, Error> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            // A missing file is a first run, not a failure.
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(None),
            Err(error) => {
                return Err(Error::StateLoadError(format!(
                    "could not read {}: {}",
                    self.path.display(),
                    error
                )));
            }
        };

        let state = serde_json::from_str(&text).map_err(|error| {
            Error::StateLoadError(format!(
                "{} is not a valid state document: {}",
                self.path.display(),
                error
            ))
        })?;

        Ok(Some(state))
    }

    fn save(&mut self, state: &PersistedState) -> Result<(), Error> {
        let text = serde_json::to_string_pretty(state)?;

        fs::write(&self.path, text).map_err(|error| {
            Error::StateSaveError(format!(
                "could not write {}: {}",
                self.path.display(),
                error
            ))
        })
    }
}
