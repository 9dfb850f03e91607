//! Persistence gateway trait and the saved application state document.
//!
//! The gateway is injected into the state container so that storage
//! failures are testable and the backing store is swappable.

mod json_file;
mod memory;

pub use json_file::JsonFileGateway;
pub use memory::MemoryGateway;

use serde::{Deserialize, Serialize};

use crate::{Error, state::Theme, transaction::Transaction};

/// The application state as written to storage.
///
/// This is the structured, versionless document of the original saved
/// state: older documents may omit the preference fields, which then fall
/// back to their defaults on load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    /// Whether the user has dismissed the onboarding banner.
    #[serde(default)]
    pub onboarded: bool,
    /// The selected color theme.
    #[serde(default)]
    pub theme: Theme,
    /// The savings goal amount, if one has been configured.
    #[serde(default)]
    pub goal: Option<f64>,
    /// All recorded transactions, most recent first.
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

/// Loads and saves the application state.
///
/// Implementations decide where the state lives; the state container only
/// sees this interface.
pub trait PersistenceGateway {
    /// Read the saved state.
    ///
    /// Returns `Ok(None)` when nothing has been saved yet (a first run),
    /// which is distinct from a load failure.
    ///
    /// # Errors
    /// This function will return an [Error::StateLoadError] if saved state
    /// exists but cannot be read or parsed.
    fn load(&self) -> Result<Option<PersistedState>, Error>;

    /// Write the state, replacing whatever was saved before.
    ///
    /// # Errors
    /// This function will return an [Error::StateSaveError] or
    /// [Error::JSONSerializationError] if the state cannot be written.
    fn save(&mut self, state: &PersistedState) -> Result<(), Error>;
}
