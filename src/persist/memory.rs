//! In-memory implementation of the persistence gateway, for tests and
//! ephemeral sessions.

use std::sync::{Arc, Mutex};

use crate::Error;

use super::{PersistedState, PersistenceGateway};

/// Keeps the saved state in memory.
///
/// Clones share the same backing cell, so a test can hold one clone, hand
/// the other to the state container, and inspect what was saved.
#[derive(Debug, Clone, Default)]
pub struct MemoryGateway {
    state: Arc<Mutex<Option<PersistedState>>>,
}

impl MemoryGateway {
    /// Create a gateway with nothing saved, as on a first run.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a gateway preloaded with `state`.
    pub fn with_state(state: PersistedState) -> Self {
        Self {
            state: Arc::new(Mutex::new(Some(state))),
        }
    }

    /// A copy of the currently saved state, if any.
    pub fn saved(&self) -> Option<PersistedState> {
        self.state.lock().expect("gateway lock poisoned").clone()
    }
}

impl PersistenceGateway for MemoryGateway {
    fn load(&self) -> Result<Option<PersistedState>, Error> {
        Ok(self.saved())
    }

    fn save(&mut self, state: &PersistedState) -> Result<(), Error> {
        *self.state.lock().expect("gateway lock poisoned") = Some(state.clone());

        Ok(())
    }
}
