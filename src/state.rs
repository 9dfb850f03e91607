//! The application state container: the ledger, user preferences, and the
//! persistence wiring behind every mutation.

use serde::{Deserialize, Serialize};
use time::macros::date;

use crate::{
    Error,
    category::TransactionType,
    ledger::TransactionLedger,
    metrics,
    persist::{PersistedState, PersistenceGateway},
    transaction::{Transaction, TransactionBuilder, TransactionId},
};

/// The color theme selected by the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// The default light theme.
    #[default]
    Light,
    /// The dark theme.
    Dark,
}

impl Theme {
    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Holds everything the view layer reads: the transaction ledger, the
/// savings goal, and the user's preferences.
///
/// All mutations are synchronous and write the new state back through the
/// injected [PersistenceGateway]. Persistence failures are logged and
/// absorbed; the in-memory state is always authoritative and storage
/// trouble never crashes the application.
pub struct AppState {
    ledger: TransactionLedger,
    goal: Option<f64>,
    theme: Theme,
    onboarded: bool,
    gateway: Box<dyn PersistenceGateway>,
}

impl AppState {
    /// Restore the application state from `gateway`, seeding demo
    /// transactions when nothing has been saved yet.
    ///
    /// A load failure (unreadable or corrupt storage) falls back to the
    /// same first-run defaults with a warning; nothing is written until the
    /// first mutation.
    pub fn new(gateway: Box<dyn PersistenceGateway>) -> Self {
        let saved = match gateway.load() {
            Ok(saved) => saved,
            Err(error) => {
                tracing::warn!("falling back to default state: {error}");
                None
            }
        };

        match saved {
            Some(saved) => Self {
                ledger: TransactionLedger::from_transactions(saved.transactions),
                goal: saved.goal,
                theme: saved.theme,
                onboarded: saved.onboarded,
                gateway,
            },
            None => Self {
                ledger: demo_ledger(),
                goal: None,
                theme: Theme::default(),
                onboarded: false,
                gateway,
            },
        }
    }

    /// The transaction ledger.
    pub fn ledger(&self) -> &TransactionLedger {
        &self.ledger
    }

    /// The savings goal amount, if one has been configured.
    pub fn goal(&self) -> Option<f64> {
        self.goal
    }

    /// The selected color theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Whether the user has dismissed the onboarding banner.
    pub fn onboarded(&self) -> bool {
        self.onboarded
    }

    /// Add a transaction to the ledger and persist the new state.
    ///
    /// # Errors
    /// This function will return any validation error from the builder; the
    /// ledger is unchanged in that case.
    pub fn add_transaction(&mut self, builder: TransactionBuilder) -> Result<Transaction, Error> {
        let transaction = self.ledger.add(builder)?;
        self.persist();

        Ok(transaction)
    }

    /// Replace the fields of an existing transaction and persist the new
    /// state.
    ///
    /// # Errors
    /// This function will return an [Error::UpdateMissingTransaction] if
    /// `id` is not in the ledger, or any validation error from the builder.
    pub fn update_transaction(
        &mut self,
        id: TransactionId,
        builder: TransactionBuilder,
    ) -> Result<Transaction, Error> {
        let transaction = self.ledger.update(id, builder)?;
        self.persist();

        Ok(transaction)
    }

    /// Delete a transaction and persist the new state.
    ///
    /// # Errors
    /// This function will return an [Error::DeleteMissingTransaction] if
    /// `id` is not in the ledger.
    pub fn remove_transaction(&mut self, id: TransactionId) -> Result<Transaction, Error> {
        let transaction = self.ledger.remove(id)?;
        self.persist();

        Ok(transaction)
    }

    /// Set the savings goal and persist the new state.
    pub fn set_goal(&mut self, goal: f64) {
        self.goal = Some(goal);
        self.persist();
    }

    /// Switch between the light and dark themes and persist the choice.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.persist();

        self.theme
    }

    /// Record that the user has seen the onboarding banner.
    pub fn dismiss_onboarding(&mut self) {
        self.onboarded = true;
        self.persist();
    }

    /// Progress towards the savings goal over all recorded income, clamped
    /// to `[0, 100]`; `None` until a goal is configured.
    pub fn goal_progress(&self) -> Option<f64> {
        metrics::goal_progress(self.goal, metrics::total_income(self.ledger.iter()))
    }

    fn persist(&mut self) {
        let snapshot = PersistedState {
            onboarded: self.onboarded,
            theme: self.theme,
            goal: self.goal,
            transactions: self.ledger.transactions().to_vec(),
        };

        if let Err(error) = self.gateway.save(&snapshot) {
            tracing::warn!("keeping unsaved state in memory: {error}");
        }
    }
}

/// Starter transactions shown on a first run so the charts and list are not
/// empty.
fn demo_ledger() -> TransactionLedger {
    let mut ledger = TransactionLedger::new();

    let demo_transactions = [
        Transaction::build(2600.0, date!(2024 - 06 - 01))
            .transaction_type(TransactionType::Income)
            .category("Salary")
            .description("Monthly salary"),
        Transaction::build(54.3, date!(2024 - 06 - 03))
            .category("Groceries")
            .description("Supermarket run"),
        Transaction::build(18.75, date!(2024 - 06 - 05))
            .category("Transport")
            .description("Bus pass top-up"),
        Transaction::build(32.0, date!(2024 - 06 - 08))
            .category("Entertainment")
            .description("Cinema tickets"),
    ];

    for builder in demo_transactions {
        ledger
            .add(builder)
            .expect("demo transactions are valid by construction");
    }

    tracing::debug!("seeded {} demo transactions", ledger.len());

    ledger
}
