//! Finance Flow is the domain core of a personal finance tracker.
//!
//! This library holds the state a finance view renders: income and expense
//! transactions with typed categories, an ordered in-memory ledger, derived
//! chart metrics (per-category totals, a per-day income/expense series, and
//! savings-goal progress), a form controller for validating user input, and
//! a swappable persistence gateway that stands in for browser-local
//! storage. Rendering and event wiring are the caller's job.

#![warn(missing_docs)]

mod category;
mod display;
mod error;
mod form;
mod ledger;
mod metrics;
mod notification;
mod persist;
mod state;
mod transaction;

pub use category::{
    Category, CategoryName, OTHER_CATEGORY, TransactionCategory, TransactionType, categories_for,
    default_categories,
};
pub use display::{currency, signed_amount};
pub use error::Error;
pub use form::{FormPhase, TransactionForm};
pub use ledger::{TransactionFilter, TransactionLedger};
pub use metrics::{
    DailySeries, daily_series, expense_totals_by_category, goal_progress, total_income,
};
pub use notification::{DISMISS_AFTER, Notification, NotificationKind};
pub use persist::{JsonFileGateway, MemoryGateway, PersistedState, PersistenceGateway};
pub use state::{AppState, Theme};
pub use transaction::{Transaction, TransactionBuilder, TransactionId};
