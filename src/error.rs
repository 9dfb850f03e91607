//! Defines the crate level error type shared across the domain modules.

use crate::category::TransactionType;

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// No amount was entered in the transaction form.
    #[error("an amount is required")]
    MissingAmount,

    /// A transaction amount was not a positive, finite number.
    ///
    /// Callers should pass in the raw input so it can be echoed back to the
    /// user next to the field that rejected it.
    #[error("\"{0}\" is not a positive amount")]
    InvalidAmount(String),

    /// A string other than "income" or "expense" was used as a transaction
    /// type.
    #[error("\"{0}\" is not a valid transaction type")]
    InvalidTransactionType(String),

    /// An empty string was used to create a category name.
    #[error("an empty string is not a valid category name")]
    EmptyCategoryName,

    /// A transaction was given a category that does not apply to its type,
    /// e.g. an income transaction categorised as "Groceries".
    ///
    /// Only fully defined categories carry an applicability; bare category
    /// names are accepted for either type.
    #[error("the category \"{0}\" does not apply to {1} transactions")]
    CategoryMismatch(String, TransactionType),

    /// The requested transaction could not be found.
    #[error("a transaction with the given ID could not be found")]
    NotFound,

    /// Tried to update a transaction that does not exist
    #[error("tried to update a transaction that is not in the ledger")]
    UpdateMissingTransaction,

    /// Tried to delete a transaction that does not exist
    #[error("tried to delete a transaction that is not in the ledger")]
    DeleteMissingTransaction,

    /// The saved application state could not be read.
    ///
    /// The state container treats this as recoverable and falls back to
    /// in-memory defaults rather than refusing to start.
    #[error("could not load the saved state: {0}")]
    StateLoadError(String),

    /// The application state could not be written back to storage.
    ///
    /// The in-memory state remains valid; only durability is lost.
    #[error("could not save the state: {0}")]
    StateSaveError(String),

    /// An error occurred while serializing a struct as JSON
    #[error("could not serialize as JSON: {0}")]
    JSONSerializationError(String),
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Error::JSONSerializationError(value.to_string())
    }
}
