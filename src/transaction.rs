//! Defines the core transaction type and its builder.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    Error,
    category::{TransactionCategory, TransactionType, categories_for},
};

/// Identifier for a transaction in the ledger.
pub type TransactionId = i64;

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// To create a new `Transaction`, use [Transaction::build] and hand the
/// builder to the ledger, which assigns the ID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// The amount of money spent or earned in this transaction.
    ///
    /// Always positive; the direction is carried by `transaction_type`.
    pub amount: f64,
    /// Whether the transaction records income or an expense.
    pub transaction_type: TransactionType,
    /// The category the transaction belongs to.
    pub category: TransactionCategory,
    /// When the transaction happened.
    pub date: Date,
    /// A text description of what the transaction was for.
    #[serde(default)]
    pub description: String,
    /// A reference to an uploaded receipt image, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt: Option<String>,
}

impl Transaction {
    /// Create a new transaction.
    ///
    /// Shortcut for [TransactionBuilder] for discoverability. The builder
    /// defaults to an expense with no category; the ledger validates and
    /// finalises it.
    pub fn build(amount: f64, date: Date) -> TransactionBuilder {
        TransactionBuilder {
            amount,
            date,
            transaction_type: TransactionType::Expense,
            category: None,
            description: String::new(),
            receipt: None,
        }
    }
}

/// A builder for creating [Transaction] instances.
///
/// The ledger finalises the builder when the transaction is added or an
/// existing transaction is updated, at which point the amount and the
/// category/type pairing are validated.
#[derive(Debug, PartialEq, Clone)]
pub struct TransactionBuilder {
    /// The monetary amount of the transaction. Must be positive and finite.
    pub amount: f64,
    /// The date when the transaction occurred.
    pub date: Date,
    /// Whether the transaction records income or an expense.
    pub transaction_type: TransactionType,
    /// The category of the transaction.
    ///
    /// When unset, the first selectable category for the transaction type
    /// is used.
    pub category: Option<TransactionCategory>,
    /// A human-readable description of the transaction.
    pub description: String,
    /// A reference to an uploaded receipt image, if any.
    pub receipt: Option<String>,
}

impl TransactionBuilder {
    /// Set the transaction type.
    pub fn transaction_type(mut self, transaction_type: TransactionType) -> Self {
        self.transaction_type = transaction_type;
        self
    }

    /// Set the category for the transaction.
    pub fn category(mut self, category: impl Into<TransactionCategory>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the description for the transaction.
    pub fn description(mut self, description: &str) -> Self {
        self.description = description.to_owned();
        self
    }

    /// Set the receipt reference for the transaction.
    pub fn receipt(mut self, receipt: Option<String>) -> Self {
        self.receipt = receipt;
        self
    }

    /// Validate the builder and produce the transaction with the given `id`.
    ///
    /// An unset category defaults to the first selectable category for the
    /// transaction type.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::InvalidAmount] if the amount is not a positive, finite
    ///   number,
    /// - or [Error::CategoryMismatch] if a fully defined category does not
    ///   apply to the transaction type.
    pub(crate) fn finalise(self, id: TransactionId) -> Result<Transaction, Error> {
        if !(self.amount.is_finite() && self.amount > 0.0) {
            return Err(Error::InvalidAmount(self.amount.to_string()));
        }

        let category = match self.category {
            Some(category) => {
                if !category.applies_to(self.transaction_type) {
                    return Err(Error::CategoryMismatch(
                        category.name().to_owned(),
                        self.transaction_type,
                    ));
                }

                category
            }
            None => TransactionCategory::from(categories_for(self.transaction_type)[0]),
        };

        Ok(Transaction {
            id,
            amount: self.amount,
            transaction_type: self.transaction_type,
            category,
            date: self.date,
            description: self.description,
            receipt: self.receipt,
        })
    }
}

#[cfg(test)]
mod transaction_tests {
    use time::macros::date;

    use crate::{
        Error,
        category::{Category, CategoryName, TransactionCategory, TransactionType},
    };

    use super::Transaction;

    #[test]
    fn finalise_succeeds_with_full_details() {
        let transaction = Transaction::build(51.77, date!(2024 - 06 - 16))
            .category("Groceries")
            .description("Supermarket run")
            .finalise(1)
            .unwrap();

        assert_eq!(transaction.id, 1);
        assert_eq!(transaction.amount, 51.77);
        assert_eq!(transaction.transaction_type, TransactionType::Expense);
        assert_eq!(transaction.category.name(), "Groceries");
        assert_eq!(transaction.date, date!(2024 - 06 - 16));
        assert_eq!(transaction.description, "Supermarket run");
    }

    #[test]
    fn finalise_fails_on_zero_amount() {
        let result = Transaction::build(0.0, date!(2024 - 06 - 16)).finalise(1);

        assert_eq!(result, Err(Error::InvalidAmount("0".to_string())));
    }

    #[test]
    fn finalise_fails_on_negative_amount() {
        let result = Transaction::build(-12.5, date!(2024 - 06 - 16)).finalise(1);

        assert_eq!(result, Err(Error::InvalidAmount("-12.5".to_string())));
    }

    #[test]
    fn finalise_fails_on_non_finite_amount() {
        let result = Transaction::build(f64::NAN, date!(2024 - 06 - 16)).finalise(1);

        assert!(matches!(result, Err(Error::InvalidAmount(_))));
    }

    #[test]
    fn finalise_defaults_category_to_first_for_type() {
        let income = Transaction::build(500.0, date!(2024 - 06 - 18))
            .transaction_type(TransactionType::Income)
            .finalise(1)
            .unwrap();

        assert_eq!(income.category.name(), "Salary");

        let expense = Transaction::build(12.0, date!(2024 - 06 - 18))
            .finalise(2)
            .unwrap();

        assert_eq!(expense.category.name(), "Groceries");
    }

    #[test]
    fn finalise_fails_on_category_type_mismatch() {
        let salary = Category {
            id: "salary".to_string(),
            name: CategoryName::new_unchecked("Salary"),
            icon: "💰".to_string(),
            color: "#6C3EFF".to_string(),
            transaction_type: TransactionType::Income,
            is_custom: false,
        };

        let result = Transaction::build(9.99, date!(2024 - 06 - 16))
            .category(salary)
            .finalise(1);

        assert_eq!(
            result,
            Err(Error::CategoryMismatch(
                "Salary".to_string(),
                TransactionType::Expense
            ))
        );
    }

    #[test]
    fn finalise_accepts_bare_names_for_either_type() {
        let result = Transaction::build(9.99, date!(2024 - 06 - 16))
            .transaction_type(TransactionType::Income)
            .category("MyCustomCat")
            .finalise(1);

        assert!(result.is_ok());
        assert_eq!(
            result.unwrap().category,
            TransactionCategory::from("MyCustomCat")
        );
    }
}
