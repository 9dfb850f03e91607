//! The in-memory transaction ledger: an ordered, newest-first collection
//! with filtered views.

use std::ops::RangeInclusive;

use time::Date;

use crate::{
    Error,
    category::TransactionType,
    transaction::{Transaction, TransactionBuilder, TransactionId},
};

/// Handles the creation, retrieval, and removal of transactions.
///
/// Transactions are kept in insertion order with the most recent first, and
/// that order is stable: adding a transaction never moves the existing ones.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionLedger {
    transactions: Vec<Transaction>,
    next_id: TransactionId,
}

impl Default for TransactionLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
            next_id: 1,
        }
    }

    /// Restore a ledger from previously saved transactions.
    ///
    /// The transactions are kept in the order given; ID assignment continues
    /// after the largest saved ID.
    pub fn from_transactions(transactions: Vec<Transaction>) -> Self {
        let next_id = transactions
            .iter()
            .map(|transaction| transaction.id)
            .max()
            .unwrap_or(0)
            + 1;

        Self {
            transactions,
            next_id,
        }
    }

    /// Create a new transaction in the ledger.
    ///
    /// The transaction is assigned the next unique ID and inserted at the
    /// head of the ledger, so it appears first when iterating.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::InvalidAmount] if the amount is not a positive, finite
    ///   number,
    /// - or [Error::CategoryMismatch] if the category does not apply to the
    ///   transaction type.
    pub fn add(&mut self, builder: TransactionBuilder) -> Result<Transaction, Error> {
        let transaction = builder.finalise(self.next_id)?;
        self.next_id += 1;

        tracing::debug!(
            "adding {} transaction #{} for {}",
            transaction.transaction_type,
            transaction.id,
            transaction.amount
        );

        self.transactions.insert(0, transaction.clone());

        Ok(transaction)
    }

    /// Retrieve a transaction by its `id`.
    ///
    /// # Errors
    /// This function will return an [Error::NotFound] if `id` does not refer
    /// to a transaction in the ledger.
    pub fn get(&self, id: TransactionId) -> Result<&Transaction, Error> {
        self.transactions
            .iter()
            .find(|transaction| transaction.id == id)
            .ok_or(Error::NotFound)
    }

    /// Replace the fields of the transaction with `id`, keeping its ID and
    /// its position in the ledger.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::UpdateMissingTransaction] if `id` does not refer to a
    ///   transaction in the ledger,
    /// - or any validation error from the builder.
    pub fn update(
        &mut self,
        id: TransactionId,
        builder: TransactionBuilder,
    ) -> Result<Transaction, Error> {
        let position = self
            .transactions
            .iter()
            .position(|transaction| transaction.id == id)
            .ok_or(Error::UpdateMissingTransaction)?;

        let transaction = builder.finalise(id)?;
        self.transactions[position] = transaction.clone();

        Ok(transaction)
    }

    /// Delete the transaction with `id` and return it.
    ///
    /// # Errors
    /// This function will return an [Error::DeleteMissingTransaction] if
    /// `id` does not refer to a transaction in the ledger.
    pub fn remove(&mut self, id: TransactionId) -> Result<Transaction, Error> {
        let position = self
            .transactions
            .iter()
            .position(|transaction| transaction.id == id)
            .ok_or(Error::DeleteMissingTransaction)?;

        Ok(self.transactions.remove(position))
    }

    /// Iterate over all transactions, most recent first.
    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.transactions.iter()
    }

    /// A lazy view of the transactions matching `filter`, in ledger order.
    ///
    /// The underlying storage is never mutated by filtering.
    pub fn filter(
        &self,
        filter: TransactionFilter,
    ) -> impl Iterator<Item = &Transaction> + '_ {
        self.transactions
            .iter()
            .filter(move |transaction| filter.matches(transaction))
    }

    /// All transactions in ledger order, most recent first.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// The number of transactions in the ledger.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Whether the ledger holds no transactions.
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

/// Defines which transactions [TransactionLedger::filter] should return.
///
/// All criteria are optional and combined with AND; the default filter
/// matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionFilter {
    /// Only include transactions whose category has this display name.
    pub category: Option<String>,
    /// Only include transactions dated within this range (inclusive).
    pub date_range: Option<RangeInclusive<Date>>,
    /// Only include transactions of this type.
    pub transaction_type: Option<TransactionType>,
}

impl TransactionFilter {
    /// Whether `transaction` satisfies every set criterion.
    pub fn matches(&self, transaction: &Transaction) -> bool {
        let category_matches = self
            .category
            .as_deref()
            .is_none_or(|category| transaction.category.name() == category);

        let date_matches = self
            .date_range
            .as_ref()
            .is_none_or(|date_range| date_range.contains(&transaction.date));

        let type_matches = self
            .transaction_type
            .is_none_or(|transaction_type| transaction.transaction_type == transaction_type);

        category_matches && date_matches && type_matches
    }
}
