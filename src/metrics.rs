//! Derived metrics computed from the transaction set.
//!
//! Everything here is a pure function over whatever (possibly filtered) set
//! of transactions the caller passes in; nothing is stored or subscribed.
//! The view layer recomputes after each mutation.

use std::collections::HashMap;

use time::Date;

use crate::{
    category::{OTHER_CATEGORY, TransactionType},
    transaction::Transaction,
};

/// Sums expense amounts grouped by category display name.
///
/// Used for pie-chart proportions. Categories are sorted alphabetically
/// with [OTHER_CATEGORY] last, matching how the category sets are offered.
/// Income transactions are ignored.
pub fn expense_totals_by_category<'a>(
    transactions: impl IntoIterator<Item = &'a Transaction>,
) -> Vec<(String, f64)> {
    let mut totals: HashMap<&str, f64> = HashMap::new();

    for transaction in transactions {
        if transaction.transaction_type != TransactionType::Expense {
            continue;
        }

        *totals.entry(transaction.category.name()).or_insert(0.0) += transaction.amount;
    }

    let mut names: Vec<&str> = totals
        .keys()
        .copied()
        .filter(|&name| name != OTHER_CATEGORY)
        .collect();
    names.sort_unstable();

    if totals.contains_key(OTHER_CATEGORY) {
        names.push(OTHER_CATEGORY);
    }

    names
        .into_iter()
        .map(|name| (name.to_owned(), totals[name]))
        .collect()
}

/// Income and expense totals per date, in chronological order.
///
/// The three vectors share indices: `income[i]` and `expenses[i]` are the
/// sums for `dates[i]`. Dates with no transactions do not appear.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailySeries {
    /// The distinct transaction dates, oldest first.
    pub dates: Vec<Date>,
    /// The total income per date.
    pub income: Vec<f64>,
    /// The total expense amount per date.
    pub expenses: Vec<f64>,
}

/// Sums income and expense amounts grouped by date for the line chart.
pub fn daily_series<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> DailySeries {
    let mut totals: HashMap<Date, (f64, f64)> = HashMap::new();

    for transaction in transactions {
        let entry = totals.entry(transaction.date).or_insert((0.0, 0.0));

        match transaction.transaction_type {
            TransactionType::Income => entry.0 += transaction.amount,
            TransactionType::Expense => entry.1 += transaction.amount,
        }
    }

    let mut dates: Vec<Date> = totals.keys().copied().collect();
    dates.sort_unstable();

    let income = dates.iter().map(|date| totals[date].0).collect();
    let expenses = dates.iter().map(|date| totals[date].1).collect();

    DailySeries {
        dates,
        income,
        expenses,
    }
}

/// The total amount of income in the given transactions.
pub fn total_income<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> f64 {
    transactions
        .into_iter()
        .filter(|transaction| transaction.transaction_type == TransactionType::Income)
        .map(|transaction| transaction.amount)
        .sum()
}

/// Progress towards the savings goal as a percentage clamped to `[0, 100]`.
///
/// Returns `None` when no goal has been configured, which callers should
/// render as a prompt to set one. A goal of zero cannot divide: it counts
/// as fully met once any income exists and unmet otherwise.
pub fn goal_progress(goal: Option<f64>, total_income: f64) -> Option<f64> {
    let goal = goal?;

    if goal <= 0.0 {
        return Some(if total_income > 0.0 { 100.0 } else { 0.0 });
    }

    Some((100.0 * total_income / goal).clamp(0.0, 100.0))
}
