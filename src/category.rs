//! Category domain types and the resolver that maps a transaction type to
//! its fixed set of selectable categories.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

/// Whether money was earned or spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money coming in, e.g. a salary payment.
    Income,
    /// Money going out, e.g. a supermarket run.
    Expense,
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionType::Income => write!(f, "income"),
            TransactionType::Expense => write!(f, "expense"),
        }
    }
}

impl FromStr for TransactionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            other => Err(Error::InvalidTransactionType(other.to_string())),
        }
    }
}

/// A validated, non-empty category name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct CategoryName(String);

impl CategoryName {
    /// Create a category name.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::EmptyCategoryName] if `name` is
    /// an empty string.
    pub fn new(name: &str) -> Result<Self, Error> {
        let name = name.trim();

        if name.is_empty() {
            Err(Error::EmptyCategoryName)
        } else {
            Ok(Self(name.to_string()))
        }
    }

    /// Create a category name without validation.
    ///
    /// The caller should ensure that the string is not empty.
    ///
    /// This function has `_unchecked` in the name but is not `unsafe`, because if the non-empty invariant is violated it will cause incorrect behaviour but not affect memory safety.
    pub fn new_unchecked(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl AsRef<str> for CategoryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for CategoryName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryName::new(s)
    }
}

impl Display for CategoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A styled category for classifying transactions, e.g. 'Groceries',
/// 'Salary'.
///
/// A category only applies to one side of the ledger: its
/// `transaction_type` says whether it classifies income or expenses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct Category {
    /// A stable identifier for the category, e.g. "groceries".
    pub id: String,
    /// The display name of the category.
    pub name: CategoryName,
    /// An emoji or short glyph shown next to the name.
    pub icon: String,
    /// The hex color used for the category's chart slice, e.g. "#6C3EFF".
    pub color: String,
    /// Whether this category classifies income or expense transactions.
    pub transaction_type: TransactionType,
    /// True for categories the user defined themselves.
    pub is_custom: bool,
}

/// The category attached to a transaction.
///
/// Older saved data stores categories as bare name strings while newer data
/// stores full [Category] records, so both forms must be accepted wherever a
/// category is consumed. The untagged serde representation keeps the saved
/// shape identical to that legacy union.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(untagged)]
pub enum TransactionCategory {
    /// A fully styled category record.
    Defined(Category),
    /// A bare category name with no styling or applicability.
    Named(String),
}

impl TransactionCategory {
    /// The display name of the category.
    ///
    /// This is the single place where the bare-string and record forms are
    /// resolved; consumers should never match on the variants themselves.
    pub fn name(&self) -> &str {
        match self {
            TransactionCategory::Defined(category) => category.name.as_ref(),
            TransactionCategory::Named(name) => name,
        }
    }

    /// Whether the category may classify a transaction of `transaction_type`.
    ///
    /// Bare names carry no applicability and match either type.
    pub fn applies_to(&self, transaction_type: TransactionType) -> bool {
        match self {
            TransactionCategory::Defined(category) => {
                category.transaction_type == transaction_type
            }
            TransactionCategory::Named(_) => true,
        }
    }

    /// Whether the category is user-defined rather than one of the built-in
    /// sets.
    ///
    /// Custom categories must still be displayed verbatim wherever they
    /// appear.
    pub fn is_custom(&self) -> bool {
        match self {
            TransactionCategory::Defined(category) => category.is_custom,
            TransactionCategory::Named(name) => {
                !INCOME_CATEGORIES.contains(&name.as_str())
                    && !EXPENSE_CATEGORIES.contains(&name.as_str())
            }
        }
    }
}

impl From<&str> for TransactionCategory {
    fn from(name: &str) -> Self {
        TransactionCategory::Named(name.to_string())
    }
}

impl From<Category> for TransactionCategory {
    fn from(category: Category) -> Self {
        TransactionCategory::Defined(category)
    }
}

/// The fallback category name, always offered last.
pub const OTHER_CATEGORY: &str = "Other";

/// Income-appropriate category names.
const INCOME_CATEGORIES: [&str; 3] = ["Salary", "Savings", OTHER_CATEGORY];

/// Expense-appropriate category names.
const EXPENSE_CATEGORIES: [&str; 7] = [
    "Groceries",
    "Transport",
    "Utilities",
    "Entertainment",
    "Shopping",
    "Health",
    OTHER_CATEGORY,
];

/// The categories selectable for a transaction of `transaction_type`.
///
/// The sets are fixed per type and ordered for display, with
/// [OTHER_CATEGORY] always last. Transactions may still carry custom names
/// outside these sets; those are displayed verbatim rather than rejected.
pub fn categories_for(transaction_type: TransactionType) -> &'static [&'static str] {
    match transaction_type {
        TransactionType::Income => &INCOME_CATEGORIES,
        TransactionType::Expense => &EXPENSE_CATEGORIES,
    }
}

/// All built-in category names as a single list.
///
/// Kept for older consumers that show one combined list: the expense set,
/// then the income-only names, then [OTHER_CATEGORY] exactly once at the
/// end.
pub fn default_categories() -> Vec<&'static str> {
    let mut categories: Vec<&str> = EXPENSE_CATEGORIES
        .iter()
        .copied()
        .filter(|&name| name != OTHER_CATEGORY)
        .collect();

    categories.extend(
        INCOME_CATEGORIES
            .iter()
            .copied()
            .filter(|name| !EXPENSE_CATEGORIES.contains(name)),
    );

    categories.push(OTHER_CATEGORY);

    categories
}



#[cfg(test)]
mod transaction_category_tests {
    use super::{Category, CategoryName, TransactionCategory, TransactionType};

    fn groceries() -> Category {
        Category {
            id: "groceries".to_string(),
            name: CategoryName::new_unchecked("Groceries"),
            icon: "🛒".to_string(),
            color: "#2EC4B6".to_string(),
            transaction_type: TransactionType::Expense,
            is_custom: false,
        }
    }

    #[test]
    fn name_resolves_both_forms() {
        assert_eq!(TransactionCategory::from("Salary").name(), "Salary");
        assert_eq!(TransactionCategory::from(groceries()).name(), "Groceries");
    }

    #[test]
    fn bare_names_apply_to_either_type() {
        let category = TransactionCategory::from("MyCustomCat");

        assert!(category.applies_to(TransactionType::Income));
        assert!(category.applies_to(TransactionType::Expense));
    }

    #[test]
    fn defined_categories_apply_to_one_type_only() {
        let category = TransactionCategory::from(groceries());

        assert!(category.applies_to(TransactionType::Expense));
        assert!(!category.applies_to(TransactionType::Income));
    }

    #[test]
    fn bare_name_outside_the_builtin_sets_is_custom() {
        assert!(TransactionCategory::from("MyCustomCat").is_custom());
        assert!(!TransactionCategory::from("Utilities").is_custom());
    }

    #[test]
    fn serialized_form_matches_the_legacy_union() {
        let named = TransactionCategory::from("Salary");
        assert_eq!(serde_json::to_string(&named).unwrap(), "\"Salary\"");

        let defined = TransactionCategory::from(groceries());
        let json = serde_json::to_string(&defined).unwrap();
        let restored: TransactionCategory = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, defined);

        let legacy: TransactionCategory = serde_json::from_str("\"Shopping\"").unwrap();
        assert_eq!(legacy, TransactionCategory::from("Shopping"));
    }
}
