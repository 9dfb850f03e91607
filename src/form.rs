//! The transaction form controller: validates and normalises raw user input
//! into a transaction builder for the ledger.

use time::{Date, OffsetDateTime, macros::format_description};

use crate::{
    Error,
    category::{TransactionCategory, TransactionType},
    transaction::{Transaction, TransactionBuilder},
};

/// Where the form is in its lifecycle.
///
/// The form moves `Idle -> Editing` when opened, back to `Closed` on a
/// valid submission or a cancel, and stays in `Editing` (with the
/// validation error retained) when a submission is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// The form has not been opened yet.
    Idle,
    /// The form is open and accepting input.
    Editing,
    /// The form was submitted or cancelled.
    Closed,
}

/// Collects raw transaction input and turns it into a validated builder.
///
/// Fields hold the text as the user typed it; nothing is parsed until
/// [TransactionForm::submit]. A rejected submission leaves the form open
/// with the error available for inline display and emits no record.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionForm {
    phase: FormPhase,
    locked_type: Option<TransactionType>,
    error: Option<String>,
    /// The selected transaction type. Ignored when the type is locked.
    pub transaction_type: TransactionType,
    /// The raw amount input.
    pub amount: String,
    /// The raw date input. Blank defaults to today on submission.
    pub date: String,
    /// The selected category. When unset, the type's first category is used.
    pub category: Option<TransactionCategory>,
    /// The free-text description.
    pub description: String,
    /// A reference to an uploaded receipt image, if any.
    pub receipt: Option<String>,
}

impl Default for TransactionForm {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionForm {
    /// Create an idle form defaulting to expense entry.
    pub fn new() -> Self {
        Self {
            phase: FormPhase::Idle,
            locked_type: None,
            error: None,
            transaction_type: TransactionType::Expense,
            amount: String::new(),
            date: String::new(),
            category: None,
            description: String::new(),
            receipt: None,
        }
    }

    /// Create an idle form whose emitted type is fixed to `transaction_type`.
    ///
    /// A locked form does not offer a type selector, and submission carries
    /// the locked type regardless of any other input.
    pub fn with_locked_type(transaction_type: TransactionType) -> Self {
        Self {
            locked_type: Some(transaction_type),
            transaction_type,
            ..Self::new()
        }
    }

    /// Open the form for input.
    pub fn open(&mut self) {
        self.phase = FormPhase::Editing;
    }

    /// Open the form prefilled from an existing transaction for editing.
    pub fn edit(&mut self, transaction: &Transaction) {
        self.phase = FormPhase::Editing;
        self.error = None;
        self.transaction_type = transaction.transaction_type;
        self.amount = format!("{:.2}", transaction.amount);
        self.date = transaction.date.to_string();
        self.category = Some(transaction.category.clone());
        self.description = transaction.description.clone();
        self.receipt = transaction.receipt.clone();
    }

    /// Whether a type selector should be rendered for this form.
    pub fn shows_type_selector(&self) -> bool {
        self.locked_type.is_none()
    }

    /// Where the form is in its lifecycle.
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// The validation message from the last rejected submission, for inline
    /// display.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Validate the raw input and emit a transaction builder.
    ///
    /// On success the form closes and the builder carries the normalised
    /// input: a blank or unparseable date becomes today, an unset category
    /// is left for the builder to default, and a locked type overrides the
    /// selection. On failure the form stays open, retains the error, and no
    /// record is emitted.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::MissingAmount] if the amount field is blank,
    /// - or [Error::InvalidAmount] if it is not a positive, finite number.
    pub fn submit(&mut self) -> Result<TransactionBuilder, Error> {
        match self.validate() {
            Ok(builder) => {
                self.phase = FormPhase::Closed;
                self.error = None;
                Ok(builder)
            }
            Err(error) => {
                self.phase = FormPhase::Editing;
                self.error = Some(error.to_string());
                Err(error)
            }
        }
    }

    /// Close the form without emitting anything.
    pub fn cancel(&mut self) {
        self.phase = FormPhase::Closed;
        self.error = None;
    }

    fn validate(&self) -> Result<TransactionBuilder, Error> {
        let amount = parse_amount(&self.amount)?;
        let date = parse_date_or_today(&self.date);
        let transaction_type = self.locked_type.unwrap_or(self.transaction_type);

        let mut builder = Transaction::build(amount, date)
            .transaction_type(transaction_type)
            .description(self.description.trim())
            .receipt(self.receipt.clone());
        builder.category = self.category.clone();

        Ok(builder)
    }
}

fn parse_amount(raw: &str) -> Result<f64, Error> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Err(Error::MissingAmount);
    }

    match raw.parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount > 0.0 => Ok(amount),
        _ => Err(Error::InvalidAmount(raw.to_string())),
    }
}

/// Parse an ISO 8601 calendar date, falling back to today when the field is
/// blank or does not parse.
fn parse_date_or_today(raw: &str) -> Date {
    let format = format_description!("[year]-[month]-[day]");

    Date::parse(raw.trim(), &format).unwrap_or_else(|_| today())
}

fn today() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::{
        Error,
        category::{TransactionCategory, TransactionType},
        transaction::Transaction,
    };

    use super::{FormPhase, TransactionForm, today};

    fn filled_form() -> TransactionForm {
        let mut form = TransactionForm::new();
        form.open();
        form.amount = "33.99".to_string();
        form.date = "2024-06-13".to_string();
        form.description = "Pizza night".to_string();
        form
    }

    #[test]
    fn new_form_is_idle_until_opened() {
        let mut form = TransactionForm::new();
        assert_eq!(form.phase(), FormPhase::Idle);

        form.open();
        assert_eq!(form.phase(), FormPhase::Editing);
    }

    #[test]
    fn submit_emits_builder_and_closes() {
        let mut form = filled_form();

        let builder = form.submit().unwrap();

        assert_eq!(builder.amount, 33.99);
        assert_eq!(builder.date, date!(2024 - 06 - 13));
        assert_eq!(builder.transaction_type, TransactionType::Expense);
        assert_eq!(builder.description, "Pizza night");
        assert_eq!(form.phase(), FormPhase::Closed);
        assert_eq!(form.error(), None);
    }

    #[test]
    fn submit_with_empty_amount_is_blocked() {
        let mut form = filled_form();
        form.amount = String::new();

        let result = form.submit();

        assert_eq!(result, Err(Error::MissingAmount));
        assert_eq!(form.phase(), FormPhase::Editing);
        assert!(form.error().is_some());
    }

    #[test]
    fn submit_with_non_numeric_amount_is_blocked() {
        let mut form = filled_form();
        form.amount = "lots".to_string();

        let result = form.submit();

        assert_eq!(result, Err(Error::InvalidAmount("lots".to_string())));
        assert_eq!(form.phase(), FormPhase::Editing);
    }

    #[test]
    fn submit_with_negative_amount_is_blocked() {
        let mut form = filled_form();
        form.amount = "-5".to_string();

        assert_eq!(form.submit(), Err(Error::InvalidAmount("-5".to_string())));
    }

    #[test]
    fn blank_date_defaults_to_today() {
        let mut form = filled_form();
        form.date = String::new();

        let builder = form.submit().unwrap();

        assert_eq!(builder.date, today());
    }

    #[test]
    fn unparseable_date_defaults_to_today() {
        let mut form = filled_form();
        form.date = "next tuesday".to_string();

        let builder = form.submit().unwrap();

        assert_eq!(builder.date, today());
    }

    #[test]
    fn locked_type_always_wins() {
        let mut form = TransactionForm::with_locked_type(TransactionType::Income);
        form.open();
        form.amount = "500".to_string();
        // A stray selection must not override the lock.
        form.transaction_type = TransactionType::Expense;

        let builder = form.submit().unwrap();

        assert_eq!(builder.transaction_type, TransactionType::Income);
        assert!(!form.shows_type_selector());
    }

    #[test]
    fn unset_category_is_left_for_the_builder_default() {
        let mut form = filled_form();

        let builder = form.submit().unwrap();

        assert_eq!(builder.category, None);
        assert_eq!(builder.finalise(1).unwrap().category.name(), "Groceries");
    }

    #[test]
    fn cancel_closes_without_emitting() {
        let mut form = filled_form();

        form.cancel();

        assert_eq!(form.phase(), FormPhase::Closed);
        assert_eq!(form.error(), None);
    }

    #[test]
    fn failed_submit_then_corrected_input_succeeds() {
        let mut form = filled_form();
        form.amount = String::new();
        assert!(form.submit().is_err());

        form.amount = "3".to_string();

        assert!(form.submit().is_ok());
        assert_eq!(form.phase(), FormPhase::Closed);
    }

    #[test]
    fn edit_prefills_from_an_existing_transaction() {
        let transaction = Transaction::build(44.5, date!(2024 - 06 - 11))
            .category("Groceries")
            .description("Milk and bread")
            .finalise(7)
            .unwrap();

        let mut form = TransactionForm::new();
        form.edit(&transaction);

        assert_eq!(form.phase(), FormPhase::Editing);
        assert_eq!(form.amount, "44.50");
        assert_eq!(form.date, "2024-06-11");
        assert_eq!(
            form.category,
            Some(TransactionCategory::from("Groceries"))
        );
        assert_eq!(form.description, "Milk and bread");
    }
}
