//! Transaction model
//!
//! A single income or expense entry. The amount is always stored as a
//! magnitude; the sign comes from the transaction type.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::{CategoryId, TransactionId};
use super::money::Money;
use crate::error::ValidationError;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn is_expense(&self) -> bool {
        matches!(self, Self::Expense)
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "in" => Ok(Self::Income),
            "expense" | "out" => Ok(Self::Expense),
            other => Err(format!("unknown transaction type: {}", other)),
        }
    }
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Magnitude of the transaction
    pub amount: Money,

    /// Short description shown in lists
    pub title: String,

    /// Owning category. May dangle after the category is deleted.
    pub category_id: CategoryId,

    /// Local wall-clock date and time
    pub date: NaiveDateTime,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: TransactionType,

    /// Optional free-text note. `None` and `Some("")` are different values.
    pub note: Option<String>,

    /// When the transaction was created
    pub created_at: DateTime<Utc>,

    /// When the transaction was last modified
    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        title: impl Into<String>,
        amount: Money,
        kind: TransactionType,
        category_id: CategoryId,
        date: NaiveDateTime,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: TransactionId::new(),
            amount,
            title: title.into(),
            category_id,
            date,
            kind,
            note: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Attach a note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Amount with the sign implied by the type: negative for expenses
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }

    pub fn is_expense(&self) -> bool {
        self.kind.is_expense()
    }

    /// Calendar day of the transaction
    pub fn day(&self) -> NaiveDate {
        self.date.date()
    }

    /// Validate the input rules applied at creation and edit time
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }

        if !self.amount.is_positive() {
            return Err(ValidationError::NonPositiveAmount);
        }
        if self.amount > Money::MAX_AMOUNT {
            return Err(ValidationError::AmountTooLarge(Money::MAX_AMOUNT));
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.title,
            self.signed_amount()
        )
    }
}
