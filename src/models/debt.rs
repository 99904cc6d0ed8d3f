//! Debt model
//!
//! Debts track money owed to or by the user. Settling a debt may post a
//! corresponding settlement transaction; that cross-entity step lives in the
//! store, which keeps settlement idempotent.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::currency::CurrencyCode;
use super::ids::DebtId;
use super::money::Money;

/// Which way the money flows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DebtDirection {
    /// The user owes this money
    OwedByMe,
    /// The user is owed this money
    OwedToMe,
}

impl fmt::Display for DebtDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OwedByMe => write!(f, "owed by me"),
            Self::OwedToMe => write!(f, "owed to me"),
        }
    }
}

/// A personal debt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Debt {
    /// Unique identifier
    pub id: DebtId,

    /// Flow direction
    pub direction: DebtDirection,

    /// Counterparty name
    pub person: String,

    /// Outstanding amount
    pub amount: Money,

    /// Currency of the amount
    pub currency: CurrencyCode,

    /// Optional due date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,

    /// Free-form description
    #[serde(default)]
    pub description: String,

    /// Whether the debt has been settled
    #[serde(default)]
    pub settled: bool,

    /// Date the debt was settled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settled_on: Option<NaiveDate>,
}

impl Debt {
    /// Create a new outstanding debt
    pub fn new(
        direction: DebtDirection,
        person: impl Into<String>,
        amount: Money,
        currency: CurrencyCode,
    ) -> Self {
        Self {
            id: DebtId::new(),
            direction,
            person: person.into(),
            amount,
            currency,
            due_date: None,
            description: String::new(),
            settled: false,
            settled_on: None,
        }
    }

    /// Mark the debt settled as of today
    pub fn settle(&mut self) {
        self.settled = true;
        self.settled_on = Some(Utc::now().date_naive());
    }

    /// Validate the debt
    pub fn validate(&self) -> Result<(), DebtValidationError> {
        if self.person.trim().is_empty() {
            return Err(DebtValidationError::EmptyPerson);
        }
        if !self.amount.is_positive() {
            return Err(DebtValidationError::NonPositiveAmount(self.amount));
        }
        Ok(())
    }
}

/// Validation errors for debts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DebtValidationError {
    EmptyPerson,
    NonPositiveAmount(Money),
}

impl fmt::Display for DebtValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPerson => write!(f, "Debt counterparty cannot be empty"),
            Self::NonPositiveAmount(amount) => {
                write!(f, "Debt amount must be positive, got {}", amount)
            }
        }
    }
}

impl std::error::Error for DebtValidationError {}
