//! Account model
//!
//! Represents the user's money containers (cash, cards, savings, investments,
//! crypto). The `balance` field is a cached derived value: it always equals
//! the signed sum of postings applied since creation and is rebuilt from the
//! transaction log on load.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::currency::CurrencyCode;
use super::ids::AccountId;
use super::money::Money;

/// Kind of account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    Cash,
    Card,
    Savings,
    Investment,
    Crypto,
}

impl AccountKind {
    /// Parse an account kind from user input
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "cash" => Some(Self::Cash),
            "card" | "debit" | "credit" => Some(Self::Card),
            "savings" => Some(Self::Savings),
            "investment" | "invest" => Some(Self::Investment),
            "crypto" => Some(Self::Crypto),
            _ => None,
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cash => write!(f, "Cash"),
            Self::Card => write!(f, "Card"),
            Self::Savings => write!(f, "Savings"),
            Self::Investment => write!(f, "Investment"),
            Self::Crypto => write!(f, "Crypto"),
        }
    }
}

/// A financial account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier
    pub id: AccountId,

    /// Account name (e.g. "Everyday card")
    pub name: String,

    /// Kind of account
    #[serde(rename = "type")]
    pub kind: AccountKind,

    /// Cached balance; derived from the transaction log
    pub balance: Money,

    /// Currency all postings to this account must carry
    pub currency: CurrencyCode,

    /// Hidden accounts are excluded from totals shown to the user
    #[serde(default)]
    pub is_hidden: bool,

    /// Display color (hex string, UI concern carried through)
    #[serde(default)]
    pub color: String,

    /// When the account was created
    pub created_at: DateTime<Utc>,

    /// When the account was last modified
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account with a zero balance
    pub fn new(name: impl Into<String>, kind: AccountKind, currency: CurrencyCode) -> Self {
        let now = Utc::now();
        Self {
            id: AccountId::new(),
            name: name.into(),
            kind,
            balance: Money::zero(),
            currency,
            is_hidden: false,
            color: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a signed posting amount to the cached balance
    pub fn post(&mut self, amount: Money) {
        self.balance += amount;
        self.updated_at = Utc::now();
    }

    /// Validate the account
    pub fn validate(&self) -> Result<(), AccountValidationError> {
        if self.name.trim().is_empty() {
            return Err(AccountValidationError::EmptyName);
        }
        if self.name.len() > 100 {
            return Err(AccountValidationError::NameTooLong(self.name.len()));
        }
        Ok(())
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.kind)
    }
}

/// Validation errors for accounts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountValidationError {
    EmptyName,
    NameTooLong(usize),
}

impl fmt::Display for AccountValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Account name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Account name too long ({} chars, max 100)", len)
            }
        }
    }
}

impl std::error::Error for AccountValidationError {}
