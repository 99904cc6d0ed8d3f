//! Currency codes and normalization
//!
//! The engine supports a fixed set of ISO 4217 codes. Normalization is total:
//! unsupported or empty input degrades to the fallback instead of erroring,
//! because normalized codes feed selection lists that must always hold a
//! valid value.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Currency codes accepted by the engine
pub const SUPPORTED_CURRENCIES: &[&str] = &[
    "USD", "EUR", "GBP", "JPY", "CHF", "CAD", "AUD", "CNY", "INR", "RUB", "UAH", "PLN", "TRY",
    "BRL", "MXN", "KRW", "SEK", "NOK", "DKK", "CZK",
];

/// The designated base currency used as the normalization fallback
pub const BASE_CURRENCY: &str = "USD";

/// A validated, canonical (uppercase) currency code
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// The base currency
    pub fn base() -> Self {
        Self(BASE_CURRENCY.to_string())
    }

    /// Test whether a code is in the supported set, ignoring case and
    /// surrounding whitespace
    pub fn is_supported(code: &str) -> bool {
        let trimmed = code.trim();
        SUPPORTED_CURRENCIES
            .iter()
            .any(|c| c.eq_ignore_ascii_case(trimmed))
    }

    /// Canonicalize a code, degrading to the fallback when the input is
    /// empty or unsupported. Never fails.
    pub fn normalize(code: &str, fallback: &CurrencyCode) -> Self {
        let trimmed = code.trim();
        if Self::is_supported(trimmed) {
            Self(trimmed.to_ascii_uppercase())
        } else {
            fallback.clone()
        }
    }

    /// Canonicalize against the base currency
    pub fn normalize_or_base(code: &str) -> Self {
        Self::normalize(code, &Self::base())
    }

    /// Construct from a code known to be supported
    ///
    /// Returns `None` when the code is not in the supported set.
    pub fn try_new(code: &str) -> Option<Self> {
        let trimmed = code.trim();
        if Self::is_supported(trimmed) {
            Some(Self(trimmed.to_ascii_uppercase()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::base()
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
