//! Read-side queries over a ledger snapshot
//!
//! Views never mutate: they borrow a committed [`LedgerSnapshot`] and
//! project it. [`TransactionFilter`] is a builder where every unset field
//! means "no constraint".

use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::snapshot::LedgerSnapshot;
use crate::models::{AccountId, Money, PeriodWindow, Transaction, TransactionKind};

/// Criteria for filtering transactions
///
/// Defaults to matching everything; chain setters to narrow.
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    category: Option<String>,
    account: Option<AccountId>,
    kind: Option<TransactionKind>,
    min_amount: Option<Money>,
    max_amount: Option<Money>,
    date_from: Option<NaiveDate>,
    date_to: Option<NaiveDate>,
}

impl TransactionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Case-insensitive category match
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Transactions posting to this account (either side of a transfer)
    pub fn account(mut self, account: AccountId) -> Self {
        self.account = Some(account);
        self
    }

    pub fn kind(mut self, kind: TransactionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn min_amount(mut self, amount: Money) -> Self {
        self.min_amount = Some(amount);
        self
    }

    pub fn max_amount(mut self, amount: Money) -> Self {
        self.max_amount = Some(amount);
        self
    }

    /// Inclusive lower date bound
    pub fn date_from(mut self, date: NaiveDate) -> Self {
        self.date_from = Some(date);
        self
    }

    /// Inclusive upper date bound
    pub fn date_to(mut self, date: NaiveDate) -> Self {
        self.date_to = Some(date);
        self
    }

    /// Whether a transaction satisfies every set criterion
    pub fn matches(&self, txn: &Transaction) -> bool {
        if let Some(category) = &self.category {
            if !txn.category.eq_ignore_ascii_case(category) {
                return false;
            }
        }
        if let Some(account) = self.account {
            if !txn.touches_account(account) {
                return false;
            }
        }
        if let Some(kind) = self.kind {
            if txn.kind != kind {
                return false;
            }
        }
        if let Some(min) = self.min_amount {
            if txn.amount < min {
                return false;
            }
        }
        if let Some(max) = self.max_amount {
            if txn.amount > max {
                return false;
            }
        }
        if let Some(from) = self.date_from {
            if txn.date < from {
                return false;
            }
        }
        if let Some(to) = self.date_to {
            if txn.date > to {
                return false;
            }
        }
        true
    }

    /// Run the filter, newest date first
    ///
    /// Same-date transactions keep their log order, so repeated runs over
    /// the same snapshot return the same sequence.
    pub fn run(&self, snapshot: &LedgerSnapshot) -> Vec<Transaction> {
        let mut matched: Vec<Transaction> = snapshot
            .transactions
            .iter()
            .filter(|t| self.matches(t))
            .cloned()
            .collect();
        matched.sort_by(|a, b| b.date.cmp(&a.date));
        matched
    }
}

/// Total expense per category within a window, sorted by category name
pub fn spending_by_category(
    snapshot: &LedgerSnapshot,
    window: PeriodWindow,
) -> Vec<(String, Money)> {
    let mut totals: BTreeMap<String, Money> = BTreeMap::new();
    for txn in &snapshot.transactions {
        if txn.kind == TransactionKind::Expense && window.contains(txn.date) {
            let key = txn.category.trim().to_lowercase();
            let entry = totals.entry(key).or_insert_with(Money::zero);
            *entry += txn.amount;
        }
    }
    totals.into_iter().collect()
}

/// Sum of balances across visible accounts, one entry per currency
///
/// Balances in different currencies are never added together.
pub fn balances_by_currency(
    snapshot: &LedgerSnapshot,
    include_hidden: bool,
) -> Vec<(String, Money)> {
    let mut totals: BTreeMap<String, Money> = BTreeMap::new();
    for account in &snapshot.accounts {
        if account.is_hidden && !include_hidden {
            continue;
        }
        let entry = totals
            .entry(account.currency.as_str().to_string())
            .or_insert_with(Money::zero);
        *entry += account.balance;
    }
    totals.into_iter().collect()
}
