//! Parsed intents from the voice/AI producer
//!
//! The transcription layer hands the engine structured records, not free
//! text. [`ParsedIntent`] is a closed tagged enum: an unknown `type`
//! fails deserialization outright, and fields the schema does not know
//! are captured in an extension map instead of being silently trusted.
//! Amounts arrive as strings ("10.50") because the producer works in
//! text; they are parsed with the same rules as manual entry.

use std::collections::BTreeMap;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::bridge::AutoTrackingBridge;
use super::{LedgerStore, TransactionDraft};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{AccountId, Debt, GoalEvent, GoalRef, Money, Transaction, TransactionKind};

/// A structured command produced by the voice/AI layer
///
/// Accounts, debts, and goals are referenced by name; the producer has no
/// access to engine identifiers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ParsedIntent {
    AddExpense {
        account: String,
        amount: String,
        #[serde(default)]
        category: String,
        #[serde(default)]
        description: String,
        #[serde(default)]
        date: Option<NaiveDate>,
        #[serde(flatten)]
        extra: BTreeMap<String, serde_json::Value>,
    },
    AddIncome {
        account: String,
        amount: String,
        #[serde(default)]
        category: String,
        #[serde(default)]
        description: String,
        #[serde(default)]
        date: Option<NaiveDate>,
        #[serde(flatten)]
        extra: BTreeMap<String, serde_json::Value>,
    },
    Transfer {
        from: String,
        to: String,
        amount: String,
        #[serde(default)]
        date: Option<NaiveDate>,
        #[serde(flatten)]
        extra: BTreeMap<String, serde_json::Value>,
    },
    SettleDebt {
        person: String,
        /// Account to post the settlement to; omit to settle off-ledger
        #[serde(default)]
        account: Option<String>,
        #[serde(flatten)]
        extra: BTreeMap<String, serde_json::Value>,
    },
    GoalProgress {
        goal: String,
        amount: String,
        account: String,
        #[serde(flatten)]
        extra: BTreeMap<String, serde_json::Value>,
    },
}

/// What applying an intent did
#[derive(Debug, Clone)]
pub enum AppliedIntent {
    Posted(Transaction),
    DebtSettled(Debt),
}

impl LedgerStore {
    /// Apply a parsed intent against the ledger
    ///
    /// `goals` is the planner's current goal list, used to resolve goal
    /// references by title. Every resolution failure (unknown account,
    /// person, or goal; unparseable amount) is a validation error and
    /// leaves the ledger unchanged.
    pub fn apply_intent(
        &mut self,
        intent: &ParsedIntent,
        goals: &[GoalRef],
    ) -> LedgerResult<AppliedIntent> {
        match intent {
            ParsedIntent::AddExpense {
                account,
                amount,
                category,
                description,
                date,
                ..
            } => self
                .intent_transaction(
                    TransactionKind::Expense,
                    account,
                    amount,
                    category,
                    description,
                    *date,
                )
                .map(AppliedIntent::Posted),
            ParsedIntent::AddIncome {
                account,
                amount,
                category,
                description,
                date,
                ..
            } => self
                .intent_transaction(
                    TransactionKind::Income,
                    account,
                    amount,
                    category,
                    description,
                    *date,
                )
                .map(AppliedIntent::Posted),
            ParsedIntent::Transfer {
                from,
                to,
                amount,
                date,
                ..
            } => {
                let (from, currency) = self.resolve_account(from)?;
                let (to, _) = self.resolve_account(to)?;
                let amount = parse_amount(amount)?;
                let draft = TransactionDraft::transfer(
                    from,
                    to,
                    amount,
                    currency,
                    date.unwrap_or_else(|| Utc::now().date_naive()),
                );
                self.create_transaction(draft).map(AppliedIntent::Posted)
            }
            ParsedIntent::SettleDebt {
                person, account, ..
            } => {
                let debt_id = self
                    .snapshot()
                    .debts
                    .iter()
                    .find(|d| !d.settled && d.person.eq_ignore_ascii_case(person.trim()))
                    .map(|d| d.id)
                    .ok_or_else(|| LedgerError::debt_not_found(person.clone()))?;
                let post_to = match account {
                    Some(name) => Some(self.resolve_account(name)?.0),
                    None => None,
                };
                self.settle_debt(debt_id, post_to)
                    .map(AppliedIntent::DebtSettled)
            }
            ParsedIntent::GoalProgress {
                goal,
                amount,
                account,
                ..
            } => {
                let goal_ref = goals
                    .iter()
                    .find(|g| g.title.eq_ignore_ascii_case(goal.trim()))
                    .ok_or_else(|| {
                        LedgerError::NotFound {
                            entity_type: "Goal",
                            identifier: goal.clone(),
                        }
                    })?;
                let (account, _) = self.resolve_account(account)?;
                let amount = parse_amount(amount)?;
                AutoTrackingBridge::new(self)
                    .record_goal_event(goal_ref, amount, GoalEvent::GoalProgress, account, None, None)
                    .map(AppliedIntent::Posted)
            }
        }
    }

    fn intent_transaction(
        &mut self,
        kind: TransactionKind,
        account: &str,
        amount: &str,
        category: &str,
        description: &str,
        date: Option<NaiveDate>,
    ) -> LedgerResult<Transaction> {
        let (account_id, currency) = self.resolve_account(account)?;
        let amount = parse_amount(amount)?;

        let mut draft = TransactionDraft {
            kind,
            amount,
            currency,
            category: category.to_string(),
            description: description.to_string(),
            account_id,
            transfer_to: None,
            date: date.unwrap_or_else(|| Utc::now().date_naive()),
            time: None,
            source: Default::default(),
        };
        if draft.category.is_empty() {
            draft.category = "uncategorized".into();
        }
        self.create_transaction(draft)
    }

    /// Resolve an account by name to its id and currency
    fn resolve_account(&self, name: &str) -> LedgerResult<(AccountId, String)> {
        self.snapshot()
            .account_by_name(name)
            .map(|a| (a.id, a.currency.as_str().to_string()))
            .ok_or_else(|| LedgerError::account_not_found(name.to_string()))
    }
}

fn parse_amount(raw: &str) -> LedgerResult<Money> {
    let amount = Money::parse(raw)
        .map_err(|e| LedgerError::Validation(format!("Bad amount '{}': {}", raw, e)))?;
    if !amount.is_positive() {
        return Err(LedgerError::Validation(format!(
            "Amount must be positive, got '{}'",
            raw
        )));
    }
    Ok(amount)
}
