//! Serializable ledger state
//!
//! The snapshot is the full set of accounts, transactions, budgets, and
//! debts as plain records. The transaction log is the source of truth:
//! account balances are caches rebuilt from the log on load, never trusted
//! from persisted data.

use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{
    Account, AccountId, Budget, BudgetId, Debt, DebtId, GoalEvent, GoalId, Money, Transaction,
    TransactionId,
};

/// The complete ledger state
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    #[serde(default)]
    pub accounts: Vec<Account>,

    /// The transaction log, in insertion order
    #[serde(default)]
    pub transactions: Vec<Transaction>,

    #[serde(default)]
    pub budgets: Vec<Budget>,

    #[serde(default)]
    pub debts: Vec<Debt>,
}

impl LedgerSnapshot {
    /// An empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    pub fn account(&self, id: AccountId) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == id)
    }

    pub(crate) fn account_mut(&mut self, id: AccountId) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|a| a.id == id)
    }

    /// Case-insensitive account lookup by name
    pub fn account_by_name(&self, name: &str) -> Option<&Account> {
        let name = name.trim();
        self.accounts
            .iter()
            .find(|a| a.name.eq_ignore_ascii_case(name))
    }

    pub fn transaction(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    pub fn budget(&self, id: BudgetId) -> Option<&Budget> {
        self.budgets.iter().find(|b| b.id == id)
    }

    pub fn debt(&self, id: DebtId) -> Option<&Debt> {
        self.debts.iter().find(|d| d.id == id)
    }

    pub(crate) fn debt_mut(&mut self, id: DebtId) -> Option<&mut Debt> {
        self.debts.iter_mut().find(|d| d.id == id)
    }

    /// Whether any transaction posts to the given account
    pub fn account_has_transactions(&self, id: AccountId) -> bool {
        self.transactions.iter().any(|t| t.touches_account(id))
    }

    /// Find the synthetic transaction tagged with `(goal, event)`, if any
    pub fn goal_transaction(&self, goal_id: GoalId, event: GoalEvent) -> Option<&Transaction> {
        self.transactions
            .iter()
            .find(|t| t.goal_tag() == Some((goal_id, event)))
    }

    /// Find the settlement transaction for a debt, if any
    pub fn settlement_transaction(&self, debt_id: DebtId) -> Option<&Transaction> {
        self.transactions
            .iter()
            .find(|t| t.settles_debt() == Some(debt_id))
    }

    /// Rebuild every cached account balance from the transaction log
    ///
    /// Balances are zeroed and the log's postings replayed in order. Fails
    /// with a consistency error when a posting references an account that no
    /// longer exists; the snapshot is left with the partially rebuilt
    /// balances, so callers treating this as a load failure should discard
    /// the snapshot.
    pub fn rebuild_balances(&mut self) -> LedgerResult<()> {
        for account in &mut self.accounts {
            account.balance = Money::zero();
        }

        // Collect postings first so the mutable borrow of accounts is short
        let postings: Vec<_> = self
            .transactions
            .iter()
            .flat_map(|t| t.postings())
            .collect();

        for posting in postings {
            match self.account_mut(posting.account_id) {
                Some(account) => account.balance += posting.amount,
                None => {
                    return Err(LedgerError::Consistency(format!(
                        "transaction log posts to unknown account {}",
                        posting.account_id
                    )))
                }
            }
        }

        Ok(())
    }

    /// Verify cached balances against a fresh replay of the log
    ///
    /// Surfaces the first disagreement; never repairs anything.
    pub fn verify_balances(&self) -> LedgerResult<()> {
        let mut replay = self.clone();
        replay.rebuild_balances()?;

        for account in &self.accounts {
            let rebuilt = replay
                .account(account.id)
                .map(|a| a.balance)
                .unwrap_or_else(Money::zero);
            if rebuilt != account.balance {
                return Err(LedgerError::Consistency(format!(
                    "account {} cached balance {} disagrees with log-derived {}",
                    account.id, account.balance, rebuilt
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccountKind, CurrencyCode, TransactionKind, TransactionSource};
    use chrono::NaiveDate;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
    }

    fn snapshot_with_account() -> (LedgerSnapshot, AccountId) {
        let account = Account::new("Wallet", AccountKind::Cash, CurrencyCode::base());
        let id = account.id;
        let snapshot = LedgerSnapshot {
            accounts: vec![account],
            ..Default::default()
        };
        (snapshot, id)
    }

    #[test]
    fn test_rebuild_balances_from_log() {
        let (mut snapshot, account_id) = snapshot_with_account();
        snapshot.transactions.push(Transaction::new(
            TransactionKind::Income,
            account_id,
            Money::from_cents(10000),
            CurrencyCode::base(),
            date(),
        ));
        snapshot.transactions.push(Transaction::new(
            TransactionKind::Expense,
            account_id,
            Money::from_cents(2500),
            CurrencyCode::base(),
            date(),
        ));

        // A stale cache must be overwritten by the replay
        snapshot.accounts[0].balance = Money::from_cents(999999);

        snapshot.rebuild_balances().unwrap();
        assert_eq!(snapshot.account(account_id).unwrap().balance.cents(), 7500);
    }

    #[test]
    fn test_rebuild_detects_orphan_posting() {
        let (mut snapshot, _) = snapshot_with_account();
        snapshot.transactions.push(Transaction::new(
            TransactionKind::Expense,
            AccountId::new(),
            Money::from_cents(100),
            CurrencyCode::base(),
            date(),
        ));

        let err = snapshot.rebuild_balances().unwrap_err();
        assert!(err.is_consistency());
    }

    #[test]
    fn test_verify_balances() {
        let (mut snapshot, account_id) = snapshot_with_account();
        snapshot.transactions.push(Transaction::new(
            TransactionKind::Income,
            account_id,
            Money::from_cents(5000),
            CurrencyCode::base(),
            date(),
        ));
        snapshot.rebuild_balances().unwrap();
        assert!(snapshot.verify_balances().is_ok());

        snapshot.accounts[0].balance = Money::from_cents(1);
        assert!(snapshot.verify_balances().unwrap_err().is_consistency());
    }

    #[test]
    fn test_goal_transaction_lookup() {
        let (mut snapshot, account_id) = snapshot_with_account();
        let goal_id = GoalId::new();
        let mut txn = Transaction::new(
            TransactionKind::Expense,
            account_id,
            Money::from_cents(100),
            CurrencyCode::base(),
            date(),
        );
        txn.source = TransactionSource::Goal {
            goal_id,
            event: GoalEvent::GoalProgress,
        };
        snapshot.transactions.push(txn);

        assert!(snapshot
            .goal_transaction(goal_id, GoalEvent::GoalProgress)
            .is_some());
        assert!(snapshot
            .goal_transaction(goal_id, GoalEvent::GoalCompleted)
            .is_none());
        assert!(snapshot
            .goal_transaction(GoalId::new(), GoalEvent::GoalProgress)
            .is_none());
    }

    #[test]
    fn test_serde_roundtrip() {
        let (mut snapshot, account_id) = snapshot_with_account();
        snapshot.transactions.push(Transaction::new(
            TransactionKind::Income,
            account_id,
            Money::from_cents(100),
            CurrencyCode::base(),
            date(),
        ));

        let json = serde_json::to_string(&snapshot).unwrap();
        let back: LedgerSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.accounts.len(), 1);
        assert_eq!(back.transactions.len(), 1);
    }
}
