//! Goal auto-tracking bridge
//!
//! Goals live outside the ledger; when a financial goal advances, the
//! bridge mirrors that event into the transaction log as a synthetic
//! expense tagged with the `(goal, event)` pair. The tag makes every goal
//! event idempotent: re-delivering the same event updates the existing
//! transaction instead of posting a duplicate, so balances and budget
//! aggregates never double-count.

use super::{LedgerStore, TransactionDraft, TransactionPatch};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{
    AccountId, BudgetId, GoalEvent, GoalRef, Money, Transaction, TransactionSource,
};
use chrono::Utc;

/// Default category for goal-driven transactions with no budget attached
pub const GOAL_CATEGORY: &str = "goals";

/// Mirrors goal events into the ledger
pub struct AutoTrackingBridge<'a> {
    store: &'a mut LedgerStore,
}

impl<'a> AutoTrackingBridge<'a> {
    pub fn new(store: &'a mut LedgerStore) -> Self {
        Self { store }
    }

    /// Record a goal event as a tagged expense on `account_id`
    ///
    /// `amount` is the money put toward the goal by this event. When
    /// `budget_id` is given the transaction takes that budget's category so
    /// it counts against the budget; otherwise it files under
    /// [`GOAL_CATEGORY`]. `note` overrides the generated description.
    ///
    /// Delivery rules, keyed by the `(goal, event)` tag:
    /// - same tag already posted: the existing transaction is updated to
    ///   the new amount (the latest delivery wins, nothing is added twice)
    /// - a completion replaces any earlier progress transaction for the
    ///   goal, so the goal contributes exactly one transaction once done
    /// - progress arriving after completion is rejected
    pub fn record_goal_event(
        &mut self,
        goal: &GoalRef,
        amount: Money,
        event: GoalEvent,
        account_id: AccountId,
        budget_id: Option<BudgetId>,
        note: Option<&str>,
    ) -> LedgerResult<Transaction> {
        if !goal.is_financial() {
            return Err(LedgerError::Validation(format!(
                "Goal '{}' is not a financial goal and cannot post to the ledger",
                goal.title
            )));
        }

        let category = match budget_id {
            Some(id) => self
                .store
                .snapshot()
                .budget(id)
                .map(|b| b.category.clone())
                .ok_or_else(|| LedgerError::budget_not_found(id.to_string()))?,
            None => GOAL_CATEGORY.to_string(),
        };

        let completed = self
            .store
            .snapshot()
            .goal_transaction(goal.id, GoalEvent::GoalCompleted)
            .map(|t| t.id);
        if event == GoalEvent::GoalProgress && completed.is_some() {
            return Err(LedgerError::Validation(format!(
                "Goal '{}' is already completed; progress can no longer be recorded",
                goal.title
            )));
        }

        let description = match note {
            Some(note) => note.to_string(),
            None => match event {
                GoalEvent::GoalProgress => format!("Goal progress: {}", goal.title),
                GoalEvent::GoalCompleted => format!("Goal completed: {}", goal.title),
            },
        };

        let existing = self
            .store
            .snapshot()
            .goal_transaction(goal.id, event)
            .map(|t| t.id);
        match existing {
            Some(id) => self.store.edit_transaction(
                id,
                TransactionPatch {
                    amount: Some(amount),
                    description: Some(description),
                    ..Default::default()
                },
            ),
            None => {
                let currency = self
                    .store
                    .snapshot()
                    .account(account_id)
                    .map(|a| a.currency.as_str().to_string())
                    .ok_or_else(|| LedgerError::account_not_found(account_id.to_string()))?;
                let draft = TransactionDraft::expense(
                    account_id,
                    amount,
                    currency,
                    Utc::now().date_naive(),
                )
                .with_category(category)
                .with_description(description)
                .with_source(TransactionSource::Goal {
                    goal_id: goal.id,
                    event,
                });

                // The whole delivery must validate before the superseded
                // progress entry is removed; a rejected completion leaves
                // the ledger untouched
                let staged = self.store.build_transaction(draft)?;
                if event == GoalEvent::GoalCompleted {
                    let progress = self
                        .store
                        .snapshot()
                        .goal_transaction(goal.id, GoalEvent::GoalProgress)
                        .map(|t| t.id);
                    if let Some(id) = progress {
                        self.store.delete_transaction(id)?;
                    }
                }
                Ok(self.store.commit_transaction(staged))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccountKind, Cadence, GoalId, FINANCIAL_GOAL_CATEGORY};
    use crate::store::AccountDraft;

    fn goal() -> GoalRef {
        GoalRef {
            id: GoalId::new(),
            title: "Vacation fund".into(),
            current: 200.0,
            target: 1000.0,
            unit: "USD".into(),
            category: FINANCIAL_GOAL_CATEGORY.into(),
        }
    }

    fn store_with_account() -> (LedgerStore, AccountId) {
        let mut store = LedgerStore::new();
        let account = store
            .create_account(AccountDraft::new("Wallet", AccountKind::Cash, "USD"))
            .unwrap();
        (store, account.id)
    }

    #[test]
    fn test_progress_posts_tagged_expense() {
        let (mut store, account_id) = store_with_account();
        let goal = goal();

        let txn = AutoTrackingBridge::new(&mut store)
            .record_goal_event(
                &goal,
                Money::from_cents(20000),
                GoalEvent::GoalProgress,
                account_id,
                None,
                None,
            )
            .unwrap();

        assert_eq!(txn.goal_tag(), Some((goal.id, GoalEvent::GoalProgress)));
        assert_eq!(txn.category, GOAL_CATEGORY);
        assert_eq!(store.account_balance(account_id).unwrap().cents(), -20000);
    }

    #[test]
    fn test_redelivery_updates_instead_of_duplicating() {
        let (mut store, account_id) = store_with_account();
        let goal = goal();

        let mut bridge = AutoTrackingBridge::new(&mut store);
        bridge
            .record_goal_event(
                &goal,
                Money::from_cents(20000),
                GoalEvent::GoalProgress,
                account_id,
                None,
                None,
            )
            .unwrap();
        bridge
            .record_goal_event(
                &goal,
                Money::from_cents(35000),
                GoalEvent::GoalProgress,
                account_id,
                None,
                None,
            )
            .unwrap();

        // One transaction carrying the latest amount, not two summing to 550
        assert_eq!(store.snapshot().transactions.len(), 1);
        assert_eq!(store.snapshot().transactions[0].amount.cents(), 35000);
        assert_eq!(store.account_balance(account_id).unwrap().cents(), -35000);
    }

    #[test]
    fn test_completion_supersedes_progress() {
        let (mut store, account_id) = store_with_account();
        let goal = goal();

        let mut bridge = AutoTrackingBridge::new(&mut store);
        bridge
            .record_goal_event(
                &goal,
                Money::from_cents(20000),
                GoalEvent::GoalProgress,
                account_id,
                None,
                None,
            )
            .unwrap();
        bridge
            .record_goal_event(
                &goal,
                Money::from_cents(100000),
                GoalEvent::GoalCompleted,
                account_id,
                None,
                None,
            )
            .unwrap();

        let snapshot = store.snapshot();
        assert_eq!(snapshot.transactions.len(), 1);
        assert!(snapshot
            .goal_transaction(goal.id, GoalEvent::GoalCompleted)
            .is_some());
        assert!(snapshot
            .goal_transaction(goal.id, GoalEvent::GoalProgress)
            .is_none());
        assert_eq!(store.account_balance(account_id).unwrap().cents(), -100000);
    }

    #[test]
    fn test_rejected_completion_keeps_progress_entry() {
        let (mut store, account_id) = store_with_account();
        let goal = goal();

        let mut bridge = AutoTrackingBridge::new(&mut store);
        bridge
            .record_goal_event(
                &goal,
                Money::from_cents(20000),
                GoalEvent::GoalProgress,
                account_id,
                None,
                None,
            )
            .unwrap();

        // A completion that fails validation must not remove the progress
        // entry it would have superseded
        let zero = bridge.record_goal_event(
            &goal,
            Money::zero(),
            GoalEvent::GoalCompleted,
            account_id,
            None,
            None,
        );
        assert!(matches!(zero, Err(LedgerError::Validation(_))));

        let missing = bridge.record_goal_event(
            &goal,
            Money::from_cents(100000),
            GoalEvent::GoalCompleted,
            AccountId::new(),
            None,
            None,
        );
        assert!(missing.unwrap_err().is_not_found());

        assert_eq!(store.snapshot().transactions.len(), 1);
        assert!(store
            .snapshot()
            .goal_transaction(goal.id, GoalEvent::GoalProgress)
            .is_some());
        assert_eq!(store.account_balance(account_id).unwrap().cents(), -20000);
    }

    #[test]
    fn test_progress_after_completion_rejected() {
        let (mut store, account_id) = store_with_account();
        let goal = goal();

        let mut bridge = AutoTrackingBridge::new(&mut store);
        bridge
            .record_goal_event(
                &goal,
                Money::from_cents(100000),
                GoalEvent::GoalCompleted,
                account_id,
                None,
                None,
            )
            .unwrap();

        let late = bridge.record_goal_event(
            &goal,
            Money::from_cents(100),
            GoalEvent::GoalProgress,
            account_id,
            None,
            None,
        );
        assert!(matches!(late, Err(LedgerError::Validation(_))));
        assert_eq!(store.snapshot().transactions.len(), 1);
    }

    #[test]
    fn test_non_financial_goal_rejected() {
        let (mut store, account_id) = store_with_account();
        let mut reading = goal();
        reading.category = "health".into();
        reading.unit = "books".into();

        let result = AutoTrackingBridge::new(&mut store).record_goal_event(
            &reading,
            Money::from_cents(100),
            GoalEvent::GoalProgress,
            account_id,
            None,
            None,
        );
        assert!(matches!(result, Err(LedgerError::Validation(_))));
    }

    #[test]
    fn test_budget_link_takes_budget_category() {
        let (mut store, account_id) = store_with_account();
        let budget = store
            .create_budget("Travel", Money::from_cents(500000), "travel", Cadence::Yearly)
            .unwrap();
        let goal = goal();

        let txn = AutoTrackingBridge::new(&mut store)
            .record_goal_event(
                &goal,
                Money::from_cents(20000),
                GoalEvent::GoalProgress,
                account_id,
                Some(budget.id),
                None,
            )
            .unwrap();
        assert_eq!(txn.category, "travel");

        // The tagged expense counts against the linked budget
        let spent = store.recompute_budget_aggregate(budget.id).unwrap();
        assert_eq!(spent.cents(), 20000);
    }
}
