//! End-to-end scenarios exercising the engine across module boundaries

use chrono::NaiveDate;
use tempfile::TempDir;

use pocket_ledger::models::{
    AccountKind, Cadence, CurrencyCode, DebtDirection, GoalEvent, GoalId, GoalRef, Money,
    TransactionKind, FINANCIAL_GOAL_CATEGORY,
};
use pocket_ledger::store::{
    AccountDraft, AutoTrackingBridge, DebtDraft, LedgerStore, TransactionDraft, TransactionFilter,
    TransactionPatch,
};
use pocket_ledger::{JsonSnapshotStore, SnapshotStore};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn financial_goal(title: &str) -> GoalRef {
    GoalRef {
        id: GoalId::new(),
        title: title.into(),
        current: 0.0,
        target: 1000.0,
        unit: "USD".into(),
        category: FINANCIAL_GOAL_CATEGORY.into(),
    }
}

#[test]
fn expense_edit_delete_returns_balance_to_zero() {
    let mut store = LedgerStore::new();
    let account = store
        .create_account(AccountDraft::new("Checking", AccountKind::Card, "USD"))
        .unwrap();
    assert_eq!(store.account_balance(account.id).unwrap().cents(), 0);

    let txn = store
        .create_transaction(TransactionDraft::expense(
            account.id,
            Money::from_cents(5000),
            "USD",
            d(2025, 3, 10),
        ))
        .unwrap();
    assert_eq!(store.account_balance(account.id).unwrap().cents(), -5000);

    store
        .edit_transaction(txn.id, TransactionPatch::amount(Money::from_cents(3000)))
        .unwrap();
    assert_eq!(store.account_balance(account.id).unwrap().cents(), -3000);

    store.delete_transaction(txn.id).unwrap();
    assert_eq!(store.account_balance(account.id).unwrap().cents(), 0);
    assert!(store.snapshot().verify_balances().is_ok());
}

#[test]
fn transfers_net_to_zero_across_accounts() {
    let mut store = LedgerStore::new();
    let a = store
        .create_account(AccountDraft::new("A", AccountKind::Cash, "USD"))
        .unwrap();
    let b = store
        .create_account(AccountDraft::new("B", AccountKind::Savings, "USD"))
        .unwrap();

    store
        .create_transaction(TransactionDraft::income(
            a.id,
            Money::from_cents(10000),
            "USD",
            d(2025, 3, 1),
        ))
        .unwrap();
    store
        .create_transaction(TransactionDraft::transfer(
            a.id,
            b.id,
            Money::from_cents(4000),
            "USD",
            d(2025, 3, 2),
        ))
        .unwrap();

    let total = store.account_balance(a.id).unwrap() + store.account_balance(b.id).unwrap();
    assert_eq!(total.cents(), 10000);
    assert_eq!(store.account_balance(a.id).unwrap().cents(), 6000);
    assert_eq!(store.account_balance(b.id).unwrap().cents(), 4000);
}

#[test]
fn goal_progress_is_idempotent_per_tag() {
    let mut store = LedgerStore::new();
    let account = store
        .create_account(AccountDraft::new("Wallet", AccountKind::Cash, "USD"))
        .unwrap();
    let goal = financial_goal("Vacation");

    let mut bridge = AutoTrackingBridge::new(&mut store);
    bridge
        .record_goal_event(
            &goal,
            Money::from_cents(20000),
            GoalEvent::GoalProgress,
            account.id,
            None,
            None,
        )
        .unwrap();
    bridge
        .record_goal_event(
            &goal,
            Money::from_cents(35000),
            GoalEvent::GoalProgress,
            account.id,
            None,
            None,
        )
        .unwrap();

    let tagged: Vec<_> = store
        .snapshot()
        .transactions
        .iter()
        .filter(|t| t.goal_tag() == Some((goal.id, GoalEvent::GoalProgress)))
        .collect();
    assert_eq!(tagged.len(), 1);
    assert_eq!(tagged[0].amount.cents(), 35000);
    assert_eq!(store.account_balance(account.id).unwrap().cents(), -35000);
}

#[test]
fn settling_twice_posts_one_settlement() {
    let mut store = LedgerStore::new();
    let account = store
        .create_account(AccountDraft::new("Wallet", AccountKind::Cash, "USD"))
        .unwrap();
    let debt = store
        .upsert_debt(DebtDraft::new(
            DebtDirection::OwedByMe,
            "Alex",
            Money::from_cents(2500),
            "USD",
        ))
        .unwrap();

    store.settle_debt(debt.id, Some(account.id)).unwrap();
    store.settle_debt(debt.id, Some(account.id)).unwrap();

    let settlements: Vec<_> = store
        .snapshot()
        .transactions
        .iter()
        .filter(|t| t.settles_debt() == Some(debt.id))
        .collect();
    assert_eq!(settlements.len(), 1);
    assert_eq!(store.account_balance(account.id).unwrap().cents(), -2500);
    assert_eq!(store.debt_totals(DebtDirection::OwedByMe).cents(), 0);
}

#[test]
fn recomputed_budget_aggregate_survives_any_edit_history() {
    let mut store = LedgerStore::new();
    let account = store
        .create_account(AccountDraft::new("Card", AccountKind::Card, "USD"))
        .unwrap();
    let budget = store
        .create_budget(
            "Groceries",
            Money::from_cents(40000),
            "groceries",
            Cadence::Monthly,
        )
        .unwrap();

    let first = store
        .create_transaction(
            TransactionDraft::expense(account.id, Money::from_cents(5000), "USD", d(2025, 4, 3))
                .with_category("groceries"),
        )
        .unwrap();
    let second = store
        .create_transaction(
            TransactionDraft::expense(account.id, Money::from_cents(7000), "USD", d(2025, 4, 9))
                .with_category("groceries"),
        )
        .unwrap();
    store
        .edit_transaction(first.id, TransactionPatch::amount(Money::from_cents(6500)))
        .unwrap();
    store.delete_transaction(second.id).unwrap();
    store
        .create_transaction(
            TransactionDraft::expense(account.id, Money::from_cents(1000), "USD", d(2025, 4, 20))
                .with_category("Groceries"),
        )
        .unwrap();

    let spent = store
        .recompute_budget_aggregate_as_of(budget.id, d(2025, 4, 15))
        .unwrap();
    assert_eq!(spent.cents(), 7500);

    let status = store.budget_status_as_of(budget.id, d(2025, 4, 15)).unwrap();
    assert_eq!(status.spent, spent);
    assert_eq!(status.remaining.cents(), 32500);
}

#[test]
fn currency_normalization_contract() {
    assert_eq!(
        CurrencyCode::normalize_or_base("usd ").as_str(),
        "USD"
    );
    assert_eq!(
        CurrencyCode::normalize("zzz", &CurrencyCode::base()).as_str(),
        "USD"
    );
    assert!(CurrencyCode::is_supported("RUB"));
    assert!(!CurrencyCode::is_supported("DOGE"));
}

#[test]
fn snapshot_roundtrips_through_disk_and_rebuilds_balances() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("ledger.json");

    let account_id;
    {
        let mut store = LedgerStore::new();
        store.attach(Box::new(JsonSnapshotStore::new(path.clone())));

        let account = store
            .create_account(AccountDraft::new("Wallet", AccountKind::Cash, "USD"))
            .unwrap();
        account_id = account.id;
        store
            .create_transaction(TransactionDraft::income(
                account_id,
                Money::from_cents(12345),
                "USD",
                d(2025, 5, 1),
            ))
            .unwrap();
        assert!(store.last_persist_error().is_none());
    }

    // Tamper with the cached balance on disk; load must trust only the log
    let mut raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    raw["accounts"][0]["balance"] = serde_json::json!(999999);
    std::fs::write(&path, serde_json::to_string(&raw).unwrap()).unwrap();

    let sink = JsonSnapshotStore::new(path);
    let reloaded = LedgerStore::load_from(&sink).unwrap();
    assert_eq!(reloaded.account_balance(account_id).unwrap().cents(), 12345);
    assert!(reloaded.snapshot().verify_balances().is_ok());
}

#[test]
fn persist_failure_parks_error_without_failing_mutation() {
    struct FailingSink;
    impl SnapshotStore for FailingSink {
        fn load(&self) -> pocket_ledger::LedgerResult<Option<pocket_ledger::LedgerSnapshot>> {
            Ok(None)
        }
        fn save(
            &self,
            _snapshot: &pocket_ledger::LedgerSnapshot,
        ) -> pocket_ledger::LedgerResult<()> {
            Err(pocket_ledger::LedgerError::Storage("disk full".into()))
        }
    }

    let mut store = LedgerStore::new();
    store.attach(Box::new(FailingSink));

    let account = store
        .create_account(AccountDraft::new("Wallet", AccountKind::Cash, "USD"))
        .unwrap();
    assert!(store.last_persist_error().is_some());
    assert_eq!(store.snapshot().accounts.len(), 1);
    assert_eq!(store.account_balance(account.id).unwrap().cents(), 0);
}

#[test]
fn filters_project_without_mutating() {
    let mut store = LedgerStore::new();
    let account = store
        .create_account(AccountDraft::new("Wallet", AccountKind::Cash, "USD"))
        .unwrap();

    for (cents, category, date) in [
        (1000, "food", d(2025, 6, 2)),
        (2000, "food", d(2025, 6, 10)),
        (3000, "transport", d(2025, 6, 5)),
    ] {
        store
            .create_transaction(
                TransactionDraft::expense(account.id, Money::from_cents(cents), "USD", date)
                    .with_category(category),
            )
            .unwrap();
    }

    let food = TransactionFilter::new()
        .category("food")
        .kind(TransactionKind::Expense)
        .date_from(d(2025, 6, 1))
        .date_to(d(2025, 6, 30))
        .run(store.snapshot());
    assert_eq!(food.len(), 2);
    assert_eq!(food[0].date, d(2025, 6, 10));

    // Snapshot untouched by the read
    assert_eq!(store.snapshot().transactions.len(), 3);
}
