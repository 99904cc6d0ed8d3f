//! The ledger store: single owner of all finance-domain state
//!
//! Every mutation flows through [`LedgerStore`] as a synchronous command.
//! Operations validate their full effect set against current state before
//! touching anything, so a failed operation leaves the ledger exactly as it
//! was. After a commit, registered observers are notified with a
//! [`LedgerEvent`] and, when a snapshot sink is attached, the new state is
//! written out in commit order.
//!
//! Readers get the committed snapshot; no component outside this module
//! mutates entity collections.

pub mod bridge;
pub mod intent;
pub mod snapshot;
pub mod views;

pub use bridge::AutoTrackingBridge;
pub use intent::{AppliedIntent, ParsedIntent};
pub use snapshot::LedgerSnapshot;
pub use views::TransactionFilter;

use chrono::{NaiveDate, NaiveTime, Utc};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{
    Account, AccountId, AccountKind, Budget, BudgetId, BudgetStatus, Cadence, CurrencyCode, Debt,
    DebtDirection, DebtId, Money, Transaction, TransactionId, TransactionKind, TransactionSource,
};
use crate::persist::SnapshotStore;

/// Identifier handed out by [`LedgerStore::subscribe`]
pub type SubscriptionId = u64;

type Subscriber = Box<dyn Fn(&LedgerEvent)>;

/// A committed mutation, delivered to observers after the fact
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerEvent {
    AccountCreated(AccountId),
    AccountUpdated(AccountId),
    AccountDeleted(AccountId),
    TransactionPosted(TransactionId),
    TransactionEdited(TransactionId),
    TransactionDeleted(TransactionId),
    BudgetCreated(BudgetId),
    BudgetUpdated(BudgetId),
    BudgetDeleted(BudgetId),
    DebtUpserted(DebtId),
    DebtSettled {
        debt_id: DebtId,
        posted: Option<TransactionId>,
    },
}

/// Input for creating an account
#[derive(Debug, Clone)]
pub struct AccountDraft {
    pub name: String,
    pub kind: AccountKind,
    /// Raw currency input; normalized, degrading to the base currency
    pub currency: String,
    pub color: String,
    pub is_hidden: bool,
}

impl AccountDraft {
    pub fn new(name: impl Into<String>, kind: AccountKind, currency: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            currency: currency.into(),
            color: String::new(),
            is_hidden: false,
        }
    }
}

/// Field-wise update for an account; `None` means no change
#[derive(Debug, Clone, Default)]
pub struct AccountPatch {
    pub name: Option<String>,
    pub is_hidden: Option<bool>,
    pub color: Option<String>,
}

/// Input for posting a transaction
#[derive(Debug, Clone)]
pub struct TransactionDraft {
    pub kind: TransactionKind,
    pub amount: Money,
    /// Raw currency input; must be supported and match the account
    pub currency: String,
    pub category: String,
    pub description: String,
    pub account_id: AccountId,
    pub transfer_to: Option<AccountId>,
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
    pub source: TransactionSource,
}

impl TransactionDraft {
    pub fn income(
        account_id: AccountId,
        amount: Money,
        currency: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            kind: TransactionKind::Income,
            amount,
            currency: currency.into(),
            category: String::new(),
            description: String::new(),
            account_id,
            transfer_to: None,
            date,
            time: None,
            source: TransactionSource::Manual,
        }
    }

    pub fn expense(
        account_id: AccountId,
        amount: Money,
        currency: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            kind: TransactionKind::Expense,
            ..Self::income(account_id, amount, currency, date)
        }
    }

    pub fn transfer(
        from: AccountId,
        to: AccountId,
        amount: Money,
        currency: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            kind: TransactionKind::Transfer,
            transfer_to: Some(to),
            ..Self::income(from, amount, currency, date)
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_source(mut self, source: TransactionSource) -> Self {
        self.source = source;
        self
    }

    pub fn with_time(mut self, time: NaiveTime) -> Self {
        self.time = Some(time);
        self
    }
}

/// Field-wise update for a transaction; `None` means no change
#[derive(Debug, Clone, Default)]
pub struct TransactionPatch {
    pub kind: Option<TransactionKind>,
    pub amount: Option<Money>,
    pub currency: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub account_id: Option<AccountId>,
    pub transfer_to: Option<Option<AccountId>>,
    pub date: Option<NaiveDate>,
    pub time: Option<Option<NaiveTime>>,
}

impl TransactionPatch {
    pub fn amount(amount: Money) -> Self {
        Self {
            amount: Some(amount),
            ..Default::default()
        }
    }
}

/// Field-wise update for a budget; `None` means no change
#[derive(Debug, Clone, Default)]
pub struct BudgetPatch {
    pub name: Option<String>,
    pub limit: Option<Money>,
    pub category: Option<String>,
    pub cadence: Option<Cadence>,
    pub color: Option<String>,
}

/// Input for creating or updating a debt
#[derive(Debug, Clone)]
pub struct DebtDraft {
    /// Present when updating an existing debt
    pub id: Option<DebtId>,
    pub direction: DebtDirection,
    pub person: String,
    pub amount: Money,
    pub currency: String,
    pub due_date: Option<NaiveDate>,
    pub description: String,
}

impl DebtDraft {
    pub fn new(
        direction: DebtDirection,
        person: impl Into<String>,
        amount: Money,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            direction,
            person: person.into(),
            amount,
            currency: currency.into(),
            due_date: None,
            description: String::new(),
        }
    }
}

/// Owner of the ledger state and its single mutation entry point
pub struct LedgerStore {
    snapshot: LedgerSnapshot,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: SubscriptionId,
    sink: Option<Box<dyn SnapshotStore>>,
    last_persist_error: Option<LedgerError>,
}

impl LedgerStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            snapshot: LedgerSnapshot::new(),
            subscribers: Vec::new(),
            next_subscription: 0,
            sink: None,
            last_persist_error: None,
        }
    }

    /// Create a store over an existing snapshot
    ///
    /// Cached balances in the snapshot are discarded and rebuilt from the
    /// transaction log; a log that fails reconciliation surfaces a
    /// consistency error and no store is produced.
    pub fn with_snapshot(mut snapshot: LedgerSnapshot) -> LedgerResult<Self> {
        snapshot.rebuild_balances()?;
        Ok(Self {
            snapshot,
            ..Self::new()
        })
    }

    /// Load from a snapshot store, starting empty when nothing is persisted
    pub fn load_from(store: &dyn SnapshotStore) -> LedgerResult<Self> {
        match store.load()? {
            Some(snapshot) => Self::with_snapshot(snapshot),
            None => Ok(Self::new()),
        }
    }

    /// Attach a snapshot sink; committed state is saved after every mutation
    ///
    /// Saves are sequenced in commit order. A failed save never fails the
    /// mutation; the error is parked in [`last_persist_error`].
    ///
    /// [`last_persist_error`]: LedgerStore::last_persist_error
    pub fn attach(&mut self, sink: Box<dyn SnapshotStore>) {
        self.sink = Some(sink);
    }

    /// The most recent auto-save failure, if any
    pub fn last_persist_error(&self) -> Option<&LedgerError> {
        self.last_persist_error.as_ref()
    }

    /// The committed state
    pub fn snapshot(&self) -> &LedgerSnapshot {
        &self.snapshot
    }

    /// Register an observer called after each committed mutation
    pub fn subscribe(&mut self, callback: impl Fn(&LedgerEvent) + 'static) -> SubscriptionId {
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove an observer
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
    }

    // ----- accounts -------------------------------------------------------

    /// Create a new account with a zero balance
    pub fn create_account(&mut self, draft: AccountDraft) -> LedgerResult<Account> {
        let currency = CurrencyCode::normalize_or_base(&draft.currency);
        let mut account = Account::new(draft.name, draft.kind, currency);
        account.color = draft.color;
        account.is_hidden = draft.is_hidden;
        account
            .validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        self.snapshot.accounts.push(account.clone());
        self.commit(LedgerEvent::AccountCreated(account.id));
        Ok(account)
    }

    /// Update account display fields
    pub fn update_account(&mut self, id: AccountId, patch: AccountPatch) -> LedgerResult<Account> {
        let mut account = self
            .snapshot
            .account(id)
            .cloned()
            .ok_or_else(|| LedgerError::account_not_found(id.to_string()))?;

        if let Some(name) = patch.name {
            account.name = name;
        }
        if let Some(is_hidden) = patch.is_hidden {
            account.is_hidden = is_hidden;
        }
        if let Some(color) = patch.color {
            account.color = color;
        }
        account.updated_at = Utc::now();
        account
            .validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        if let Some(slot) = self.snapshot.account_mut(id) {
            *slot = account.clone();
        }
        self.commit(LedgerEvent::AccountUpdated(id));
        Ok(account)
    }

    /// Delete an account
    ///
    /// Rejected while any transaction still posts to the account; the caller
    /// must delete or move those transactions first.
    pub fn delete_account(&mut self, id: AccountId) -> LedgerResult<()> {
        if self.snapshot.account(id).is_none() {
            return Err(LedgerError::account_not_found(id.to_string()));
        }
        if self.snapshot.account_has_transactions(id) {
            return Err(LedgerError::Validation(format!(
                "Account {} still has transactions and cannot be deleted",
                id
            )));
        }

        self.snapshot.accounts.retain(|a| a.id != id);
        self.commit(LedgerEvent::AccountDeleted(id));
        Ok(())
    }

    /// Current cached balance of an account
    pub fn account_balance(&self, id: AccountId) -> LedgerResult<Money> {
        self.snapshot
            .account(id)
            .map(|a| a.balance)
            .ok_or_else(|| LedgerError::account_not_found(id.to_string()))
    }

    /// Reconcile an account to an externally observed balance
    ///
    /// Posts an adjustment transaction for the difference so the log stays
    /// the source of truth. Returns `None` when the balances already agree.
    pub fn reconcile_account(
        &mut self,
        id: AccountId,
        actual: Money,
        date: NaiveDate,
    ) -> LedgerResult<Option<Transaction>> {
        let account = self
            .snapshot
            .account(id)
            .ok_or_else(|| LedgerError::account_not_found(id.to_string()))?;

        let diff = actual - account.balance;
        if diff.is_zero() {
            return Ok(None);
        }

        let kind = if diff.is_positive() {
            TransactionKind::Income
        } else {
            TransactionKind::Expense
        };
        let currency = account.currency.as_str().to_string();
        let draft = TransactionDraft {
            kind,
            amount: diff.abs(),
            currency,
            category: "adjustment".into(),
            description: "Balance reconciliation".into(),
            account_id: id,
            transfer_to: None,
            date,
            time: None,
            source: TransactionSource::Manual,
        };
        self.create_transaction(draft).map(Some)
    }

    // ----- transactions ---------------------------------------------------

    /// Post a new transaction, updating affected balances
    pub fn create_transaction(&mut self, draft: TransactionDraft) -> LedgerResult<Transaction> {
        let txn = self.build_transaction(draft)?;
        Ok(self.commit_transaction(txn))
    }

    /// Apply and commit a transaction staged by [`build_transaction`]
    ///
    /// The transaction must already be fully validated; this step is
    /// infallible.
    ///
    /// [`build_transaction`]: LedgerStore::build_transaction
    fn commit_transaction(&mut self, txn: Transaction) -> Transaction {
        self.apply_postings(&txn, false);
        self.snapshot.transactions.push(txn.clone());
        self.commit(LedgerEvent::TransactionPosted(txn.id));
        txn
    }

    /// Edit a posted transaction
    ///
    /// Reverses the original postings and applies the patched ones as one
    /// atomic step; a validation failure leaves the original untouched.
    pub fn edit_transaction(
        &mut self,
        id: TransactionId,
        patch: TransactionPatch,
    ) -> LedgerResult<Transaction> {
        let position = self
            .snapshot
            .transactions
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| LedgerError::transaction_not_found(id.to_string()))?;
        let old = self.snapshot.transactions[position].clone();

        let mut candidate = old.clone();
        if let Some(kind) = patch.kind {
            candidate.kind = kind;
            if kind != TransactionKind::Transfer {
                candidate.transfer_to = None;
            }
        }
        if let Some(amount) = patch.amount {
            candidate.amount = amount;
        }
        if let Some(currency) = patch.currency {
            candidate.currency = CurrencyCode::try_new(&currency).ok_or_else(|| {
                LedgerError::Validation(format!("Unsupported currency: {}", currency))
            })?;
        }
        if let Some(category) = patch.category {
            candidate.category = category;
        }
        if let Some(description) = patch.description {
            candidate.description = description;
        }
        if let Some(account_id) = patch.account_id {
            candidate.account_id = account_id;
        }
        if let Some(transfer_to) = patch.transfer_to {
            candidate.transfer_to = transfer_to;
        }
        if let Some(date) = patch.date {
            candidate.date = date;
        }
        if let Some(time) = patch.time {
            candidate.time = time;
        }

        candidate
            .validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;
        self.check_transaction_accounts(&candidate)?;

        // Commit point: reversal and reapplication happen back to back, so
        // no intermediate state is ever observable
        self.apply_postings(&old, true);
        self.apply_postings(&candidate, false);
        self.snapshot.transactions[position] = candidate.clone();
        self.commit(LedgerEvent::TransactionEdited(id));
        Ok(candidate)
    }

    /// Delete a transaction, reversing its postings
    pub fn delete_transaction(&mut self, id: TransactionId) -> LedgerResult<Transaction> {
        let position = self
            .snapshot
            .transactions
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| LedgerError::transaction_not_found(id.to_string()))?;

        let txn = self.snapshot.transactions.remove(position);
        self.apply_postings(&txn, true);
        self.commit(LedgerEvent::TransactionDeleted(id));
        Ok(txn)
    }

    // ----- budgets --------------------------------------------------------

    /// Create a budget
    pub fn create_budget(
        &mut self,
        name: impl Into<String>,
        limit: Money,
        category: impl Into<String>,
        cadence: Cadence,
    ) -> LedgerResult<Budget> {
        let budget = Budget::new(name, limit, category, cadence);
        budget
            .validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        self.snapshot.budgets.push(budget.clone());
        self.commit(LedgerEvent::BudgetCreated(budget.id));
        Ok(budget)
    }

    /// Update a budget
    ///
    /// Changing the category or cadence changes which expenses count; the
    /// `spent` aggregate is derived on read, so no recompute step is needed.
    pub fn update_budget(&mut self, id: BudgetId, patch: BudgetPatch) -> LedgerResult<Budget> {
        let mut budget = self
            .snapshot
            .budget(id)
            .cloned()
            .ok_or_else(|| LedgerError::budget_not_found(id.to_string()))?;

        if let Some(name) = patch.name {
            budget.name = name;
        }
        if let Some(limit) = patch.limit {
            budget.limit = limit;
        }
        if let Some(category) = patch.category {
            budget.category = category;
        }
        if let Some(cadence) = patch.cadence {
            budget.cadence = cadence;
        }
        if let Some(color) = patch.color {
            budget.color = color;
        }
        budget
            .validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        if let Some(slot) = self.snapshot.budgets.iter_mut().find(|b| b.id == id) {
            *slot = budget.clone();
        }
        self.commit(LedgerEvent::BudgetUpdated(id));
        Ok(budget)
    }

    /// Delete a budget
    pub fn delete_budget(&mut self, id: BudgetId) -> LedgerResult<()> {
        if self.snapshot.budget(id).is_none() {
            return Err(LedgerError::budget_not_found(id.to_string()));
        }
        self.snapshot.budgets.retain(|b| b.id != id);
        self.commit(LedgerEvent::BudgetDeleted(id));
        Ok(())
    }

    /// Budget health for the window containing `date`
    pub fn budget_status_as_of(&self, id: BudgetId, date: NaiveDate) -> LedgerResult<BudgetStatus> {
        let budget = self
            .snapshot
            .budget(id)
            .ok_or_else(|| LedgerError::budget_not_found(id.to_string()))?;
        let spent = self.spent_for(budget, date);
        Ok(BudgetStatus::compute(budget.limit, spent))
    }

    /// Budget health for the current window
    pub fn budget_status(&self, id: BudgetId) -> LedgerResult<BudgetStatus> {
        self.budget_status_as_of(id, Utc::now().date_naive())
    }

    /// Deterministically recompute a budget's `spent` aggregate from the log
    ///
    /// `spent` is never stored, so this is also the reconciliation entry
    /// point after bulk edits: whatever incremental path produced the
    /// current reads, this re-scan is the authoritative figure.
    pub fn recompute_budget_aggregate_as_of(
        &self,
        id: BudgetId,
        date: NaiveDate,
    ) -> LedgerResult<Money> {
        let budget = self
            .snapshot
            .budget(id)
            .ok_or_else(|| LedgerError::budget_not_found(id.to_string()))?;
        Ok(self.spent_for(budget, date))
    }

    /// Recompute `spent` for the current window
    pub fn recompute_budget_aggregate(&self, id: BudgetId) -> LedgerResult<Money> {
        self.recompute_budget_aggregate_as_of(id, Utc::now().date_naive())
    }

    fn spent_for(&self, budget: &Budget, date: NaiveDate) -> Money {
        let window = budget.cadence.window_containing(date);
        self.snapshot
            .transactions
            .iter()
            .filter(|t| {
                t.kind == TransactionKind::Expense
                    && t.category.eq_ignore_ascii_case(&budget.category)
                    && window.contains(t.date)
            })
            .map(|t| t.amount)
            .sum()
    }

    // ----- debts ----------------------------------------------------------

    /// Create or update a debt
    pub fn upsert_debt(&mut self, draft: DebtDraft) -> LedgerResult<Debt> {
        let currency = CurrencyCode::try_new(&draft.currency).ok_or_else(|| {
            LedgerError::Validation(format!("Unsupported currency: {}", draft.currency))
        })?;

        let mut debt = match draft.id {
            Some(id) => self
                .snapshot
                .debt(id)
                .cloned()
                .ok_or_else(|| LedgerError::debt_not_found(id.to_string()))?,
            None => Debt::new(draft.direction, "", Money::zero(), currency.clone()),
        };

        debt.direction = draft.direction;
        debt.person = draft.person;
        debt.amount = draft.amount;
        debt.currency = currency;
        debt.due_date = draft.due_date;
        debt.description = draft.description;
        debt.validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        match self.snapshot.debt_mut(debt.id) {
            Some(slot) => *slot = debt.clone(),
            None => self.snapshot.debts.push(debt.clone()),
        }
        self.commit(LedgerEvent::DebtUpserted(debt.id));
        Ok(debt)
    }

    /// Settle a debt, optionally posting the settlement to an account
    ///
    /// Idempotent: settling an already-settled debt is a no-op that returns
    /// the debt unchanged, and at most one settlement transaction ever
    /// exists per debt.
    pub fn settle_debt(&mut self, id: DebtId, post_to: Option<AccountId>) -> LedgerResult<Debt> {
        let debt = self
            .snapshot
            .debt(id)
            .cloned()
            .ok_or_else(|| LedgerError::debt_not_found(id.to_string()))?;

        if debt.settled {
            return Ok(debt);
        }

        let staged = match post_to {
            Some(account_id) if self.snapshot.settlement_transaction(id).is_none() => {
                let kind = match debt.direction {
                    // Paying off what the user owes is money out
                    DebtDirection::OwedByMe => TransactionKind::Expense,
                    DebtDirection::OwedToMe => TransactionKind::Income,
                };
                let draft = TransactionDraft {
                    kind,
                    amount: debt.amount,
                    currency: debt.currency.as_str().to_string(),
                    category: "debt".into(),
                    description: format!("Settlement: {}", debt.person),
                    account_id,
                    transfer_to: None,
                    date: Utc::now().date_naive(),
                    time: None,
                    source: TransactionSource::DebtSettlement { debt_id: id },
                };
                Some(self.build_transaction(draft)?)
            }
            _ => None,
        };

        // All validation passed; apply the full effect set
        let posted = staged.as_ref().map(|t| t.id);
        if let Some(txn) = staged {
            self.apply_postings(&txn, false);
            self.snapshot.transactions.push(txn);
        }
        let settled = match self.snapshot.debt_mut(id) {
            Some(debt) => {
                debt.settle();
                debt.clone()
            }
            None => debt,
        };
        self.commit(LedgerEvent::DebtSettled {
            debt_id: id,
            posted,
        });
        Ok(settled)
    }

    /// Total outstanding amount across unsettled debts in one direction
    pub fn debt_totals(&self, direction: DebtDirection) -> Money {
        self.snapshot
            .debts
            .iter()
            .filter(|d| !d.settled && d.direction == direction)
            .map(|d| d.amount)
            .sum()
    }

    // ----- internals ------------------------------------------------------

    /// Build and fully validate a transaction without mutating state
    fn build_transaction(&self, draft: TransactionDraft) -> LedgerResult<Transaction> {
        let currency = CurrencyCode::try_new(&draft.currency).ok_or_else(|| {
            LedgerError::Validation(format!("Unsupported currency: {}", draft.currency))
        })?;

        let mut txn = Transaction::new(
            draft.kind,
            draft.account_id,
            draft.amount,
            currency,
            draft.date,
        );
        txn.category = draft.category;
        txn.description = draft.description;
        txn.transfer_to = draft.transfer_to;
        txn.time = draft.time;
        txn.source = draft.source;

        txn.validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;
        self.check_transaction_accounts(&txn)?;
        Ok(txn)
    }

    /// Verify referenced accounts exist and currencies line up
    fn check_transaction_accounts(&self, txn: &Transaction) -> LedgerResult<()> {
        let account = self
            .snapshot
            .account(txn.account_id)
            .ok_or_else(|| LedgerError::account_not_found(txn.account_id.to_string()))?;
        if account.currency != txn.currency {
            return Err(LedgerError::Validation(format!(
                "Transaction currency {} does not match account currency {}",
                txn.currency, account.currency
            )));
        }

        if let Some(to) = txn.transfer_to {
            let dest = self
                .snapshot
                .account(to)
                .ok_or_else(|| LedgerError::account_not_found(to.to_string()))?;
            if dest.currency != txn.currency {
                return Err(LedgerError::Validation(format!(
                    "Transfer currency {} does not match destination currency {}",
                    txn.currency, dest.currency
                )));
            }
        }

        Ok(())
    }

    /// Apply (or reverse) a transaction's postings to cached balances
    ///
    /// Accounts were checked at validation time; a missing account here
    /// would be a store bug, and the posting is skipped rather than panic.
    fn apply_postings(&mut self, txn: &Transaction, reverse: bool) {
        for posting in txn.postings() {
            let amount = if reverse {
                -posting.amount
            } else {
                posting.amount
            };
            if let Some(account) = self.snapshot.account_mut(posting.account_id) {
                account.post(amount);
            }
        }
    }

    /// Persist and notify after a committed mutation
    fn commit(&mut self, event: LedgerEvent) {
        if let Some(sink) = &self.sink {
            match sink.save(&self.snapshot) {
                Ok(()) => self.last_persist_error = None,
                Err(e) => self.last_persist_error = Some(e),
            }
        }
        for (_, callback) in &self.subscribers {
            callback(&event);
        }
    }
}

impl Default for LedgerStore {
    fn default() -> Self {
        Self::new()
    }
}
