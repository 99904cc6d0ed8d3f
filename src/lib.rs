//! pocket-ledger: the consistency engine behind a personal finance tracker
//!
//! Accounts, transactions, budgets, and debts live in one owned state
//! object, the [`LedgerStore`], mutated only through its synchronous
//! command interface. The transaction log is the source of truth; account
//! balances and budget aggregates are derived caches rebuilt or recomputed
//! from it. Goal events from the planner enter through the
//! [`AutoTrackingBridge`], and voice/AI commands through
//! [`ParsedIntent`] records, both funneling into the same validated
//! mutations.
//!
//! # Example
//!
//! ```
//! use chrono::Utc;
//! use pocket_ledger::models::{AccountKind, Money};
//! use pocket_ledger::store::{AccountDraft, LedgerStore, TransactionDraft};
//!
//! # fn main() -> Result<(), pocket_ledger::LedgerError> {
//! let mut store = LedgerStore::new();
//! let wallet = store.create_account(AccountDraft::new("Wallet", AccountKind::Cash, "USD"))?;
//!
//! store.create_transaction(
//!     TransactionDraft::expense(
//!         wallet.id,
//!         Money::from_cents(1250),
//!         "USD",
//!         Utc::now().date_naive(),
//!     )
//!     .with_category("food"),
//! )?;
//!
//! assert_eq!(store.account_balance(wallet.id)?.cents(), -1250);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod persist;
pub mod store;

pub use config::{LedgerPaths, Settings};
pub use error::{LedgerError, LedgerResult};
pub use persist::{JsonSnapshotStore, SnapshotStore};
pub use store::{AutoTrackingBridge, LedgerSnapshot, LedgerStore, ParsedIntent};
