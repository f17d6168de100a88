//! SQLite adapter for the engagement ledger.

pub mod connection;
pub mod ledger_repository;

pub use connection::{create_pool, ensure_schema, open_ledger, ConnectionError, PoolConfig};
pub use ledger_repository::SqliteLedgerRepository;
