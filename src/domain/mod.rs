//! Domain models for dashboard transactions and reporting periods.

pub mod period;
pub mod transaction;

pub use period::{DateWindow, Period};
pub use transaction::{parse_payload, Transaction, TransactionKind, TransactionRecord};
