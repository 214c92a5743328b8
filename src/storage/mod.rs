pub mod json_backend;

use crate::{domain::Transaction, errors::Result};

pub use json_backend::JsonStorage;

/// Abstraction over persistence backends for per-profile transaction sets.
pub trait StorageBackend: Send + Sync {
    fn save_transactions(&self, profile: &str, transactions: &[Transaction]) -> Result<()>;
    fn load_transactions(&self, profile: &str) -> Result<Vec<Transaction>>;
    fn list_profiles(&self) -> Result<Vec<String>>;
}
