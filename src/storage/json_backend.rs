use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    domain::Transaction,
    errors::{FinanceError, Result},
    utils::{app_data_dir, ensure_dir},
};

use super::StorageBackend;

const TRANSACTIONS_DIR: &str = "transactions";
const FILE_EXTENSION: &str = "json";
const TMP_SUFFIX: &str = "tmp";

/// JSON-file persistence rooted in the app data directory, one file per
/// profile.
#[derive(Clone)]
pub struct JsonStorage {
    transactions_dir: PathBuf,
}

impl JsonStorage {
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let base = root.unwrap_or_else(app_data_dir);
        ensure_dir(&base)?;
        let transactions_dir = base.join(TRANSACTIONS_DIR);
        ensure_dir(&transactions_dir)?;
        Ok(Self { transactions_dir })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn profile_path(&self, profile: &str) -> PathBuf {
        self.transactions_dir
            .join(format!("{}.{}", canonical_name(profile), FILE_EXTENSION))
    }
}

impl StorageBackend for JsonStorage {
    fn save_transactions(&self, profile: &str, transactions: &[Transaction]) -> Result<()> {
        let path = self.profile_path(profile);
        let json = serde_json::to_string_pretty(transactions)?;
        write_atomic(&path, &json)?;
        tracing::debug!(profile, count = transactions.len(), "saved transactions");
        Ok(())
    }

    fn load_transactions(&self, profile: &str) -> Result<Vec<Transaction>> {
        let path = self.profile_path(profile);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&data)?)
    }

    fn list_profiles(&self) -> Result<Vec<String>> {
        if !self.transactions_dir.exists() {
            return Ok(Vec::new());
        }
        let mut profiles = Vec::new();
        for entry in fs::read_dir(&self.transactions_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(FILE_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                profiles.push(stem.to_string());
            }
        }
        profiles.sort();
        Ok(profiles)
    }
}

/// Slug applied to profile names so they are safe as file names.
fn canonical_name(name: &str) -> String {
    let slug: String = name
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect();
    if slug.is_empty() {
        "default".into()
    } else {
        slug
    }
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    let tmp = path.with_extension(TMP_SUFFIX);
    fs::write(&tmp, data)?;
    fs::rename(&tmp, path).map_err(|err| {
        FinanceError::Storage(format!(
            "failed to persist `{}`: {err}",
            path.display()
        ))
    })?;
    Ok(())
}
