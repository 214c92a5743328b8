use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{FinanceError, Result};

/// A signed monetary transaction as the dashboard consumes it.
///
/// Amounts are stored in minor currency units (cents); the aggregation layer
/// always works with the absolute value, the [`TransactionKind`] tag decides
/// which side of the ledger it lands on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: i64,
    pub user_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<i64>,
    pub amount_cents: i64,
    pub kind: TransactionKind,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Transaction {
    pub fn new(
        id: i64,
        user_id: i64,
        amount_cents: i64,
        kind: TransactionKind,
        date: NaiveDate,
    ) -> Self {
        Self {
            id,
            user_id,
            session_id: None,
            amount_cents,
            kind,
            date,
            category: None,
            description: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Absolute amount in major currency units, regardless of stored sign.
    pub fn amount_major(&self) -> f64 {
        self.amount_cents.unsigned_abs() as f64 / 100.0
    }
}

/// Closed tag deciding which series a transaction contributes to.
///
/// Never inferred from the amount sign.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        };
        f.write_str(label)
    }
}

/// The wire shape of a transaction as the REST endpoint returns it.
///
/// Dates arrive as ISO strings; conversion to [`Transaction`] propagates a
/// parse failure rather than coercing a malformed date to a default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: i64,
    pub user_id: i64,
    #[serde(default)]
    pub session_id: Option<i64>,
    pub amount: i64,
    pub kind: TransactionKind,
    pub date: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl TryFrom<TransactionRecord> for Transaction {
    type Error = FinanceError;

    fn try_from(record: TransactionRecord) -> Result<Self> {
        let date: NaiveDate = record.date.trim().parse()?;
        Ok(Transaction {
            id: record.id,
            user_id: record.user_id,
            session_id: record.session_id,
            amount_cents: record.amount,
            kind: record.kind,
            date,
            category: record.category,
            description: record.description,
        })
    }
}

/// Parses a JSON array of wire records into domain transactions.
///
/// Fails on the first record whose date does not parse as an ISO calendar
/// date, or when the payload itself is not valid JSON.
pub fn parse_payload(data: &str) -> Result<Vec<Transaction>> {
    let records: Vec<TransactionRecord> = serde_json::from_str(data)?;
    records.into_iter().map(Transaction::try_from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_serializes_lowercase() {
        let json = serde_json::to_string(&TransactionKind::Income).unwrap();
        assert_eq!(json, "\"income\"");
        let kind: TransactionKind = serde_json::from_str("\"expense\"").unwrap();
        assert_eq!(kind, TransactionKind::Expense);
    }

    #[test]
    fn amount_major_uses_absolute_value() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let txn = Transaction::new(1, 7, -2550, TransactionKind::Expense, date);
        assert!((txn.amount_major() - 25.50).abs() < f64::EPSILON);
    }

    #[test]
    fn payload_parses_records() {
        let data = r#"[
            {"id": 1, "user_id": 7, "amount": 10000, "kind": "income", "date": "2024-03-10"},
            {"id": 2, "user_id": 7, "amount": 2000, "kind": "expense", "date": "2024-03-10", "category": "gear"}
        ]"#;
        let transactions = parse_payload(data).unwrap();
        assert_eq!(transactions.len(), 2);
        assert_eq!(
            transactions[0].date,
            NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
        );
        assert_eq!(transactions[1].category.as_deref(), Some("gear"));
    }

    #[test]
    fn malformed_date_propagates() {
        let data = r#"[{"id": 1, "user_id": 7, "amount": 100, "kind": "income", "date": "10/03/2024"}]"#;
        let err = parse_payload(data).unwrap_err();
        assert!(matches!(err, FinanceError::Date(_)));
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let data = r#"[{"id": 1, "user_id": 7, "amount": 100, "kind": "transfer", "date": "2024-03-10"}]"#;
        assert!(parse_payload(data).is_err());
    }
}
