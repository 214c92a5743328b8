use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{Period, Transaction, TransactionKind};

/// One calendar day's aggregated totals, in major currency units.
///
/// `balance == income - expense` holds at all times; the balance is
/// recomputed after every contribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayBucket {
    pub date: NaiveDate,
    pub income: f64,
    pub expense: f64,
    pub balance: f64,
}

impl DayBucket {
    fn zeroed(date: NaiveDate) -> Self {
        Self {
            date,
            income: 0.0,
            expense: 0.0,
            balance: 0.0,
        }
    }

    fn apply(&mut self, kind: TransactionKind, amount: f64) {
        match kind {
            TransactionKind::Income => self.income += amount,
            TransactionKind::Expense => self.expense += amount,
        }
        self.balance = self.income - self.expense;
    }
}

/// Buckets the transactions into a dense daily series over the resolved
/// reporting window.
///
/// The window is anchored at the supplied `today` rather than the system
/// clock, keeping the function deterministic. Every calendar day in the
/// window gets exactly one bucket, in ascending order, even when no
/// transaction touches it; transactions dated outside the window are dropped
/// silently. All dates are naive calendar dates: if the upstream captured
/// transaction dates and the anchor in different zones, boundary days can
/// shift by one.
pub fn aggregate(transactions: &[Transaction], period: Period, today: NaiveDate) -> Vec<DayBucket> {
    let window = period.resolve(today);
    let mut buckets: Vec<DayBucket> = window.dates().map(DayBucket::zeroed).collect();

    for txn in transactions {
        if !window.contains(txn.date) {
            continue;
        }
        // Dense scaffold, so the day offset is the bucket index.
        let idx = (txn.date - window.start).num_days() as usize;
        buckets[idx].apply(txn.kind, txn.amount_major());
    }

    buckets
}
