use serde::Serialize;

use crate::config::DateFormatStyle;
use crate::dashboard::DayBucket;

/// The chart-facing view of an aggregated period: one label per bucket and
/// three parallel numeric series, plus period totals for the summary line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub income: Vec<f64>,
    pub expense: Vec<f64>,
    pub balance: Vec<f64>,
    pub total_income: f64,
    pub total_expense: f64,
    pub net_balance: f64,
}

impl ChartSeries {
    pub fn from_buckets(buckets: &[DayBucket], style: DateFormatStyle) -> Self {
        let pattern = style.pattern();
        let labels = buckets
            .iter()
            .map(|b| b.date.format(pattern).to_string())
            .collect();
        let income: Vec<f64> = buckets.iter().map(|b| b.income).collect();
        let expense: Vec<f64> = buckets.iter().map(|b| b.expense).collect();
        let balance: Vec<f64> = buckets.iter().map(|b| b.balance).collect();
        let total_income = income.iter().sum();
        let total_expense = expense.iter().sum();
        Self {
            labels,
            income,
            expense,
            balance,
            total_income,
            total_expense,
            net_balance: total_income - total_expense,
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// True when no transaction contributed to any bucket, so the
    /// presentation layer can render its placeholder instead of bars.
    pub fn is_empty(&self) -> bool {
        self.total_income.abs() < f64::EPSILON && self.total_expense.abs() < f64::EPSILON
    }
}
