use std::collections::HashMap;
use std::fmt;

use chrono::{Datelike, Duration, Months, NaiveDate};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{FinanceError, Result};

/// Reporting windows surfaced by the dashboard period selector.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Period {
    LastSevenDays,
    LastThirtyDays,
    CurrentMonth,
}

static PERIOD_TAGS: Lazy<HashMap<&'static str, Period>> = Lazy::new(|| {
    HashMap::from([
        ("7d", Period::LastSevenDays),
        ("last7", Period::LastSevenDays),
        ("last-7-days", Period::LastSevenDays),
        ("week", Period::LastSevenDays),
        ("30d", Period::LastThirtyDays),
        ("last30", Period::LastThirtyDays),
        ("last-30-days", Period::LastThirtyDays),
        ("month", Period::CurrentMonth),
        ("current-month", Period::CurrentMonth),
        ("mtd", Period::CurrentMonth),
    ])
});

impl Period {
    /// Maps a selector tag to a period, falling back to the 30-day window for
    /// anything unrecognized. The fallback is a defensive default, not an
    /// error state.
    pub fn from_tag(tag: &str) -> Period {
        let normalized = tag.trim().to_ascii_lowercase();
        PERIOD_TAGS
            .get(normalized.as_str())
            .copied()
            .unwrap_or(Period::LastThirtyDays)
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Period::LastSevenDays => "7d",
            Period::LastThirtyDays => "30d",
            Period::CurrentMonth => "month",
        }
    }

    /// Resolves the period to an inclusive calendar window anchored at the
    /// supplied reference date. The rolling windows include the reference day
    /// itself, so the 7-day window spans 8 calendar days.
    pub fn resolve(&self, today: NaiveDate) -> DateWindow {
        match self {
            Period::LastSevenDays => DateWindow {
                start: today - Duration::days(7),
                end: today,
            },
            Period::LastThirtyDays => DateWindow {
                start: today - Duration::days(30),
                end: today,
            },
            Period::CurrentMonth => {
                let start = today.with_day(1).unwrap_or(today);
                let end = start
                    .checked_add_months(Months::new(1))
                    .and_then(|next| next.pred_opt())
                    .unwrap_or(today);
                DateWindow { start, end }
            }
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Period::LastSevenDays => "Last 7 days",
            Period::LastThirtyDays => "Last 30 days",
            Period::CurrentMonth => "Current month",
        };
        f.write_str(label)
    }
}

/// Inclusive calendar-date range `[start, end]`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end < start {
            return Err(FinanceError::InvalidInput(
                "window end must not precede start".into(),
            ));
        }
        Ok(Self { start, end })
    }

    /// Both bounds are inclusive: a date equal to `start` or `end` is inside.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Number of calendar days covered, counting both endpoints.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Ascending iterator over every calendar date in the window.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |date| *date <= end)
    }
}
