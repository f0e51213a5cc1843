//! Report date-range derivation
//!
//! The range determines export content, so it is derived in one place and
//! passed to the collector. `Monthly` is a trailing 31-day window, not a
//! calendar month.

use chrono::{Duration, NaiveDate, NaiveDateTime};

/// Report kind selected by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Daily,
    Monthly,
}

impl ReportKind {
    /// Filename prefix
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::Daily => "daily",
            ReportKind::Monthly => "monthly",
        }
    }
}

/// Inclusive date range for the order-listing endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRange {
    pub from: NaiveDateTime,
    pub to: NaiveDateTime,
}

impl ReportRange {
    /// Derive the range for a report generated on `date` (the caller's
    /// current local day)
    ///
    /// - `Daily`: midnight through 23:59:59.999 of `date`.
    /// - `Monthly`: midnight 31 days before `date` through 23:59:59.999 of
    ///   `date`.
    pub fn for_date(kind: ReportKind, date: NaiveDate) -> Self {
        let start_day = match kind {
            ReportKind::Daily => date,
            ReportKind::Monthly => date - Duration::days(31),
        };
        Self {
            from: start_of_day(start_day),
            to: end_of_day(date),
        }
    }

    /// Range start as an ISO timestamp string
    pub fn from_iso(&self) -> String {
        self.from.format("%Y-%m-%dT%H:%M:%S%.3f").to_string()
    }

    /// Range end as an ISO timestamp string
    pub fn to_iso(&self) -> String {
        self.to.format("%Y-%m-%dT%H:%M:%S%.3f").to_string()
    }
}

fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_opt(0, 0, 0).expect("valid clock time")
}

fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_milli_opt(23, 59, 59, 999).expect("valid clock time")
}
