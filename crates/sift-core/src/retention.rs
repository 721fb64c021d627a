//! Retention decision for a single record.

use chrono::{NaiveDateTime, TimeDelta};

use sift_model::{DEFAULT_RETENTION_DAYS, RowOutcome};

use crate::datetime::parse_order_date;

/// Statuses subject to age-based filtering, after [`normalize_status`].
pub const TERMINAL_STATUSES: [&str; 2] = ["pending", "cancelled"];

/// How far back a terminal-status record may date and still be kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetentionWindow {
    days: u32,
}

impl Default for RetentionWindow {
    fn default() -> Self {
        Self::days(DEFAULT_RETENTION_DAYS)
    }
}

impl RetentionWindow {
    pub fn days(days: u32) -> Self {
        Self { days }
    }

    pub fn as_days(&self) -> u32 {
        self.days
    }

    /// `now - window`, saturating at the earliest representable instant.
    pub fn cutoff_from(&self, now: NaiveDateTime) -> NaiveDateTime {
        now.checked_sub_signed(TimeDelta::days(i64::from(self.days)))
            .unwrap_or(NaiveDateTime::MIN)
    }
}

/// Lower-cased, trimmed status used for matching.
pub fn normalize_status(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Exact match of a normalized status against [`TERMINAL_STATUSES`].
pub fn is_terminal_status(normalized: &str) -> bool {
    TERMINAL_STATUSES.contains(&normalized)
}

/// Keep/drop rule anchored to one cutoff instant for a whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetentionPolicy {
    cutoff: NaiveDateTime,
}

impl RetentionPolicy {
    /// Anchor `window` at `now`; the cutoff is not re-evaluated afterwards.
    pub fn new(window: RetentionWindow, now: NaiveDateTime) -> Self {
        Self {
            cutoff: window.cutoff_from(now),
        }
    }

    pub fn with_cutoff(cutoff: NaiveDateTime) -> Self {
        Self { cutoff }
    }

    pub fn cutoff(&self) -> NaiveDateTime {
        self.cutoff
    }

    /// Classify a record from its raw status and order date values.
    ///
    /// An unparsable date is [`RowOutcome::BadDate`] whatever the status.
    /// Otherwise the record is dropped only when its status is terminal and
    /// its date is at or before the cutoff.
    pub fn decide(&self, status: &str, order_date: &str) -> RowOutcome {
        let status = normalize_status(status);
        let Ok(ordered_at) = parse_order_date(order_date) else {
            return RowOutcome::BadDate;
        };
        if is_terminal_status(&status) && ordered_at <= self.cutoff {
            RowOutcome::Filtered
        } else {
            RowOutcome::Kept
        }
    }
}
