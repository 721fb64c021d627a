//! Per-run counters and the outcome of a single row.

use std::fmt;

use serde::{Deserialize, Serialize};

/// What happened to one data row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowOutcome {
    /// Row survives into the output.
    Kept,
    /// Dropped by the retention policy (terminal status older than the cutoff).
    Filtered,
    /// Dropped because the order date could not be parsed.
    BadDate,
}

impl RowOutcome {
    pub fn is_kept(self) -> bool {
        self == Self::Kept
    }
}

/// Final counters of one run. `kept + filtered_out + bad_date == total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunCounts {
    pub total: usize,
    pub kept: usize,
    pub filtered_out: usize,
    pub bad_date: usize,
}

impl RunCounts {
    /// Rows that did not make it into the output for any reason.
    pub fn dropped(&self) -> usize {
        self.filtered_out + self.bad_date
    }
}

impl fmt::Display for RunCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "processed={}, kept={}, filtered={}, bad_date={}",
            self.total, self.kept, self.filtered_out, self.bad_date
        )
    }
}

/// Incremental tally filled during the row scan.
///
/// The total is derived from the three outcome buckets, so the partition
/// invariant holds by construction. Consumed by [`RowTally::finish`].
#[derive(Debug, Default)]
pub struct RowTally {
    counts: RunCounts,
}

impl RowTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: RowOutcome) {
        match outcome {
            RowOutcome::Kept => self.counts.kept += 1,
            RowOutcome::Filtered => self.counts.filtered_out += 1,
            RowOutcome::BadDate => self.counts.bad_date += 1,
        }
        self.counts.total += 1;
    }

    pub fn finish(self) -> RunCounts {
        self.counts
    }
}

/// Summary of a completed run: where data came from, where it went, counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub input: String,
    pub output: String,
    pub counts: RunCounts,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally_partitions_total() {
        let mut tally = RowTally::new();
        for outcome in [
            RowOutcome::Kept,
            RowOutcome::Filtered,
            RowOutcome::BadDate,
            RowOutcome::Kept,
        ] {
            tally.record(outcome);
        }
        let counts = tally.finish();
        assert_eq!(
            counts,
            RunCounts {
                total: 4,
                kept: 2,
                filtered_out: 1,
                bad_date: 1,
            }
        );
        assert_eq!(counts.dropped(), 2);
    }

    #[test]
    fn counts_display() {
        let counts = RunCounts {
            total: 3,
            kept: 1,
            filtered_out: 1,
            bad_date: 1,
        };
        assert_eq!(
            counts.to_string(),
            "processed=3, kept=1, filtered=1, bad_date=1"
        );
    }
}
