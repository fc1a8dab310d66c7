//! Usage statistics derived from the per-bucket insert counters

use std::fmt;

/// A snapshot of a table's insertion history.
///
/// Counters are cumulative: erasing a key does not lower them, so `collisions`
/// and `load_factor` describe every insertion since the last resize.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TableStats {
    /// Number of buckets
    pub size: usize,
    /// Total insertions routed to any bucket
    pub inserts: usize,
    /// `inserts / size`, may exceed 1
    pub load_factor: f64,
    /// Insertions into a bucket that had already received one
    pub collisions: usize,
    /// Largest insert counter of any bucket
    pub max_bucket: usize,
}

impl TableStats {
    /// Builds the report from the insert counters of each bucket
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_counters(counters: &[usize]) -> Self {
        let size = counters.len();
        if size == 0 {
            return Self::default();
        }

        let inserts = counters.iter().fold(0_usize, |sum, &count| sum.saturating_add(count));
        let collisions = counters
            .iter()
            .fold(0_usize, |sum, &count| sum.saturating_add(count.saturating_sub(1)));
        let max_bucket = counters.iter().copied().max().unwrap_or(0);

        Self { size, inserts, load_factor: inserts as f64 / size as f64, collisions, max_bucket }
    }
}

impl fmt::Display for TableStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "size:\t\t\t{}", self.size)?;
        writeln!(f, "inserts:\t\t{}", self.inserts)?;
        writeln!(f, "load factor:\t{}", self.load_factor)?;
        writeln!(f, "collisions:\t\t{}", self.collisions)?;
        writeln!(f, "max. bucket:\t{}", self.max_bucket)
    }
}
