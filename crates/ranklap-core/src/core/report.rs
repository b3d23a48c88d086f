//! Provides the per-threshold report rows and their text writers.
//!
//! The report is the engine's only externally observable output: one row per
//! prefix length, in increasing threshold order, with no filtering or
//! truncation. Two encodings are supported: the classic space-separated
//! format consumed by ad-hoc scripts, and a tab-delimited table with a header
//! row for the downstream pipeline tools.

use serde::Serialize;
use std::io::{self, Write};

/// One line of the rank-overlap significance table.
///
/// `z_score` is `NaN` when the null distribution at this threshold is
/// degenerate (zero variance); callers detect the condition from the output
/// rather than from an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReportRow {
    /// Prefix length, 1-indexed.
    pub threshold: usize,
    /// Jaccard index observed between the two top-`threshold` prefixes.
    pub observed_j: f64,
    /// Mean Jaccard index under the permutation null model.
    pub null_mean: f64,
    /// Sample variance of the null distribution.
    pub null_variance: f64,
    /// Standardized deviation of the observed value from the null mean.
    pub z_score: f64,
    /// Best Jaccard index attainable at this threshold given the total
    /// intersection of the two full lists.
    pub max_j: f64,
}

/// Writes rows in the classic space-separated format, one row per line:
/// `threshold observedJ nullMean nullVariance zScore maxJ`.
pub fn write_plain(rows: &[ReportRow], writer: &mut impl Write) -> io::Result<()> {
    for row in rows {
        writeln!(
            writer,
            "{} {} {} {} {} {}",
            row.threshold, row.observed_j, row.null_mean, row.null_variance, row.z_score, row.max_j
        )?;
    }
    Ok(())
}

/// Writes rows as a tab-delimited table with a header row.
pub fn write_delimited(rows: &[ReportRow], writer: &mut impl Write) -> csv::Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}
