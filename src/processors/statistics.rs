use serde::Serialize;

use crate::error::Result;
use crate::models::Batch;
use crate::processors::selection;

/// Summary statistics for one metric over the whole batch. Eligibility
/// plays no part here: disqualified days still count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricSummary {
    pub mean: i32,
    pub min: i32,
    pub max: i32,
    pub median: i32,
}

/// The four per-metric summaries of a batch, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub temperature: MetricSummary,
    pub wind: MetricSummary,
    pub humidity: MetricSummary,
    pub precipitation: MetricSummary,
}

/// Compute mean, min, max and median for one metric column.
///
/// The mean is the integer sum divided by the count, truncated toward zero
/// rather than rounded. The median follows the upper-median convention of
/// [`selection::median`].
pub fn summarize(values: &[i32]) -> Result<MetricSummary> {
    // Rejects the empty sequence before anything else is computed.
    let median = selection::median(values)?;

    let sum: i64 = values.iter().map(|&v| v as i64).sum();
    let mean = (sum / values.len() as i64) as i32;

    let mut min = values[0];
    let mut max = values[0];
    for &value in &values[1..] {
        min = min.min(value);
        max = max.max(value);
    }

    Ok(MetricSummary {
        mean,
        min,
        max,
        median,
    })
}

pub fn summarize_batch(batch: &Batch) -> Result<BatchSummary> {
    Ok(BatchSummary {
        temperature: summarize(&batch.temperatures())?,
        wind: summarize(&batch.winds())?,
        humidity: summarize(&batch.humidities())?,
        precipitation: summarize(&batch.precipitations())?,
    })
}
