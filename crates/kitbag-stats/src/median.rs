use crate::error::StatsError;
use crate::sort::insertion_sort;

/// Median of `values`.
///
/// Odd lengths return the middle element of the sorted sequence; even
/// lengths return the mean of the two middle elements.
///
/// # Errors
///
/// Returns [`StatsError::EmptyInput`] when `values` is empty.
pub fn median(values: &[f64]) -> Result<f64, StatsError> {
    if values.is_empty() {
        return Err(StatsError::EmptyInput);
    }

    let sorted = insertion_sort(values);
    Ok(median_of_sorted(&sorted))
}

/// `sorted` must be non-empty and in ascending order.
fn median_of_sorted(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    let mid = n / 2;

    if n % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Original sequence, its sorted copy and the median, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub input: Vec<f64>,
    pub sorted: Vec<f64>,
    pub median: f64,
}

/// Sort `values` once and derive the median from that sorted copy.
///
/// # Errors
///
/// Returns [`StatsError::EmptyInput`] when `values` is empty.
pub fn summarize(values: &[f64]) -> Result<Summary, StatsError> {
    if values.is_empty() {
        return Err(StatsError::EmptyInput);
    }

    let sorted = insertion_sort(values);
    let median = median_of_sorted(&sorted);
    tracing::debug!(n = values.len(), median, "summarized sequence");

    Ok(Summary {
        input: values.to_vec(),
        sorted,
        median,
    })
}
