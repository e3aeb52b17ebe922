//! Insertion sort and median for small, hand-entered sequences.
//!
//! Everything here is a pure function of its input: callers hand in a
//! borrowed slice and get owned results back.

pub mod error;
pub mod input;
pub mod median;
pub mod samples;
pub mod sort;

pub use error::StatsError;
pub use input::{parse_numbers, ParsedInput};
pub use median::{median, summarize, Summary};
pub use samples::{sample, samples};
pub use sort::insertion_sort;
