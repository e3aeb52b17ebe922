//! Stats-specific error types.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    #[error("Cannot compute median of an empty list")]
    EmptyInput,

    #[error("Selection {index} out of range (1..={available})")]
    SelectionOutOfRange { index: usize, available: usize },
}

impl StatsError {
    /// Short message for the interactive menu.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::EmptyInput => "No valid numbers entered.",
            Self::SelectionOutOfRange { .. } => "Selection out of range.",
        }
    }
}
