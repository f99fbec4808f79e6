//! Command-line surface of the tool.

mod common;
mod summarize;

pub use common::LogLevel;
pub use summarize::{SummarizeArgs, summarize};
