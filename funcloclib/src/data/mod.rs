//! Data collection: read files and collect statistics.
//!
//! This module handles the second stage of the pipeline:
//!
//! - **Estimation**: heuristic function-length state machines
//! - **Statistics**: per-language accumulators (`LineCounts`, `FunctionLengths`)
//! - **Counting**: high-level API (`count_directory`, `count_lines`)
//!
//! ## Example
//!
//! ```rust,ignore
//! use funcloclib::data::{count_directory, CountOptions};
//!
//! let result = count_directory(".", &CountOptions::new())?;
//! println!("Total lines: {}", result.lines.total());
//! ```

pub mod counter;
pub mod estimator;
pub mod stats;

pub use counter::{
    count_directory, count_directory_with, count_file, count_lines, count_non_blank,
    CountOptions, CountResult,
};
pub use estimator::{estimate_function_lengths, Estimator};
pub use stats::{FileReport, FunctionLengths, LineCounts};
