//! PmergeMe CLI library.
//!
//! Validation, configuration, timing and reporting around the
//! merge-insertion sorter in `pmerge-core`.

pub mod app;
pub mod colors;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod report;
pub mod timing;

pub use app::{run, Args};
pub use error::CliError;
