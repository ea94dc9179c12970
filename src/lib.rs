pub mod analyzer;
pub mod cli;
pub mod commands;
pub mod config;
pub mod engine;
pub mod error;
pub mod output;
pub mod report;
pub mod scanner;

pub use engine::{Engine, analyze};
pub use error::{JavaGuardError, Result};
pub use report::AnalysisResult;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_GATE_FAILED: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
