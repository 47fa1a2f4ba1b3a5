pub mod checks;
mod config;
mod error;
pub mod fixtures;
mod harness;
pub mod report;
mod term;
#[cfg(test)]
mod tests;
mod types;

pub use config::Config;
pub use error::{CheckFailure, Error, Result};
pub use harness::Harness;
pub use types::*;
