pub use crate::errors::HarnessError;

pub mod audit;
pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod index;
pub mod report;
pub mod runner;
pub mod scan;
pub mod verdict;
