//! Dep Sweeper - find and remove dependency folders
//!
//! This crate provides functionality for:
//! - Scanning a directory tree for `node_modules` and Python virtual environments
//! - Picking which of them to delete from an interactive checklist
//! - Removing the chosen folders, optionally as a dry run

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod picker;
pub mod remover;
pub mod scanner;

// Re-export commonly used types
pub use config::RunConfig;
pub use error::{Result, SweeperError};
