//! Unitext CLI library
//!
//! This library provides the command-line interface for exploring Unicode
//! text segmentation, case folding and full text search tokenizers.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
