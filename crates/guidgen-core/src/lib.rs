//! guidgen Core
//!
//! Core types, configuration and errors shared by the guidgen crates.

pub mod config;
pub mod error;
pub mod types;

pub use config::{GeneratorConfig, IgnoreConfig, OverrideEntry};
pub use error::{Error, Result};
pub use types::*;
