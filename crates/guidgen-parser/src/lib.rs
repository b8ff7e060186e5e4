//! guidgen Parser
//!
//! Finds `extern EFI_GUID g...;` declarations in a header tree and prunes
//! headers whose declarations must not be emitted.
//!
//! ## Modules
//!
//! - `scanner` - Recursive header walk and declaration extraction
//! - `filter` - Ignore set and reserved-prefix filtering

pub mod filter;
pub mod scanner;

pub use filter::{ConflictFilter, IgnoreSet};
pub use scanner::HeaderScanner;
