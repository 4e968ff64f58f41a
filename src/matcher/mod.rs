//! Regex matching subsystem.
//!
//! # Data Flow
//! ```text
//! (pattern, option)
//!     → options.rs (option string → MatchOption)
//!     → engine.rs (compile under size limits)
//!     → engine.rs (single match or global match)
//!     → SingleMatch / GlobalMatch
//! ```

pub mod engine;
pub mod options;

pub use engine::{compile, find_all, is_match, GlobalMatch, MatchedItem, SingleMatch};
pub use options::MatchOption;
