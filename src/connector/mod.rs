//! Connector script subsystem.
//!
//! # Data Flow
//! ```text
//! ScriptContext (correlation id, operation id, body, cancellation)
//!     → operation.rs (operation id → Operation)
//!     → context.rs (read body, racing cancellation)
//!     → request.rs (JSON parse + validation)
//!     → matcher (compile, match)
//!     → response.rs (JSON body, status)
//! ```
//!
//! # Design Decisions
//! - One handler covers both result shapes, selected by operation id
//! - Errors never escape `execute`; they become `{"error": ...}` bodies

pub mod context;
pub mod operation;
pub mod request;
pub mod response;
pub mod script;

pub use context::{Cancellation, ScriptContext};
pub use operation::Operation;
pub use script::execute;
