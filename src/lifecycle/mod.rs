//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Signals (signals.rs):
//!     SIGINT/Ctrl+C → Shutdown::trigger
//!
//! Shutdown (shutdown.rs):
//!     trigger → server stops accepting → in-flight body reads cancelled → exit
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
