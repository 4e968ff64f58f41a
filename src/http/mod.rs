//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (correlation ID)
//!     → connector::execute (script run)
//!     → Send to client
//! ```

pub mod request;
pub mod server;

pub use request::X_CORRELATION_ID;
pub use server::HttpServer;
