//! Regex connector library.
//!
//! Implements a connector "script" that answers `RegexIsMatch` and
//! `RegexMatch` operations over HTTP.

pub mod config;
pub mod connector;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod matcher;
pub mod observability;

pub use config::ConnectorConfig;
pub use error::ConnectorError;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
