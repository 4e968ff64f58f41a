//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Script runs produce:
//!     → logging.rs (structured log events, spans with correlation IDs)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → Log aggregation (stdout, pretty or JSON)
//!     → Metrics endpoint (Prometheus scrape)
//! ```

pub mod logging;
pub mod metrics;

pub use logging::init_logging;
