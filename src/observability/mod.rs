//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events (structured fields, never secrets)
//!
//! Consumers:
//!     → logging.rs subscriber writing to stderr
//! ```
//!
//! # Design Decisions
//! - stdout is reserved for command output
//! - Log level configurable via config and `RUST_LOG`

pub mod logging;
