//! Command-line front end.
//!
//! # Data Flow
//! ```text
//! process arguments
//!     → args.rs (command + flags + positional)
//!     → dispatch.rs (route to wallet / reader / transfer executor)
//!     → output.rs (render results as text)
//! ```

pub mod args;
pub mod dispatch;
pub mod output;

pub use args::{FlagValue, Invocation};
pub use dispatch::{Command, Dispatcher};
