//! Dovetail CLI commands
//!
//! One module per subcommand; each exposes an `execute` entry point.

pub mod method;
pub mod resolve;
pub mod types;
