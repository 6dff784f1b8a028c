//! Presentation layer for council
//!
//! CLI argument definitions, console output formatting and progress
//! reporting. Owns everything user-facing; the engine below it only ever
//! sees ports.

pub mod cli;
pub mod output;
pub mod progress;

pub use cli::commands::{Cli, OutputFormat, TierArg};
pub use output::console::ConsoleFormatter;
pub use output::formatter::OutputFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
