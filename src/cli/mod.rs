//! # Command-Line Interface
//!
//! User-facing CLI commands and output formatting.
//!
//! ## Commands
//!
//! | Command | Purpose | Example |
//! |---------|---------|---------|
//! | `check` | Check one or more numbers | `happy check 7 19 --trace` |
//! | `trace` | Show the full sequence for one number | `happy trace 4` |
//! | `range` | List happy numbers in a range | `happy range 1 100` |
//! | `config` | Inspect or create the config file | `happy config init` |
//!
//! ## Output Formats
//!
//! All commands support `--format` flag:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! The default comes from `default_format` in the config file.
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output on stderr:
//! ```bash
//! happy --verbose check 19
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod config_cmd;
mod number;
mod output;

pub use app::{run, Cli, Commands};
pub use config_cmd::ConfigCommands;
pub use number::CheckOptions;
pub use output::{Output, OutputFormat};
