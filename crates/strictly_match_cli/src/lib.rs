//! Console shell for strictly_match.
//!
//! Owns all prompting, rendering and configuration; the match rules come
//! from the `strictly_match` core.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;
mod error;
mod session;

pub mod render;

pub use cli::Cli;
pub use config::{ConfigError, ShellConfig};
pub use console::Console;
pub use error::ShellError;
pub use session::Session;
