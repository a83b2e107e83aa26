//! Terminal front end for rewind_tictactoe.
//!
//! Everything here is presentation: the game itself is driven through
//! [`rewind_tictactoe::GameController`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod logging;
pub mod report;
pub mod terminal;
pub mod ui;

pub use app::App;
pub use cli::{Cli, Command};
pub use config::{ConfigError, TuiConfig};
pub use logging::init_tracing;
pub use terminal::TerminalGuard;
