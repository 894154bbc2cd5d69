//! Terminal front end for two players sharing one screen.
//!
//! Provides:
//! - [`Session`]: square-selection controller over a [`chess_rules::RulesEngine`]
//! - [`Command`]: parsing of one input line
//! - [`Renderer`]: text board with selection and destination markers
//! - [`ShellConfig`]: TOML configuration
//! - [`run`]: the read-eval-print loop tying them together

mod command;
mod config;
mod render;
mod session;
mod shell;

pub use command::*;
pub use config::*;
pub use render::*;
pub use session::*;
pub use shell::*;
