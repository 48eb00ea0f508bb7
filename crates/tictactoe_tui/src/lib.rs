//! Terminal presentation layer for the N×N tic-tac-toe engine.
//!
//! - **App**: size field, cursor and status line; forwards taps to the engine
//! - **UI**: stateless ratatui rendering of an [`App`]
//! - **Play**: headless scripted games
//! - **Config**: optional TOML settings

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod play;
pub mod ui;

pub use app::App;
pub use cli::{Cli, Command};
pub use config::{ConfigError, TuiConfig};
