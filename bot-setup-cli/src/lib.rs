//! # bot-setup-cli
//!
//! `botsetup` argument parsing and output reporting over the `bot_setup` library.

pub mod cli;

pub use cli::{report, run, Cli, Commands};
