//! Minimal build orchestration helpers: run commands, read the command line and rebuild the
//! running executable when its source changes.

#[macro_use]
extern crate log;

mod errors;
pub use errors::*;

pub mod args;
pub use args::Arguments;

mod command;
pub use command::Command;

pub mod rebuild;
pub use rebuild::{needs_rebuild, rebuild_on_change, rebuild_on_change_with};
