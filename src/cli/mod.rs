//! Command-line interface module.

mod args;
pub mod check;
pub mod init;
pub mod show;

pub use args::{CheckArgs, Cli, Commands, ShowArgs, ShowFormat};
