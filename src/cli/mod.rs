//! CLI command handlers
//!
//! This module contains the implementation of the conversion command,
//! bridging the clap argument parsing with the service layer.

pub mod convert;
pub mod prompt;

pub use convert::{handle_convert_command, ConvertArgs};
pub use prompt::Prompter;
