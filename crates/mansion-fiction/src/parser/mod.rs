//! Command parsing and name suggestions.

mod command;
mod resolver;

pub use command::{Command, parse_command};
pub use resolver::{suggest_direction, suggest_item};
