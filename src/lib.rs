//! blezz library exports

pub mod core;
pub mod term;

#[cfg(test)]
pub mod test_support;

pub use crate::core::action::{Action, Outcome, update};
pub use crate::core::executor::{CommandExecutor, ShellExecutor};
pub use crate::core::node::{Directory, DirectoryId, Entry, Forest};
pub use crate::core::parser::{load, parse_reader, parse_str};
pub use crate::core::state::Menu;
