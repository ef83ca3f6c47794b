//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::executor::CommandExecutor;
use crate::core::parser::parse_str;
use crate::core::state::Menu;

/// Records commands instead of running them. Clones share one log.
#[derive(Clone, Default)]
pub struct RecordingExecutor {
    commands: Rc<RefCell<Vec<String>>>,
}

impl RecordingExecutor {
    pub fn commands(&self) -> Vec<String> {
        self.commands.borrow().clone()
    }
}

impl CommandExecutor for RecordingExecutor {
    fn execute(&self, command: &str) {
        self.commands.borrow_mut().push(command.to_string());
    }
}

/// Builds a menu from content text, returning a handle on its executor.
pub fn test_menu(content: &str) -> (Menu, RecordingExecutor) {
    let executor = RecordingExecutor::default();
    let menu = Menu::new(parse_str(content), Box::new(executor.clone()));
    (menu, executor)
}
