//! # Menu State
//!
//! The navigation engine. Holds the parsed forest and a single "current
//! directory" cursor; every query the presentation layer makes is answered
//! from here.
//!
//! ```text
//! Menu
//! ├── forest: Forest                       // all directories, owns every entry
//! ├── current: Option<DirectoryId>         // None only for an empty forest
//! ├── breadcrumb: String                   // "Top>Developer>Editors"
//! └── executor: Box<dyn CommandExecutor>   // receives ActRef commands
//! ```
//!
//! `current` only moves through [`Menu::activate`], [`Menu::enter_directory`]
//! and [`Menu::reload`], and the breadcrumb is recomputed each time.

use log::{debug, info};

use crate::core::action::Outcome;
use crate::core::executor::CommandExecutor;
use crate::core::node::{Directory, DirectoryId, Entry, Forest};

/// Prompt shown when there is no directory, or every name on the path is empty.
pub const FALLBACK_BREADCRUMB: &str = "blezz";

pub const BREADCRUMB_SEPARATOR: &str = ">";

pub struct Menu {
    forest: Forest,
    current: Option<DirectoryId>,
    breadcrumb: String,
    executor: Box<dyn CommandExecutor>,
}

impl Menu {
    pub fn new(forest: Forest, executor: Box<dyn CommandExecutor>) -> Self {
        let mut menu = Self {
            current: forest.root(),
            forest,
            breadcrumb: String::new(),
            executor,
        };
        menu.refresh_breadcrumb();
        menu
    }

    pub fn forest(&self) -> &Forest {
        &self.forest
    }

    pub fn current(&self) -> Option<&Directory> {
        self.current.map(|id| self.forest.get(id))
    }

    pub fn entry_count(&self) -> usize {
        self.current().map_or(0, |dir| dir.children.len())
    }

    /// Entry `index` of the current directory.
    ///
    /// # Panics
    ///
    /// If `index >= self.entry_count()`.
    pub fn entry(&self, index: usize) -> &Entry {
        let count = self.entry_count();
        assert!(
            index < count,
            "entry index {index} out of range (current directory has {count} entries)"
        );
        match self.current() {
            Some(dir) => &dir.children[index],
            None => unreachable!("entry_count is 0 without a current directory"),
        }
    }

    pub fn entry_label(&self, index: usize) -> String {
        self.entry(index).label()
    }

    pub fn entry_hotkey(&self, index: usize) -> &str {
        self.entry(index).hotkey()
    }

    pub fn entry_icon(&self, index: usize) -> Option<&str> {
        self.entry(index).icon()
    }

    pub fn breadcrumb(&self) -> &str {
        &self.breadcrumb
    }

    /// Applies the user's choice of entry `index`.
    ///
    /// # Panics
    ///
    /// If `index >= self.entry_count()`.
    pub fn activate(&mut self, index: usize) -> Outcome {
        match self.entry(index).clone() {
            Entry::DirRef { target, .. } => match self.forest.lookup(&target) {
                Some(id) => {
                    self.move_to(id);
                    Outcome::Reset
                }
                None => {
                    debug!("DirRef target '{}' not found", target);
                    Outcome::NoOp
                }
            },
            Entry::ActRef {
                command, reload, ..
            } => {
                info!("Executing `{}`", command);
                self.executor.execute(&command);
                if reload { Outcome::Reload } else { Outcome::Exit }
            }
            Entry::GoUp => {
                let parent = self.current.and_then(|id| self.forest.get(id).parent);
                match parent {
                    Some(parent) => {
                        self.current = Some(parent);
                        self.refresh_breadcrumb();
                        debug!("Back to '{}'", self.breadcrumb);
                        Outcome::Reset
                    }
                    None => Outcome::NoOp,
                }
            }
        }
    }

    /// Jumps to the directory called `name` the same way a `DirRef` would.
    ///
    /// Returns `false`, leaving the position untouched, if no such
    /// directory exists.
    pub fn enter_directory(&mut self, name: &str) -> bool {
        match self.forest.lookup(name) {
            Some(id) => {
                self.move_to(id);
                true
            }
            None => false,
        }
    }

    /// Swaps in a freshly parsed forest and returns to its root.
    ///
    /// Nothing from the old forest survives, parent links included.
    pub fn reload(&mut self, forest: Forest) {
        self.current = forest.root();
        self.forest = forest;
        self.refresh_breadcrumb();
        info!(
            "Reloaded {} directories, at '{}'",
            self.forest.len(),
            self.breadcrumb
        );
    }

    fn move_to(&mut self, target: DirectoryId) {
        if let Some(current) = self.current {
            // Going to the current directory or one of its ancestors must not
            // rewrite links, or the parent chain would loop back on itself.
            let is_on_path = self.forest.ancestors(current).any(|id| id == target);
            if !is_on_path {
                self.forest.get_mut(target).parent = Some(current);
            }
        }
        self.current = Some(target);
        self.refresh_breadcrumb();
        debug!("Entered '{}'", self.breadcrumb);
    }

    fn refresh_breadcrumb(&mut self) {
        let Some(current) = self.current else {
            self.breadcrumb = FALLBACK_BREADCRUMB.to_string();
            return;
        };

        let mut names: Vec<&str> = self
            .forest
            .ancestors(current)
            .map(|id| self.forest.get(id).name.as_str())
            .collect();
        if names.iter().all(|name| name.is_empty()) {
            self.breadcrumb = FALLBACK_BREADCRUMB.to_string();
            return;
        }
        names.reverse();
        self.breadcrumb = names.join(BREADCRUMB_SEPARATOR);
    }
}
