//! # Node Model
//!
//! The menu tree is a forest of named directories. Each directory owns an
//! ordered list of entries; an entry either points at another directory
//! (by name), runs a command, or steps back to the parent.
//!
//! ```text
//! Forest
//! ├── directories: Vec<Directory>       // sole owner of every node
//! │   └── Directory
//! │       ├── name: String
//! │       ├── children: Vec<Entry>      // DirRef | ActRef | GoUp
//! │       └── parent: Option<DirectoryId>  // set on traversal, non-owning
//! ├── index: HashMap<String, DirectoryId>  // last declaration wins
//! └── root: Option<DirectoryId>         // first declaration
//! ```
//!
//! A `DirRef` stores the *name* of its target, never an id. Lookup happens
//! at activation time, so a dangling name simply resolves to nothing.

use std::collections::HashMap;

/// Icon name reported for the synthetic back entry.
pub const GO_UP_ICON: &str = "go-up";

/// Hotkey reported for the synthetic back entry.
pub const GO_UP_HOTKEY: &str = ".";

/// Index of a directory inside its [`Forest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DirectoryId(pub(crate) usize);

/// A named container of menu entries.
#[derive(Debug, Clone, PartialEq)]
pub struct Directory {
    pub name: String,
    pub children: Vec<Entry>,
    /// Directory we arrived from the last time this one was entered.
    pub parent: Option<DirectoryId>,
}

impl Directory {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
            parent: None,
        }
    }

    /// Appends an entry, keeping source order.
    pub fn add_child(&mut self, child: Entry) {
        self.children.push(child);
    }
}

/// One selectable line inside a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// Switches the current position to the directory named `target`.
    DirRef {
        hotkey: String,
        label: String,
        target: String,
        icon: Option<String>,
    },
    /// Hands `command` to the executor. `reload` keeps the menu open afterwards.
    ActRef {
        hotkey: String,
        label: String,
        command: String,
        icon: Option<String>,
        reload: bool,
    },
    /// Synthetic back entry, one per directory.
    GoUp,
}

impl Entry {
    pub fn hotkey(&self) -> &str {
        match self {
            Entry::DirRef { hotkey, .. } | Entry::ActRef { hotkey, .. } => hotkey,
            Entry::GoUp => GO_UP_HOTKEY,
        }
    }

    /// Display string: `/ [h] label`, `~ [h] label` or `< [.] Back`.
    pub fn label(&self) -> String {
        match self {
            Entry::DirRef { hotkey, label, .. } => format!("/ [{hotkey}] {label}"),
            Entry::ActRef { hotkey, label, .. } => format!("~ [{hotkey}] {label}"),
            Entry::GoUp => "< [.] Back".to_string(),
        }
    }

    pub fn icon(&self) -> Option<&str> {
        match self {
            Entry::DirRef { icon, .. } | Entry::ActRef { icon, .. } => icon.as_deref(),
            Entry::GoUp => Some(GO_UP_ICON),
        }
    }
}

/// Every directory declared by a content file, plus the name index.
#[derive(Debug, Clone, Default)]
pub struct Forest {
    directories: Vec<Directory>,
    index: HashMap<String, DirectoryId>,
    root: Option<DirectoryId>,
}

impl Forest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a directory and indexes it by name.
    ///
    /// A repeated name replaces the earlier index entry; the earlier
    /// directory stays in the forest (and stays root if it was first).
    pub fn push(&mut self, directory: Directory) -> DirectoryId {
        let id = DirectoryId(self.directories.len());
        self.index.insert(directory.name.clone(), id);
        self.directories.push(directory);
        if self.root.is_none() {
            self.root = Some(id);
        }
        id
    }

    pub fn root(&self) -> Option<DirectoryId> {
        self.root
    }

    pub fn lookup(&self, name: &str) -> Option<DirectoryId> {
        self.index.get(name).copied()
    }

    pub fn get(&self, id: DirectoryId) -> &Directory {
        &self.directories[id.0]
    }

    pub fn get_mut(&mut self, id: DirectoryId) -> &mut Directory {
        &mut self.directories[id.0]
    }

    pub fn len(&self) -> usize {
        self.directories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directories.is_empty()
    }

    /// Directories in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (DirectoryId, &Directory)> {
        self.directories
            .iter()
            .enumerate()
            .map(|(i, d)| (DirectoryId(i), d))
    }

    pub(crate) fn directories_mut(&mut self) -> impl Iterator<Item = &mut Directory> {
        self.directories.iter_mut()
    }

    /// Walks `parent` links from `id` up to a directory with no parent.
    ///
    /// Yields `id` first. Terminates as long as the links are acyclic,
    /// which `Menu` maintains on every transition.
    pub fn ancestors(&self, id: DirectoryId) -> Ancestors<'_> {
        Ancestors {
            forest: self,
            next: Some(id),
        }
    }
}

pub struct Ancestors<'a> {
    forest: &'a Forest,
    next: Option<DirectoryId>,
}

impl Iterator for Ancestors<'_> {
    type Item = DirectoryId;

    fn next(&mut self) -> Option<DirectoryId> {
        let id = self.next?;
        self.next = self.forest.get(id).parent;
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dir_ref(hotkey: &str, label: &str) -> Entry {
        Entry::DirRef {
            hotkey: hotkey.into(),
            label: label.into(),
            target: label.into(),
            icon: None,
        }
    }

    #[test]
    fn test_add_child_keeps_order() {
        let mut dir = Directory::new("Top");
        dir.add_child(dir_ref("a", "First"));
        dir.add_child(dir_ref("b", "Second"));
        dir.add_child(Entry::GoUp);
        let hotkeys: Vec<&str> = dir.children.iter().map(Entry::hotkey).collect();
        assert_eq!(hotkeys, vec!["a", "b", "."]);
    }

    #[test]
    fn test_labels_carry_marker_prefix() {
        let act = Entry::ActRef {
            hotkey: "x".into(),
            label: "Run".into(),
            command: "true".into(),
            icon: None,
            reload: false,
        };
        assert_eq!(dir_ref("d", "Sub").label(), "/ [d] Sub");
        assert_eq!(act.label(), "~ [x] Run");
        assert_eq!(Entry::GoUp.label(), "< [.] Back");
    }

    #[test]
    fn test_go_up_reports_fixed_icon() {
        assert_eq!(Entry::GoUp.icon(), Some("go-up"));
        assert_eq!(dir_ref("d", "Sub").icon(), None);
    }

    #[test]
    fn test_first_push_becomes_root() {
        let mut forest = Forest::new();
        assert_eq!(forest.root(), None);
        let top = forest.push(Directory::new("Top"));
        forest.push(Directory::new("Sub"));
        assert_eq!(forest.root(), Some(top));
        assert_eq!(forest.len(), 2);
    }

    #[test]
    fn test_duplicate_name_last_declaration_wins() {
        let mut forest = Forest::new();
        let first = forest.push(Directory::new("Dup"));
        let second = forest.push(Directory::new("Dup"));
        assert_eq!(forest.lookup("Dup"), Some(second));
        assert_eq!(forest.root(), Some(first));
        assert_eq!(forest.len(), 2);
    }

    #[test]
    fn test_ancestors_walks_parent_links() {
        let mut forest = Forest::new();
        let a = forest.push(Directory::new("A"));
        let b = forest.push(Directory::new("B"));
        let c = forest.push(Directory::new("C"));
        forest.get_mut(b).parent = Some(a);
        forest.get_mut(c).parent = Some(b);
        let chain: Vec<DirectoryId> = forest.ancestors(c).collect();
        assert_eq!(chain, vec![c, b, a]);
    }
}
