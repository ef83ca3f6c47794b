//! # Actions
//!
//! Everything the presentation layer can ask of the menu becomes an
//! `Action`. User picks a line? That's `Action::Activate(index)`.
//! Content file re-read? That's `Action::Reload(forest)`.
//!
//! `update()` applies an action to the [`Menu`] and says what the UI
//! should do next.
//!
//! ```text
//! Menu + Action  →  update()  →  Outcome
//! ```

use log::debug;
use std::fmt;

use crate::core::node::Forest;
use crate::core::state::Menu;

/// What the UI should do after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Position changed; redraw from the top of the new listing.
    Reset,
    /// A command ran and the menu stays open.
    Reload,
    /// A command ran; close the menu.
    Exit,
    /// Nothing changed.
    NoOp,
}

pub enum Action {
    Activate(usize),
    EnterDirectory(String),
    Reload(Forest),
}

// A reloaded forest is summarised; the whole tree would flood the log.
impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Activate(index) => f.debug_tuple("Activate").field(index).finish(),
            Action::EnterDirectory(name) => f.debug_tuple("EnterDirectory").field(name).finish(),
            Action::Reload(forest) => write!(f, "Reload({} directories)", forest.len()),
        }
    }
}

pub fn update(menu: &mut Menu, action: Action) -> Outcome {
    debug!("Action: {:?}", action);
    match action {
        Action::Activate(index) => menu.activate(index),
        Action::EnterDirectory(name) => {
            if menu.enter_directory(&name) {
                Outcome::Reset
            } else {
                Outcome::NoOp
            }
        }
        Action::Reload(forest) => {
            menu.reload(forest);
            Outcome::Reset
        }
    }
}
