//! Key handling for one interactive run, kept apart from terminal I/O so it
//! can be driven directly in tests.

use crate::core::action::{Action, Outcome, update};
use crate::core::node::Entry;
use crate::core::state::Menu;
use crate::term::event::TermEvent;

/// What the event loop should do after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Redraw,
    ReloadContent,
    Quit,
}

/// Presentation state: highlighted line and typed hotkey prefix.
#[derive(Debug, Default)]
pub struct MenuSession {
    pub selected: usize,
    pub typed: String,
}

impl MenuSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&mut self, menu: &mut Menu, event: TermEvent) -> Step {
        match event {
            TermEvent::ForceQuit | TermEvent::Escape => Step::Quit,
            TermEvent::ReloadContent => Step::ReloadContent,
            TermEvent::Resize => Step::Redraw,
            TermEvent::Up => {
                self.selected = self.selected.saturating_sub(1);
                Step::Redraw
            }
            TermEvent::Down => {
                if self.selected + 1 < menu.entry_count() {
                    self.selected += 1;
                }
                Step::Redraw
            }
            TermEvent::Backspace => {
                if self.typed.pop().is_none() {
                    if let Some(index) = go_up_index(menu) {
                        return self.activate(menu, index);
                    }
                }
                Step::Redraw
            }
            TermEvent::Enter => {
                let chosen = exact_matches(menu, &self.typed)
                    .first()
                    .copied()
                    .or_else(|| (self.selected < menu.entry_count()).then_some(self.selected));
                match chosen {
                    Some(index) => self.activate(menu, index),
                    None => Step::Redraw,
                }
            }
            TermEvent::Char(c) => self.type_char(menu, c),
        }
    }

    /// Applies `update` and turns its outcome into a loop step.
    pub fn apply(&mut self, menu: &mut Menu, action: Action) -> Step {
        let outcome = update(menu, action);
        self.typed.clear();
        match outcome {
            Outcome::Reset => {
                self.selected = 0;
                Step::Redraw
            }
            Outcome::Reload | Outcome::NoOp => Step::Redraw,
            Outcome::Exit => Step::Quit,
        }
    }

    fn activate(&mut self, menu: &mut Menu, index: usize) -> Step {
        self.apply(menu, Action::Activate(index))
    }

    fn type_char(&mut self, menu: &mut Menu, c: char) -> Step {
        self.typed.extend(c.to_lowercase());

        let exact = exact_matches(menu, &self.typed);
        let prefixed = (0..menu.entry_count())
            .filter(|&i| menu.entry_hotkey(i).starts_with(self.typed.as_str()))
            .count();

        match (exact.as_slice(), prefixed) {
            // Unambiguous: nothing else could still be typed towards.
            ([index], 1) => self.activate(menu, *index),
            (_, 0) => {
                self.typed.clear();
                Step::Redraw
            }
            _ => {
                if let Some(&index) = exact.first() {
                    self.selected = index;
                }
                Step::Redraw
            }
        }
    }
}

fn exact_matches(menu: &Menu, typed: &str) -> Vec<usize> {
    if typed.is_empty() {
        return Vec::new();
    }
    (0..menu.entry_count())
        .filter(|&i| menu.entry_hotkey(i) == typed)
        .collect()
}

fn go_up_index(menu: &Menu) -> Option<usize> {
    (0..menu.entry_count()).rev().find(|&i| *menu.entry(i) == Entry::GoUp)
}
