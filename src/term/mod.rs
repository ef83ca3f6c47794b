//! # Terminal Adapter
//!
//! A minimal presentation layer: prints the breadcrumb as a prompt and one
//! line per entry, then turns key presses into menu actions.
//!
//! This is the only module that knows about crossterm. It asks the core
//! nothing beyond entry count, labels, hotkeys and "activate entry i".

mod event;
mod session;

pub use event::{TermEvent, translate};
pub use session::{MenuSession, Step};

use log::{info, warn};
use std::io::{self, Write, stdout};
use std::path::Path;

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, queue};

use crate::core::action::Action;
use crate::core::parser;
use crate::core::state::Menu;

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen, Hide)?;
        info!("Terminal modes enabled (raw, alternate screen)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Runs the interactive menu until the user quits or an action exits.
///
/// `content_path` is re-read on Ctrl+R.
pub fn run(menu: &mut Menu, content_path: &Path) -> io::Result<()> {
    let _guard = TerminalModeGuard::new()?;
    let mut session = MenuSession::new();

    loop {
        draw(&mut stdout(), menu, &session)?;

        match session.handle(menu, event::next_event()?) {
            Step::Redraw => {}
            Step::ReloadContent => {
                info!("Re-reading {}", content_path.display());
                let forest = parser::load(content_path);
                session.apply(menu, Action::Reload(forest));
            }
            Step::Quit => break,
        }
    }
    Ok(())
}

fn draw(out: &mut impl Write, menu: &Menu, session: &MenuSession) -> io::Result<()> {
    queue!(
        out,
        Clear(ClearType::All),
        MoveTo(0, 0),
        SetAttribute(Attribute::Bold),
        Print(menu.breadcrumb()),
        SetAttribute(Attribute::Reset),
        Print(format!(": {}\r\n", session.typed)),
    )?;
    for index in 0..menu.entry_count() {
        let marker = if index == session.selected { "> " } else { "  " };
        queue!(out, Print(format!("{marker}{}\r\n", menu.entry_label(index))))?;
    }
    if menu.entry_count() == 0 {
        queue!(out, Print("  (no entries)\r\n"))?;
    }
    out.flush()
}

/// Writes the breadcrumb and every entry label, one per line.
pub fn print_listing(out: &mut impl Write, menu: &Menu) -> io::Result<()> {
    writeln!(out, "{}", menu.breadcrumb())?;
    for index in 0..menu.entry_count() {
        writeln!(out, "{}", menu.entry_label(index))?;
    }
    Ok(())
}

/// Walks `hotkeys` one at a time, activating the first entry whose hotkey
/// matches each.
///
/// Stops early if a hotkey matches nothing or an action ends the session.
/// Returns whether every hotkey was consumed.
pub fn select_hotkeys(menu: &mut Menu, hotkeys: &[String]) -> bool {
    let mut session = MenuSession::new();
    for (position, hotkey) in hotkeys.iter().enumerate() {
        let wanted = hotkey.trim().to_lowercase();
        let found = (0..menu.entry_count()).find(|&i| menu.entry_hotkey(i) == wanted);
        let Some(index) = found else {
            warn!("No entry with hotkey '{}' in '{}'", wanted, menu.breadcrumb());
            return false;
        };
        if session.apply(menu, Action::Activate(index)) == Step::Quit {
            return position + 1 == hotkeys.len();
        }
    }
    true
}
