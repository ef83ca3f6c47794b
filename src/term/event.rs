use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Terminal input, reduced to what the menu cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermEvent {
    Char(char),
    Backspace,
    Up,
    Down,
    Enter,
    Escape,
    ForceQuit,     // Ctrl+C
    ReloadContent, // Ctrl+R re-reads the content file
    Resize,
}

/// Blocks until the next relevant event arrives.
pub fn next_event() -> std::io::Result<TermEvent> {
    loop {
        if let Some(event) = translate(event::read()?) {
            return Ok(event);
        }
    }
}

pub fn translate(event: Event) -> Option<TermEvent> {
    match event {
        Event::Key(key_event) => translate_key(key_event),
        Event::Resize(_, _) => Some(TermEvent::Resize),
        _ => None,
    }
}

fn translate_key(key_event: KeyEvent) -> Option<TermEvent> {
    // Some terminals report releases too; only presses select.
    if key_event.kind != KeyEventKind::Press {
        return None;
    }
    log::debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TermEvent::ForceQuit),
        (KeyModifiers::CONTROL, KeyCode::Char('r')) => Some(TermEvent::ReloadContent),
        (_, KeyCode::Char(c)) => Some(TermEvent::Char(c)),
        (_, KeyCode::Backspace) | (_, KeyCode::Left) => Some(TermEvent::Backspace),
        (_, KeyCode::Up) => Some(TermEvent::Up),
        (_, KeyCode::Down) => Some(TermEvent::Down),
        (_, KeyCode::Enter) | (_, KeyCode::Right) => Some(TermEvent::Enter),
        (_, KeyCode::Esc) => Some(TermEvent::Escape),
        _ => None,
    }
}
