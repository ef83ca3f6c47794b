//! # Content Parser
//!
//! Turns a blezz content file into a [`Forest`].
//!
//! ```text
//! Top:                              ← directory header (ends with ':')
//! dir(d, Developer)                 ← DirRef  hotkey, label[, icon]
//! act(t, Terminal, alacritty)       ← ActRef  hotkey, label, command[, icon]
//! actReload(v, Volume+, amixer ...) ← ActRef that keeps the menu open
//! Developer:
//! ...
//! ```
//!
//! A trailing `, word` on an `act` line (comma, whitespace, one bare word)
//! is always read as the icon. A command whose last argument looks like
//! that, such as `echo a, b, c`, loses it to the icon field; write it as
//! `echo a, b,c` or quote it.
//!
//! Parsing is line-at-a-time and never fails. Lines that don't fit the
//! format are dropped and the next line is tried. Once input is exhausted
//! every directory gets exactly one trailing `GoUp` entry.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info, warn};

use crate::core::node::{Directory, DirectoryId, Entry, Forest};

/// Reads a content file. A file that can't be opened yields an empty forest.
pub fn load(path: &Path) -> Forest {
    match File::open(path) {
        Ok(file) => {
            let forest = parse_reader(BufReader::new(file));
            info!(
                "Loaded {} directories from {}",
                forest.len(),
                path.display()
            );
            forest
        }
        Err(e) => {
            warn!("Could not open content file {}: {}", path.display(), e);
            Forest::new()
        }
    }
}

/// Parses from any buffered reader, one line at a time.
///
/// A read error (e.g. invalid UTF-8) ends parsing; whatever was read so
/// far is kept.
pub fn parse_reader<R: BufRead>(reader: R) -> Forest {
    let mut builder = ForestBuilder::default();
    for (line_num, line) in reader.lines().enumerate() {
        match line {
            Ok(line) => builder.feed(&line),
            Err(e) => {
                warn!("Stopped reading content at line {}: {}", line_num + 1, e);
                break;
            }
        }
    }
    builder.finish()
}

/// Parses an in-memory content string.
pub fn parse_str(input: &str) -> Forest {
    let mut builder = ForestBuilder::default();
    for line in input.lines() {
        builder.feed(line);
    }
    builder.finish()
}

#[derive(Default)]
struct ForestBuilder {
    forest: Forest,
    open: Option<DirectoryId>,
}

impl ForestBuilder {
    fn feed(&mut self, line: &str) {
        if let Some(header) = line.strip_suffix(':') {
            let name = header.trim();
            debug!("Directory '{}'", name);
            self.open = Some(self.forest.push(Directory::new(name)));
            return;
        }

        let entry = if line.starts_with("dir") {
            paren_body(line).and_then(parse_dir_ref)
        } else if line.starts_with("actReload") {
            paren_body(line).and_then(|body| parse_act_ref(body, true))
        } else if line.starts_with("act") {
            paren_body(line).and_then(|body| parse_act_ref(body, false))
        } else {
            return;
        };

        match (self.open, entry) {
            (Some(dir), Some(entry)) => self.forest.get_mut(dir).add_child(entry),
            (None, Some(_)) => debug!("Entry before any directory header ignored: {}", line),
            (_, None) => debug!("Malformed entry line ignored: {}", line),
        }
    }

    fn finish(mut self) -> Forest {
        for dir in self.forest.directories_mut() {
            dir.add_child(Entry::GoUp);
        }
        self.forest
    }
}

/// Text between the first `(` and the last `)`.
fn paren_body(line: &str) -> Option<&str> {
    let start = line.find('(')?;
    let end = line.rfind(')')?;
    if end <= start {
        return None;
    }
    Some(&line[start + 1..end])
}

fn parse_dir_ref(body: &str) -> Option<Entry> {
    let mut fields = body.splitn(3, ',');
    let hotkey = normalize_hotkey(fields.next()?);
    let label = fields.next()?.trim().to_string();
    let icon = fields.next().and_then(non_empty);
    Some(Entry::DirRef {
        hotkey,
        target: label.clone(),
        label,
        icon,
    })
}

fn parse_act_ref(body: &str, reload: bool) -> Option<Entry> {
    let mut fields = body.splitn(3, ',');
    let hotkey = normalize_hotkey(fields.next()?);
    let label = fields.next()?.trim().to_string();
    let (command, icon) = split_icon(fields.next()?);
    Some(Entry::ActRef {
        hotkey,
        label,
        command: command.trim().to_string(),
        icon,
        reload,
    })
}

/// Separates an optional trailing icon from a command.
///
/// Only a final `, word` segment counts as an icon, so commas inside a
/// command (`echo a,b,c`) stay part of it.
fn split_icon(rest: &str) -> (&str, Option<String>) {
    if let Some((command, tail)) = rest.rsplit_once(',') {
        let word = tail.trim();
        let bare = !word.is_empty()
            && !word.contains(|c: char| c.is_whitespace() || c == '"' || c == '\'');
        if tail.starts_with(char::is_whitespace) && bare && !command.trim().is_empty() {
            return (command, Some(word.to_string()));
        }
    }
    (rest, None)
}

fn normalize_hotkey(raw: &str) -> String {
    raw.trim().to_lowercase()
}

fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
