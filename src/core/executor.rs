//! # Command Executor
//!
//! The menu never runs processes itself. It hands the command string of an
//! activated `ActRef` to a [`CommandExecutor`] and returns immediately.
//! Whether the command succeeds is the executor's business.

use std::process::{Command, Stdio};

use log::{debug, error};

pub const DEFAULT_SHELL: &str = "sh";

pub trait CommandExecutor {
    /// Starts `command` without waiting for it to finish.
    fn execute(&self, command: &str);
}

/// Runs commands through `<shell> -c`, detached from the menu's stdio.
#[derive(Debug, Clone)]
pub struct ShellExecutor {
    shell: String,
}

impl ShellExecutor {
    pub fn new(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
        }
    }

    pub fn shell(&self) -> &str {
        &self.shell
    }
}

impl Default for ShellExecutor {
    fn default() -> Self {
        Self::new(DEFAULT_SHELL)
    }
}

impl CommandExecutor for ShellExecutor {
    fn execute(&self, command: &str) {
        let spawned = Command::new(&self.shell)
            .arg("-c")
            .arg(command)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        match spawned {
            Ok(mut child) => {
                debug!("Spawned pid {} for `{}`", child.id(), command);
                // Reap in the background so finished commands don't linger as zombies.
                std::thread::spawn(move || {
                    let _ = child.wait();
                });
            }
            Err(e) => {
                error!("Failed to launch `{}` via {}: {}", command, self.shell, e);
                eprintln!("blezz: failed to launch `{}`: {}", command, e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_shell_is_sh() {
        assert_eq!(ShellExecutor::default().shell(), "sh");
    }

    #[test]
    fn test_missing_shell_does_not_panic() {
        let executor = ShellExecutor::new("/nonexistent/blezz-test-shell");
        executor.execute("true");
    }

    #[cfg(unix)]
    #[test]
    fn test_execute_returns_before_command_finishes() {
        let executor = ShellExecutor::default();
        let started = std::time::Instant::now();
        executor.execute("sleep 2");
        assert!(started.elapsed() < std::time::Duration::from_secs(1));
    }
}
