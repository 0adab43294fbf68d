//! Fire-and-forget process launching.
//!
//! Command lines are split into argv with shell-like quoting and started
//! directly, without a shell.  Callers never block on a child; each one is
//! reaped on its own thread.

use log::{debug, info, warn};
use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::JoinHandle;

/// Errors produced while launching a process.
#[derive(Debug, thiserror::Error)]
pub enum SpawnError {
    #[error("empty command line")]
    Empty,
    #[error("unterminated quote in {0:?}")]
    UnbalancedQuote(String),
    #[error("trailing backslash in {0:?}")]
    TrailingEscape(String),
    #[error("failed to launch {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Split `line` into words.
///
/// Whitespace separates words.  Single quotes preserve everything
/// literally; double quotes preserve everything except `\"` and `\\`;
/// outside quotes a backslash escapes the next character.
pub fn split_command(line: &str) -> Result<Vec<String>, SpawnError> {
    #[derive(PartialEq)]
    enum Quote {
        None,
        Single,
        Double,
    }

    let mut words = Vec::new();
    let mut word = String::new();
    // Tracks whether `word` holds a word, which may be empty (`''`).
    let mut in_word = false;
    let mut quote = Quote::None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match quote {
            Quote::Single => {
                if c == '\'' {
                    quote = Quote::None;
                } else {
                    word.push(c);
                }
            }
            Quote::Double => match c {
                '"' => quote = Quote::None,
                '\\' => match chars.next() {
                    Some(n @ ('"' | '\\')) => word.push(n),
                    Some(n) => {
                        word.push('\\');
                        word.push(n);
                    }
                    None => return Err(SpawnError::UnbalancedQuote(line.to_string())),
                },
                _ => word.push(c),
            },
            Quote::None => match c {
                '\'' => {
                    quote = Quote::Single;
                    in_word = true;
                }
                '"' => {
                    quote = Quote::Double;
                    in_word = true;
                }
                '\\' => match chars.next() {
                    Some(n) => {
                        word.push(n);
                        in_word = true;
                    }
                    None => return Err(SpawnError::TrailingEscape(line.to_string())),
                },
                c if c.is_whitespace() => {
                    if in_word {
                        words.push(std::mem::take(&mut word));
                        in_word = false;
                    }
                }
                _ => {
                    word.push(c);
                    in_word = true;
                }
            },
        }
    }

    if quote != Quote::None {
        return Err(SpawnError::UnbalancedQuote(line.to_string()));
    }
    if in_word {
        words.push(word);
    }
    Ok(words)
}

/// A launched child.
///
/// A background thread waits on the child so it never lingers as a zombie.
/// Dropping the handle detaches from that thread; the child keeps running.
#[derive(Debug)]
pub struct Spawned {
    pub pid: u32,
    reaper: JoinHandle<Option<ExitStatus>>,
}

impl Spawned {
    /// Block until the child exits.  `None` if waiting on it failed.
    pub fn wait(self) -> Option<ExitStatus> {
        self.reaper.join().ok().flatten()
    }
}

fn reap(mut child: Child, program: String) -> Spawned {
    let pid = child.id();
    let reaper = std::thread::spawn(move || match child.wait() {
        Ok(status) => {
            debug!("{} (pid {}) exited with {}", program, pid, status);
            Some(status)
        }
        Err(e) => {
            warn!("failed to wait on {} (pid {}): {}", program, pid, e);
            None
        }
    });
    Spawned { pid, reaper }
}

/// Launch `line` as a detached child with null stdio.
pub fn spawn(line: &str) -> Result<Spawned, SpawnError> {
    let argv = split_command(line)?;
    let (program, args) = argv.split_first().ok_or(SpawnError::Empty)?;
    let child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|source| SpawnError::Launch {
            program: program.clone(),
            source,
        })?;
    debug!("spawned {} (pid {})", program, child.id());
    Ok(reap(child, program.clone()))
}

/// Run the autostart script, if it exists.
///
/// Returns `Ok(None)` when there is no script at `path`.
pub fn run_autostart(path: &Path) -> Result<Option<Spawned>, SpawnError> {
    if !path.is_file() {
        info!("no autostart script at {}", path.display());
        return Ok(None);
    }
    let program = path.display().to_string();
    let child = Command::new(path)
        .stdin(Stdio::null())
        .spawn()
        .map_err(|source| SpawnError::Launch {
            program: program.clone(),
            source,
        })?;
    info!("autostart {} (pid {})", program, child.id());
    Ok(Some(reap(child, program)))
}
