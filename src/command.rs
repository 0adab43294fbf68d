//! Actions and supporting types shared by every table.
//!
//! This module defines the vocabulary that all components share:
//! [`Action`] describes everything a binding can ask the host to do, and
//! [`Direction`] / [`LayoutCommand`] / [`WindowCommand`] describe the
//! layout and window calls it can make.
//!
//! Directions are parsed case-insensitively ("left", "Left", " LEFT ").

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Direction for focus, shuffle and grow commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All directions, in the order the key table binds them (h, l, j, k).
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Down,
        Direction::Up,
    ];

    /// The vi-style key bound to this direction.
    pub fn vi_key(self) -> &'static str {
        match self {
            Direction::Left => "h",
            Direction::Right => "l",
            Direction::Down => "j",
            Direction::Up => "k",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/// Parse a direction string (case-insensitive).
fn parse_direction(s: &str) -> Option<Direction> {
    match s.trim().to_lowercase().as_str() {
        "left" => Some(Direction::Left),
        "right" => Some(Direction::Right),
        "up" => Some(Direction::Up),
        "down" => Some(Direction::Down),
        _ => None,
    }
}

impl<'de> Deserialize<'de> for Direction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_direction(&s).ok_or_else(|| DeError::custom(format!("invalid direction: {:?}", s)))
    }
}

/// Calls into the host's tiling layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutCommand {
    /// Move focus to the neighbouring window.
    Focus(Direction),
    /// Swap the focused window with its neighbour.
    Shuffle(Direction),
    /// Grow the focused window towards its neighbour.
    Grow(Direction),
    /// Reset all window sizes.
    Normalize,
}

impl fmt::Display for LayoutCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutCommand::Focus(d) => write!(f, "focus {}", d),
            LayoutCommand::Shuffle(d) => write!(f, "shuffle {}", d),
            LayoutCommand::Grow(d) => write!(f, "grow {}", d),
            LayoutCommand::Normalize => write!(f, "normalize"),
        }
    }
}

/// Calls on the focused window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowCommand {
    Kill,
    ToggleFloating,
    /// Move a floating window while dragging.
    SetPositionFloating,
    /// Resize a floating window while dragging.
    SetSizeFloating,
    /// Start-state getter for a position drag.
    GetPosition,
    /// Start-state getter for a size drag.
    GetSize,
    BringToFront,
}

/// Every action a key or mouse binding can trigger.
///
/// Actions are plain data: the host looks them up in the binding tables and
/// a [`Dispatcher`](crate::dispatch::Dispatcher) resolves them against a
/// [`WindowManager`](crate::traits::WindowManager).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Launch an external program, fire-and-forget.
    ///
    /// The command line is split into argv with shell-like quoting; no
    /// shell is involved.
    Spawn(String),

    /// Forward a command to the current layout.
    Layout(LayoutCommand),

    /// Forward a command to the focused window.
    Window(WindowCommand),

    /// Cycle to the next layout of the current group.
    NextLayout,

    /// Ask the host to re-read its configuration.
    ReloadConfig,

    /// Cycle the keyboard layout widget to its next configured keyboard.
    NextKeyboardLayout,

    /// Show the named group on the current screen, unless the private-group
    /// rule suppresses it.
    SwitchToGroup(String),

    /// Move the focused window to the named group.  The view follows the
    /// window unless the private-group rule suppresses the switch.
    MoveWindowToGroup(String),
}

impl Action {
    /// Shorthand for [`Action::Spawn`].
    pub fn spawn(command: impl Into<String>) -> Self {
        Action::Spawn(command.into())
    }

    /// The group this action targets, if any.
    pub fn target_group(&self) -> Option<&str> {
        match self {
            Action::SwitchToGroup(name) | Action::MoveWindowToGroup(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Spawn(cmd) => write!(f, "spawn {:?}", cmd),
            Action::Layout(cmd) => write!(f, "layout {}", cmd),
            Action::Window(cmd) => write!(f, "window {:?}", cmd),
            Action::NextLayout => write!(f, "next layout"),
            Action::ReloadConfig => write!(f, "reload config"),
            Action::NextKeyboardLayout => write!(f, "next keyboard layout"),
            Action::SwitchToGroup(name) => write!(f, "switch to group {}", name),
            Action::MoveWindowToGroup(name) => write!(f, "move window to group {}", name),
        }
    }
}
