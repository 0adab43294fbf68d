//! The seam between the configuration and the window manager that hosts it.
//!
//! The host owns the event loop, the window tree and input dispatch.  This
//! crate only needs to query a small slice of its state and to forward
//! commands to it; [`WindowManager`] captures exactly that slice so the
//! group logic can be exercised against any backend (or a test double).
//! Launching programs does not go through the host; see
//! [`spawn`](crate::spawn).

use crate::command::{LayoutCommand, WindowCommand};

/// Abstraction over the host window manager.
///
/// Screen indices are 0-based, in the order the host attaches screens.
pub trait WindowManager {
    /// The error type produced by this window manager.
    type Error: std::error::Error + Send + 'static;

    //  State queries

    /// Number of screens currently attached.
    fn screen_count(&self) -> usize;

    /// Index of the screen that has focus.
    fn current_screen(&self) -> usize;

    /// Name of the group shown on the current screen.
    fn current_group(&self) -> String;

    /// Index of the screen `group` is shown on, or `None` if it is not on
    /// any screen (or the host does not know the group).
    fn group_screen(&self, group: &str) -> Option<usize>;

    //  Commands

    /// Forward a command to the current layout.
    fn layout_command(&self, command: LayoutCommand) -> Result<(), Self::Error>;

    /// Forward a command to the focused window.
    fn window_command(&self, command: WindowCommand) -> Result<(), Self::Error>;

    /// Cycle the current group to its next layout.
    fn next_layout(&self) -> Result<(), Self::Error>;

    /// Re-read the configuration.
    fn reload_config(&self) -> Result<(), Self::Error>;

    /// Cycle the keyboard layout to the next configured keyboard.
    fn next_keyboard_layout(&self) -> Result<(), Self::Error>;

    /// Show `group` on the current screen.
    fn group_to_screen(&self, group: &str) -> Result<(), Self::Error>;

    /// Move the focused window to `group`.  When `switch_group` is set the
    /// current screen follows the window.
    fn move_window_to_group(&self, group: &str, switch_group: bool) -> Result<(), Self::Error>;
}
