//! Keyboard shortcuts
//!
//! All shortcuts use Ctrl on every platform: Cmd combinations are taken by
//! most macOS terminals.

/// Ctrl+S submits from the last step
pub const SUBMIT_KEY: char = 's';

/// Ctrl+N acts as the "Next" control
pub const NEXT_STEP_KEY: char = 'n';

/// Ctrl+B acts as the "Back" control
pub const PREV_STEP_KEY: char = 'b';

/// Shortcut hints shown in the footer
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";
pub const NEXT_SHORTCUT: &str = "Enter/Ctrl+N";
pub const PREV_SHORTCUT: &str = "Ctrl+B";
