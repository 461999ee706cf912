//! Action enum - All possible application actions
//!
//! Components emit Actions in response to events, and the App processes
//! them to update state. Buttons carry the Action they fire when pressed.

use crate::model::sheet::SheetKind;
use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick when no input arrived
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Focus
    // ─────────────────────────────────────────────────────────────────────────
    /// Move focus to the next button
    FocusNext,
    /// Move focus to the previous button
    FocusPrev,

    // ─────────────────────────────────────────────────────────────────────────
    // Overlays
    // ─────────────────────────────────────────────────────────────────────────
    /// Present a floating bottom sheet
    PresentSheet(SheetKind),
    /// Close the presented sheet
    DismissSheet,
    /// Open quit confirmation dialog
    OpenQuitDialog,
    /// Close whatever overlay is on screen
    CloseOverlay,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::FocusNext => write!(f, "FocusNext"),
            Action::FocusPrev => write!(f, "FocusPrev"),
            Action::PresentSheet(kind) => write!(f, "PresentSheet({})", kind),
            Action::DismissSheet => write!(f, "DismissSheet"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::CloseOverlay => write!(f, "CloseOverlay"),
        }
    }
}
