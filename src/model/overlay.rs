//! Overlay state for the root screen
//!
//! A single optional overlay instead of one visibility flag per sheet, so
//! two sheets can never be presented at once.

use crate::model::sheet::SheetKind;

/// Something drawn on top of the root screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    /// A floating bottom sheet
    Sheet(SheetKind),
    /// Quit confirmation dialog
    QuitConfirm,
}

/// The currently presented overlay, if any
#[derive(Debug, Default)]
pub struct OverlayState {
    current: Option<Overlay>,
}

impl OverlayState {
    pub fn new() -> Self {
        Self { current: None }
    }

    /// Present `kind`, replacing anything on screen.
    ///
    /// Returns false when that sheet was already up.
    pub fn present_sheet(&mut self, kind: SheetKind) -> bool {
        self.present(Overlay::Sheet(kind))
    }

    /// Present `overlay`, returning false if it was already current
    pub fn present(&mut self, overlay: Overlay) -> bool {
        if self.current == Some(overlay) {
            return false;
        }
        self.current = Some(overlay);
        true
    }

    /// Clear the overlay, returning what was shown
    pub fn dismiss(&mut self) -> Option<Overlay> {
        self.current.take()
    }

    pub fn current(&self) -> Option<Overlay> {
        self.current
    }

    pub fn active_sheet(&self) -> Option<SheetKind> {
        match self.current {
            Some(Overlay::Sheet(kind)) => Some(kind),
            _ => None,
        }
    }

    #[cfg(test)]
    pub fn is_sheet_visible(&self, kind: SheetKind) -> bool {
        self.active_sheet() == Some(kind)
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }
}
