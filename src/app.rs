//! Root application component
//!
//! The App owns the overlay state and routes events to whichever
//! component is on top: a sheet, the quit dialog, or the home screen.

use crate::action::Action;
use crate::component::Component;
use crate::components::{HomeComponent, QuitDialog, SheetView};
use crate::model::overlay::{Overlay, OverlayState};
use crate::model::sheet::SheetKind;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{layout::Rect, Frame};
use tracing::{debug, info};

/// Main application state
pub struct App {
    /// What is drawn over the home screen
    pub overlay: OverlayState,

    /// View for the presented sheet; present exactly when the overlay is a sheet
    pub sheet: Option<SheetView>,

    pub home: HomeComponent,
    pub quit_dialog: QuitDialog,

    /// Flag to indicate the app should quit
    pub should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> App {
        App {
            overlay: OverlayState::new(),
            sheet: None,
            home: HomeComponent::new(),
            quit_dialog: QuitDialog,
            should_quit: false,
        }
    }

    /// Apply `action` and every follow-up it produces
    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        let mut current = Some(action);
        while let Some(action) = current {
            if action != Action::Tick {
                debug!(%action, "dispatch");
            }
            current = self.update(action)?;
        }
        Ok(())
    }

    fn present_sheet(&mut self, kind: SheetKind) {
        if self.overlay.present_sheet(kind) {
            info!(sheet = %kind, "presenting sheet");
            self.sheet = Some(SheetView::new(kind.spec(), Action::DismissSheet));
        }
    }

    fn dismiss_sheet(&mut self) {
        if let Some(kind) = self.overlay.active_sheet() {
            self.overlay.dismiss();
            self.sheet = None;
            info!(sheet = %kind, "dismissed sheet");
        }
    }
}

impl Component for App {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(Some(Action::ForceQuit));
        }

        match (self.overlay.current(), self.sheet.as_mut()) {
            (Some(Overlay::Sheet(_)), Some(sheet)) => sheet.handle_key_event(key),
            (Some(Overlay::QuitConfirm), _) => self.quit_dialog.handle_key_event(key),
            (None, _) => self.home.handle_key_event(key),
            (Some(Overlay::Sheet(_)), None) => Ok(None),
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        match (self.overlay.current(), self.sheet.as_mut()) {
            (Some(Overlay::Sheet(_)), Some(sheet)) => sheet.handle_mouse_event(mouse),
            (None, _) => self.home.handle_mouse_event(mouse),
            _ => Ok(None),
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::Tick | Action::Resize(_, _) => {}
            Action::ForceQuit => {
                info!("quitting");
                self.should_quit = true;
            }

            Action::FocusNext | Action::FocusPrev => {
                if let Some(sheet) = self.sheet.as_mut() {
                    return sheet.update(action);
                }
                if self.overlay.is_empty() {
                    return self.home.update(action);
                }
            }

            Action::PresentSheet(kind) => self.present_sheet(kind),
            Action::DismissSheet => self.dismiss_sheet(),
            Action::OpenQuitDialog => {
                self.overlay.present(Overlay::QuitConfirm);
                self.sheet = None;
            }
            Action::CloseOverlay => {
                self.overlay.dismiss();
                self.sheet = None;
            }
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        self.home.draw(frame, area)?;

        match (self.overlay.current(), self.sheet.as_mut()) {
            (Some(Overlay::Sheet(_)), Some(sheet)) => sheet.draw(frame, area)?,
            (Some(Overlay::QuitConfirm), _) => self.quit_dialog.draw(frame, area)?,
            _ => {}
        }
        Ok(())
    }
}
