//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod button;
pub mod home;
pub mod layout;
pub mod quit_dialog;
pub mod sheet;

pub use home::HomeComponent;
pub use layout::centered_popup;
pub use quit_dialog::QuitDialog;
pub use sheet::SheetView;
