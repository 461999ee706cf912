//! Layout calculations for the UI

use ratatui::layout::{Constraint, Layout, Rect};

/// Gap kept between a floating sheet and the screen edges
pub const SHEET_MARGIN: u16 = 1;

/// Main screen layout areas
pub struct MainLayout {
    pub title: Rect,
    pub content: Rect,
    pub help: Rect,
}

/// Calculate main screen layout: title, content, key hints
pub fn calculate_main_layout(area: Rect) -> MainLayout {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .split(area);

    MainLayout {
        title: chunks[0],
        content: chunks[1],
        help: chunks[2],
    }
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Area for a sheet floating just above the bottom edge of `area`
pub fn floating_bottom_sheet(area: Rect, max_width: u16, height: u16) -> Rect {
    let width = max_width.min(area.width.saturating_sub(2 * SHEET_MARGIN));
    let height = height.min(area.height.saturating_sub(SHEET_MARGIN));
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + area.height.saturating_sub(height + SHEET_MARGIN),
        width,
        height,
    )
}

/// Place the trigger bar centred horizontally, a third of the way down,
/// leaving the lower part of the screen for sheets
pub fn trigger_bar_area(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 3,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bottom_sheet_sits_above_bottom_edge() {
        let area = Rect::new(0, 0, 80, 30);
        let sheet = floating_bottom_sheet(area, 56, 16);
        assert_eq!(sheet, Rect::new(12, 13, 56, 16));
        assert_eq!(sheet.bottom(), area.bottom() - SHEET_MARGIN);
    }

    #[test]
    fn test_bottom_sheet_clamps_to_small_terminal() {
        let area = Rect::new(0, 0, 20, 10);
        let sheet = floating_bottom_sheet(area, 56, 16);
        assert_eq!(sheet.width, 18);
        assert_eq!(sheet.height, 9);
        assert_eq!(sheet.y, 0);
        assert_eq!(sheet.x, 1);
    }

    #[test]
    fn test_centered_popup_respects_offset() {
        let area = Rect::new(10, 5, 40, 20);
        assert_eq!(centered_popup(area, 20, 10), Rect::new(20, 10, 20, 10));
    }

    #[test]
    fn test_main_layout_rows() {
        let layout = calculate_main_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.title.height, 3);
        assert_eq!(layout.help, Rect::new(0, 23, 80, 1));
        assert_eq!(layout.content.height, 20);
    }

    #[test]
    fn test_trigger_bar_above_center() {
        let area = Rect::new(0, 3, 80, 21);
        let bar = trigger_bar_area(area, 40, 6);
        assert_eq!(bar, Rect::new(20, 8, 40, 6));
    }
}
