//! Gradient-filled buttons
//!
//! Trigger buttons on the root screen and the action buttons inside
//! sheets share the same look: a rounded outline over a gradient fill
//! with a bold centred label.

use crate::action::Action;
use crate::text::truncate;
use crate::theme::{paint_gradient, Tint};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Position, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Rows a button occupies, outline included
pub const BUTTON_HEIGHT: u16 = 3;

/// Render a filled button into `area`
pub fn draw_filled_button(
    buf: &mut Buffer,
    area: Rect,
    label: &str,
    tint: Tint,
    foreground: Tint,
    focused: bool,
) {
    if area.is_empty() {
        return;
    }
    paint_gradient(buf, area, tint);

    let label_area = if area.height >= BUTTON_HEIGHT && area.width > 2 {
        let border = if focused {
            Style::default()
                .fg(Tint::White.color())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(tint.rgb().lighten(0.35).color())
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border);
        let inner = block.inner(area);
        block.render(area, buf);
        Rect::new(inner.x, inner.y + inner.height / 2, inner.width, 1)
    } else {
        Rect::new(area.x, area.y + area.height / 2, area.width, 1)
    };

    let mut style = Style::default()
        .fg(foreground.color())
        .add_modifier(Modifier::BOLD);
    if focused {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    Paragraph::new(Line::styled(truncate(label, label_area.width as usize), style))
        .alignment(Alignment::Center)
        .render(label_area, buf);
}

/// A labelled button that fires an Action when pressed
#[derive(Debug, Clone)]
pub struct TriggerButton {
    label: String,
    tint: Tint,
    on_press: Action,
    /// Where the button was last drawn, for mouse hit-testing
    area: Rect,
}

impl TriggerButton {
    pub fn new(label: impl Into<String>, tint: Tint, on_press: Action) -> Self {
        Self {
            label: label.into(),
            tint,
            on_press,
            area: Rect::default(),
        }
    }

    #[cfg(test)]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[cfg(test)]
    pub fn tint(&self) -> Tint {
        self.tint
    }

    /// The callback Action
    pub fn press(&self) -> Action {
        self.on_press.clone()
    }

    /// Width needed for the label plus padding and outline
    pub fn width(&self) -> u16 {
        self.label.width() as u16 + 4
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.area.contains(Position::new(column, row))
    }

    pub fn render(&mut self, buf: &mut Buffer, area: Rect, focused: bool) {
        self.area = area;
        draw_filled_button(buf, area, &self.label, self.tint, Tint::White, focused);
    }
}
