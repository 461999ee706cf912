//! Floating bottom sheet
//!
//! Renders an icon badge, a title, a short message and one or two action
//! buttons in a panel anchored to the bottom of the screen. Every action
//! button fires the dismissal callback handed in by the owner; the sheet
//! does not know or care which one was chosen.

use crate::action::Action;
use crate::component::Component;
use crate::components::button::{draw_filled_button, BUTTON_HEIGHT};
use crate::components::layout::floating_bottom_sheet;
use crate::model::sheet::{icon_glyph, SheetConfig, SheetSpec};
use crate::text::{truncate, wrap_capped};
use crate::theme::{Tint, SURFACE};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Clear, Paragraph, Widget},
    Frame,
};

/// Widest a sheet gets on large terminals
pub const SHEET_MAX_WIDTH: u16 = 60;

/// The message never takes more than this many lines
pub const BODY_MAX_LINES: usize = 2;

const BADGE_WIDTH: u16 = 9;
const BADGE_HEIGHT: u16 = 3;

pub struct SheetView {
    spec: SheetSpec,
    on_dismiss: Action,
    focused: usize,
    /// Button rectangles from the last draw, in display order
    button_areas: Vec<Rect>,
}

impl SheetView {
    pub fn new(spec: SheetSpec, on_dismiss: Action) -> Self {
        Self {
            spec,
            on_dismiss,
            focused: 0,
            button_areas: Vec::new(),
        }
    }

    #[cfg(test)]
    pub fn spec(&self) -> &SheetSpec {
        &self.spec
    }

    pub fn action_count(&self) -> usize {
        self.spec.actions().count()
    }

    #[cfg(test)]
    pub fn focused(&self) -> usize {
        self.focused
    }

    #[cfg(test)]
    pub fn button_areas(&self) -> &[Rect] {
        &self.button_areas
    }

    pub fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % self.action_count();
    }

    pub fn focus_prev(&mut self) {
        let count = self.action_count();
        self.focused = (self.focused + count - 1) % count;
    }

    /// Any action closes the sheet
    pub fn activate(&self) -> Action {
        self.on_dismiss.clone()
    }

    fn draw_badge(buf: &mut Buffer, area: Rect, image: &SheetConfig) {
        let glyph = icon_glyph(&image.content);
        let glyph_style = Style::default()
            .fg(image.foreground.color())
            .bg(image.tint.gradient(0, 1))
            .add_modifier(Modifier::BOLD);

        if area.is_empty() {
            return;
        }
        if area.width < BADGE_WIDTH || area.height < BADGE_HEIGHT {
            let x = area.x + area.width / 2;
            buf.set_string(x, area.y, glyph, glyph_style);
            return;
        }

        let x = area.x + (area.width - BADGE_WIDTH) / 2;
        let y = area.y;
        let ring = Style::default().bg(image.tint.rgb().over(SURFACE, 0.5).color());
        // Narrow caps above and below a wide middle row read as a circle.
        buf.set_style(Rect::new(x + 2, y, BADGE_WIDTH - 4, 1), ring);
        buf.set_style(Rect::new(x, y + 1, BADGE_WIDTH, 1), ring);
        buf.set_style(Rect::new(x + 2, y + 2, BADGE_WIDTH - 4, 1), ring);
        buf.set_style(
            Rect::new(x + 2, y + 1, BADGE_WIDTH - 4, 1),
            Style::default().bg(image.tint.gradient(0, 1)),
        );
        buf.set_string(x + BADGE_WIDTH / 2, y + 1, glyph, glyph_style);
    }
}

impl Component for SheetView {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Tab | KeyCode::Down | KeyCode::Char('j') => Some(Action::FocusNext),
            KeyCode::BackTab | KeyCode::Up | KeyCode::Char('k') => Some(Action::FocusPrev),
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Esc => Some(self.activate()),
            KeyCode::Char('1') => Some(self.activate()),
            KeyCode::Char('2') if self.action_count() > 1 => Some(self.activate()),
            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(None);
        }
        let position = Position::new(mouse.column, mouse.row);
        let hit = self.button_areas.iter().any(|area| area.contains(position));
        Ok(hit.then(|| self.activate()))
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::FocusNext => self.focus_next(),
            Action::FocusPrev => self.focus_prev(),
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let panel = floating_bottom_sheet(area, SHEET_MAX_WIDTH, self.spec.rows());
        frame.render_widget(Clear, panel);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Tint::Gray.with_opacity(0.6)))
            .style(Style::default().bg(SURFACE.color()));
        let inner = block.inner(panel);
        frame.render_widget(block, panel);

        let mut constraints = vec![
            Constraint::Length(BADGE_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(BODY_MAX_LINES as u16),
            Constraint::Length(1),
        ];
        constraints.extend(self.spec.actions().map(|_| Constraint::Length(BUTTON_HEIGHT)));
        constraints.push(Constraint::Min(0));
        let chunks = Layout::vertical(constraints)
            .horizontal_margin(1)
            .split(inner);

        let buf = frame.buffer_mut();
        Self::draw_badge(buf, chunks[0], &self.spec.image);

        let title_width = chunks[1].width as usize;
        Paragraph::new(Line::styled(
            truncate(&self.spec.title, title_width),
            Style::default()
                .fg(Tint::Primary.color())
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)
        .render(chunks[1], buf);

        let body: Vec<Line> = wrap_capped(&self.spec.body, chunks[2].width as usize, BODY_MAX_LINES)
            .into_iter()
            .map(Line::from)
            .collect();
        Paragraph::new(body)
            .style(Style::default().fg(Tint::Gray.color()))
            .alignment(Alignment::Center)
            .render(chunks[2], buf);

        self.button_areas.clear();
        for (index, config) in self.spec.actions().enumerate() {
            let button = chunks[4 + index];
            draw_filled_button(
                buf,
                button,
                &config.content,
                config.tint,
                config.foreground,
                index == self.focused,
            );
            self.button_areas.push(button);
        }
        Ok(())
    }
}
