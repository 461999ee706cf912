//! Root screen - title, trigger bar and key hints

use crate::action::Action;
use crate::component::Component;
use crate::components::button::{TriggerButton, BUTTON_HEIGHT};
use crate::components::layout::{calculate_main_layout, trigger_bar_area};
use crate::model::sheet::SheetKind;
use crate::theme::Tint;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

pub const SCREEN_TITLE: &str = "Floating Bottom Sheets";

/// Space between neighbouring trigger buttons
const BUTTON_GAP: u16 = 1;
/// Padding between the bar outline and the buttons
const BAR_PADDING: u16 = 1;

/// The row of trigger buttons and the focus among them
pub struct HomeComponent {
    triggers: Vec<TriggerButton>,
    focused: usize,
}

impl Default for HomeComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl HomeComponent {
    pub fn new() -> Self {
        let triggers = SheetKind::ALL
            .iter()
            .map(|kind| {
                TriggerButton::new(
                    kind.trigger_label(),
                    kind.trigger_tint(),
                    Action::PresentSheet(*kind),
                )
            })
            .collect();
        Self {
            triggers,
            focused: 0,
        }
    }

    #[cfg(test)]
    pub fn triggers(&self) -> &[TriggerButton] {
        &self.triggers
    }

    #[cfg(test)]
    pub fn focused(&self) -> usize {
        self.focused
    }

    pub fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % self.triggers.len();
    }

    pub fn focus_prev(&mut self) {
        self.focused = (self.focused + self.triggers.len() - 1) % self.triggers.len();
    }

    fn bar_size(&self) -> (u16, u16) {
        let buttons: u16 = self.triggers.iter().map(TriggerButton::width).sum();
        let gaps = BUTTON_GAP * (self.triggers.len() as u16).saturating_sub(1);
        let chrome = 2 * (BAR_PADDING + 1);
        (buttons + gaps + chrome, BUTTON_HEIGHT + chrome)
    }

    fn draw_title(&self, frame: &mut Frame, area: Rect) {
        let title = Paragraph::new(Line::from(Span::styled(
            SCREEN_TITLE,
            Style::default()
                .fg(Tint::Primary.color())
                .add_modifier(Modifier::BOLD),
        )))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Tint::Gray.with_opacity(0.4)))
                .padding(ratatui::widgets::Padding::horizontal(1)),
        );
        frame.render_widget(title, area);
    }

    fn draw_bar(&mut self, frame: &mut Frame, area: Rect) {
        let (width, height) = self.bar_size();
        let bar = trigger_bar_area(area, width, height);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Tint::Gray.with_opacity(0.3)))
            .style(Style::default().bg(Tint::Gray.with_opacity(0.2)));
        let inner = block.inner(bar);
        frame.render_widget(block, bar);

        let buf = frame.buffer_mut();
        let mut x = inner.x + BAR_PADDING;
        let y = inner.y + BAR_PADDING;
        for (index, trigger) in self.triggers.iter_mut().enumerate() {
            let available = inner.right().saturating_sub(x);
            let button = Rect::new(x, y, trigger.width().min(available), BUTTON_HEIGHT);
            trigger.render(buf, button.intersection(inner), index == self.focused);
            x = x.saturating_add(button.width + BUTTON_GAP);
        }
    }

    fn draw_help(&self, frame: &mut Frame, area: Rect) {
        let key = Style::default()
            .fg(Tint::Primary.color())
            .add_modifier(Modifier::BOLD);
        let hint = Style::default().fg(Tint::Gray.color());
        let help = Line::from(vec![
            Span::styled(" ←/→ ", key),
            Span::styled("focus  ", hint),
            Span::styled("Enter ", key),
            Span::styled("open  ", hint),
            Span::styled("1-3 ", key),
            Span::styled("open directly  ", hint),
            Span::styled("q ", key),
            Span::styled("quit", hint),
        ]);
        frame.render_widget(Paragraph::new(help), area);
    }
}

impl Component for HomeComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => Some(Action::FocusNext),
            KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => Some(Action::FocusPrev),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.triggers.get(self.focused).map(TriggerButton::press)
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                self.triggers.get(index).map(TriggerButton::press)
            }
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),
            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(None);
        }
        Ok(self
            .triggers
            .iter()
            .find(|t| t.contains(mouse.column, mouse.row))
            .map(TriggerButton::press))
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
        let layout = calculate_main_layout(area);
        self.draw_title(frame, layout.title);
        self.draw_bar(frame, layout.content);
        self.draw_help(frame, layout.help);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_triggers_in_order() {
        let home = HomeComponent::new();
        let labels: Vec<_> = home.triggers().iter().map(|t| t.label()).collect();
        assert_eq!(labels, vec!["Alert", "Question", "Request"]);
        assert_eq!(home.triggers()[1].tint(), Tint::Blue);
    }

    #[test]
    fn test_focus_wraps() {
        let mut home = HomeComponent::new();
        home.focus_prev();
        assert_eq!(home.focused(), 2);
        home.focus_next();
        assert_eq!(home.focused(), 0);
    }

    #[test]
    fn test_enter_presses_focused_trigger() {
        let mut home = HomeComponent::new();
        home.focus_next();
        let action = home.handle_key_event(key(KeyCode::Enter)).unwrap();
        assert_eq!(action, Some(Action::PresentSheet(SheetKind::Question)));
    }

    #[test]
    fn test_number_keys_open_directly() {
        let mut home = HomeComponent::new();
        assert_eq!(
            home.handle_key_event(key(KeyCode::Char('3'))).unwrap(),
            Some(Action::PresentSheet(SheetKind::Request))
        );
        assert_eq!(home.handle_key_event(key(KeyCode::Char('4'))).unwrap(), None);
    }

    #[test]
    fn test_click_hits_drawn_trigger() {
        let mut home = HomeComponent::new();
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|frame| {
                home.draw(frame, frame.area()).unwrap();
            })
            .unwrap();

        let alert = home.triggers()[0].clone();
        let hit = (0..80u16)
            .flat_map(|x| (0..24u16).map(move |y| (x, y)))
            .find(|(x, y)| alert.contains(*x, *y))
            .expect("alert trigger drawn on screen");

        let action = home.handle_mouse_event(click(hit.0, hit.1)).unwrap();
        assert_eq!(action, Some(Action::PresentSheet(SheetKind::Alert)));
        assert_eq!(home.handle_mouse_event(click(0, 0)).unwrap(), None);
    }

    #[test]
    fn test_draw_shows_title_and_labels() {
        let mut home = HomeComponent::new();
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|frame| {
                home.draw(frame, frame.area()).unwrap();
            })
            .unwrap();

        let screen: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(screen.contains(SCREEN_TITLE));
        for label in ["Alert", "Question", "Request"] {
            assert!(screen.contains(label), "missing {label}");
        }
    }
}
