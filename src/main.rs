//! floating-sheets - a terminal showcase of floating bottom sheets
//!
//! Three trigger buttons each present a styled sheet (alert, question,
//! request) that closes from any of its action buttons. Built on the
//! Component Architecture pattern from ratatui.

mod action;
mod app;
mod component;
mod components;
mod config;
mod logging;
mod model;
mod text;
mod theme;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::component::Component;
use crate::config::Config;
use crate::tui::Tui;
use anyhow::Result;
use crossterm::event::Event;
use tracing::{error, info, warn};

fn main() -> Result<()> {
    let loaded = Config::load();
    let config = match &loaded {
        Ok(Some(config)) => config.clone(),
        _ => Config::default(),
    };
    let _log_guard = logging::init(&config);
    if let Err(err) = &loaded {
        warn!(error = %err, "ignoring config file, using defaults");
    }
    info!(?config, "starting");

    // Setup terminal
    let mut tui = Tui::new()?
        .with_tick_rate(config.tick_rate())
        .with_mouse(config.mouse);
    tui.enter()?;

    let mut app = App::new();
    let result = run_app(&mut tui, &mut app);

    // Cleanup terminal
    tui.exit()?;

    // The log guard must drop, not be skipped by process::exit, to flush this line
    if let Err(err) = &result {
        error!(error = ?err, "event loop failed");
    }
    result
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        let mut draw_result = Ok(());
        tui.draw(|frame| {
            draw_result = app.draw(frame, frame.area());
        })?;
        draw_result?;

        let action = match tui.next_event()? {
            Some(Event::Key(key)) => app.handle_key_event(key)?,
            Some(Event::Mouse(mouse)) => app.handle_mouse_event(mouse)?,
            Some(Event::Resize(w, h)) => Some(Action::Resize(w, h)),
            Some(_) => None,
            None => Some(Action::Tick),
        };

        if let Some(action) = action {
            app.dispatch(action)?;
        }
    }

    Ok(())
}
