//! Application module
//!
//! Owns the session and runs the terminal event loop. Each key press is one
//! interaction: it is applied to the session and followed by a session cycle,
//! then the screen is redrawn.

use crate::components::keybindings::{KeyAction, KeybindingContext};
use crate::config_file::ConfigStore;
use crate::error::{DashError, Result};
use crate::session::{Focus, Session};
use crate::ui::UiRenderer;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::Backend};
use std::time::Duration;
use tracing::{debug, info};

/// Main application struct
pub struct App {
    session: Session,
    ui_renderer: UiRenderer,
    keybinding_context: KeybindingContext,
    should_quit: bool,
}

impl App {
    pub fn new(store: ConfigStore) -> Self {
        Self::with_session(Session::new(store))
    }

    pub fn with_session(session: Session) -> Self {
        Self {
            session,
            ui_renderer: UiRenderer::new(),
            keybinding_context: KeybindingContext::new(),
            should_quit: false,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Run one interaction cycle; a failed cycle is shown, not propagated
    pub fn cycle(&mut self) {
        if self.session.cycle().is_err() {
            self.session.focus = Focus::Menu;
        }
    }

    /// Draw the current session state
    pub fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let Self {
            session,
            ui_renderer,
            keybinding_context,
            ..
        } = self;
        terminal
            .draw(|f| ui_renderer.render(f, session, keybinding_context))
            .map_err(|e| DashError::terminal(format!("Failed to draw frame: {}", e)))?;
        Ok(())
    }

    /// Run the main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        info!("Dashboard started");
        self.cycle();

        loop {
            self.draw(terminal)?;

            let ready = crossterm::event::poll(Duration::from_millis(50))
                .map_err(|e| DashError::terminal(format!("Failed to poll events: {}", e)))?;
            if !ready {
                continue;
            }

            match crossterm::event::read()
                .map_err(|e| DashError::terminal(format!("Failed to read event: {}", e)))?
            {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    self.handle_key_event(key);
                    if self.should_quit {
                        break;
                    }
                    self.cycle();
                }
                Event::Resize(width, height) => {
                    debug!("Terminal resized to {}x{}", width, height);
                }
                _ => {}
            }
        }

        info!("Dashboard stopped");
        Ok(())
    }

    /// Handle a key press
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.session.help_visible {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::F(1)) {
                self.session.help_visible = false;
            }
            return;
        }

        match self.session.focus {
            Focus::Menu => {
                if let Some(action) = self.keybinding_context.resolve_menu(&key) {
                    self.handle_menu_action(action);
                }
            }
            Focus::Page => match self.keybinding_context.resolve_global(&key) {
                Some(action) => self.handle_menu_action(action),
                None => self.session.page_key(key),
            },
        }
    }

    fn handle_menu_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::NavigateUp => self.session.menu_mut().select_previous(),
            KeyAction::NavigateDown => self.session.menu_mut().select_next(),
            KeyAction::Home => self.session.menu_mut().select_first(),
            KeyAction::End => self.session.menu_mut().select_last(),
            KeyAction::FocusPage => {
                self.session.focus_page();
            }
            KeyAction::Reload => {
                self.session.reload();
                self.session.status_message = "Reloaded".to_string();
            }
            KeyAction::ToggleDebug => self.session.debug_visible = !self.session.debug_visible,
            KeyAction::Help => self.session.help_visible = true,
            KeyAction::Quit => {
                info!("Quit requested");
                self.should_quit = true;
            }
            KeyAction::Back => self.session.focus = Focus::Menu,
            KeyAction::NextField | KeyAction::PreviousField | KeyAction::Activate => {}
        }
    }
}
