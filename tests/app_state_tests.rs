//! Tests for session state and the application key flow
//!
//! These tests verify:
//! - Session defaults and the Idle -> Rendered lifecycle
//! - Menu navigation updates the previous page
//! - Applying settings from the Settings page persists and restyles
//! - Malformed documents abort the cycle without losing the session
//! - The whole screen renders on a test backend

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pagedash::app::App;
use pagedash::config_file::ConfigStore;
use pagedash::session::{Focus, Lifecycle, Session};
use pagedash::theme::ThemeConfig;
use pagedash::types::{Orientation, ThemeStatus};
use ratatui::{Terminal, backend::TestBackend};
use std::fs;
use tempfile::TempDir;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn app() -> (TempDir, App) {
    let dir = TempDir::new().expect("tempdir");
    let mut app = App::new(ConfigStore::in_dir(dir.path()));
    app.cycle();
    (dir, app)
}

/// Press a key and run the cycle that follows it
fn press(app: &mut App, code: KeyCode) {
    app.handle_key_event(key(code));
    app.cycle();
}

fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

// =============================================================================
// Session defaults
// =============================================================================

#[test]
fn test_session_default_state() {
    let dir = TempDir::new().unwrap();
    let session = Session::new(ConfigStore::in_dir(dir.path()));
    assert_eq!(session.lifecycle(), Lifecycle::Idle);
    assert_eq!(session.focus, Focus::Menu);
    assert_eq!(session.previous_page(), "Home");
    assert!(!session.debug_visible);
    assert!(!session.help_visible);
    assert!(session.menu().is_empty());
}

#[test]
fn test_first_cycle_loads_defaults() {
    let (_dir, app) = app();
    let session = app.session();
    assert_eq!(session.lifecycle(), Lifecycle::Rendered);
    assert_eq!(session.snapshot().status, ThemeStatus::Dark);
    assert_eq!(session.menu().selected_label(), Some("Home"));
    assert_eq!(session.page_scans(), 1);
}

// =============================================================================
// Navigation
// =============================================================================

#[test]
fn test_navigation_updates_previous_page() {
    let (_dir, mut app) = app();
    press(&mut app, KeyCode::Down);
    assert_eq!(app.session().previous_page(), "Contacts");
    press(&mut app, KeyCode::End);
    assert_eq!(app.session().previous_page(), "App Settings");
    press(&mut app, KeyCode::Home);
    assert_eq!(app.session().previous_page(), "Home");
    // Pages are scanned once per session
    assert_eq!(app.session().page_scans(), 1);
}

#[test]
fn test_static_page_keeps_menu_focus() {
    let (_dir, mut app) = app();
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.session().focus, Focus::Menu);
    assert!(app.session().status_message.contains("Home"));
}

#[test]
fn test_reload_rescans_pages() {
    let (_dir, mut app) = app();
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char('r'));
    assert_eq!(app.session().page_scans(), 2);
    assert_eq!(app.session().menu().selected_label(), Some("Contacts"));
}

#[test]
fn test_toggles_and_quit() {
    let (_dir, mut app) = app();
    press(&mut app, KeyCode::Char('d'));
    assert!(app.session().debug_visible);
    press(&mut app, KeyCode::Char('?'));
    assert!(app.session().help_visible);
    // Keys other than close are swallowed by the help overlay
    press(&mut app, KeyCode::Char('q'));
    assert!(!app.should_quit());
    press(&mut app, KeyCode::Esc);
    assert!(!app.session().help_visible);
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());
}

// =============================================================================
// Settings page
// =============================================================================

#[test]
fn test_apply_light_preset_from_settings_page() {
    let (_dir, mut app) = app();
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    assert_eq!(app.session().menu().selected_label(), Some("Settings"));

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.session().focus, Focus::Page);

    // dark -> custom -> light
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Right);
    // Orientation select, then wide mode toggle
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char(' '));
    // Apply button; color fields are disabled for presets
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);

    let session = app.session();
    assert_eq!(session.snapshot().theme, ThemeConfig::light());
    assert_eq!(session.snapshot().status, ThemeStatus::Light);
    assert_eq!(session.snapshot().layout.orientation, Orientation::Horizontal);
    assert!(session.snapshot().layout.wide_mode);
    assert_eq!(session.status_message, "Settings applied");

    let stored = session.store().load().unwrap();
    assert_eq!(&stored, session.snapshot());
}

#[test]
fn test_settings_form_follows_external_save() {
    let (dir, mut app) = app();
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.session().focus, Focus::Page);

    // Another writer switches to the light preset while the form is open
    ConfigStore::in_dir(dir.path())
        .save(&ThemeConfig::light(), Default::default())
        .unwrap();
    app.cycle();
    assert_eq!(app.session().snapshot().status, ThemeStatus::Light);

    // Apply the untouched form: wide mode, then the Apply button
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.session().status_message, "Settings applied");

    let stored = app.session().store().load().unwrap();
    assert_eq!(stored.status, ThemeStatus::Light);
    assert_eq!(stored.theme, ThemeConfig::light());
}

#[test]
fn test_page_focus_sends_characters_to_page() {
    let (_dir, mut app) = app();
    press(&mut app, KeyCode::End);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.session().focus, Focus::Page);

    // 'q' is text input here, not quit
    press(&mut app, KeyCode::Char('q'));
    assert!(!app.should_quit());

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.session().focus, Focus::Menu);
}

#[test]
fn test_app_settings_save_writes_document() {
    let (_dir, mut app) = app();
    press(&mut app, KeyCode::End);
    press(&mut app, KeyCode::Enter);

    press(&mut app, KeyCode::Char('2'));
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);

    let sections = app.session().store().load_sections().unwrap();
    assert_eq!(sections[0].entries[0].1, "example-value2");
    assert!(app.session().status_message.contains("1 changed"));
}

// =============================================================================
// Errors and rendering
// =============================================================================

#[test]
fn test_malformed_document_aborts_cycle() {
    let (_dir, mut app) = app();
    fs::write(app.session().store().app_path(), "[option-menu\n").unwrap();
    app.cycle();

    let session = app.session();
    assert!(session.last_error().is_some());
    assert_eq!(session.menu().selected_label(), Some("Home"));

    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    app.draw(&mut terminal).unwrap();
    assert!(screen_text(&terminal).contains("Configuration error"));
}

#[test]
fn test_render_home_page() {
    let (_dir, mut app) = app();
    let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
    app.draw(&mut terminal).unwrap();

    let text = screen_text(&terminal);
    assert!(text.contains("Main Menu"));
    assert!(text.contains("Home Page"));
    assert!(text.contains("Contacts"));
}

#[test]
fn test_render_horizontal_menu_with_debug_panel() {
    let dir = TempDir::new().unwrap();
    let store = ConfigStore::in_dir(dir.path());
    store
        .save(
            &ThemeConfig::light(),
            pagedash::config_file::LayoutConfig {
                orientation: Orientation::Horizontal,
                wide_mode: true,
            },
        )
        .unwrap();
    let mut app = App::new(store);
    app.cycle();
    press(&mut app, KeyCode::Char('d'));

    let mut terminal = Terminal::new(TestBackend::new(140, 30)).unwrap();
    app.draw(&mut terminal).unwrap();
    let text = screen_text(&terminal);
    assert!(text.contains("Session State"));
    assert!(text.contains("previous_page"));
    assert!(text.contains("horizontal"));
}
