//! Built-in dashboard pages
//!
//! `MANIFEST` lists every page module in registration order. Adding a page
//! means adding a module here and one manifest entry.

mod app_settings;
mod contacts;
mod home;
mod settings;

pub use app_settings::AppSettingsPage;
pub use contacts::ContactsPage;
pub use home::HomePage;
pub use settings::SettingsPage;

use crate::page::Page;
use crate::registry::PageModule;

/// Label the session starts on
pub const DEFAULT_PAGE: &str = "Home";

/// Page modules in registration order
pub const MANIFEST: &[PageModule] = &[
    PageModule::new("app_settings", app_settings_exports),
    PageModule::new("contacts", contacts_exports),
    PageModule::new("home", home_exports),
    PageModule::new("settings", settings_exports),
];

fn app_settings_exports() -> Vec<Box<dyn Page>> {
    vec![Box::new(AppSettingsPage::default())]
}

fn contacts_exports() -> Vec<Box<dyn Page>> {
    vec![Box::new(ContactsPage)]
}

fn home_exports() -> Vec<Box<dyn Page>> {
    vec![Box::new(HomePage)]
}

fn settings_exports() -> Vec<Box<dyn Page>> {
    vec![Box::new(SettingsPage::default())]
}
