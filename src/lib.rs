//! pagedash library
//!
//! A multi-page terminal dashboard: a static manifest of pages, a menu
//! ordered by page order, and theme/layout settings persisted in two TOML
//! documents.

pub mod app;
pub mod cli;
pub mod components;
pub mod config_file;
pub mod error;
pub mod menu;
pub mod page;
pub mod pages;
pub mod registry;
pub mod session;
pub mod theme;
pub mod types;
pub mod ui;

// Re-export main types for convenience
pub use config_file::{ConfigSnapshot, ConfigStore, LayoutConfig};
pub use error::{DashError, Result};
pub use menu::{Menu, build_menu};
pub use page::{Page, PageAction, PageContext};
pub use registry::{PageCache, PageDescriptor, PageModule, discover_pages};
pub use session::{Focus, Lifecycle, Session};
pub use theme::{Palette, ThemeConfig};
pub use types::{Font, Orientation, ThemeBase, ThemeStatus};
