//! Page registry
//!
//! Pages are registered through a static manifest of `PageModule` entries
//! rather than discovered on disk. Each module exports zero or more page
//! objects; the registry turns the manifest into `PageDescriptor`s with these
//! rules, applied in manifest order:
//!
//! - a module with no exports is skipped;
//! - a module with several exports registers only its first export;
//! - a module whose identifier is already registered is skipped;
//! - a page whose label is already taken is skipped, keeping labels unique.
//!
//! Skips are logged, never returned as errors.

use crate::page::Page;
use std::collections::HashSet;
use std::fmt;
use tracing::{debug, warn};

/// Constructor for every page object a module exports
pub type PageExports = fn() -> Vec<Box<dyn Page>>;

/// One entry of the page manifest
#[derive(Clone, Copy)]
pub struct PageModule {
    pub identifier: &'static str,
    pub exports: PageExports,
}

impl PageModule {
    pub const fn new(identifier: &'static str, exports: PageExports) -> Self {
        Self {
            identifier,
            exports,
        }
    }
}

impl fmt::Debug for PageModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageModule")
            .field("identifier", &self.identifier)
            .finish_non_exhaustive()
    }
}

/// Resolved registry entry
pub struct PageDescriptor {
    pub identifier: String,
    pub label: String,
    pub icon: String,
    pub order: i32,
    pub page: Box<dyn Page>,
}

impl PageDescriptor {
    fn from_page(identifier: &str, page: Box<dyn Page>) -> Self {
        Self {
            identifier: identifier.to_string(),
            label: page.label().to_string(),
            icon: page.icon().to_string(),
            order: page.order(),
            page,
        }
    }
}

impl fmt::Debug for PageDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageDescriptor")
            .field("identifier", &self.identifier)
            .field("label", &self.label)
            .field("icon", &self.icon)
            .field("order", &self.order)
            .finish_non_exhaustive()
    }
}

/// Build descriptors for every qualifying module, in manifest order
pub fn discover_pages(manifest: &[PageModule]) -> Vec<PageDescriptor> {
    let mut identifiers = HashSet::new();
    let mut labels = HashSet::new();
    let mut descriptors = Vec::with_capacity(manifest.len());

    for module in manifest {
        if identifiers.contains(module.identifier) {
            warn!(
                "Page module {} registered twice, keeping the first",
                module.identifier
            );
            continue;
        }

        let mut exports = (module.exports)().into_iter();
        let Some(page) = exports.next() else {
            debug!("Page module {} exports no page, skipping", module.identifier);
            continue;
        };
        let ignored = exports.count();
        if ignored > 0 {
            warn!(
                "Page module {} exports {} extra page(s), only the first is registered",
                module.identifier, ignored
            );
        }

        if !labels.insert(page.label().to_string()) {
            warn!(
                "Page label {:?} from module {} is already taken, skipping",
                page.label(),
                module.identifier
            );
            continue;
        }

        identifiers.insert(module.identifier);
        let descriptor = PageDescriptor::from_page(module.identifier, page);
        debug!(
            "Registered page {} (label={:?}, order={})",
            descriptor.identifier, descriptor.label, descriptor.order
        );
        descriptors.push(descriptor);
    }

    descriptors
}

/// Memoizes `discover_pages` for the lifetime of a session
#[derive(Debug)]
pub struct PageCache {
    manifest: Vec<PageModule>,
    pages: Option<Vec<PageDescriptor>>,
    scans: usize,
}

impl PageCache {
    pub fn new(manifest: &[PageModule]) -> Self {
        Self {
            manifest: manifest.to_vec(),
            pages: None,
            scans: 0,
        }
    }

    /// Descriptors, scanning the manifest on first use
    pub fn pages(&mut self) -> &mut Vec<PageDescriptor> {
        if self.pages.is_none() {
            self.scans += 1;
            self.pages = Some(discover_pages(&self.manifest));
        }
        self.pages.get_or_insert_with(Vec::new)
    }

    /// Whether a scan result is currently held
    pub fn is_cached(&self) -> bool {
        self.pages.is_some()
    }

    /// Drop the cached descriptors; the next `pages` call rescans
    pub fn invalidate(&mut self) {
        self.pages = None;
    }

    /// Number of manifest scans performed so far
    pub fn scan_count(&self) -> usize {
        self.scans
    }
}
