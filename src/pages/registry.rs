//! Per-page load state.
//!
//! DESIGN
//! ======
//! A page is either ready to render or pending; pending pages show the
//! caller's fallback. `eager` marks everything ready at boot. `deferred`
//! starts with nothing loaded and each page resolves on first access.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use std::collections::BTreeSet;

use crate::context::PageId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageLoad {
    Pending,
    Ready,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageRegistry {
    ready: BTreeSet<PageId>,
}

impl PageRegistry {
    /// Every page ready up front.
    pub fn eager() -> Self {
        Self { ready: PageId::ALL.into_iter().collect() }
    }

    /// No page ready yet.
    pub fn deferred() -> Self {
        Self::default()
    }

    pub fn state(&self, page: PageId) -> PageLoad {
        if self.ready.contains(&page) { PageLoad::Ready } else { PageLoad::Pending }
    }

    /// Returns `true` if `page` was still pending.
    pub fn mark_ready(&mut self, page: PageId) -> bool {
        self.ready.insert(page)
    }
}
