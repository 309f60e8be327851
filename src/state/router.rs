//! Client-side page routing over the injected seed.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server seeds one context per response. Navigating between pages that
//! share a field set (user and user-edit) re-tags that seed instead of
//! reloading. Nothing is fetched: a target page whose required fields the
//! seed never carried is rejected, and callers fall back to a full page load.
//!
//! Path and context live in one value so they are always replaced together.

#[cfg(test)]
#[path = "router_test.rs"]
mod router_test;

use crate::context::{ContextError, PageId, SentinelCtx};

#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    /// The seed could not be captured as raw JSON.
    #[error("cannot capture seed context: {0}")]
    Seed(#[from] serde_json::Error),

    /// The seed does not satisfy the target page's required fields.
    #[error("cannot navigate from {from} to {to}: {source}")]
    Incompatible {
        from: PageId,
        to: PageId,
        #[source]
        source: ContextError,
    },
}

/// Current location and the context rendered for it.
#[derive(Clone, Debug, PartialEq)]
pub struct RouterState {
    path: String,
    seed: serde_json::Value,
    ctx: SentinelCtx,
}

impl RouterState {
    pub fn new(seed: SentinelCtx, path: impl Into<String>) -> Result<Self, RouterError> {
        Ok(Self { path: path.into(), seed: serde_json::to_value(&seed)?, ctx: seed })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn page_id(&self) -> PageId {
        self.ctx.page_id()
    }

    pub fn sentinel_ctx(&self) -> &SentinelCtx {
        &self.ctx
    }

    /// State after navigating to `to`, rendered as `page`.
    pub fn navigated(&self, to: &str, page: PageId) -> Result<Self, RouterError> {
        let ctx = SentinelCtx::retag(&self.seed, page).map_err(|source| RouterError::Incompatible {
            from: self.page_id(),
            to: page,
            source,
        })?;
        Ok(Self { path: to.to_owned(), seed: self.seed.clone(), ctx })
    }

    /// Navigate in place; on error the state is unchanged.
    pub fn navigate(&mut self, to: &str, page: PageId) -> Result<(), RouterError> {
        *self = self.navigated(to, page)?;
        Ok(())
    }
}
