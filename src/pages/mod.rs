//! Page renderers, one per `PageId`, and the dispatcher choosing between them.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its narrowed context and renders inside the shared
//! `Template` chrome. `dispatch` is the only place that maps the union onto
//! renderers.

pub mod dispatch;
pub mod error;
pub mod form_post;
pub mod form_redirect;
pub mod info;
pub mod login;
pub mod logout;
pub mod registry;
pub mod user;
pub mod user_edit;

pub use dispatch::{PageRenderer, PageVisitor, SentinelPage, dispatch, document_title};
