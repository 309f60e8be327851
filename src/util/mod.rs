//! Browser helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! These modules isolate `web-sys` glue behind the `csr` feature so state,
//! pages and components stay testable in plain `cargo test` and render on
//! the server without a window.

pub mod browser;
pub mod color_scheme;
pub mod storage;
