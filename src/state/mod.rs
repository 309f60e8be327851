//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is plain data with its own tests; `app` wraps each piece in a
//! Leptos signal and provides it as context.

pub mod router;
pub mod theme;
