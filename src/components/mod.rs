//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the chrome shared by every page and the small widgets
//! pages compose. They take their inputs as props; only pages read the router.

pub mod provider_icon;
pub mod template;
pub mod theme_toggle;
