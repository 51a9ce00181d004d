//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `html` holds the escaping contract for interpolated text; `browser`
//! isolates `window`/timer access from the controller and components.

pub mod browser;
pub mod html;
