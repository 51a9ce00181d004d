//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read their region's signal from Leptos context and report
//! user intent through callbacks; the controller in `crate::board` does the
//! rest.

pub mod activity_card;
pub mod activity_list;
pub mod signup_form;
pub mod status_message;
