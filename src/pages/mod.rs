//! Page-level views.
//!
//! The board is a single page; `activities` lays it out and turns component
//! callbacks into controller flows.

pub mod activities;
