//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by region (`activities`, `signup`, `status`) so each
//! component depends on a small focused model. `board` holds one signal per
//! region.

pub mod activities;
pub mod board;
pub mod signup;
pub mod status;
