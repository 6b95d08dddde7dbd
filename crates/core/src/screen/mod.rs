//! Collect → validate → submit → render, shared by every screen.

pub mod form;
pub mod outcome;
pub mod route;
pub mod screen_state;
pub mod submission;
