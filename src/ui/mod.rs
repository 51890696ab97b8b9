//! Terminal UI components.
//!
//! This module contains all UI-related code including:
//! - [`projection`]: Tab expansion and cursor screen position
//! - [`viewport`]: Scroll position and cursor-follow

pub mod projection;
pub mod viewport;

mod render;
mod status;

pub use render::{render, split_editor_area};
