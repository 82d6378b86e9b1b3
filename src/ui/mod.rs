//! UI module for the cloud atlas
//!
//! This module contains UI rendering functions for the TUI interface:
//! the sectioned master list, the detail screen, and text helpers.

mod detail;
mod helpers;
mod list;

pub use detail::render_detail;
pub use helpers::wrap_text;
pub use list::render_list;
