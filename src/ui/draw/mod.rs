//! UI drawing module
//!
//! This module is organized into focused submodules:
//! - `components`: Reusable UI components (header, tab bar, footer, spinners)
//! - `panel`: Content panel dispatch over the active tab's lifecycle state
//! - `tabs`: Per-tab renderers (blog, weather, tsunami, podcast, twitter)
//! - `styling`: Color schemes and style constants

mod components;
mod panel;
mod styling;
mod tabs;

pub use components::{render_footer, render_header, render_tab_bar};
pub use panel::render_content_panel;
