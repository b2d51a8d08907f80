pub mod draw;
mod events;

pub use draw::{render_content_panel, render_footer, render_header, render_tab_bar};
pub use events::{EventHandler, FetchTrigger};
