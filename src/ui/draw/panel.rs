//! Content panel rendering
//!
//! Dispatches the active tab's slot to the matching renderer. The three
//! lifecycle states are handled identically for every tab: loading shows a
//! spinner, an error payload shows error text, success shows the tab's lines.

use super::components::{render_error_message, render_idle_message, render_loading_spinner};
use super::tabs::{blog_lines, podcast_lines, tsunami_lines, twitter_lines, weather_lines};
use crate::state::AppState;
use crate::types::TabPayload;
use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub fn render_content_panel(frame: &mut Frame, area: Rect, state: &AppState, spinner_index: usize) {
    let tab = state.active_tab;
    let slot = state.active_slot();

    if slot.loading {
        render_loading_spinner(frame, area, tab, spinner_index);
        return;
    }

    let payload = match &slot.payload {
        Some(payload) => payload,
        None => {
            render_idle_message(frame, area, tab);
            return;
        }
    };

    let lines = match payload {
        TabPayload::Error(message) => {
            render_error_message(frame, area, tab, message);
            return;
        }
        TabPayload::Blog(report) => blog_lines(report),
        TabPayload::Weather(report) => weather_lines(report),
        TabPayload::Tsunami(report) => tsunami_lines(report),
        TabPayload::Podcast(report) => podcast_lines(report, &state.audio),
        TabPayload::Twitter(report) => twitter_lines(report),
    };

    let content = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((state.scroll_for(tab), 0))
        .block(Block::default().borders(Borders::ALL).title(tab.title()));

    frame.render_widget(content, area);
}
