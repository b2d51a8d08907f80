//! Reusable UI components
//!
//! This module contains shared UI components used throughout the application:
//! - Header (title, base URL, active tab status)
//! - Tab bar
//! - Footer (command help)
//! - Loading spinner
//! - Error/idle state messages

use super::styling::SPINNER_FRAMES;
use crate::state::AppState;
use crate::types::{FetchPhase, Tab};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Tabs},
};

/// Render the application header with base URL and active tab status
pub fn render_header(frame: &mut Frame, area: Rect, base_url: &str, state: &AppState) {
    let status_text = match state.active_slot().phase() {
        FetchPhase::Idle => "Idle".to_string(),
        FetchPhase::Loading => "Fetching...".to_string(),
        FetchPhase::Success => "Loaded".to_string(),
        FetchPhase::Error => "Error".to_string(),
    };

    let yank_marker = if state.yank_flash { " | yanked" } else { "" };
    let header_text = format!("weatherhub tui - {base_url} [{status_text}]{yank_marker}");

    let header = Paragraph::new(header_text)
        .style(Style::default().fg(Color::Cyan))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, area);
}

/// Render the tab bar with per-tab fetch status markers
pub fn render_tab_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let titles: Vec<String> = Tab::ALL
        .iter()
        .map(|tab| {
            let marker = match state.slot(*tab).phase() {
                FetchPhase::Idle => ' ',
                FetchPhase::Loading => '~',
                FetchPhase::Success => '*',
                FetchPhase::Error => '!',
            };
            format!("{} {}{}", tab.index() + 1, tab.title(), marker)
        })
        .collect();

    let tabs = Tabs::new(titles)
        .select(state.active_tab.index())
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL).title(" Tabs "));

    frame.render_widget(tabs, area);
}

/// Render the footer with command help
pub fn render_footer(frame: &mut Frame, area: Rect, active_tab: Tab) {
    let extra = match active_tab {
        Tab::Blog => " i:Image o:PDF y:Yank |",
        Tab::Podcast => " a:Audio o:Open y:Yank |",
        Tab::Twitter => " o:Tweet y:Yank |",
        Tab::Weather | Tab::Tsunami => "",
    };

    let footer_text =
        format!("1-5/Tab/h/l:Tabs j/k:Scroll r:Refresh |{extra} q:Quit");

    let footer = Paragraph::new(footer_text)
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL).title("Commands"));

    frame.render_widget(footer, area);
}

/// Render loading spinner animation
pub fn render_loading_spinner(frame: &mut Frame, area: Rect, tab: Tab, spinner_index: usize) {
    let progress_text = match tab {
        Tab::Blog => "Generating blog",
        Tab::Weather => "Fetching weather data",
        Tab::Tsunami => "Fetching tsunami alerts",
        Tab::Podcast => "Generating podcast script",
        Tab::Twitter => "Generating weather tweet",
    };

    let loading_text = format!(
        "{} {}\n\nPlease wait...",
        SPINNER_FRAMES[spinner_index], progress_text
    );

    let loading = Paragraph::new(loading_text)
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL).title(tab.title()));

    frame.render_widget(loading, area);
}

/// Render error message with refresh instructions
pub fn render_error_message(frame: &mut Frame, area: Rect, tab: Tab, error: &str) {
    let error_msg = format!("Error: {error}\n\nPress [r] to refresh");

    let error_widget = Paragraph::new(error_msg)
        .style(Style::default().fg(Color::Red))
        .block(Block::default().borders(Borders::ALL).title(tab.title()));

    frame.render_widget(error_widget, area);
}

/// Render idle state message (tab selected but nothing fetched yet)
pub fn render_idle_message(frame: &mut Frame, area: Rect, tab: Tab) {
    let idle = Paragraph::new("No data yet\n\nPress [r] to fetch")
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL).title(tab.title()));

    frame.render_widget(idle, area);
}
