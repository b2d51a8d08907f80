//! Event handling
//!
//! Translates key input into state changes and fetch triggers. Pure state
//! changes (tab switch, scroll, yank flash) are applied here; anything that
//! issues a request is returned as a [`FetchTrigger`] for the app loop, which
//! owns the fetch policy.

use crate::assets::{open_in_viewer, resolve_asset_url};
use crate::state::AppState;
use crate::types::{Tab, TabPayload};
use crate::utils::log_debug;
use arboard::Clipboard;
use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode};
use std::sync::{Arc, RwLock};
use std::time::Duration;

/// A request the event handler wants the app loop to issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchTrigger {
    /// Fetch the tab only if it has no stored payload (first selection).
    Ensure(Tab),
    /// Fetch unconditionally (explicit refresh).
    Refresh(Tab),
    /// Request podcast audio generation.
    PodcastAudio,
}

#[derive(Debug)]
pub struct EventHandler {
    pub should_quit: bool,
}

impl EventHandler {
    pub fn new() -> Self {
        Self { should_quit: false }
    }

    /// Poll for one key event and handle it. Returns fetch triggers for the
    /// app loop to act on.
    pub fn handle_events(
        &mut self,
        state: Arc<RwLock<AppState>>,
        base_url: &str,
    ) -> Result<Vec<FetchTrigger>> {
        let mut triggers = Vec::new();

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') => self.should_quit = true,

                    KeyCode::Char(c @ '1'..='5') => {
                        let tab = Tab::ALL[(c as usize) - ('1' as usize)];
                        select_tab(&state, tab, &mut triggers);
                    }
                    KeyCode::Tab | KeyCode::Char('l') | KeyCode::Right => {
                        let tab = state.read().unwrap().active_tab.next();
                        select_tab(&state, tab, &mut triggers);
                    }
                    KeyCode::BackTab | KeyCode::Char('h') | KeyCode::Left => {
                        let tab = state.read().unwrap().active_tab.prev();
                        select_tab(&state, tab, &mut triggers);
                    }

                    KeyCode::Char('r') | KeyCode::F(5) => {
                        let active = {
                            let mut s = state.write().unwrap();
                            let active = s.active_tab;
                            s.reset_scroll(active);
                            active
                        };
                        triggers.push(FetchTrigger::Refresh(active));
                    }

                    KeyCode::Char('j') | KeyCode::Down => {
                        let mut s = state.write().unwrap();
                        let active = s.active_tab;
                        s.scroll_by(active, 1);
                    }
                    KeyCode::Char('k') | KeyCode::Up => {
                        let mut s = state.write().unwrap();
                        let active = s.active_tab;
                        s.scroll_by(active, -1);
                    }

                    KeyCode::Char('a') => {
                        let s = state.read().unwrap();
                        if s.active_tab == Tab::Podcast && !s.active_slot().needs_fetch() {
                            triggers.push(FetchTrigger::PodcastAudio);
                        }
                    }

                    KeyCode::Char('o') => handle_open_primary(&state, base_url),
                    KeyCode::Char('i') => handle_open_image(&state, base_url),
                    KeyCode::Char('y') => handle_yank(state.clone()),

                    _ => {}
                }
            }
        }

        Ok(triggers)
    }
}

fn select_tab(state: &Arc<RwLock<AppState>>, tab: Tab, triggers: &mut Vec<FetchTrigger>) {
    {
        let mut s = state.write().unwrap();
        s.active_tab = tab;
    }
    triggers.push(FetchTrigger::Ensure(tab));
}

/// The primary asset for the active tab: blog PDF, podcast audio, tweet URL.
fn primary_asset(state: &AppState) -> Option<String> {
    match state.active_slot().payload.as_ref()? {
        TabPayload::Blog(report) => report.pdf_url.clone(),
        TabPayload::Podcast(_) => state.audio.audio_url.clone(),
        TabPayload::Twitter(report) => report.tweet_url.clone(),
        TabPayload::Weather(_) | TabPayload::Tsunami(_) | TabPayload::Error(_) => None,
    }
}

fn handle_open_primary(state: &Arc<RwLock<AppState>>, base_url: &str) {
    let asset = {
        let s = state.read().unwrap();
        primary_asset(&s)
    };
    open_asset(asset.as_deref(), base_url);
}

fn handle_open_image(state: &Arc<RwLock<AppState>>, base_url: &str) {
    let asset = {
        let s = state.read().unwrap();
        match s.active_slot().payload.as_ref() {
            Some(TabPayload::Blog(report)) => report.image_url.clone(),
            _ => None,
        }
    };
    open_asset(asset.as_deref(), base_url);
}

fn open_asset(asset: Option<&str>, base_url: &str) {
    let Some(asset) = asset else {
        return;
    };

    match resolve_asset_url(base_url, asset) {
        Ok(url) => {
            open_in_viewer(&url);
        }
        Err(e) => log_debug(&format!("Cannot resolve asset {asset}: {e}")),
    }
}

/// Copy the active tab's primary text to the clipboard and flash a brief
/// confirmation in the header.
fn handle_yank(state: Arc<RwLock<AppState>>) {
    let text = {
        let s = state.read().unwrap();
        s.active_slot()
            .payload
            .as_ref()
            .and_then(|payload| payload.yankable_text())
            .map(|t| t.to_string())
    };

    let Some(text) = text else {
        log_debug("Nothing to yank on this tab");
        return;
    };

    match Clipboard::new() {
        Ok(mut clipboard) => match clipboard.set_text(text) {
            Ok(_) => {
                {
                    let mut s = state.write().unwrap();
                    s.yank_flash = true;
                }

                let state_clone = state.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(Duration::from_millis(200)).await;
                    let mut s = state_clone.write().unwrap();
                    s.yank_flash = false;
                });
            }
            Err(e) => log_debug(&format!("Failed to copy to clipboard: {e}")),
        },
        Err(e) => log_debug(&format!("Failed to access clipboard: {e}")),
    }
}
