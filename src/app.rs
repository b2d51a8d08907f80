use crate::config::Config;
use crate::fetch;
use crate::state::AppState;
use crate::types::Tab;
use crate::ui;
use crate::ui::FetchTrigger;
use color_eyre::Result;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout},
};
use std::sync::{Arc, RwLock};
use std::time::Instant;

#[derive(Debug)]
pub struct App {
    state: Arc<RwLock<AppState>>,
    base_url: String,
    tsunami_hours: Option<u32>,
    spinner_index: usize,
    last_tick: Instant,
    event_handler: ui::EventHandler,
}

impl Default for App {
    fn default() -> Self {
        let config = Config::load().unwrap_or_default();
        let base_url = config.base_url();
        let tsunami_hours = config.tsunami.hours;

        let start_tab = config
            .ui
            .start_tab
            .as_deref()
            .map(Tab::from_name)
            .unwrap_or(Tab::Blog);

        let state = AppState {
            active_tab: start_tab,
            ..Default::default()
        };

        Self {
            state: Arc::new(RwLock::new(state)),
            base_url,
            tsunami_hours,
            spinner_index: 0,
            last_tick: Instant::now(),
            event_handler: ui::EventHandler::new(),
        }
    }
}

impl App {
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        // First selection of the start tab
        let start_tab = self.state.read().unwrap().active_tab;
        fetch::ensure_tab_loaded(&self.state, &self.base_url, start_tab, self.tsunami_hours);

        // Main UI loop
        while !self.event_handler.should_quit {
            // Update spinner animation
            if self.last_tick.elapsed().as_millis() > 100 {
                self.spinner_index = (self.spinner_index + 1) % 4;
                self.last_tick = Instant::now();
            }

            terminal.draw(|frame| self.draw(frame))?;

            let triggers = self
                .event_handler
                .handle_events(Arc::clone(&self.state), &self.base_url)?;

            for trigger in triggers {
                match trigger {
                    FetchTrigger::Ensure(tab) => {
                        fetch::ensure_tab_loaded(&self.state, &self.base_url, tab, self.tsunami_hours);
                    }
                    FetchTrigger::Refresh(tab) => {
                        fetch::fetch_tab_background(
                            Arc::clone(&self.state),
                            self.base_url.clone(),
                            tab,
                            self.tsunami_hours,
                        );
                    }
                    FetchTrigger::PodcastAudio => {
                        fetch::fetch_podcast_audio_background(
                            Arc::clone(&self.state),
                            self.base_url.clone(),
                        );
                    }
                }
            }
        }

        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        let state = self.state.read().unwrap();

        // Main layout: Header, Tab bar, Content, Footer
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(3), // Tab bar
                Constraint::Min(0),    // Content
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        ui::render_header(frame, main_chunks[0], &self.base_url, &state);
        ui::render_tab_bar(frame, main_chunks[1], &state);
        ui::render_content_panel(frame, main_chunks[2], &state, self.spinner_index);
        ui::render_footer(frame, main_chunks[3], state.active_tab);
    }
}
