//! Main TUI application.

use std::io;
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::client::GraphqlClient;
use crate::fetch::Fetcher;

use super::event::{Event, EventHandler};
use super::input::{KeyAction, handle_key};
use super::render::render;
use super::state::{AppState, FetchDecision};

/// Main TUI application.
pub struct App {
    client: GraphqlClient,
    state: AppState,
    should_quit: bool,
}

impl App {
    /// Creates a new App bound to the given query executor, starting at
    /// `start_page` of the listing.
    pub fn new(client: GraphqlClient, start_page: u32) -> Self {
        Self {
            client,
            state: AppState::new(start_page),
            should_quit: false,
        }
    }

    /// Runs the TUI application.
    pub fn run(mut self, tick_rate: Duration) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Create event handler; fetches report back over the same channel.
        let events = EventHandler::new(tick_rate);
        let fetcher = Fetcher::new(self.client, events.sender());

        // Initial fetch for the starting query key.
        sync_list(&mut self.state, &fetcher);

        // Main loop
        loop {
            terminal.draw(|frame| render(frame, &mut self.state))?;

            match events.next() {
                Ok(Event::Tick) => {
                    // Trailing-edge debounce: commit the search text once
                    // the quiet period has passed.
                    if self.state.on_list() {
                        self.state.list.poll_debounce();
                    }
                }
                Ok(Event::Key(key)) => match handle_key(&mut self.state, key) {
                    KeyAction::Quit => self.should_quit = true,
                    KeyAction::OpenDetail(id) => {
                        self.state.open_detail(id.clone());
                        fetcher.spawn_character(id);
                    }
                    KeyAction::None => {}
                },
                Ok(Event::CharactersLoaded { key, result }) => {
                    // Stale results (key no longer current) are dropped here.
                    self.state.list.apply_characters(key, result);
                }
                Ok(Event::CharacterLoaded { id, result }) => {
                    // Dropped when the detail view was already left.
                    self.state.apply_detail(&id, result);
                }
                Err(_) => {
                    self.should_quit = true;
                }
            }

            // Refetch subscription: any event may have changed the query
            // key; compare by value and issue at most one fetch.
            if self.state.on_list() {
                self.state.record_page();
                sync_list(&mut self.state, &fetcher);
            }

            if self.should_quit {
                break;
            }
        }

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        Ok(())
    }
}

fn sync_list(state: &mut AppState, fetcher: &Fetcher) {
    if let FetchDecision::Issue(key) = state.list.sync_fetch() {
        fetcher.spawn_characters(key);
    }
}
