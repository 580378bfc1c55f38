//! Event handling for the TUI.
//!
//! A separate thread polls for terminal events and timer ticks; background
//! fetch threads push their tagged results into the same channel, so the
//! main loop consumes everything from one place.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};

use crate::api::{CharacterDetail, CharacterPage, QueryKey};
use crate::client::ClientError;

/// Application events.
#[derive(Debug)]
pub enum Event {
    /// Timer tick; drives the search debounce.
    Tick,
    /// Keyboard input.
    Key(KeyEvent),
    /// A listing fetch finished, tagged with the key it was issued for.
    CharactersLoaded {
        key: QueryKey,
        result: Result<CharacterPage, ClientError>,
    },
    /// A detail fetch finished, tagged with the id it was issued for.
    CharacterLoaded {
        id: String,
        result: Result<CharacterDetail, ClientError>,
    },
}

/// Event handler that polls for terminal events in a separate thread.
pub struct EventHandler {
    rx: Receiver<Event>,
    tx: Sender<Event>,
}

impl EventHandler {
    /// Creates a new event handler with the specified tick rate.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            loop {
                // Poll for events with timeout
                if event::poll(tick_rate).unwrap_or(false) {
                    if let Ok(evt) = event::read() {
                        // A resize redraws on the next pass; only key
                        // events need forwarding.
                        let event = match evt {
                            CrosstermEvent::Key(key) => Event::Key(key),
                            _ => continue,
                        };
                        if event_tx.send(event).is_err() {
                            break;
                        }
                    }
                } else {
                    // Timeout - send tick
                    if event_tx.send(Event::Tick).is_err() {
                        break;
                    }
                }
            }
        });

        Self { rx, tx }
    }

    /// Returns a sender for feeding fetch results into the loop.
    pub fn sender(&self) -> Sender<Event> {
        self.tx.clone()
    }

    /// Receives the next event, blocking until one is available.
    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.rx.recv()
    }
}
