//! Background fetch runner.
//!
//! Each request runs on its own short-lived thread and delivers its tagged
//! result into the UI event channel, so network calls never block the event
//! loop. Nothing is cancelled in flight: a result whose tag no longer
//! matches the current view state is discarded at apply time.

use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::thread;

use tracing::{debug, warn};

use crate::api::QueryKey;
use crate::client::GraphqlClient;
use crate::tui::event::Event;

/// Spawns fetches against the query executor and reports back over the
/// event channel.
pub struct Fetcher {
    client: Arc<GraphqlClient>,
    tx: Sender<Event>,
}

impl Fetcher {
    pub fn new(client: GraphqlClient, tx: Sender<Event>) -> Self {
        Self {
            client: Arc::new(client),
            tx,
        }
    }

    /// Issues one listing fetch for `key`. The result event carries the key
    /// back so the receiver can discard stale responses.
    pub fn spawn_characters(&self, key: QueryKey) {
        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();

        thread::spawn(move || {
            debug!(page = key.page, search = %key.search, "fetching character page");
            let result = client.fetch_characters(&key);
            if let Err(ref e) = result {
                warn!(error = %e, "character page fetch failed");
            }
            // The receiver may already be gone on shutdown.
            let _ = tx.send(Event::CharactersLoaded { key, result });
        });
    }

    /// Issues one detail fetch for `id`.
    pub fn spawn_character(&self, id: String) {
        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();

        thread::spawn(move || {
            debug!(id = %id, "fetching character detail");
            let result = client.fetch_character(&id);
            if let Err(ref e) = result {
                warn!(id = %id, error = %e, "character detail fetch failed");
            }
            let _ = tx.send(Event::CharacterLoaded { id, result });
        });
    }
}
