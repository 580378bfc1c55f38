//! Blocking GraphQL query executor.
//!
//! A thin wrapper over an HTTP client exposing the single collaborator
//! interface the views need: `request(document, variables)`. Constructed once
//! at startup from the configured endpoint URL and passed explicitly to the
//! fetch runner.

use serde::Deserialize;
use serde_json::{Value, json};
use tracing::debug;

use crate::api::{self, CharacterDetail, CharacterPage, QueryKey, query};

/// Errors a fetch can end in. All of them are terminal for the current
/// fetch: the views convert them into the error render state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// Network or payload-shape failure, with the underlying message.
    Transport(String),
    /// The upstream answered with a GraphQL error list; the first message
    /// is preserved verbatim.
    Api(String),
    /// The upstream reported a null entity without an error message.
    NotFound,
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientError::Transport(msg) => write!(f, "request failed: {}", msg),
            ClientError::Api(msg) => write!(f, "{}", msg),
            ClientError::NotFound => write!(f, "character not found"),
        }
    }
}

impl std::error::Error for ClientError {}

/// GraphQL response envelope: `data` plus an optional structured error list.
#[derive(Debug, Deserialize)]
struct Envelope {
    data: Option<Value>,
    errors: Option<Vec<GraphqlError>>,
}

#[derive(Debug, Deserialize)]
struct GraphqlError {
    message: String,
}

/// Blocking GraphQL client bound to one endpoint.
#[derive(Debug)]
pub struct GraphqlClient {
    http: reqwest::blocking::Client,
    endpoint: String,
}

impl GraphqlClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Executes one GraphQL document and returns the `data` object.
    ///
    /// A non-empty upstream error list wins over any partial data, matching
    /// the transport library behaviour the views were written against.
    pub fn request(&self, document: &str, variables: Value) -> Result<Value, ClientError> {
        debug!(endpoint = %self.endpoint, "issuing graphql request");

        let response = self
            .http
            .post(&self.endpoint)
            .json(&json!({ "query": document, "variables": variables }))
            .send()
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let envelope: Envelope = response
            .json()
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        interpret_envelope(envelope)
    }

    /// Fetches one listing page for the given query key.
    pub fn fetch_characters(&self, key: &QueryKey) -> Result<CharacterPage, ClientError> {
        let data = self.request(query::CHARACTERS_QUERY, key.variables())?;
        api::decode_characters(data).map_err(|e| ClientError::Transport(e.to_string()))
    }

    /// Fetches one full character record. A null character maps to
    /// [`ClientError::NotFound`].
    pub fn fetch_character(&self, id: &str) -> Result<CharacterDetail, ClientError> {
        let data = self.request(query::CHARACTER_QUERY, query::character_variables(id))?;
        api::decode_character(data)
            .map_err(|e| ClientError::Transport(e.to_string()))?
            .ok_or(ClientError::NotFound)
    }
}

fn interpret_envelope(envelope: Envelope) -> Result<Value, ClientError> {
    if let Some(errors) = envelope.errors {
        if let Some(first) = errors.into_iter().next() {
            return Err(ClientError::Api(first.message));
        }
    }
    envelope
        .data
        .ok_or_else(|| ClientError::Transport("response carried no data".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(value: Value) -> Envelope {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn upstream_error_message_is_preserved_verbatim() {
        let result = interpret_envelope(envelope(json!({
            "data": { "character": null },
            "errors": [
                { "message": "404: Not Found" },
                { "message": "second message ignored" }
            ]
        })));

        assert_eq!(result, Err(ClientError::Api("404: Not Found".to_string())));
    }

    #[test]
    fn data_passes_through_without_errors() {
        let result = interpret_envelope(envelope(json!({
            "data": { "character": { "id": "1" } }
        })));

        assert_eq!(result, Ok(json!({ "character": { "id": "1" } })));
    }

    #[test]
    fn missing_data_is_a_transport_error() {
        let result = interpret_envelope(envelope(json!({})));
        assert!(matches!(result, Err(ClientError::Transport(_))));
    }

    #[test]
    fn error_display_is_user_presentable() {
        assert_eq!(
            ClientError::Api("404: Not Found".to_string()).to_string(),
            "404: Not Found"
        );
        assert_eq!(ClientError::NotFound.to_string(), "character not found");
    }
}
