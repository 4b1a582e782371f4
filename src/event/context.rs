use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value as JsonValue;

use crate::types::EventName;

/// The triggering event as the runner describes it.
///
/// Passed explicitly to the normalizer so tests can build one by hand.
#[derive(Debug, Clone)]
pub struct EventContext {
    /// Raw `GITHUB_EVENT_NAME`, e.g. `push` or `issues`.
    pub event_name: String,
    /// Raw `GITHUB_REF`, e.g. `refs/heads/main` or `refs/pull/1/merge`.
    pub git_ref: String,
    /// Webhook payload from `GITHUB_EVENT_PATH`.
    pub payload: JsonValue,
}

impl EventContext {
    pub fn new(
        event_name: impl Into<String>,
        git_ref: impl Into<String>,
        payload: JsonValue,
    ) -> Self {
        Self {
            event_name: event_name.into(),
            git_ref: git_ref.into(),
            payload,
        }
    }

    /// Build the context from the runner environment.
    pub fn from_env() -> Result<Self> {
        let event_name = std::env::var("GITHUB_EVENT_NAME").unwrap_or_default();
        let git_ref = std::env::var("GITHUB_REF").unwrap_or_default();
        let event_path = std::env::var("GITHUB_EVENT_PATH").ok();

        Self::from_parts(event_name, git_ref, event_path.as_deref().map(Path::new))
    }

    /// Build the context, reading the payload only for supported events.
    ///
    /// Unsupported events and missing payload files get an empty payload, so
    /// the normalizer reports the event type or the missing field instead of
    /// an IO or parse error.
    pub fn from_parts(
        event_name: String,
        git_ref: String,
        event_path: Option<&Path>,
    ) -> Result<Self> {
        let payload = match event_path {
            _ if EventName::parse(&event_name).is_none() => empty_payload(),
            Some(path) if path.is_file() => read_payload(path)?,
            Some(path) => {
                tracing::warn!("GITHUB_EVENT_PATH {} does not exist", path.display());
                empty_payload()
            }
            None => empty_payload(),
        };

        Ok(Self {
            event_name,
            git_ref,
            payload,
        })
    }
}

fn empty_payload() -> JsonValue {
    JsonValue::Object(serde_json::Map::new())
}

/// Read and parse a webhook payload file.
pub fn read_payload(path: &Path) -> Result<JsonValue> {
    let contents =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("parsing event payload from {}", path.display()))
}
