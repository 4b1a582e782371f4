use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Event-name enum
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventName {
    Push,
    PullRequest,
}

impl EventName {
    /// Map a raw `GITHUB_EVENT_NAME` value to a supported event.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "push" => Some(Self::Push),
            "pull_request" => Some(Self::PullRequest),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Push => "push",
            Self::PullRequest => "pull_request",
        }
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Commit snapshot and normalized descriptor
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitInfo {
    #[serde(rename = "commitSha")]
    pub sha: String,
    #[serde(rename = "commitMessage")]
    pub message: String,
    #[serde(rename = "commitUrl")]
    pub url: String,
    /// `"Name <email>"`.
    #[serde(rename = "commitAuthor")]
    pub author: String,
    #[serde(rename = "commitCreatedAt")]
    pub created_at: String,
}

/// The canonical push event handed to the documentation sync service.
///
/// `branch` is always the source branch of the change: the pushed branch for
/// pushes, the head branch for pull requests. Never a merge ref.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDescriptor {
    pub event_name: EventName,
    /// Repository owner login.
    pub namespace: String,
    pub repository: String,
    pub branch: String,
    pub default_branch: String,
    pub commit: CommitInfo,
}
