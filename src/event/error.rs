use thiserror::Error;

/// Reasons a trigger event cannot be normalized.
#[derive(Debug, Error)]
pub enum EventError {
    #[error(r#"Unsupported GitHub event type. Only "push" and "pull_request" events are supported."#)]
    UnsupportedEvent,

    #[error("Invalid GitHub event data. Can not get owner or repository name from the event payload.")]
    MissingRepositoryInfo,

    #[error("Invalid GitHub event data. Can not get branch from the event payload.")]
    MissingBranch,

    #[error("Invalid GitHub event data. Can not get default branch from the event payload.")]
    MissingDefaultBranch,

    #[error("Invalid GitHub event data. Can not get commit sha from the event payload.")]
    MissingCommitSha,

    #[error("Invalid GitHub event data. {0}")]
    MalformedPayload(#[from] serde_json::Error),

    /// Commit lookup failure, passed through untouched.
    #[error(transparent)]
    CommitLookup(anyhow::Error),
}
