use serde::Deserialize;

use crate::types::EventName;

use super::context::EventContext;
use super::error::EventError;

const BRANCH_REF_PREFIX: &str = "refs/heads/";

// ---------------------------------------------------------------------------
// Raw webhook payload shapes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Owner {
    #[serde(default)]
    pub login: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RepositoryInfo {
    #[serde(default)]
    pub owner: Option<Owner>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub default_branch: Option<String>,
    /// Older payloads carry the default branch under this name.
    #[serde(default)]
    pub master_branch: Option<String>,
}

impl RepositoryInfo {
    /// Owner login and repository name, both non-empty.
    pub fn owner_and_name(&self) -> Option<(&str, &str)> {
        let owner = non_empty(self.owner.as_ref()?.login.as_deref())?;
        let name = non_empty(self.name.as_deref())?;
        Some((owner, name))
    }

    /// `default_branch` first, then the legacy `master_branch`.
    pub fn default_branch(&self) -> Option<&str> {
        if let Some(branch) = non_empty(self.default_branch.as_deref()) {
            return Some(branch);
        }
        non_empty(self.master_branch.as_deref())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PushPayload {
    #[serde(default)]
    pub repository: Option<RepositoryInfo>,
    /// Commit the branch points to after the push.
    #[serde(default)]
    pub after: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HeadRef {
    #[serde(default, rename = "ref")]
    pub branch: Option<String>,
    #[serde(default)]
    pub sha: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PullRequestInfo {
    #[serde(default)]
    pub number: Option<u64>,
    #[serde(default)]
    pub head: Option<HeadRef>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PullRequestPayload {
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub repository: Option<RepositoryInfo>,
    #[serde(default)]
    pub pull_request: Option<PullRequestInfo>,
}

// ---------------------------------------------------------------------------
// Trigger event
// ---------------------------------------------------------------------------

/// A supported trigger event with only the fields its kind provides.
#[derive(Debug, Clone)]
pub enum TriggerEvent {
    Push {
        git_ref: String,
        payload: PushPayload,
    },
    PullRequest(PullRequestPayload),
}

impl TriggerEvent {
    /// Classify the context by event name, then decode the matching payload.
    ///
    /// The event name is checked before the payload is looked at.
    pub fn from_context(ctx: &EventContext) -> Result<Self, EventError> {
        let name = EventName::parse(&ctx.event_name).ok_or(EventError::UnsupportedEvent)?;
        Ok(match name {
            EventName::Push => Self::Push {
                git_ref: ctx.git_ref.clone(),
                payload: PushPayload::deserialize(&ctx.payload)?,
            },
            EventName::PullRequest => {
                Self::PullRequest(PullRequestPayload::deserialize(&ctx.payload)?)
            }
        })
    }

    pub fn name(&self) -> EventName {
        match self {
            Self::Push { .. } => EventName::Push,
            Self::PullRequest(_) => EventName::PullRequest,
        }
    }

    pub fn repository(&self) -> Option<&RepositoryInfo> {
        match self {
            Self::Push { payload, .. } => payload.repository.as_ref(),
            Self::PullRequest(payload) => payload.repository.as_ref(),
        }
    }

    /// Source branch of the change. `None` when it cannot be determined.
    ///
    /// Pushes outside `refs/heads/` (tags) have no branch.
    pub fn branch(&self) -> Option<&str> {
        match self {
            Self::Push { git_ref, .. } => non_empty(git_ref.strip_prefix(BRANCH_REF_PREFIX)),
            Self::PullRequest(payload) => non_empty(payload.head()?.branch.as_deref()),
        }
    }

    /// Commit to describe: the pushed tip, or the pull request head.
    pub fn commit_sha(&self) -> Option<&str> {
        match self {
            Self::Push { payload, .. } => non_empty(payload.after.as_deref()),
            Self::PullRequest(payload) => non_empty(payload.head()?.sha.as_deref()),
        }
    }
}

impl PullRequestPayload {
    fn head(&self) -> Option<&HeadRef> {
        self.pull_request.as_ref()?.head.as_ref()
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}
