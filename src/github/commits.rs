use anyhow::Result;
use octocrab::Octocrab;
use serde::Deserialize;

use crate::types::CommitInfo;

// ---------------------------------------------------------------------------
// Raw API response types
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct RawCommitResponse {
    #[serde(default)]
    html_url: String,
    commit: RawCommit,
}

#[derive(Deserialize)]
struct RawCommit {
    #[serde(default)]
    message: String,
    #[serde(default)]
    author: Option<RawGitActor>,
}

#[derive(Deserialize, Default)]
struct RawGitActor {
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    date: String,
}

fn into_domain(sha: &str, raw: RawCommitResponse) -> CommitInfo {
    let author = raw.commit.author.unwrap_or_default();
    CommitInfo {
        sha: sha.to_owned(),
        message: raw.commit.message,
        url: raw.html_url,
        author: format_author(&author.name, &author.email),
        created_at: author.date,
    }
}

/// `"Name <email>"`.
pub fn format_author(name: &str, email: &str) -> String {
    format!("{name} <{email}>")
}

// ---------------------------------------------------------------------------
// Commit lookup
// ---------------------------------------------------------------------------

/// Fetches commit metadata by sha.
///
/// Implemented for `Octocrab`; tests substitute canned data.
pub trait CommitSource {
    fn get_commit(
        &self,
        owner: &str,
        repo: &str,
        sha: &str,
    ) -> impl Future<Output = Result<CommitInfo>> + Send;
}

impl CommitSource for Octocrab {
    async fn get_commit(&self, owner: &str, repo: &str, sha: &str) -> Result<CommitInfo> {
        let route = format!("/repos/{owner}/{repo}/commits/{sha}");
        tracing::debug!(%route, "fetching commit");
        // Transport errors are returned as-is, without added context.
        let response: RawCommitResponse = self.get(route, None::<&()>).await?;
        Ok(into_domain(sha, response))
    }
}
