use crate::github::commits::CommitSource;
use crate::types::EventDescriptor;

use super::context::EventContext;
use super::error::EventError;
use super::payload::TriggerEvent;

/// Normalize the triggering event into an [`EventDescriptor`].
///
/// Checks run in a fixed order and stop at the first failure: event name,
/// owner and repository, branch, default branch, commit sha. Only then is
/// the commit looked up, exactly once, with no retry.
pub async fn parse_event_data(
    ctx: &EventContext,
    commits: &impl CommitSource,
) -> Result<EventDescriptor, EventError> {
    let event = TriggerEvent::from_context(ctx)?;

    let repository = event
        .repository()
        .ok_or(EventError::MissingRepositoryInfo)?;
    let (namespace, name) = repository
        .owner_and_name()
        .ok_or(EventError::MissingRepositoryInfo)?;
    let branch = event.branch().ok_or(EventError::MissingBranch)?;
    let default_branch = repository
        .default_branch()
        .ok_or(EventError::MissingDefaultBranch)?;
    let sha = event.commit_sha().ok_or(EventError::MissingCommitSha)?;

    if let TriggerEvent::PullRequest(payload) = &event {
        tracing::debug!(
            action = payload.action.as_deref().unwrap_or_default(),
            number = payload.pull_request.as_ref().and_then(|pr| pr.number),
            "pull request event"
        );
    }

    let commit = commits
        .get_commit(namespace, name, sha)
        .await
        .map_err(EventError::CommitLookup)?;

    tracing::info!(
        event = %event.name(),
        repository = %format!("{namespace}/{name}"),
        branch,
        default_branch,
        sha,
        "normalized trigger event"
    );

    Ok(EventDescriptor {
        event_name: event.name(),
        namespace: namespace.to_owned(),
        repository: name.to_owned(),
        branch: branch.to_owned(),
        default_branch: default_branch.to_owned(),
        commit,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use anyhow::{Result, anyhow};
    use serde_json::{Value as JsonValue, json};

    use super::*;
    use crate::types::{CommitInfo, EventName};

    /// Canned commit source that records how often it was asked.
    #[derive(Default)]
    struct StubCommits {
        calls: AtomicUsize,
        fail: bool,
    }

    impl CommitSource for StubCommits {
        async fn get_commit(&self, owner: &str, repo: &str, sha: &str) -> Result<CommitInfo> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(anyhow!("connection reset"));
            }
            Ok(CommitInfo {
                sha: sha.to_owned(),
                message: format!("commit in {owner}/{repo}"),
                url: "test-commit-html-url".to_owned(),
                author: "test-commit-author-name <test-commit-author-email>".to_owned(),
                created_at: "test-commit-created-at".to_owned(),
            })
        }
    }

    fn payload(extra: JsonValue) -> JsonValue {
        let mut base = json!({
            "repository": {
                "owner": { "login": "test-namespace" },
                "name": "test-repo",
                "default_branch": "test-default-branch"
            }
        });
        if let (Some(base), JsonValue::Object(extra)) = (base.as_object_mut(), extra) {
            base.extend(extra);
        }
        base
    }

    #[tokio::test]
    async fn push_event_is_normalized() {
        let ctx = EventContext::new(
            "push",
            "refs/heads/test-branch",
            payload(json!({ "after": "test-commit-sha" })),
        );
        let stub = StubCommits::default();

        let descriptor = parse_event_data(&ctx, &stub).await.unwrap();

        assert_eq!(descriptor.event_name, EventName::Push);
        assert_eq!(descriptor.namespace, "test-namespace");
        assert_eq!(descriptor.repository, "test-repo");
        assert_eq!(descriptor.branch, "test-branch");
        assert_eq!(descriptor.default_branch, "test-default-branch");
        assert_eq!(descriptor.commit.sha, "test-commit-sha");
        assert_eq!(descriptor.commit.message, "commit in test-namespace/test-repo");
        assert_eq!(stub.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn pull_request_actions_use_head_ref_and_sha() {
        for action in ["opened", "reopened", "synchronize"] {
            let ctx = EventContext::new(
                "pull_request",
                "refs/pull/1/merge",
                payload(json!({
                    "action": action,
                    "pull_request": {
                        "number": 1,
                        "head": { "sha": "test-pr-head-sha", "ref": "test-pr-branch" }
                    }
                })),
            );

            let descriptor = parse_event_data(&ctx, &StubCommits::default())
                .await
                .unwrap();

            assert_eq!(descriptor.event_name, EventName::PullRequest, "{action}");
            assert_eq!(descriptor.branch, "test-pr-branch", "{action}");
            assert_eq!(descriptor.commit.sha, "test-pr-head-sha", "{action}");
        }
    }

    #[tokio::test]
    async fn other_pull_request_actions_are_normalized_alike() {
        for action in ["closed", "edited"] {
            let ctx = EventContext::new(
                "pull_request",
                "refs/pull/9/merge",
                payload(json!({
                    "action": action,
                    "pull_request": {
                        "number": 9,
                        "head": { "sha": "closed-head-sha", "ref": "closed-branch" }
                    }
                })),
            );
            let stub = StubCommits::default();

            let descriptor = parse_event_data(&ctx, &stub).await.unwrap();

            assert_eq!(descriptor.event_name, EventName::PullRequest, "{action}");
            assert_eq!(descriptor.branch, "closed-branch", "{action}");
            assert_eq!(descriptor.commit.sha, "closed-head-sha", "{action}");
            assert_eq!(stub.calls.load(Ordering::SeqCst), 1, "{action}");
        }
    }

    #[tokio::test]
    async fn unsupported_event_fails_without_lookup() {
        let ctx = EventContext::new("issues", "refs/pull/1/merge", payload(json!({})));
        let stub = StubCommits::default();

        let err = parse_event_data(&ctx, &stub).await.unwrap_err();

        assert_eq!(
            err.to_string(),
            r#"Unsupported GitHub event type. Only "push" and "pull_request" events are supported."#
        );
        assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn missing_repository_fails_for_both_event_kinds() {
        for name in ["push", "pull_request"] {
            let ctx = EventContext::new(
                name,
                "refs/heads/main",
                json!({ "repository": null, "after": "abc" }),
            );
            let err = parse_event_data(&ctx, &StubCommits::default())
                .await
                .unwrap_err();
            assert!(matches!(err, EventError::MissingRepositoryInfo), "{name}");
        }
    }

    #[tokio::test]
    async fn missing_owner_login_is_missing_repository() {
        let ctx = EventContext::new(
            "push",
            "refs/heads/main",
            json!({ "repository": { "owner": {}, "name": "r", "default_branch": "main" } }),
        );
        let err = parse_event_data(&ctx, &StubCommits::default())
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid GitHub event data. Can not get owner or repository name from the event payload."
        );
    }

    #[tokio::test]
    async fn empty_ref_is_missing_branch() {
        let ctx = EventContext::new("push", "", payload(json!({})));
        let err = parse_event_data(&ctx, &StubCommits::default())
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid GitHub event data. Can not get branch from the event payload."
        );
    }

    #[tokio::test]
    async fn pull_request_without_head_is_missing_branch() {
        let ctx = EventContext::new(
            "pull_request",
            "refs/pull/1/merge",
            payload(json!({ "action": "opened" })),
        );
        let err = parse_event_data(&ctx, &StubCommits::default())
            .await
            .unwrap_err();
        assert!(matches!(err, EventError::MissingBranch));
    }

    #[tokio::test]
    async fn missing_default_branch_fails() {
        let ctx = EventContext::new(
            "push",
            "refs/heads/test-branch",
            json!({
                "repository": {
                    "owner": { "login": "test-namespace" },
                    "name": "test-repo",
                    "default_branch": null,
                    "master_branch": null
                }
            }),
        );
        let err = parse_event_data(&ctx, &StubCommits::default())
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid GitHub event data. Can not get default branch from the event payload."
        );
    }

    #[tokio::test]
    async fn legacy_master_branch_fills_default_branch() {
        let ctx = EventContext::new(
            "push",
            "refs/heads/dev",
            json!({
                "after": "abc",
                "repository": {
                    "owner": { "login": "o" },
                    "name": "r",
                    "master_branch": "trunk"
                }
            }),
        );
        let descriptor = parse_event_data(&ctx, &StubCommits::default())
            .await
            .unwrap();
        assert_eq!(descriptor.default_branch, "trunk");
    }

    #[tokio::test]
    async fn push_without_after_is_missing_sha() {
        let ctx = EventContext::new("push", "refs/heads/main", payload(json!({})));
        let stub = StubCommits::default();
        let err = parse_event_data(&ctx, &stub).await.unwrap_err();
        assert!(matches!(err, EventError::MissingCommitSha));
        assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn lookup_failure_propagates_unchanged() {
        let ctx = EventContext::new(
            "push",
            "refs/heads/main",
            payload(json!({ "after": "abc" })),
        );
        let stub = StubCommits {
            fail: true,
            ..StubCommits::default()
        };
        let err = parse_event_data(&ctx, &stub).await.unwrap_err();
        assert!(matches!(err, EventError::CommitLookup(_)));
        assert_eq!(err.to_string(), "connection reset");
        assert_eq!(stub.calls.load(Ordering::SeqCst), 1);
    }
}
