use anyhow::{Context, Result};
use octocrab::Octocrab;
use octocrab::service::middleware::retry::RetryConfig;

use crate::github::auth;
use crate::github::commits::CommitSource;
use crate::types::CommitInfo;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// API endpoint from `GITHUB_API_URL`, which the runner sets for GitHub Enterprise.
pub fn api_url() -> String {
    std::env::var("GITHUB_API_URL")
        .ok()
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| DEFAULT_API_URL.to_owned())
}

/// Web host behind an API URL, used to label token lookups.
///
/// `https://api.github.com` -> `github.com`,
/// `https://ghe.example.com/api/v3` -> `ghe.example.com`.
pub fn host_of(api_url: &str) -> &str {
    let rest = api_url
        .split_once("://")
        .map_or(api_url, |(_, rest)| rest);
    let host = rest.split('/').next().unwrap_or(rest);
    if host == "api.github.com" {
        "github.com"
    } else {
        host
    }
}

/// Install the rustls CryptoProvider before any TLS client is constructed.
///
/// Safe to call more than once.
pub fn install_crypto_provider() {
    // Err only means a provider is already installed.
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();
}

/// Build an Octocrab instance against `api_url`, optionally authenticated.
///
/// Retries are disabled: every request is sent exactly once.
pub fn build_client(api_url: &str, token: Option<String>) -> Result<Octocrab> {
    install_crypto_provider();

    let mut builder = Octocrab::builder().add_retry_config(RetryConfig::None);
    if let Some(token) = token {
        builder = builder.personal_token(token);
    }
    if api_url != DEFAULT_API_URL {
        builder = builder
            .base_uri(api_url)
            .with_context(|| format!("setting base URI {api_url}"))?;
    }

    builder.build().context("building octocrab instance")
}

/// Build the run's client from the runner environment.
pub fn client_from_env() -> Result<Octocrab> {
    let url = api_url();
    let token = auth::resolve_token(host_of(&url))?;
    tracing::debug!(api_url = %url, "creating GitHub client");
    build_client(&url, Some(token))
}

/// Commit source that builds its client on first use.
///
/// Event validation runs before any lookup, so an unsupported event is
/// reported even when no token is available.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvClient;

impl CommitSource for EnvClient {
    async fn get_commit(&self, owner: &str, repo: &str, sha: &str) -> Result<CommitInfo> {
        let client = client_from_env()?;
        CommitSource::get_commit(&client, owner, repo, sha).await
    }
}
