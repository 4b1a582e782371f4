use anyhow::{Result, bail};

/// Token variables, in priority order. The runner exports `GITHUB_TOKEN`.
const TOKEN_VARS: [&str; 2] = ["GITHUB_TOKEN", "GH_TOKEN"];

/// Resolve a GitHub auth token for the given host from the environment.
pub fn resolve_token(host: &str) -> Result<String> {
    let candidates = TOKEN_VARS.iter().map(|var| std::env::var(var).ok());
    match first_token(candidates) {
        Some(token) => Ok(token),
        None => bail!(
            "no GitHub token found for host \"{host}\". \
             Pass `github.token` to the step as GITHUB_TOKEN or GH_TOKEN."
        ),
    }
}

/// First candidate that is set and not blank, trimmed.
fn first_token(candidates: impl IntoIterator<Item = Option<String>>) -> Option<String> {
    candidates
        .into_iter()
        .flatten()
        .map(|token| token.trim().to_owned())
        .find(|token| !token.is_empty())
}
