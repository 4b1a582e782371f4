use anyhow::Result;
use serde::Serialize;

use crate::config::{FsConfigLoader, RedoclyConfig, get_redocly_config};
use crate::event::{EventContext, parse_event_data};
use crate::github::CommitSource;
use crate::inputs::{InputSource, parse_input_data};
use crate::types::{EventDescriptor, JobConfig};
use crate::workflow;

/// Everything the sync transport needs for one run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PushArtifact {
    pub job_config: JobConfig,
    pub event: EventDescriptor,
    pub redocly_config: RedoclyConfig,
}

/// Parse inputs, normalize the event, then resolve the project config.
///
/// `config_override` replaces the `configPath` input when set. Relative
/// config paths resolve against `workspace_root`.
pub async fn run(
    inputs: &impl InputSource,
    workspace_root: &str,
    ctx: &EventContext,
    commits: &impl CommitSource,
    config_override: Option<&str>,
) -> Result<PushArtifact> {
    let mut job_config = parse_input_data(inputs, workspace_root);
    if let Some(path) = config_override {
        job_config.config_path = Some(path.to_owned());
    }
    if job_config.files.is_empty() {
        workflow::warning("No files to push. Set the `files` input.");
    }

    let event = parse_event_data(ctx, commits).await?;

    let loader = FsConfigLoader::new(workspace_root);
    let redocly_config = get_redocly_config(&loader, job_config.config_path.as_deref())?;

    tracing::info!(
        files = job_config.files.len(),
        branch = %event.branch,
        "push event ready for sync"
    );

    Ok(PushArtifact {
        job_config,
        event,
        redocly_config,
    })
}

/// The workflow command that marks the step failed with `err`.
pub fn failure_command(err: &anyhow::Error) -> String {
    workflow::format_command("error", &format!("{err:#}"))
}
