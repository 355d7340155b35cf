use crate::cli::Command;
use crate::layers::service::events::{HealthOutcome, UiEvent};
use crate::layers::service::tasks::{probe_health, run_scan};
use crate::layers::service::AnalysisClient;
use crate::layers::view::{render_plain, RiskReport};
use anyhow::{bail, Context};
use trusteye_protocol::ScanRequest;

/// Runs one subcommand against the API and returns what should be printed.
pub(crate) async fn run_headless(
    command: &Command,
    client: &dyn AnalysisClient,
) -> anyhow::Result<String> {
    match command {
        Command::Scan { text, url, json } => {
            let request = ScanRequest::new(text, url);
            if request.is_blank() {
                bail!("nothing to analyze: pass --text and/or --url");
            }
            let UiEvent::ScanFinished { outcome, .. } = run_scan(client, request).await else {
                bail!("unexpected event from scan task");
            };
            let report = outcome.context("analysis failed")?;
            if *json {
                return serde_json::to_string_pretty(&report.result)
                    .context("failed to encode scan result");
            }
            Ok(render_plain(&report.panel()))
        }
        Command::Health => match probe_health(client).await {
            HealthOutcome::Healthy(status) => Ok(format!(
                "{} {} ({})",
                status.service.as_deref().unwrap_or("api"),
                status.status.as_deref().unwrap_or("healthy"),
                status.version.as_deref().unwrap_or("unknown version"),
            )),
            HealthOutcome::Unhealthy(status) => bail!("health check returned status {status}"),
            HealthOutcome::Unreachable(err) => bail!("api unreachable: {err}"),
        },
        Command::Info => {
            let info = client.info().await.context("failed to fetch api info")?;
            serde_json::to_string_pretty(&info).context("failed to encode api info")
        }
    }
}
