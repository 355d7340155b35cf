use crate::layers::view::report::ScannerReport;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;
use trusteye_protocol::ScanRequest;
use uuid::Uuid;

use super::client::AnalysisClient;
use super::error::ClientError;
use super::events::{DashboardSubmission, HealthOutcome, UiEvent};

/// Spawns requests on behalf of the UI loop and routes the outcome back as a `UiEvent`.
#[derive(Clone)]
pub(crate) struct Dispatcher {
    client: Arc<dyn AnalysisClient>,
    ui_tx: mpsc::Sender<UiEvent>,
}

impl Dispatcher {
    pub(crate) fn new(client: Arc<dyn AnalysisClient>, ui_tx: mpsc::Sender<UiEvent>) -> Self {
        Self { client, ui_tx }
    }

    pub(crate) fn scan(&self, request: ScanRequest) {
        let client = Arc::clone(&self.client);
        let ui_tx = self.ui_tx.clone();
        tokio::spawn(async move {
            let event = run_scan(client.as_ref(), request).await;
            let _ = ui_tx.send(event).await;
        });
    }

    pub(crate) fn dashboard(&self, submission: DashboardSubmission) {
        let client = Arc::clone(&self.client);
        let ui_tx = self.ui_tx.clone();
        tokio::spawn(async move {
            let event = run_dashboard(client.as_ref(), submission).await;
            let _ = ui_tx.send(event).await;
        });
    }

    pub(crate) fn probe_health(&self) {
        let client = Arc::clone(&self.client);
        let ui_tx = self.ui_tx.clone();
        tokio::spawn(async move {
            let outcome = probe_health(client.as_ref()).await;
            let _ = ui_tx.send(UiEvent::HealthChecked(outcome)).await;
        });
    }
}

pub(crate) async fn run_scan(client: &dyn AnalysisClient, request: ScanRequest) -> UiEvent {
    let id = Uuid::new_v4().to_string();
    let started = Instant::now();
    tracing::info!(
        event = "analysis_started",
        id = %id,
        endpoint = "analyze",
        has_text = !request.text.is_empty(),
        has_url = !request.url.is_empty(),
    );
    let outcome = client
        .analyze(&request)
        .await
        .map(|result| ScannerReport {
            result,
            elapsed: started.elapsed(),
        });
    match &outcome {
        Ok(report) => tracing::info!(
            event = "analysis_finished",
            id = %id,
            is_threat = report.result.is_threat,
            risk_level = %report.result.risk_level,
            elapsed_ms = report.elapsed.as_millis() as u64,
        ),
        Err(err) => log_failure(&id, err),
    }
    UiEvent::ScanFinished { id, outcome }
}

pub(crate) async fn run_dashboard(
    client: &dyn AnalysisClient,
    submission: DashboardSubmission,
) -> UiEvent {
    let id = Uuid::new_v4().to_string();
    let target = submission.target();
    let started = Instant::now();
    tracing::info!(event = "analysis_started", id = %id, form = ?target);
    let outcome = match &submission {
        DashboardSubmission::Text(request) => client.analyze_text(request).await,
        DashboardSubmission::Url(request) => client.analyze_url(request).await,
    };
    match &outcome {
        Ok(result) => tracing::info!(
            event = "analysis_finished",
            id = %id,
            form = ?target,
            is_threat = result.is_threat,
            risk_level = %result.risk_level,
            elapsed_ms = started.elapsed().as_millis() as u64,
        ),
        Err(err) => log_failure(&id, err),
    }
    UiEvent::DashboardFinished {
        id,
        target,
        outcome,
    }
}

pub(crate) async fn probe_health(client: &dyn AnalysisClient) -> HealthOutcome {
    match client.health().await {
        Ok(status) => {
            tracing::info!(
                event = "api_healthy",
                status = status.status.as_deref().unwrap_or("ok"),
                version = status.version.as_deref().unwrap_or("unknown"),
            );
            HealthOutcome::Healthy(status)
        }
        Err(ClientError::Status { status, .. }) => {
            tracing::warn!(event = "api_health_failed", status);
            HealthOutcome::Unhealthy(status)
        }
        Err(err) => {
            tracing::warn!(event = "api_unreachable", error = %err);
            HealthOutcome::Unreachable(err.to_string())
        }
    }
}

fn log_failure(id: &str, err: &ClientError) {
    tracing::error!(event = "analysis_failed", id = %id, kind = err.kind(), error = %err);
}
