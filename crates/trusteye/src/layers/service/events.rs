use crate::layers::view::report::ScannerReport;
use trusteye_protocol::{DashboardResult, HealthStatus, TextRequest, UrlRequest};

use super::error::ClientError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum DashboardTarget {
    Text,
    Url,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum DashboardSubmission {
    Text(TextRequest),
    Url(UrlRequest),
}

impl DashboardSubmission {
    pub(crate) fn target(&self) -> DashboardTarget {
        match self {
            DashboardSubmission::Text(_) => DashboardTarget::Text,
            DashboardSubmission::Url(_) => DashboardTarget::Url,
        }
    }
}

#[derive(Debug)]
pub(crate) enum HealthOutcome {
    Healthy(HealthStatus),
    Unhealthy(u16),
    Unreachable(String),
}

/// Sent back to the UI loop by background tasks, one per finished request.
#[derive(Debug)]
pub(crate) enum UiEvent {
    ScanFinished {
        id: String,
        outcome: Result<ScannerReport, ClientError>,
    },
    DashboardFinished {
        id: String,
        target: DashboardTarget,
        outcome: Result<DashboardResult, ClientError>,
    },
    HealthChecked(HealthOutcome),
}
