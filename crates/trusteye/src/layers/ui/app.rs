use crate::config::Settings;
use crate::layers::service::events::{
    DashboardSubmission, DashboardTarget, HealthOutcome, UiEvent,
};
use crate::layers::view::report::ScannerReport;
use serde::Deserialize;
use std::time::Instant;
use trusteye_protocol::{DashboardResult, ScanRequest, TextRequest, UrlRequest};

use super::examples::find_example;
use super::form::{SubmitButton, TextField};
use super::notify::{Notifier, Severity};

const SCAN_IDLE_LABEL: &str = "🔍 Scan with TrustEye";
const SCAN_BUSY_LABEL: &str = "⏳ Analyzing...";
const TEXT_IDLE_LABEL: &str = "🔍 Analyze Text";
const URL_IDLE_LABEL: &str = "🔍 Analyze URL";
const DASHBOARD_BUSY_LABEL: &str = "🔄 Analyzing...";

const EMPTY_SCAN_WARNING: &str = "Please enter text or URL to analyze";
const SCAN_FAILED_NOTICE: &str = "Analysis failed. Please try again.";
const API_UNREACHABLE_NOTICE: &str = "API connection issue. Some features may not work.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ViewKind {
    #[default]
    Scanner,
    Dashboard,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Focus {
    ScanText,
    ScanUrl,
    ScanButton,
    DashText,
    DashTextButton,
    DashUrl,
    DashUrlButton,
}

const SCANNER_FOCUS: [Focus; 3] = [Focus::ScanText, Focus::ScanUrl, Focus::ScanButton];
const DASHBOARD_FOCUS: [Focus; 4] = [
    Focus::DashText,
    Focus::DashTextButton,
    Focus::DashUrl,
    Focus::DashUrlButton,
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum HealthState {
    Checking,
    Healthy,
    Unhealthy(u16),
    Unreachable,
}

pub(crate) struct ScannerForm {
    pub(crate) text: TextField,
    pub(crate) url: TextField,
    pub(crate) button: SubmitButton,
    pub(crate) report: Option<ScannerReport>,
    pub(crate) results_visible: bool,
}

pub(crate) struct DashboardForm {
    pub(crate) field: TextField,
    pub(crate) button: SubmitButton,
    pub(crate) result: Option<DashboardResult>,
}

/// View model for the whole client; built once at startup and handed to every handler.
pub(crate) struct AppState {
    pub(crate) api_base: String,
    pub(crate) view: ViewKind,
    pub(crate) focus: Focus,
    pub(crate) scanner: ScannerForm,
    pub(crate) dash_text: DashboardForm,
    pub(crate) dash_url: DashboardForm,
    pub(crate) notifier: Notifier,
    pub(crate) alert: Option<String>,
    pub(crate) health: HealthState,
    pub(crate) confirm_quit: bool,
}

impl AppState {
    pub(crate) fn new(settings: &Settings) -> Self {
        let focus = first_focus(settings.default_view);
        Self {
            api_base: settings.api_base.clone(),
            view: settings.default_view,
            focus,
            scanner: ScannerForm {
                text: TextField::default(),
                url: TextField::default(),
                button: SubmitButton::new(SCAN_IDLE_LABEL, SCAN_BUSY_LABEL, false),
                report: None,
                results_visible: false,
            },
            dash_text: DashboardForm {
                field: TextField::default(),
                button: SubmitButton::new(TEXT_IDLE_LABEL, DASHBOARD_BUSY_LABEL, true),
                result: None,
            },
            dash_url: DashboardForm {
                field: TextField::default(),
                button: SubmitButton::new(URL_IDLE_LABEL, DASHBOARD_BUSY_LABEL, true),
                result: None,
            },
            notifier: Notifier::new(settings.toast_duration),
            alert: None,
            health: HealthState::Checking,
            confirm_quit: false,
        }
    }

    pub(crate) fn handle_event(&mut self, event: UiEvent, now: Instant) {
        match event {
            UiEvent::ScanFinished { id, outcome } => {
                tracing::debug!(event = "scan_applied", id = %id, ok = outcome.is_ok());
                self.scanner.button.finish();
                match outcome {
                    Ok(report) => {
                        self.scanner.report = Some(report);
                        self.scanner.results_visible = true;
                    }
                    Err(_) => self.notifier.push(SCAN_FAILED_NOTICE, Severity::Error, now),
                }
                self.validate_scanner();
            }
            UiEvent::DashboardFinished {
                id,
                target,
                outcome,
            } => {
                tracing::debug!(event = "dashboard_applied", id = %id, ok = outcome.is_ok());
                let form = self.dashboard_form_mut(target);
                form.button.finish();
                match outcome {
                    Ok(result) => form.result = Some(result),
                    Err(err) => self.alert = Some(format!("Analysis failed: {err}")),
                }
            }
            UiEvent::HealthChecked(outcome) => {
                self.health = match outcome {
                    HealthOutcome::Healthy(_) => HealthState::Healthy,
                    HealthOutcome::Unhealthy(status) => HealthState::Unhealthy(status),
                    HealthOutcome::Unreachable(_) => {
                        self.notifier
                            .push(API_UNREACHABLE_NOTICE, Severity::Warning, now);
                        HealthState::Unreachable
                    }
                };
            }
        }
    }

    pub(crate) fn tick(&mut self, now: Instant) {
        self.notifier.prune(now);
    }

    /// Submit is enabled while idle and at least one field has content.
    pub(crate) fn validate_scanner(&mut self) {
        if self.scanner.button.is_busy() {
            return;
        }
        let has_input = !self.scanner.text.is_blank() || !self.scanner.url.is_blank();
        self.scanner.button.set_enabled(has_input);
    }

    pub(crate) fn begin_scan(&mut self, now: Instant) -> Option<ScanRequest> {
        if self.scanner.button.is_busy() {
            return None;
        }
        let request = ScanRequest::new(self.scanner.text.value(), self.scanner.url.value());
        if request.is_blank() {
            self.notifier
                .push(EMPTY_SCAN_WARNING, Severity::Warning, now);
            return None;
        }
        self.scanner.button.start();
        Some(request)
    }

    pub(crate) fn begin_dashboard(&mut self, target: DashboardTarget) -> Option<DashboardSubmission> {
        let form = self.dashboard_form_mut(target);
        if form.button.is_busy() {
            return None;
        }
        let value = form.field.value().trim().to_string();
        if value.is_empty() {
            self.alert = Some(
                match target {
                    DashboardTarget::Text => "Please enter text to analyze",
                    DashboardTarget::Url => "Please enter URL to analyze",
                }
                .to_string(),
            );
            return None;
        }
        form.button.start();
        form.result = None;
        Some(match target {
            DashboardTarget::Text => DashboardSubmission::Text(TextRequest { text: value }),
            DashboardTarget::Url => DashboardSubmission::Url(UrlRequest { url: value }),
        })
    }

    pub(crate) fn load_example(&mut self, key: &str) -> bool {
        let Some(example) = find_example(key) else {
            return false;
        };
        self.scanner.text.set(example.text);
        self.scanner.url.set(example.url);
        self.validate_scanner();
        self.view = ViewKind::Scanner;
        self.focus = Focus::ScanText;
        true
    }

    pub(crate) fn clear_results(&mut self) {
        self.scanner.results_visible = false;
    }

    pub(crate) fn scan_another(&mut self) {
        self.scanner.text.clear();
        self.scanner.url.clear();
        self.clear_results();
        self.validate_scanner();
        self.focus = Focus::ScanText;
    }

    pub(crate) fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub(crate) fn toggle_view(&mut self) {
        self.view = match self.view {
            ViewKind::Scanner => ViewKind::Dashboard,
            ViewKind::Dashboard => ViewKind::Scanner,
        };
        self.focus = first_focus(self.view);
    }

    pub(crate) fn focus_next(&mut self) {
        self.focus = step_focus(self.focus_order(), self.focus, true);
    }

    pub(crate) fn focus_prev(&mut self) {
        self.focus = step_focus(self.focus_order(), self.focus, false);
    }

    pub(crate) fn focused_field_mut(&mut self) -> Option<&mut TextField> {
        match self.focus {
            Focus::ScanText => Some(&mut self.scanner.text),
            Focus::ScanUrl => Some(&mut self.scanner.url),
            Focus::DashText => Some(&mut self.dash_text.field),
            Focus::DashUrl => Some(&mut self.dash_url.field),
            Focus::ScanButton | Focus::DashTextButton | Focus::DashUrlButton => None,
        }
    }

    pub(crate) fn dashboard_form(&self, target: DashboardTarget) -> &DashboardForm {
        match target {
            DashboardTarget::Text => &self.dash_text,
            DashboardTarget::Url => &self.dash_url,
        }
    }

    fn dashboard_form_mut(&mut self, target: DashboardTarget) -> &mut DashboardForm {
        match target {
            DashboardTarget::Text => &mut self.dash_text,
            DashboardTarget::Url => &mut self.dash_url,
        }
    }

    fn focus_order(&self) -> &'static [Focus] {
        match self.view {
            ViewKind::Scanner => &SCANNER_FOCUS,
            ViewKind::Dashboard => &DASHBOARD_FOCUS,
        }
    }
}

fn first_focus(view: ViewKind) -> Focus {
    match view {
        ViewKind::Scanner => Focus::ScanText,
        ViewKind::Dashboard => Focus::DashText,
    }
}

fn step_focus(order: &[Focus], current: Focus, forward: bool) -> Focus {
    let index = order.iter().position(|focus| *focus == current).unwrap_or(0);
    let next = if forward {
        (index + 1) % order.len()
    } else if index == 0 {
        order.len() - 1
    } else {
        index - 1
    };
    order[next]
}
