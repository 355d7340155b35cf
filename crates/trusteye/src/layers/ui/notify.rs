use std::time::{Duration, Instant};

const ENTER_DELAY: Duration = Duration::from_millis(100);
const EXIT_DURATION: Duration = Duration::from_millis(300);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Severity {
    #[allow(dead_code)]
    Info,
    Warning,
    Error,
    #[allow(dead_code)]
    Success,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ToastPhase {
    Entering,
    Visible,
    Leaving,
    Expired,
}

#[derive(Clone, Debug)]
pub(crate) struct Toast {
    pub(crate) message: String,
    pub(crate) severity: Severity,
    shown_at: Instant,
}

/// Transient overlays. Every `push` adds its own toast; nothing is merged or queued.
#[derive(Debug)]
pub(crate) struct Notifier {
    toasts: Vec<Toast>,
    duration: Duration,
}

impl Notifier {
    pub(crate) fn new(duration: Duration) -> Self {
        Self {
            toasts: Vec::new(),
            duration,
        }
    }

    pub(crate) fn push(&mut self, message: impl Into<String>, severity: Severity, now: Instant) {
        let message = message.into();
        tracing::debug!(severity = ?severity, message = %message, "notification shown");
        self.toasts.push(Toast {
            message,
            severity,
            shown_at: now,
        });
    }

    pub(crate) fn prune(&mut self, now: Instant) {
        let duration = self.duration;
        self.toasts
            .retain(|toast| phase_at(toast, duration, now) != ToastPhase::Expired);
    }

    #[allow(dead_code)]
    pub(crate) fn len(&self) -> usize {
        self.toasts.len()
    }

    #[allow(dead_code)]
    pub(crate) fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub(crate) fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    #[allow(dead_code)]
    pub(crate) fn phase(&self, toast: &Toast, now: Instant) -> ToastPhase {
        phase_at(toast, self.duration, now)
    }

    /// Columns the toast is pushed right of its resting position, for the slide effect.
    pub(crate) fn slide_offset(&self, toast: &Toast, width: u16, now: Instant) -> u16 {
        let elapsed = now.saturating_duration_since(toast.shown_at);
        let hidden_share = match phase_at(toast, self.duration, now) {
            ToastPhase::Entering => 1.0,
            ToastPhase::Visible => 0.0,
            ToastPhase::Leaving => {
                let leaving = elapsed.saturating_sub(self.duration);
                leaving.as_secs_f64() / EXIT_DURATION.as_secs_f64()
            }
            ToastPhase::Expired => 1.0,
        };
        (f64::from(width) * hidden_share.clamp(0.0, 1.0)).round() as u16
    }
}

fn phase_at(toast: &Toast, duration: Duration, now: Instant) -> ToastPhase {
    let elapsed = now.saturating_duration_since(toast.shown_at);
    if elapsed < ENTER_DELAY {
        ToastPhase::Entering
    } else if elapsed < duration {
        ToastPhase::Visible
    } else if elapsed < duration + EXIT_DURATION {
        ToastPhase::Leaving
    } else {
        ToastPhase::Expired
    }
}
