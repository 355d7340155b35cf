use std::fmt::Write as _;

use super::report::ResultPanel;

/// Formats a result panel for terminals without the TUI (headless subcommands).
pub(crate) fn render_plain(panel: &ResultPanel) -> String {
    let mut out = String::new();
    let _ = write!(out, "{}", panel.header);
    if let Some(badge) = &panel.badge {
        let _ = write!(out, "  [{}]", badge.label);
    }
    out.push('\n');

    if let Some(gauge) = &panel.gauge {
        let _ = writeln!(out, "Threat Score: {}% ({})", gauge.percent, gauge.band.color_name());
    }
    for metric in &panel.metrics {
        let _ = writeln!(out, "{}: {}", metric.label, metric.value);
    }
    if panel.show_tags {
        let _ = writeln!(out, "{}:", panel.tags_title);
        if panel.tags.is_empty() {
            out.push_str("  (none)\n");
        }
        for tag in &panel.tags {
            let _ = writeln!(out, "  - {tag}");
        }
    }
    if let Some(explanation) = &panel.explanation {
        let _ = writeln!(out, "\n{explanation}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::view::report::{RiskReport, ScannerReport};
    use std::time::Duration;
    use trusteye_protocol::{DashboardResult, ScanResult};

    #[test]
    fn scanner_panel_lists_gauge_metrics_and_explanation() {
        let report = ScannerReport {
            result: ScanResult {
                is_threat: true,
                risk_level: "HIGH".to_string(),
                combined_score: 0.85,
                confidence: 0.9,
                threat_indicators: vec!["urgent".to_string(), "verify".to_string()],
                text_score: 0.8,
                url_score: 0.6,
                analysis_timestamp: None,
            },
            elapsed: Duration::from_millis(1234),
        };
        let text = render_plain(&report.panel());
        assert!(text.starts_with("⚠️ Threat Detected  [HIGH]"));
        assert!(text.contains("Threat Score: 85% (red)"));
        assert!(text.contains("Analysis Time: 1.2s"));
        assert!(text.contains("  - urgent\n"));
        assert!(text.contains("suspicious"));
    }

    #[test]
    fn dashboard_panel_without_issues_says_none() {
        let result = DashboardResult {
            is_threat: false,
            risk_score: 0.1,
            risk_level: "LOW".to_string(),
            confidence: 0.95,
            analysis_time: String::new(),
            detected_keywords: None,
            detected_issues: None,
        };
        let text = render_plain(&result.panel());
        assert!(text.starts_with("✅ SAFE\n"));
        assert!(text.contains("Detected Issues:\n  (none)\n"));
        assert!(!text.contains("Threat Score"));
    }
}
