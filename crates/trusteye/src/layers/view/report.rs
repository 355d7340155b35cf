use std::time::Duration;
use trusteye_protocol::{DashboardResult, ScanResult};

pub(crate) const SCANNER_INDICATOR_LIMIT: usize = 5;
const SUSPICIOUS_PERCENT: i64 = 30;
const GAUGE_HIGH: f64 = 0.7;
const GAUGE_MEDIUM: f64 = 0.4;
const TEXT_SCORE_NOTE: f64 = 0.5;
const URL_SCORE_NOTE: f64 = 0.3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Verdict {
    Threat,
    Suspicious,
    Safe,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum GaugeBand {
    Low,
    Medium,
    High,
}

impl GaugeBand {
    pub(crate) fn for_score(score: f64) -> Self {
        if score >= GAUGE_HIGH {
            GaugeBand::High
        } else if score >= GAUGE_MEDIUM {
            GaugeBand::Medium
        } else {
            GaugeBand::Low
        }
    }

    pub(crate) fn color_name(self) -> &'static str {
        match self {
            GaugeBand::Low => "green",
            GaugeBand::Medium => "yellow",
            GaugeBand::High => "red",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Gauge {
    pub(crate) percent: i64,
    pub(crate) degrees: f64,
    pub(crate) band: GaugeBand,
}

impl Gauge {
    pub(crate) fn from_score(score: f64) -> Self {
        Self {
            percent: percent(score),
            degrees: score * 360.0,
            band: GaugeBand::for_score(score),
        }
    }

    /// Share of the sweep filled, for widgets that want a ratio.
    pub(crate) fn ratio(&self) -> f64 {
        (self.degrees / 360.0).clamp(0.0, 1.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Badge {
    pub(crate) label: String,
    pub(crate) class: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Metric {
    pub(crate) label: &'static str,
    pub(crate) value: String,
}

/// Everything the renderer needs to paint one result.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ResultPanel {
    pub(crate) header: &'static str,
    pub(crate) verdict: Verdict,
    pub(crate) badge: Option<Badge>,
    pub(crate) gauge: Option<Gauge>,
    pub(crate) metrics: Vec<Metric>,
    pub(crate) tags_title: &'static str,
    pub(crate) tags: Vec<String>,
    pub(crate) show_tags: bool,
    pub(crate) explanation: Option<String>,
}

/// Backend scores are shown as received, out-of-range values included.
pub(crate) fn percent(score: f64) -> i64 {
    (score * 100.0).round() as i64
}

pub(crate) trait RiskReport {
    fn verdict(&self) -> Verdict;
    fn header(&self) -> &'static str;
    fn metrics(&self) -> Vec<Metric>;
    fn indicators(&self) -> &[String];
    fn tags_title(&self) -> &'static str;

    fn indicator_limit(&self) -> Option<usize> {
        None
    }

    fn hide_empty_tags(&self) -> bool {
        false
    }

    fn badge(&self) -> Option<Badge> {
        None
    }

    fn gauge(&self) -> Option<Gauge> {
        None
    }

    fn explanation(&self) -> Option<String> {
        None
    }

    fn panel(&self) -> ResultPanel {
        let indicators = self.indicators();
        let limit = self.indicator_limit().unwrap_or(indicators.len());
        let tags: Vec<String> = indicators.iter().take(limit).cloned().collect();
        let show_tags = !(tags.is_empty() && self.hide_empty_tags());
        ResultPanel {
            header: self.header(),
            verdict: self.verdict(),
            badge: self.badge(),
            gauge: self.gauge(),
            metrics: self.metrics(),
            tags_title: self.tags_title(),
            tags,
            show_tags,
            explanation: self.explanation(),
        }
    }
}

/// Scanner result plus the round-trip time measured by the client.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ScannerReport {
    pub(crate) result: ScanResult,
    pub(crate) elapsed: Duration,
}

impl RiskReport for ScannerReport {
    fn verdict(&self) -> Verdict {
        if self.result.is_threat {
            Verdict::Threat
        } else {
            Verdict::Safe
        }
    }

    fn header(&self) -> &'static str {
        if self.result.is_threat {
            "⚠️ Threat Detected"
        } else {
            "✅ Appears Safe"
        }
    }

    fn metrics(&self) -> Vec<Metric> {
        vec![
            Metric {
                label: "Risk Level",
                value: self.result.risk_level.clone(),
            },
            Metric {
                label: "Confidence",
                value: format!("{}%", percent(self.result.confidence)),
            },
            Metric {
                label: "Analysis Time",
                value: format!("{:.1}s", self.elapsed.as_secs_f64()),
            },
        ]
    }

    fn indicators(&self) -> &[String] {
        &self.result.threat_indicators
    }

    fn tags_title(&self) -> &'static str {
        "Threat Indicators"
    }

    fn indicator_limit(&self) -> Option<usize> {
        Some(SCANNER_INDICATOR_LIMIT)
    }

    fn hide_empty_tags(&self) -> bool {
        true
    }

    fn badge(&self) -> Option<Badge> {
        Some(Badge {
            label: self.result.risk_level.clone(),
            class: self.result.risk_level.to_lowercase(),
        })
    }

    fn gauge(&self) -> Option<Gauge> {
        Some(Gauge::from_score(self.result.combined_score))
    }

    fn explanation(&self) -> Option<String> {
        Some(explain(&self.result))
    }
}

impl RiskReport for DashboardResult {
    fn verdict(&self) -> Verdict {
        if self.is_threat {
            Verdict::Threat
        } else if percent(self.risk_score) > SUSPICIOUS_PERCENT {
            Verdict::Suspicious
        } else {
            Verdict::Safe
        }
    }

    fn header(&self) -> &'static str {
        match self.verdict() {
            Verdict::Threat => "⚠️ THREAT DETECTED",
            Verdict::Suspicious => "⚡ SUSPICIOUS",
            Verdict::Safe => "✅ SAFE",
        }
    }

    fn metrics(&self) -> Vec<Metric> {
        vec![
            Metric {
                label: "Risk Score",
                value: format!("{}%", percent(self.risk_score)),
            },
            Metric {
                label: "Risk Level",
                value: self.risk_level.clone(),
            },
            Metric {
                label: "Confidence",
                value: format!("{}%", percent(self.confidence)),
            },
            Metric {
                label: "Analyzed",
                value: self.analysis_time.clone(),
            },
        ]
    }

    fn indicators(&self) -> &[String] {
        self.detected()
    }

    fn tags_title(&self) -> &'static str {
        "Detected Issues"
    }
}

pub(crate) fn explain(result: &ScanResult) -> String {
    let score = percent(result.combined_score);
    if result.is_threat {
        let mut explanation =
            format!("This content shows signs of phishing with a risk score of {score}%. ");
        if result.text_score > TEXT_SCORE_NOTE {
            explanation.push_str(
                "The text contains suspicious language patterns commonly used in phishing attacks. ",
            );
        }
        if result.url_score > URL_SCORE_NOTE {
            explanation
                .push_str("The URL exhibits characteristics associated with malicious websites. ");
        }
        explanation.push_str(
            "Exercise extreme caution and verify through official channels before taking any action.",
        );
        explanation
    } else {
        format!(
            "This content appears to be legitimate with a low risk score of {score}%. \
             No significant phishing indicators were detected, but always remain vigilant \
             when sharing personal information online."
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(is_threat: bool, level: &str, score: f64, indicators: usize) -> ScannerReport {
        ScannerReport {
            result: ScanResult {
                is_threat,
                risk_level: level.to_string(),
                combined_score: score,
                confidence: 0.85,
                threat_indicators: (0..indicators).map(|i| format!("indicator-{i}")).collect(),
                text_score: 0.8,
                url_score: 0.6,
                analysis_timestamp: None,
            },
            elapsed: Duration::from_millis(1240),
        }
    }

    fn dashboard(is_threat: bool, risk_score: f64) -> DashboardResult {
        DashboardResult {
            is_threat,
            risk_score,
            risk_level: "Medium".to_string(),
            confidence: 0.666,
            analysis_time: "09:55:00".to_string(),
            detected_keywords: None,
            detected_issues: Some(vec!["a".into(), "b".into(), "c".into(), "d".into(), "e".into(), "f".into()]),
        }
    }

    #[test]
    fn threat_result_has_threat_header_and_lowercase_badge() {
        let panel = scan(true, "HIGH", 0.85, 2).panel();
        assert_eq!(panel.verdict, Verdict::Threat);
        assert_eq!(panel.header, "⚠️ Threat Detected");
        let badge = panel.badge.expect("badge");
        assert_eq!(badge.label, "HIGH");
        assert_eq!(badge.class, "high");
    }

    #[test]
    fn safe_result_has_safe_header() {
        let panel = scan(false, "Very Low", 0.1, 0).panel();
        assert_eq!(panel.header, "✅ Appears Safe");
        assert_eq!(panel.verdict, Verdict::Safe);
        assert_eq!(panel.badge.expect("badge").class, "very low");
    }

    #[test]
    fn gauge_bands_follow_thresholds() {
        assert_eq!(Gauge::from_score(0.2).band.color_name(), "green");
        assert_eq!(Gauge::from_score(0.5).band.color_name(), "yellow");
        assert_eq!(Gauge::from_score(0.8).band.color_name(), "red");
        assert_eq!(GaugeBand::for_score(0.4), GaugeBand::Medium);
        assert_eq!(GaugeBand::for_score(0.7), GaugeBand::High);
    }

    #[test]
    fn gauge_sweeps_unclamped_score() {
        let gauge = Gauge::from_score(0.25);
        assert_eq!(gauge.percent, 25);
        assert_eq!(gauge.degrees, 90.0);

        let over = Gauge::from_score(1.2);
        assert_eq!(over.percent, 120);
        assert_eq!(over.degrees, 432.0);
        assert_eq!(over.ratio(), 1.0);
    }

    #[test]
    fn empty_indicators_hide_the_panel() {
        let panel = scan(true, "High", 0.9, 0).panel();
        assert!(!panel.show_tags);
        assert!(panel.tags.is_empty());
    }

    #[test]
    fn scanner_caps_indicators_at_five() {
        let panel = scan(true, "High", 0.9, 7).panel();
        assert!(panel.show_tags);
        assert_eq!(panel.tags.len(), 5);
        assert_eq!(panel.tags[4], "indicator-4");
    }

    #[test]
    fn dashboard_renders_all_issues() {
        let panel = dashboard(true, 0.9).panel();
        assert_eq!(panel.tags.len(), 6);
        assert!(panel.gauge.is_none());
        assert!(panel.badge.is_none());
        assert!(panel.explanation.is_none());
    }

    #[test]
    fn dashboard_three_way_classification() {
        assert_eq!(dashboard(true, 0.1).verdict(), Verdict::Threat);
        assert_eq!(dashboard(false, 0.31).verdict(), Verdict::Suspicious);
        assert_eq!(dashboard(false, 0.30).verdict(), Verdict::Safe);
        assert_eq!(dashboard(false, 0.31).header(), "⚡ SUSPICIOUS");
    }

    #[test]
    fn dashboard_metrics_round_to_percent() {
        let metrics = dashboard(false, 0.456).metrics();
        assert_eq!(metrics[0].value, "46%");
        assert_eq!(metrics[1].value, "Medium");
        assert_eq!(metrics[2].value, "67%");
        assert_eq!(metrics[3].value, "09:55:00");
    }

    #[test]
    fn scanner_metrics_include_client_timing() {
        let metrics = scan(true, "High", 0.9, 1).metrics();
        assert_eq!(metrics[1].value, "85%");
        assert_eq!(metrics[2].value, "1.2s");
    }

    #[test]
    fn threat_explanation_mentions_sub_scores() {
        let report = scan(true, "High", 0.85, 1);
        let text = explain(&report.result);
        assert!(text.starts_with("This content shows signs of phishing with a risk score of 85%. "));
        assert!(text.contains("suspicious language patterns"));
        assert!(text.contains("malicious websites"));
        assert!(text.ends_with("before taking any action."));
    }

    #[test]
    fn threat_explanation_skips_low_sub_scores() {
        let mut result = scan(true, "Medium", 0.55, 1).result;
        result.text_score = 0.5;
        result.url_score = 0.3;
        let text = explain(&result);
        assert_eq!(
            text,
            "This content shows signs of phishing with a risk score of 55%. \
             Exercise extreme caution and verify through official channels before taking any action."
        );
    }

    #[test]
    fn safe_explanation_uses_low_risk_wording() {
        let result = scan(false, "Low", 0.12, 0).result;
        assert_eq!(
            explain(&result),
            "This content appears to be legitimate with a low risk score of 12%. \
             No significant phishing indicators were detected, but always remain vigilant \
             when sharing personal information online."
        );
    }
}
