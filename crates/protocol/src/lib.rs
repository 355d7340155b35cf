use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub mod api;

/// Body of `POST /analyze`. Both fields are always sent, blank or not.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ScanRequest {
    pub text: String,
    pub url: String,
}

impl ScanRequest {
    pub fn new(text: &str, url: &str) -> Self {
        Self {
            text: text.trim().to_string(),
            url: url.trim().to_string(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty() && self.url.trim().is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TextRequest {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UrlRequest {
    pub url: String,
}

/// Response of `POST /analyze`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScanResult {
    pub is_threat: bool,
    pub risk_level: String,
    pub combined_score: f64,
    pub confidence: f64,
    #[serde(default)]
    pub threat_indicators: Vec<String>,
    #[serde(default)]
    pub text_score: f64,
    #[serde(default)]
    pub url_score: f64,
    #[serde(default)]
    pub analysis_timestamp: Option<String>,
}

/// Response of `POST /analyze-text` and `POST /analyze-url`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardResult {
    pub is_threat: bool,
    pub risk_score: f64,
    pub risk_level: String,
    pub confidence: f64,
    #[serde(default)]
    pub analysis_time: String,
    #[serde(default)]
    pub detected_keywords: Option<Vec<String>>,
    #[serde(default)]
    pub detected_issues: Option<Vec<String>>,
}

impl DashboardResult {
    /// Text analysis reports keywords, URL analysis reports issues.
    pub fn detected(&self) -> &[String] {
        self.detected_keywords
            .as_deref()
            .or(self.detected_issues.as_deref())
            .unwrap_or(&[])
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct HealthStatus {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ApiInfo {
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub endpoints: BTreeMap<String, String>,
    #[serde(default)]
    pub features: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_request_trims_and_keeps_both_fields() {
        let request = ScanRequest::new("  hello ", "");
        let json = serde_json::to_value(&request).expect("serialize");
        assert_eq!(json, serde_json::json!({ "text": "hello", "url": "" }));
        assert!(!request.is_blank());
        assert!(ScanRequest::new(" ", "\t").is_blank());
    }

    #[test]
    fn scan_result_accepts_backend_payload() {
        let raw = r#"{
            "combined_score": 0.85,
            "risk_level": "High",
            "is_threat": true,
            "confidence": 0.85,
            "text_score": 0.8,
            "url_score": 0.6,
            "threat_indicators": ["urgent", "verify", "IP address detected"],
            "analysis_timestamp": "2025-10-02T09:55:00"
        }"#;
        let result: ScanResult = serde_json::from_str(raw).expect("deserialize");
        assert!(result.is_threat);
        assert_eq!(result.risk_level, "High");
        assert_eq!(result.threat_indicators.len(), 3);
    }

    #[test]
    fn scan_result_defaults_missing_lists_and_sub_scores() {
        let raw = r#"{"is_threat":false,"risk_level":"Low","combined_score":0.1,"confidence":0.9}"#;
        let result: ScanResult = serde_json::from_str(raw).expect("deserialize");
        assert!(result.threat_indicators.is_empty());
        assert_eq!(result.text_score, 0.0);
        assert!(result.analysis_timestamp.is_none());
    }

    #[test]
    fn dashboard_result_prefers_keywords_over_issues() {
        let raw = r#"{"is_threat":false,"risk_score":0.2,"risk_level":"Low","confidence":0.7,
            "analysis_time":"10:00:00","detected_keywords":["urgent"],"detected_issues":["ip"]}"#;
        let result: DashboardResult = serde_json::from_str(raw).expect("deserialize");
        assert_eq!(result.detected(), ["urgent".to_string()]);
    }

    #[test]
    fn dashboard_result_falls_back_to_issues() {
        let raw = r#"{"is_threat":true,"risk_score":0.9,"risk_level":"High","confidence":0.7,
            "analysis_time":"10:00:00","detected_issues":["IP address instead of domain"]}"#;
        let result: DashboardResult = serde_json::from_str(raw).expect("deserialize");
        assert_eq!(result.detected(), ["IP address instead of domain".to_string()]);

        let bare = DashboardResult {
            detected_issues: None,
            ..result
        };
        assert!(bare.detected().is_empty());
    }

    #[test]
    fn health_status_tolerates_partial_body() {
        let health: HealthStatus = serde_json::from_str(r#"{"status":"healthy"}"#).expect("health");
        assert_eq!(health.status.as_deref(), Some("healthy"));
        assert!(health.version.is_none());
    }
}
