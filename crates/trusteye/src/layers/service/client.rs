use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use trusteye_protocol::api::{
    join_base_path, ANALYZE_PATH, ANALYZE_TEXT_PATH, ANALYZE_URL_PATH, HEALTH_PATH, INFO_PATH,
};
use trusteye_protocol::{
    ApiInfo, DashboardResult, HealthStatus, ScanRequest, ScanResult, TextRequest, UrlRequest,
};

use super::error::ClientError;

/// Remote analysis backend. The UI only talks to it through this trait.
#[async_trait]
pub(crate) trait AnalysisClient: Send + Sync {
    async fn analyze(&self, request: &ScanRequest) -> Result<ScanResult, ClientError>;
    async fn analyze_text(&self, request: &TextRequest) -> Result<DashboardResult, ClientError>;
    async fn analyze_url(&self, request: &UrlRequest) -> Result<DashboardResult, ClientError>;
    async fn health(&self) -> Result<HealthStatus, ClientError>;
    async fn info(&self) -> Result<ApiInfo, ClientError>;
}

pub(crate) struct HttpAnalysisClient {
    base_url: String,
    client: Client,
}

impl HttpAnalysisClient {
    /// No request timeout is set: an analysis runs until the backend answers or the
    /// connection fails.
    pub(crate) fn new(
        base_url: &str,
        connect_timeout: Option<Duration>,
    ) -> Result<Self, ClientError> {
        let mut builder = Client::builder();
        if let Some(timeout) = connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        let client = builder.build().map_err(|source| ClientError::Transport {
            endpoint: base_url.to_string(),
            source,
        })?;
        Ok(Self {
            base_url: base_url.to_string(),
            client,
        })
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<String, ClientError> {
        join_base_path(&self.base_url, path).map_err(ClientError::InvalidUrl)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = self.endpoint(path)?;
        let request = self.client.get(&url).header(ACCEPT, "application/json");
        let body = send(request, &url).await?;
        decode(&body, &url)
    }

    async fn post_json<B, T>(&self, path: &str, payload: &B) -> Result<T, ClientError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        let request = self
            .client
            .post(&url)
            .header(ACCEPT, "application/json")
            .json(payload);
        let body = send(request, &url).await?;
        decode(&body, &url)
    }
}

#[async_trait]
impl AnalysisClient for HttpAnalysisClient {
    async fn analyze(&self, request: &ScanRequest) -> Result<ScanResult, ClientError> {
        self.post_json(ANALYZE_PATH, request).await
    }

    async fn analyze_text(&self, request: &TextRequest) -> Result<DashboardResult, ClientError> {
        self.post_json(ANALYZE_TEXT_PATH, request).await
    }

    async fn analyze_url(&self, request: &UrlRequest) -> Result<DashboardResult, ClientError> {
        self.post_json(ANALYZE_URL_PATH, request).await
    }

    async fn health(&self) -> Result<HealthStatus, ClientError> {
        let url = self.endpoint(HEALTH_PATH)?;
        let request = self.client.get(&url).header(ACCEPT, "application/json");
        let body = send(request, &url).await?;
        // A 2xx is all that counts; the body is informational.
        Ok(serde_json::from_str(&body).unwrap_or_default())
    }

    async fn info(&self) -> Result<ApiInfo, ClientError> {
        self.get_json(INFO_PATH).await
    }
}

async fn send(request: reqwest::RequestBuilder, url: &str) -> Result<String, ClientError> {
    let response = request.send().await.map_err(|source| {
        tracing::debug!(
            endpoint = %url,
            timeout = source.is_timeout(),
            connect = source.is_connect(),
            "http request failed"
        );
        ClientError::Transport {
            endpoint: url.to_string(),
            source,
        }
    })?;
    let status = response.status();
    if !status.is_success() {
        return Err(ClientError::Status {
            status: status.as_u16(),
            endpoint: url.to_string(),
        });
    }
    response.text().await.map_err(|source| ClientError::Transport {
        endpoint: url.to_string(),
        source,
    })
}

fn decode<T: DeserializeOwned>(body: &str, url: &str) -> Result<T, ClientError> {
    serde_json::from_str(body).map_err(|source| ClientError::Decode {
        endpoint: url.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use serde_json::{json, Value};

    async fn spawn_backend(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind");
        let addr = listener.local_addr().expect("addr");
        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });
        format!("http://{addr}/api")
    }

    async fn echo_scan(Json(body): Json<Value>) -> Json<Value> {
        let has_url = body["url"].as_str().map(|url| !url.is_empty()).unwrap_or(false);
        let url_score = if has_url { 0.6 } else { 0.0 };
        Json(json!({
            "is_threat": true,
            "risk_level": "High",
            "combined_score": 0.85,
            "confidence": 0.85,
            "text_score": 0.8,
            "url_score": url_score,
            "threat_indicators": ["urgent", "verify"]
        }))
    }

    async fn analyze_text(Json(body): Json<Value>) -> Json<Value> {
        Json(json!({
            "is_threat": false,
            "risk_score": 0.35,
            "risk_level": "Low",
            "confidence": 0.7,
            "analysis_time": "12:00:01",
            "detected_keywords": [body["text"].as_str().unwrap_or("")]
        }))
    }

    async fn analyze_url() -> (StatusCode, Json<Value>) {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "No URL provided" })),
        )
    }

    async fn health() -> Json<Value> {
        Json(json!({ "status": "healthy", "service": "TrustEye API", "version": "1.0.0" }))
    }

    fn router() -> Router {
        Router::new()
            .route("/api/analyze", post(echo_scan))
            .route("/api/analyze-text", post(analyze_text))
            .route("/api/analyze-url", post(analyze_url))
            .route("/api/health", get(health))
            .route("/api/info", get(|| async { "not json" }))
    }

    #[tokio::test]
    async fn posts_scan_request_and_decodes_result() {
        let base = spawn_backend(router()).await;
        let client = HttpAnalysisClient::new(&base, None).expect("client");
        let result = client
            .analyze(&ScanRequest::new("URGENT", "http://bad.example"))
            .await
            .expect("analyze");
        assert!(result.is_threat);
        assert_eq!(result.risk_level, "High");
        assert_eq!(result.url_score, 0.6);
        assert_eq!(result.threat_indicators.len(), 2);
    }

    #[tokio::test]
    async fn posts_text_only_body() {
        let base = spawn_backend(router()).await;
        let client = HttpAnalysisClient::new(&base, None).expect("client");
        let result = client
            .analyze_text(&TextRequest {
                text: "verify".to_string(),
            })
            .await
            .expect("analyze text");
        assert_eq!(result.detected(), ["verify".to_string()]);
        assert_eq!(result.analysis_time, "12:00:01");
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let base = spawn_backend(router()).await;
        let client = HttpAnalysisClient::new(&base, None).expect("client");
        let err = client
            .analyze_url(&UrlRequest {
                url: "http://x".to_string(),
            })
            .await
            .expect_err("status error");
        assert!(matches!(err, ClientError::Status { status: 400, .. }));
    }

    #[tokio::test]
    async fn undecodable_body_is_an_error() {
        let base = spawn_backend(router()).await;
        let client = HttpAnalysisClient::new(&base, None).expect("client");
        let err = client.info().await.expect_err("decode error");
        assert_eq!(err.kind(), "decode");
    }

    #[tokio::test]
    async fn health_reads_status() {
        let base = spawn_backend(router()).await;
        let client = HttpAnalysisClient::new(&base, None).expect("client");
        let health = client.health().await.expect("health");
        assert_eq!(health.status.as_deref(), Some("healthy"));
    }

    #[tokio::test]
    async fn refused_connection_is_transport_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        let addr = listener.local_addr().expect("addr");
        drop(listener);
        let client =
            HttpAnalysisClient::new(&format!("http://{addr}/api"), Some(Duration::from_secs(2)))
                .expect("client");
        let err = client.health().await.expect_err("transport error");
        assert_eq!(err.kind(), "transport");
    }
}
