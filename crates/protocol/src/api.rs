pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";

pub const HEALTH_PATH: &str = "/health";
pub const INFO_PATH: &str = "/info";
pub const ANALYZE_PATH: &str = "/analyze";
pub const ANALYZE_TEXT_PATH: &str = "/analyze-text";
pub const ANALYZE_URL_PATH: &str = "/analyze-url";

pub fn join_base_path(base: &str, path: &str) -> Result<String, String> {
    if base.trim().is_empty() {
        return Err("base_url is empty".to_string());
    }
    let normalized_base = base.trim().trim_end_matches('/');
    let normalized_path = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    };
    Ok(format!("{normalized_base}{normalized_path}"))
}
