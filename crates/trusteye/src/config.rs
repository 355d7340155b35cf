use crate::cli::{Args, ViewArg, DEFAULT_CONFIG_PATH};
use crate::layers::ui::app::ViewKind;
use anyhow::Context;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use trusteye_protocol::api::DEFAULT_API_BASE;

const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Deserialize, Default)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) api: ApiConfig,
    #[serde(default)]
    pub(crate) ui: UiConfig,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub(crate) struct ApiConfig {
    pub(crate) base_url: Option<String>,
    pub(crate) connect_timeout: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub(crate) struct UiConfig {
    pub(crate) default_view: Option<ViewKind>,
    pub(crate) toast_duration: Option<String>,
}

impl Config {
    pub(crate) fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        Ok(config)
    }

    /// An explicitly passed file must exist; the default location is optional.
    pub(crate) fn load_for(args: &Args) -> anyhow::Result<Self> {
        match &args.config {
            Some(path) => Self::load(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::load(DEFAULT_CONFIG_PATH),
            None => Ok(Self::default()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Settings {
    pub(crate) api_base: String,
    pub(crate) connect_timeout: Option<Duration>,
    pub(crate) default_view: ViewKind,
    pub(crate) toast_duration: Duration,
}

impl Settings {
    pub(crate) fn resolve(config: &Config, args: &Args) -> anyhow::Result<Self> {
        let api_base = args
            .api_base
            .clone()
            .or_else(|| config.api.base_url.clone())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        if api_base.trim().is_empty() {
            anyhow::bail!("api base url must not be empty");
        }
        let connect_timeout = config
            .api
            .connect_timeout
            .as_deref()
            .map(|raw| parse_duration("api.connect_timeout", raw))
            .transpose()?;
        let toast_duration = config
            .ui
            .toast_duration
            .as_deref()
            .map(|raw| parse_duration("ui.toast_duration", raw))
            .transpose()?
            .unwrap_or(DEFAULT_TOAST_DURATION);
        let default_view = match args.view {
            Some(ViewArg::Scanner) => ViewKind::Scanner,
            Some(ViewArg::Dashboard) => ViewKind::Dashboard,
            None => config.ui.default_view.unwrap_or_default(),
        };
        Ok(Self {
            api_base,
            connect_timeout,
            default_view,
            toast_duration,
        })
    }
}

fn parse_duration(key: &str, raw: &str) -> anyhow::Result<Duration> {
    humantime::parse_duration(raw.trim()).with_context(|| format!("invalid {key} value {raw:?}"))
}
