use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

pub(crate) const DEFAULT_CONFIG_PATH: &str = "config/trusteye.toml";

#[derive(Parser, Debug)]
#[command(
    name = "trusteye",
    version,
    about = "Terminal client for the TrustEye phishing detection API"
)]
pub(crate) struct Args {
    #[arg(long)]
    pub(crate) api_base: Option<String>,
    #[arg(long)]
    pub(crate) config: Option<PathBuf>,
    #[arg(long, default_value = "logs")]
    pub(crate) log_dir: PathBuf,
    #[arg(long, default_value_t = false)]
    pub(crate) log_to_stderr: bool,
    #[arg(long, value_enum)]
    pub(crate) view: Option<ViewArg>,
    #[command(subcommand)]
    pub(crate) command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Analyze text and/or a URL once and print the report.
    Scan {
        #[arg(long, default_value = "")]
        text: String,
        #[arg(long, default_value = "")]
        url: String,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Probe the API health endpoint.
    Health,
    /// Print the API description.
    Info,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum ViewArg {
    Scanner,
    Dashboard,
}
