//! Command-line arguments and resolved runtime configuration

use std::path::PathBuf;

use clap::Parser;
use tui_dispatch_debug::DebugCliArgs;
use url::Url;

use crate::api::DEFAULT_BASE_URL;

/// Browse Rick and Morty episodes and their characters
#[derive(Parser, Debug)]
#[command(name = "episode-browser")]
#[command(about = "A terminal browser for Rick and Morty episodes and characters")]
pub struct Args {
    /// API root (the `/episode` and `/character` endpoints live below it)
    #[arg(long, default_value = DEFAULT_BASE_URL, value_parser = parse_base_url)]
    pub base_url: Url,

    /// Where to write the diagnostic log (default: user cache directory)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    #[command(flatten)]
    pub debug: DebugCliArgs,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub base_url: Url,
    pub log_file: PathBuf,
}

impl Config {
    pub fn from_args(base_url: Url, log_file: Option<PathBuf>) -> Self {
        Self {
            base_url,
            log_file: log_file.unwrap_or_else(default_log_file),
        }
    }
}

/// Parses a base URL and makes sure it ends in `/`
pub fn parse_base_url(raw: &str) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(raw)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

fn default_log_file() -> PathBuf {
    dirs_next::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("episode-browser")
        .join("episode-browser.log")
}
