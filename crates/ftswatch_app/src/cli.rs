use std::path::PathBuf;

use clap::Parser;
use url::Url;

use crate::error::AppError;

/// Terminal progress monitor for FTS transfer processes.
#[derive(Debug, Parser)]
#[command(name = "ftswatch", version, about)]
pub struct Args {
    /// Base url of the transfer service. The default is an invalid
    /// placeholder so a forgotten flag fails before any request is made.
    #[arg(long, default_value = "foo")]
    pub url: String,

    /// Project whose transfer process is started and monitored.
    #[arg(long, default_value = "example")]
    pub project: String,

    /// Poll interval in seconds.
    #[arg(long, default_value_t = 1)]
    pub interval_secs: u64,

    /// Attempts per status poll; 1 fails fast on the first bad poll.
    #[arg(long, default_value_t = 1)]
    pub retries: u32,

    /// Write logs to this file instead of the terminal, keeping them
    /// out of the progress view.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// Validates the base url before anything touches the network.
    pub fn base_url(&self) -> Result<Url, AppError> {
        Url::parse(&self.url).map_err(|source| AppError::Config {
            value: self.url.clone(),
            source,
        })
    }
}
