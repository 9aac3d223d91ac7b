use crate::error::{FetchError, Result};
use crate::utils::fs;
use std::fs::File;
use std::path::Path;
use std::time::Duration;

pub struct Downloader {
    agent: ureq::Agent,
}

impl Downloader {
    pub fn new(timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(timeout)
            .user_agent(concat!("modelfetch/", env!("CARGO_PKG_VERSION")))
            .build();
        Self { agent }
    }

    /// Fetches `url` and writes the response body verbatim to `destination`.
    /// An existing file at `destination` is overwritten.
    pub fn download_file(&self, url: &str, destination: &Path) -> Result<()> {
        println!("Downloading from {url}...");

        if let Some(parent) = destination.parent() {
            fs::ensure_dir_exists(parent)?;
        }

        let response = self.agent.get(url).call().map_err(|e| match e {
            ureq::Error::Status(code, _) => {
                FetchError::download(url.to_string(), format!("HTTP status {code}"))
            }
            ureq::Error::Transport(t) => FetchError::download(url.to_string(), t.to_string()),
        })?;

        let mut reader = response.into_reader();
        let mut outfile = File::create(destination)?;
        let bytes = std::io::copy(&mut reader, &mut outfile)
            .map_err(|e| FetchError::download(url.to_string(), e.to_string()))?;

        println!("Downloaded {bytes} bytes to {}", destination.display());
        Ok(())
    }
}
