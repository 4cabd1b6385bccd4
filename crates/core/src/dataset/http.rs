//! HTTP fetcher implementation.

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::Client;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::fs::{self, File};
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::{debug, info};

use super::error::DatasetError;
use super::traits::DatasetFetcher;

/// Streams remote files to disk.
///
/// The body is written to a sibling `.part` file and renamed into place
/// once complete, so an interrupted download is never mistaken for a
/// finished extract.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create a fetcher with the given request timeout.
    pub fn new(timeout: Duration) -> Result<Self, DatasetError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(DatasetError::Client)?;
        Ok(Self { client })
    }
}

#[async_trait]
impl DatasetFetcher for HttpFetcher {
    async fn fetch(&self, url: &str, dest: &Path) -> Result<(), DatasetError> {
        info!("Downloading {}", url);

        let response = self.client.get(url).send().await.map_err(|e| {
            DatasetError::Http {
                url: url.to_string(),
                source: e,
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DatasetError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let total_size = response.content_length();
        let part = part_path(dest);

        let file = File::create(&part)
            .await
            .map_err(|e| io_error(&part, e))?;
        let mut writer = BufWriter::new(file);
        let mut stream = response.bytes_stream();
        let mut downloaded: u64 = 0;
        let mut last_pct: u64 = 0;

        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| DatasetError::Http {
                url: url.to_string(),
                source: e,
            })?;
            writer
                .write_all(&chunk)
                .await
                .map_err(|e| io_error(&part, e))?;
            downloaded += chunk.len() as u64;

            if let Some(total) = total_size {
                let pct = downloaded * 100 / total.max(1);
                if pct > last_pct {
                    debug!("{}: {}%", url, pct);
                    last_pct = pct;
                }
            }
        }

        writer.flush().await.map_err(|e| io_error(&part, e))?;
        fs::rename(&part, dest)
            .await
            .map_err(|e| io_error(dest, e))?;

        debug!("Downloaded {} bytes to {}", downloaded, dest.display());
        Ok(())
    }
}

fn part_path(dest: &Path) -> PathBuf {
    let mut name = dest.as_os_str().to_owned();
    name.push(".part");
    PathBuf::from(name)
}

fn io_error(path: &Path, source: std::io::Error) -> DatasetError {
    DatasetError::Io {
        path: path.to_path_buf(),
        source,
    }
}
