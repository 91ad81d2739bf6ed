//! Byte sources the pipeline can read from.

use combo_core::StreamDecodeError;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Http(String),
    Stdin,
}

impl Source {
    /// `-` is stdin, `http://` and `https://` are fetched, anything else is a path.
    pub fn parse(location: &str) -> Self {
        let location = location.trim();
        if location == "-" {
            Source::Stdin
        } else if location.starts_with("http://") || location.starts_with("https://") {
            Source::Http(location.to_string())
        } else {
            Source::File(PathBuf::from(location))
        }
    }

    /// Open the source for reading. The returned reader owns every handle it
    /// needs and releases them when dropped.
    ///
    /// For HTTP, `timeout` bounds the whole exchange including the body read;
    /// expiry surfaces as an I/O error from the reader.
    pub fn open(&self, timeout: Option<Duration>) -> Result<Box<dyn Read + Send>, StreamDecodeError> {
        match self {
            Source::File(path) => {
                let file = File::open(path)?;
                tracing::info!(path = %path.display(), "reading orders from file");
                Ok(Box::new(file))
            }
            Source::Stdin => {
                tracing::info!("reading orders from stdin");
                Ok(Box::new(std::io::stdin()))
            }
            Source::Http(url) => {
                let mut builder = reqwest::blocking::Client::builder();
                if let Some(limit) = timeout {
                    builder = builder.timeout(limit);
                }
                let client = builder.build().map_err(fetch_error)?;
                let response = client
                    .get(url)
                    .send()
                    .and_then(|r| r.error_for_status())
                    .map_err(fetch_error)?;
                tracing::info!(%url, status = %response.status(), "fetching orders");
                Ok(Box::new(response))
            }
        }
    }
}

fn fetch_error(err: reqwest::Error) -> StreamDecodeError {
    StreamDecodeError::Fetch(err.to_string())
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::File(path) => write!(f, "{}", path.display()),
            Source::Http(url) => f.write_str(url),
            Source::Stdin => f.write_str("-"),
        }
    }
}
