//! Application configuration, loaded from an optional JSON file.

use crate::classify::DEFAULT_IMAGE_SIDE;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Model input side length in pixels.
    pub image_side: usize,
    /// Language code handed to the frequency source.
    pub language: String,
    /// Custom wordlist file. When unset, `<data_dir>/wordlist.txt` is
    /// probed instead.
    pub wordlist_path: Option<PathBuf>,
    /// Data directory; defaults to the platform config dir.
    pub data_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            image_side: DEFAULT_IMAGE_SIDE,
            language: "en".to_string(),
            wordlist_path: None,
            data_dir: None,
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> io::Result<Self> {
        let text = fs::read_to_string(path)?;
        serde_json::from_str(&text).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Loads the file when given, falling back to defaults on absence or
    /// parse failure. Config problems are never fatal.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        match path {
            Some(p) => match Self::load(p) {
                Ok(cfg) => {
                    info!(path = %p.display(), "loaded configuration");
                    cfg
                }
                Err(e) => {
                    warn!(path = %p.display(), error = %e, "using default configuration");
                    Self::default()
                }
            },
            None => Self::default(),
        }
    }

    fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| {
            let mut dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
            dir.push("sign-to-text");
            dir
        })
    }

    /// The wordlist file to probe first in the dictionary chain.
    pub fn wordlist_file(&self) -> PathBuf {
        self.wordlist_path
            .clone()
            .unwrap_or_else(|| self.data_dir().join("wordlist.txt"))
    }
}
