//! Loads structured resume JSON produced by the upstream extractor

use crate::error::{AtsScorerError, Result};
use crate::input::file_detector::FileType;
use log::{debug, info};
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;

pub struct InputManager {
    cache: HashMap<String, Value>,
    enable_cache: bool,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    /// Read a `.json` file into a raw value for the engine.
    ///
    /// The value is returned unclassified: an empty object or `null` is a
    /// valid load and is judged by the engine.
    pub async fn load_json(&mut self, path: &Path) -> Result<Value> {
        let path_str = path.to_string_lossy().to_string();

        if self.enable_cache {
            if let Some(cached) = self.cache.get(&path_str) {
                info!("Using cached resume data for: {}", path.display());
                return Ok(cached.clone());
            }
        }

        if !tokio::fs::try_exists(path).await.unwrap_or(false) {
            return Err(AtsScorerError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let value = match FileType::from_path(path) {
            FileType::Json => {
                info!("Reading structured resume: {}", path.display());
                let content = tokio::fs::read_to_string(path).await?;
                serde_json::from_str::<Value>(&content).map_err(|e| {
                    AtsScorerError::InvalidInput(format!(
                        "{} is not valid JSON: {}",
                        path.display(),
                        e
                    ))
                })?
            }
            file_type if file_type.is_raw_document() => {
                return Err(AtsScorerError::UnsupportedFormat(format!(
                    "{} is a raw document; text and field extraction happens upstream, \
                     pass the structured JSON it produces instead",
                    path.display()
                )));
            }
            _ => {
                return Err(AtsScorerError::UnsupportedFormat(format!(
                    "Unsupported file type for: {}",
                    path.display()
                )));
            }
        };

        if self.enable_cache {
            debug!("Caching resume data for: {}", path.display());
            self.cache.insert(path_str, value.clone());
        }

        Ok(value)
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}
