use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{GraphError, GraphResult};
use crate::io::similarity::DEFAULT_MIN_WORD_LEN;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    /// Default per-step playback delay in milliseconds.
    pub playback_speed_ms: u64,
    /// Minimum word length for the sentence similarity builder.
    pub similarity_min_word_len: usize,
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub max_log_file_size: u64,
    pub max_log_files: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            playback_speed_ms: 500,
            similarity_min_word_len: DEFAULT_MIN_WORD_LEN,
            log_level: "info".to_string(),
            log_dir: "logs".to_string(),
            log_file: "graphvis".to_string(),
            max_log_file_size: 10 * 1024 * 1024, // 10MB
            max_log_files: 3,
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> GraphResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config =
            toml::from_str(&content).map_err(|e| GraphError::Config(e.to_string()))?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> GraphResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| GraphError::Config(e.to_string()))?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_round_trips_through_toml() {
        let config = Config::default();
        let text = toml::to_string_pretty(&config).expect("serialize should succeed");
        let reloaded: Config = toml::from_str(&text).expect("deserialize should succeed");
        assert_eq!(reloaded.playback_speed_ms, config.playback_speed_ms);
        assert_eq!(reloaded.similarity_min_word_len, config.similarity_min_word_len);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let result = Config::load("definitely/not/here.toml");
        assert!(matches!(result, Err(GraphError::Io(_))));
    }
}
