//! # Configuration
//!
//! Configuration is loaded with [`confique`], layered in priority order:
//!
//! 1. **Environment variables**: `HOMEBLOG_DATA_DIR`, `HOMEBLOG_POSTS_DIR`,
//!    `HOMEBLOG_SEED`, `HOMEBLOG_LOG_FORMAT`.
//! 2. **Local file**: `./homeblog.toml`.
//! 3. **User file**: `config.toml` in the OS config directory (via `directories`).
//! 4. **Compiled defaults**.
//!
//! Command-line flags are applied on top by the binary. `HOMEBLOG_LOG` is not a
//! config key: [`crate::logging`] reads it directly and it replaces `log_level`.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_dir` | `.data` | Directory holding one JSON file per blog record |
//! | `posts_dir` | `posts` | Directory holding markdown posts |
//! | `seed_sample_data` | `true` | Seed sample records into an empty data dir at startup |
//! | `log_level` | `info` | Default tracing filter |
//! | `log_format` | `text` | `text` or `json` |

use crate::error::{BlogError, Result};
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG_FILE: &str = "homeblog.toml";

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BlogConfig {
    /// Directory holding one JSON file per blog record.
    #[config(default = ".data", env = "HOMEBLOG_DATA_DIR")]
    pub data_dir: PathBuf,

    /// Directory holding `<slug>.md` posts.
    #[config(default = "posts", env = "HOMEBLOG_POSTS_DIR")]
    pub posts_dir: PathBuf,

    /// Write the sample records when the data directory is empty at startup.
    #[config(default = true, env = "HOMEBLOG_SEED")]
    pub seed_sample_data: bool,

    /// Tracing filter used when `HOMEBLOG_LOG` is not set.
    #[config(default = "info")]
    pub log_level: String,

    /// `text` or `json`.
    #[config(default = "text", env = "HOMEBLOG_LOG_FORMAT")]
    pub log_format: String,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".data"),
            posts_dir: PathBuf::from("posts"),
            seed_sample_data: true,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }
}

impl BlogConfig {
    /// Loads from the environment, `<dir>/homeblog.toml` and the user config file.
    pub fn load_from(dir: &Path) -> Result<Self> {
        let mut builder = Self::builder().env().file(dir.join(LOCAL_CONFIG_FILE));
        if let Some(user_file) = user_config_file() {
            builder = builder.file(user_file);
        }
        builder.load().map_err(|e| BlogError::Config(e.to_string()))
    }

    /// Loads with `dir/homeblog.toml` as the only file layer. Used by tests to keep the
    /// user's own config out of the picture.
    pub fn load_file_only(dir: &Path) -> Result<Self> {
        Self::builder()
            .file(dir.join(LOCAL_CONFIG_FILE))
            .load()
            .map_err(|e| BlogError::Config(e.to_string()))
    }

    pub fn json_logs(&self) -> bool {
        self.log_format.eq_ignore_ascii_case("json")
    }
}

pub fn user_config_file() -> Option<PathBuf> {
    ProjectDirs::from("org", "homeblog", "homeblog")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}
