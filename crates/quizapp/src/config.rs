//! # Configuration
//!
//! Quiz configuration is managed by [`confique`], which handles layered loading
//! from TOML files and environment variables.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `QUIZ_DATA_FILE`, `QUIZ_COLOR`.
//! 2. **Explicit file**: `--config <path>` on the command line. Must exist.
//! 3. **Working directory**: `./quiz.toml`.
//! 4. **User Config**: OS-appropriate config directory (via `directories` crate).
//! 5. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! The `--file` flag overrides `data_file` after all of the above.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_file` | `quizzes.json` | JSON file holding the quizzes |
//! | `color` | `true` | Colorize terminal output |

use crate::error::{QuizError, Result};
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "quiz.toml";

/// Configuration for quiz, stored in `quiz.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QuizConfig {
    /// JSON file holding the quizzes. Relative paths resolve against the
    /// working directory.
    #[config(env = "QUIZ_DATA_FILE", default = "quizzes.json")]
    pub data_file: PathBuf,

    /// Colorize terminal output.
    #[config(env = "QUIZ_COLOR", default = true)]
    pub color: bool,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(crate::store::fs_backend::DEFAULT_DATA_FILE),
            color: true,
        }
    }
}

impl QuizConfig {
    /// Loads configuration from the environment, `explicit` (if given), the
    /// working directory and the user config directory.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut files = Vec::new();
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(QuizError::Config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            files.push(path.to_path_buf());
        }
        files.push(PathBuf::from(CONFIG_FILE_NAME));
        if let Some(user) = Self::user_config_file() {
            files.push(user);
        }
        Self::load_layers(true, &files)
    }

    /// Loads from `files` only, highest priority first. Missing files are skipped.
    pub fn load_from(files: &[PathBuf]) -> Result<Self> {
        Self::load_layers(false, files)
    }

    fn load_layers(with_env: bool, files: &[PathBuf]) -> Result<Self> {
        let mut builder = Self::builder();
        if with_env {
            builder = builder.env();
        }
        for file in files {
            builder = builder.file(file);
        }
        builder.load().map_err(|e| QuizError::Config(e.to_string()))
    }

    /// `quiz.toml` in the OS config directory, when one can be determined.
    pub fn user_config_file() -> Option<PathBuf> {
        ProjectDirs::from("com", "quiz", "quiz").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Replaces the data file, e.g. from a command-line flag.
    pub fn with_data_file(mut self, data_file: Option<PathBuf>) -> Self {
        if let Some(path) = data_file {
            self.data_file = path;
        }
        self
    }
}
