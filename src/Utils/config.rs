//! TOML configuration. Every field has a default, so a missing file, an empty file and a
//! file with only some sections all work:
//! ```toml
//! [render]
//! input_dir = "example_pde_jsons"
//!
//! [generation]
//! model = "gpt-5-nano"
//! catalog = "random_pde_list.json"
//! output_dir = "random_pde_jsons"
//! responses_dir = "recorded_responses"
//!
//! [logging]
//! level = "info"
//! file = "pde_tree.log"   # or "auto" for log_<date>_<time>.txt
//! ```

use crate::error::{PdeError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub input_dir: PathBuf,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            input_dir: PathBuf::from("example_pde_jsons"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub model: String,
    pub catalog: PathBuf,
    pub output_dir: PathBuf,
    pub responses_dir: PathBuf,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        GenerationConfig {
            model: "gpt-5-nano".to_string(),
            catalog: PathBuf::from("random_pde_list.json"),
            output_dir: PathBuf::from("random_pde_jsons"),
            responses_dir: PathBuf::from("recorded_responses"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// off, none, debug, info, warn or error
    pub level: String,
    /// `auto` picks a timestamped name
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "info".to_string(),
            file: None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub render: RenderConfig,
    pub generation: GenerationConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    pub fn from_toml_str(text: &str) -> Result<AppConfig> {
        Ok(toml::from_str(text)?)
    }

    /// Reads a config file; unlike an absent `--config`, a named file that is missing is an error.
    pub fn load(path: &Path) -> Result<AppConfig> {
        if !path.is_file() {
            return Err(PdeError::missing(path));
        }
        AppConfig::from_toml_str(&fs::read_to_string(path)?)
    }

    pub fn load_or_default(path: Option<&Path>) -> Result<AppConfig> {
        match path {
            Some(path) => AppConfig::load(path),
            None => Ok(AppConfig::default()),
        }
    }
}
