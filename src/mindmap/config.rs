use crate::error::{MindmapError, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_MAP_FILE: &str = "my_map.json";

/// Overrides the platform data directory when set.
pub const HOME_ENV: &str = "MINDMAP_HOME";

/// Configuration for mindmap, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MindmapConfig {
    /// Map file used when no `--file` is given. Relative paths resolve
    /// against the data directory.
    #[serde(default = "default_file")]
    pub default_file: String,
}

fn default_file() -> String {
    DEFAULT_MAP_FILE.to_string()
}

impl Default for MindmapConfig {
    fn default() -> Self {
        Self {
            default_file: default_file(),
        }
    }
}

impl MindmapConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(MindmapError::Io)?;
        serde_json::from_str(&content)
            .map_err(|e| MindmapError::Config(format!("{}: {}", config_path.display(), e)))
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(MindmapError::Io)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content).map_err(MindmapError::Io)?;
        Ok(())
    }

    /// The map file this config points at, resolved against `data_dir`.
    pub fn map_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.default_file)
    }
}

/// `$MINDMAP_HOME`, or the platform data directory.
pub fn data_dir() -> Result<PathBuf> {
    resolve_data_dir(std::env::var_os(HOME_ENV))
}

fn resolve_data_dir(home: Option<OsString>) -> Result<PathBuf> {
    if let Some(home) = home.filter(|h| !h.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "mindmap", "mindmap")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            MindmapError::Config(format!(
                "could not determine a data directory; set {}",
                HOME_ENV
            ))
        })
}
