use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::io::LoadMode;

/// Settings read from `polystat.toml`; command-line flags take precedence
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
pub struct FileConfig {
    /// Polygon file used when none is given on the command line
    #[serde(default)]
    pub input: Option<PathBuf>,
    /// Command file used instead of stdin
    #[serde(default)]
    pub commands: Option<PathBuf>,
    /// Abort on the first malformed polygon line instead of skipping it
    #[serde(default)]
    pub strict: bool,
    #[serde(default)]
    pub verbose: bool,
}

impl FileConfig {
    pub fn load() -> Option<Self> {
        let config_paths = get_config_paths();

        for path in config_paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }

    /// Read and parse the config file at `path`
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        use anyhow::Context;

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&contents).context("Failed to parse config file")
    }

    pub fn load_mode(&self) -> LoadMode {
        if self.strict {
            LoadMode::Strict
        } else {
            LoadMode::Lenient
        }
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("polystat.toml"));
    paths.push(PathBuf::from(".polystat.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("polystat").join("config.toml"));
        paths.push(config_dir.join("polystat.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".polystat.toml"));
    }

    paths
}
