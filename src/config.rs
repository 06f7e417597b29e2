use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::components::sort_header::Indicator;

const DEFAULT_CONFIG: &str = include_str!("../.config/config.yaml");

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub log_file: Option<PathBuf>,
    pub log_level: Option<String>,
    #[serde(default)]
    pub indicator: Indicator,
}

impl Config {
    /// Load config from `path`, or from the default location when `None`.
    /// A missing file is created with the default content.
    pub fn new(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None => get_config_path()?,
        };
        if !config_path.is_file() {
            write_default(&config_path)?;
            return serde_yaml_ng::from_str(DEFAULT_CONFIG).context("Fail to parse default config");
        }

        let file = fs::File::open(&config_path)
            .with_context(|| format!("Fail to open file `{}`", config_path.display()))?;
        let cfg: Config = serde_yaml_ng::from_reader(file)
            .with_context(|| format!("Fail to deserialize file `{}`", config_path.display()))?;
        Ok(cfg)
    }
}

fn write_default(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty() && !d.is_dir()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("Fail to create directory `{}`", dir.display()))?;
    }
    fs::write(path, DEFAULT_CONFIG)
        .with_context(|| format!("Fail to write file `{}`", path.display()))
}

pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_project_dir()?.config_dir().join("config.yaml"))
}

pub fn get_project_dir() -> Result<ProjectDirs> {
    ProjectDirs::from("io.github", "", env!("CARGO_PKG_NAME"))
        .ok_or_else(|| anyhow!("Fail to get project directory"))
}
