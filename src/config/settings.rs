use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::config::defaults::DefaultConfig;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// 忽略配置
    #[serde(default)]
    pub ignore: IgnoreConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IgnoreConfig {
    /// 忽略的目录名
    #[serde(default = "DefaultConfig::default_ignore_dirs")]
    pub directories: HashSet<String>,

    /// 忽略的文件名
    #[serde(default = "DefaultConfig::default_ignore_files")]
    pub files: HashSet<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ignore: IgnoreConfig::default(),
        }
    }
}

impl Default for IgnoreConfig {
    fn default() -> Self {
        Self {
            directories: DefaultConfig::default_ignore_dirs(),
            files: DefaultConfig::default_ignore_files(),
        }
    }
}

impl Config {
    /// 从文件加载配置
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }
}
