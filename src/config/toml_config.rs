use crate::utils::error::{FootprintError, Result};
use crate::utils::validation::{
    validate_css_size, validate_hex_color, validate_non_empty_string, Validate,
};
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_ASSETS_HOST: &str = "https://assets.pyecharts.org/assets/v5/";

/// Chart styling read from an optional TOML file. Every section and key may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub chart: ChartConfig,
    pub colors: ColorConfig,
    pub assets: AssetsConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub width: String,
    pub height: String,
    pub roam: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: "1200px".to_string(),
            height: "800px".to_string(),
            roam: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    pub visited: String,
    pub unvisited: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            visited: "#4EA397".to_string(),
            unvisited: "#FFFFFF".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    pub host: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_ASSETS_HOST.to_string(),
        }
    }
}

impl RenderSettings {
    /// 從 TOML 檔案載入設定
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| FootprintError::SettingsError {
            message: format!("cannot read '{}': {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析設定
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| FootprintError::SettingsError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${ASSETS_HOST})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| FootprintError::SettingsError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Assets host with exactly one trailing slash.
    pub fn assets_base(&self) -> String {
        format!("{}/", self.assets.host.trim_end_matches('/'))
    }
}

impl Validate for RenderSettings {
    fn validate(&self) -> Result<()> {
        validate_css_size("chart.width", &self.chart.width)?;
        validate_css_size("chart.height", &self.chart.height)?;
        validate_hex_color("colors.visited", &self.colors.visited)?;
        validate_hex_color("colors.unvisited", &self.colors.unvisited)?;
        validate_non_empty_string("assets.host", &self.assets.host)?;
        Ok(())
    }
}
