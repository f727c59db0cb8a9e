pub mod cli;
pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

pub const DEFAULT_CONFIG_PATH: &str = "travel_config.yml";
pub const DEFAULT_NATIONAL_OUTPUT: &str = "全国.html";
pub const DEFAULT_PROVINCES_DIR: &str = "provinces";

/// Input and output locations for a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub config_path: String,
    pub national_output: String,
    pub provinces_dir: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            config_path: DEFAULT_CONFIG_PATH.to_string(),
            national_output: DEFAULT_NATIONAL_OUTPUT.to_string(),
            provinces_dir: DEFAULT_PROVINCES_DIR.to_string(),
        }
    }
}

impl ConfigProvider for RunConfig {
    fn config_path(&self) -> &str {
        &self.config_path
    }

    fn national_output(&self) -> &str {
        &self.national_output
    }

    fn provinces_dir(&self) -> &str {
        &self.provinces_dir
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        validate_path("config_path", &self.config_path)?;
        validate_path("national_output", &self.national_output)?;
        validate_path("provinces_dir", &self.provinces_dir)?;
        Ok(())
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "travel-footprint")]
#[command(about = "Render visited provinces and cities as interactive maps")]
pub struct CliConfig {
    /// YAML file mapping provinces to visited cities
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,

    #[arg(long, default_value = DEFAULT_NATIONAL_OUTPUT)]
    pub national_output: String,

    #[arg(long, default_value = DEFAULT_PROVINCES_DIR)]
    pub provinces_dir: String,

    /// Optional TOML file with chart size, colors and assets host
    #[arg(long)]
    pub settings: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn run_config(&self) -> RunConfig {
        RunConfig {
            config_path: self.config.clone(),
            national_output: self.national_output.clone(),
            provinces_dir: self.provinces_dir.clone(),
        }
    }
}
