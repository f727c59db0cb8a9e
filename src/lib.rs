pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::EChartsRenderer;
pub use config::{cli::LocalStorage, toml_config::RenderSettings, RunConfig};
pub use self::core::{engine::FootprintEngine, pipeline::FootprintPipeline};
pub use domain::model::{PresenceMap, ProvinceOutcome, RunSummary, TravelRecord};
pub use utils::error::{FootprintError, Result};
