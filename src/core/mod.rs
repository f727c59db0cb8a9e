pub mod engine;
pub mod loader;
pub mod pipeline;
pub mod presence;
pub mod requests;

pub use crate::domain::model::{
    MapPlan, PresenceMap, ProvinceOutcome, RenderRequest, RunSummary, TravelRecord, VisualPiece,
};
pub use crate::domain::ports::{ConfigProvider, MapRenderer, Pipeline, Storage};
pub use crate::utils::error::Result;
