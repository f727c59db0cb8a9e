use crate::domain::model::{MapPlan, RenderRequest, RunSummary, TravelRecord};
use crate::utils::error::Result;

pub trait Storage {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
    fn create_dir(&self, path: &str) -> Result<()>;
}

pub trait ConfigProvider {
    fn config_path(&self) -> &str;
    fn national_output(&self) -> &str;
    fn provinces_dir(&self) -> &str;
}

/// Charting backend: turns a request into a complete document.
pub trait MapRenderer {
    fn render(&self, request: &RenderRequest) -> Result<String>;

    /// Extension used for per-province files, without the leading dot.
    fn file_extension(&self) -> &str;
}

pub trait Pipeline {
    fn extract(&self) -> Result<TravelRecord>;
    fn transform(&self, record: TravelRecord) -> Result<MapPlan>;
    fn load(&self, plan: MapPlan) -> Result<RunSummary>;
}
