use crate::core::{Pipeline, RunSummary};
use crate::utils::error::Result;

pub struct FootprintEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> FootprintEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<RunSummary> {
        tracing::info!("Starting footprint rendering...");

        tracing::info!("Loading travel record...");
        let record = self.pipeline.extract()?;
        tracing::info!("Loaded {} provinces", record.len());

        let plan = self.pipeline.transform(record)?;

        tracing::info!("Rendering maps...");
        let summary = self.pipeline.load(plan)?;
        tracing::info!(
            "Rendered {} province maps, skipped {}",
            summary.rendered_provinces.len(),
            summary.skipped_provinces.len()
        );

        Ok(summary)
    }
}
