// Adapters layer: concrete implementations for external systems (charting backend, map geometry).

pub mod echarts;
pub mod regions;

pub use echarts::EChartsRenderer;
