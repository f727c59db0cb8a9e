//! HTML map documents backed by ECharts.
//!
//! The generated file loads the ECharts runtime and the geometry script for
//! the requested region from the configured assets host, then hands the chart
//! option to `echarts.init`. No randomness goes into the document, so the
//! same request always produces the same bytes.

use crate::adapters::regions;
use crate::config::toml_config::RenderSettings;
use crate::core::{MapRenderer, RenderRequest};
use crate::utils::error::{FootprintError, Result};
use serde_json::{json, Value};

const MAP_TEMPLATE: &str = include_str!("templates/map.html");

const CHART_ID: &str = "footprint_map";

pub struct EChartsRenderer {
    settings: RenderSettings,
}

impl EChartsRenderer {
    pub fn new(settings: RenderSettings) -> Self {
        Self { settings }
    }

    /// The ECharts option object for `request`.
    pub fn chart_option(&self, request: &RenderRequest) -> Value {
        let data: Vec<Value> = request
            .data
            .data_pairs()
            .iter()
            .map(|(name, value)| json!({ "name": name, "value": value }))
            .collect();

        let pieces: Vec<Value> = request
            .pieces
            .iter()
            .map(|piece| {
                json!({
                    "min": piece.min,
                    "max": piece.max,
                    "label": piece.label,
                    "color": piece.color,
                })
            })
            .collect();

        json!({
            "title": [{ "text": request.title }],
            "tooltip": { "show": true, "trigger": "item" },
            "legend": [{ "data": [request.series_name] }],
            "visualMap": {
                "show": true,
                "type": "piecewise",
                "min": 0,
                "max": 1,
                "pieces": pieces,
            },
            "series": [{
                "type": "map",
                "name": request.series_name,
                "map": request.map_type,
                "roam": request.roam,
                "data": data,
            }],
        })
    }

    fn script_tags(&self, geometry: &str) -> String {
        let base = self.settings.assets_base();
        [
            format!("{}echarts.min.js", base),
            format!("{}maps/{}.js", base, geometry),
        ]
        .iter()
        .map(|src| {
            format!(
                "    <script type=\"text/javascript\" src=\"{}\"></script>",
                escape_html(src)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
    }
}

impl MapRenderer for EChartsRenderer {
    fn render(&self, request: &RenderRequest) -> Result<String> {
        let geometry = regions::geometry_script(&request.map_type).ok_or_else(|| {
            FootprintError::UnknownMapType {
                map_type: request.map_type.clone(),
            }
        })?;

        let option = serde_json::to_string_pretty(&self.chart_option(request))?;

        let output = MAP_TEMPLATE
            .replace("{{title}}", &escape_html(&request.title))
            .replace("{{scripts}}", &self.script_tags(geometry))
            .replace("{{chart_id}}", CHART_ID)
            .replace("{{width}}", &escape_html(&self.settings.chart.width))
            .replace("{{height}}", &escape_html(&self.settings.chart.height))
            // last: city names inside the JSON must not be re-scanned for placeholders
            .replace("{{option}}", &escape_script(&option));

        Ok(output)
    }

    fn file_extension(&self) -> &str {
        "html"
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Keeps JSON from closing the surrounding `<script>` element.
fn escape_script(json: &str) -> String {
    json.replace("</", "<\\/")
}
