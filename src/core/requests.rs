use crate::config::toml_config::RenderSettings;
use crate::core::presence::to_presence_map;
use crate::core::{RenderRequest, TravelRecord, VisualPiece};
use crate::domain::model::{
    NATIONAL_MAP_TYPE, PRESENT, TITLE_PREFIX, UNVISITED_LABEL, VISITED_LABEL,
};
use std::path::Path;

/// National map: a province counts as visited as soon as it is listed, even with no cities.
pub fn national_request(
    record: &TravelRecord,
    output_path: &str,
    settings: &RenderSettings,
) -> RenderRequest {
    RenderRequest {
        title: TITLE_PREFIX.to_string(),
        series_name: TITLE_PREFIX.to_string(),
        map_type: NATIONAL_MAP_TYPE.to_string(),
        data: to_presence_map(record.provinces()),
        output_path: output_path.to_string(),
        pieces: vec![VisualPiece::exact(
            PRESENT,
            VISITED_LABEL,
            &settings.colors.visited,
        )],
        roam: settings.chart.roam,
    }
}

/// Province map, or `None` when there are no cities to show.
pub fn province_request(
    province: &str,
    cities: &[String],
    output_path: &str,
    settings: &RenderSettings,
) -> Option<RenderRequest> {
    if cities.is_empty() {
        return None;
    }

    let title = format!("{}-{}", TITLE_PREFIX, province);
    Some(RenderRequest {
        series_name: title.clone(),
        title,
        map_type: province.to_string(),
        data: to_presence_map(cities),
        output_path: output_path.to_string(),
        pieces: vec![
            VisualPiece::exact(PRESENT, VISITED_LABEL, &settings.colors.visited),
            VisualPiece::exact(0, UNVISITED_LABEL, &settings.colors.unvisited),
        ],
        roam: settings.chart.roam,
    })
}

/// `<dir>/<province>.<extension>`
pub fn province_output_path(output_dir: &str, province: &str, extension: &str) -> String {
    Path::new(output_dir)
        .join(format!("{}.{}", province, extension))
        .to_string_lossy()
        .into_owned()
}
