/// Presence value attached to every visited region.
pub const PRESENT: u8 = 1;

pub const VISITED_LABEL: &str = "去过";
pub const UNVISITED_LABEL: &str = "未去过";

pub const TITLE_PREFIX: &str = "个人足迹地图";
pub const NATIONAL_MAP_TYPE: &str = "china";

/// Provinces mapped to the cities visited inside them, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TravelRecord {
    entries: Vec<(String, Vec<String>)>,
}

impl TravelRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a province. Returns `false` and leaves the record untouched
    /// when the province is already present.
    pub fn insert(&mut self, province: impl Into<String>, cities: Vec<String>) -> bool {
        let province = province.into();
        if self.entries.iter().any(|(name, _)| *name == province) {
            return false;
        }
        self.entries.push((province, cities));
        true
    }

    pub fn provinces(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn cities(&self, province: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(name, _)| name == province)
            .map(|(_, cities)| cities.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, cities)| (name.as_str(), cities.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Region name to presence value. Keys keep the order they were first seen in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresenceMap {
    entries: Vec<(String, u8)>,
}

impl PresenceMap {
    pub(crate) fn from_entries(entries: Vec<(String, u8)>) -> Self {
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<u8> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| *value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn data_pairs(&self) -> &[(String, u8)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One bucket of a piecewise legend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualPiece {
    pub min: u8,
    pub max: u8,
    pub label: String,
    pub color: String,
}

impl VisualPiece {
    pub fn exact(value: u8, label: &str, color: &str) -> Self {
        Self {
            min: value,
            max: value,
            label: label.to_string(),
            color: color.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    pub title: String,
    pub series_name: String,
    pub map_type: String,
    pub data: PresenceMap,
    pub output_path: String,
    pub pieces: Vec<VisualPiece>,
    pub roam: bool,
}

/// Result of asking for a single province map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProvinceOutcome {
    Rendered { province: String, output_path: String },
    Skipped { province: String },
}

/// A loaded record together with where `Pipeline::load` writes its maps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapPlan {
    pub record: TravelRecord,
    pub provinces_dir: String,
    pub national_output: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub rendered_provinces: Vec<String>,
    pub skipped_provinces: Vec<String>,
    pub national_output: String,
}

impl RunSummary {
    pub fn new(outcomes: Vec<ProvinceOutcome>, national_output: String) -> Self {
        let mut summary = Self {
            national_output,
            ..Self::default()
        };
        for outcome in outcomes {
            match outcome {
                ProvinceOutcome::Rendered { province, .. } => {
                    summary.rendered_provinces.push(province)
                }
                ProvinceOutcome::Skipped { province } => summary.skipped_provinces.push(province),
            }
        }
        summary
    }
}
