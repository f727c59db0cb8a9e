use crate::config::toml_config::RenderSettings;
use crate::core::loader::load_travel_record;
use crate::core::requests::{national_request, province_output_path, province_request};
use crate::core::{
    ConfigProvider, MapPlan, MapRenderer, Pipeline, ProvinceOutcome, RenderRequest, RunSummary,
    Storage, TravelRecord,
};
use crate::utils::error::Result;

pub struct FootprintPipeline<S: Storage, R: MapRenderer, C: ConfigProvider> {
    storage: S,
    renderer: R,
    config: C,
    settings: RenderSettings,
}

impl<S: Storage, R: MapRenderer, C: ConfigProvider> FootprintPipeline<S, R, C> {
    pub fn new(storage: S, renderer: R, config: C, settings: RenderSettings) -> Self {
        Self {
            storage,
            renderer,
            config,
            settings,
        }
    }

    /// Renders the national map and returns the path written.
    pub fn render_national(&self, record: &TravelRecord, output_path: &str) -> Result<String> {
        let request = national_request(record, output_path, &self.settings);
        self.execute(&request)
    }

    /// Renders one province map into `output_dir`, or skips it when `cities` is empty.
    pub fn render_province(
        &self,
        province: &str,
        cities: &[String],
        output_dir: &str,
    ) -> Result<ProvinceOutcome> {
        let output_path =
            province_output_path(output_dir, province, self.renderer.file_extension());

        match province_request(province, cities, &output_path, &self.settings) {
            Some(request) => {
                let output_path = self.execute(&request)?;
                Ok(ProvinceOutcome::Rendered {
                    province: province.to_string(),
                    output_path,
                })
            }
            None => {
                tracing::warn!(
                    "⏭️ 省份 {} 的城市列表为空，跳过该省份的地图生成",
                    province
                );
                Ok(ProvinceOutcome::Skipped {
                    province: province.to_string(),
                })
            }
        }
    }

    /// Renders every province in document order. Stops at the first failure.
    pub fn generate_province_maps(
        &self,
        record: &TravelRecord,
        output_dir: &str,
    ) -> Result<Vec<ProvinceOutcome>> {
        self.storage.create_dir(output_dir)?;

        record
            .iter()
            .map(|(province, cities)| self.render_province(province, cities, output_dir))
            .collect()
    }

    fn execute(&self, request: &RenderRequest) -> Result<String> {
        tracing::debug!(
            "Rendering '{}' ({} regions) as map type '{}'",
            request.title,
            request.data.len(),
            request.map_type
        );
        let document = self.renderer.render(request)?;

        tracing::debug!(
            "Writing {} bytes to {}",
            document.len(),
            request.output_path
        );
        self.storage
            .write_file(&request.output_path, document.as_bytes())?;

        tracing::info!("✅ {} 生成成功: {}", request.title, request.output_path);
        Ok(request.output_path.clone())
    }
}

impl<S: Storage, R: MapRenderer, C: ConfigProvider> Pipeline for FootprintPipeline<S, R, C> {
    fn extract(&self) -> Result<TravelRecord> {
        tracing::debug!("Loading travel record from {}", self.config.config_path());
        load_travel_record(self.config.config_path())
    }

    fn transform(&self, record: TravelRecord) -> Result<MapPlan> {
        let with_cities = record.iter().filter(|(_, cities)| !cities.is_empty()).count();
        tracing::debug!(
            "{} of {} provinces have cities to map",
            with_cities,
            record.len()
        );

        Ok(MapPlan {
            record,
            provinces_dir: self.config.provinces_dir().to_string(),
            national_output: self.config.national_output().to_string(),
        })
    }

    /// Province maps first, in document order, then the national map.
    fn load(&self, plan: MapPlan) -> Result<RunSummary> {
        let outcomes = self.generate_province_maps(&plan.record, &plan.provinces_dir)?;
        let national_output = self.render_national(&plan.record, &plan.national_output)?;

        Ok(RunSummary::new(outcomes, national_output))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RunConfig;
    use crate::utils::error::FootprintError;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
        dirs: Arc<Mutex<Vec<String>>>,
    }

    impl MockStorage {
        fn file_names(&self) -> Vec<String> {
            let mut names: Vec<String> = self.files.lock().unwrap().keys().cloned().collect();
            names.sort();
            names
        }

        fn has_file(&self, path: &str) -> bool {
            self.files.lock().unwrap().contains_key(path)
        }
    }

    impl Storage for MockStorage {
        fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            self.files
                .lock()
                .unwrap()
                .insert(path.to_string(), data.to_vec());
            Ok(())
        }

        fn create_dir(&self, path: &str) -> Result<()> {
            self.dirs.lock().unwrap().push(path.to_string());
            Ok(())
        }
    }

    /// Records every request; rejects map types listed in `unknown`.
    #[derive(Clone, Default)]
    struct RecordingRenderer {
        requests: Arc<Mutex<Vec<RenderRequest>>>,
        unknown: Vec<String>,
    }

    impl RecordingRenderer {
        fn rejecting(map_type: &str) -> Self {
            Self {
                unknown: vec![map_type.to_string()],
                ..Self::default()
            }
        }

        fn requests(&self) -> Vec<RenderRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl MapRenderer for RecordingRenderer {
        fn render(&self, request: &RenderRequest) -> Result<String> {
            if self.unknown.contains(&request.map_type) {
                return Err(FootprintError::UnknownMapType {
                    map_type: request.map_type.clone(),
                });
            }
            self.requests.lock().unwrap().push(request.clone());
            Ok(format!("<map {}>", request.map_type))
        }

        fn file_extension(&self) -> &str {
            "html"
        }
    }

    fn config() -> RunConfig {
        RunConfig {
            config_path: "unused.yml".to_string(),
            national_output: "全国.html".to_string(),
            provinces_dir: "provinces".to_string(),
        }
    }

    fn scenario_a() -> TravelRecord {
        let mut record = TravelRecord::new();
        record.insert("广东", vec!["广州".to_string(), "深圳".to_string()]);
        record.insert("西藏", vec![]);
        record
    }

    fn pipeline(
        storage: &MockStorage,
        renderer: &RecordingRenderer,
    ) -> FootprintPipeline<MockStorage, RecordingRenderer, RunConfig> {
        FootprintPipeline::new(
            storage.clone(),
            renderer.clone(),
            config(),
            RenderSettings::default(),
        )
    }

    #[test]
    fn test_render_province_skips_empty_city_list() {
        let storage = MockStorage::default();
        let renderer = RecordingRenderer::default();
        let pipeline = pipeline(&storage, &renderer);

        let outcome = pipeline.render_province("西藏", &[], "provinces").unwrap();

        assert_eq!(
            outcome,
            ProvinceOutcome::Skipped {
                province: "西藏".to_string()
            }
        );
        assert!(storage.file_names().is_empty());
        assert!(renderer.requests().is_empty());
    }

    #[test]
    fn test_render_province_writes_named_file() {
        let storage = MockStorage::default();
        let renderer = RecordingRenderer::default();
        let pipeline = pipeline(&storage, &renderer);

        let cities = vec!["广州".to_string(), "深圳".to_string()];
        let outcome = pipeline.render_province("广东", &cities, "out").unwrap();

        let expected = province_output_path("out", "广东", "html");
        assert_eq!(
            outcome,
            ProvinceOutcome::Rendered {
                province: "广东".to_string(),
                output_path: expected.clone(),
            }
        );
        assert!(storage.has_file(&expected));

        let requests = renderer.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].map_type, "广东");
        assert_eq!(requests[0].data.len(), 2);
    }

    #[test]
    fn test_render_national_marks_every_province() {
        let storage = MockStorage::default();
        let renderer = RecordingRenderer::default();
        let pipeline = pipeline(&storage, &renderer);

        let path = pipeline.render_national(&scenario_a(), "全国.html").unwrap();

        assert_eq!(path, "全国.html");
        let request = &renderer.requests()[0];
        assert_eq!(request.map_type, "china");
        let names: Vec<&str> = request.data.names().collect();
        assert_eq!(names, vec!["广东", "西藏"]);
    }

    #[test]
    fn test_generate_province_maps_creates_dir_and_keeps_order() {
        let storage = MockStorage::default();
        let renderer = RecordingRenderer::default();
        let pipeline = pipeline(&storage, &renderer);

        let mut record = scenario_a();
        record.insert("云南", vec!["昆明".to_string()]);

        let outcomes = pipeline.generate_province_maps(&record, "provinces").unwrap();

        assert_eq!(outcomes.len(), 3);
        assert!(matches!(outcomes[0], ProvinceOutcome::Rendered { .. }));
        assert!(matches!(outcomes[1], ProvinceOutcome::Skipped { .. }));
        assert!(matches!(outcomes[2], ProvinceOutcome::Rendered { .. }));
        assert_eq!(*storage.dirs.lock().unwrap(), vec!["provinces".to_string()]);

        let rendered: Vec<String> = renderer
            .requests()
            .into_iter()
            .map(|r| r.map_type)
            .collect();
        assert_eq!(rendered, vec!["广东".to_string(), "云南".to_string()]);
    }

    #[test]
    fn test_transform_resolves_output_locations() {
        let storage = MockStorage::default();
        let renderer = RecordingRenderer::default();
        let pipeline = pipeline(&storage, &renderer);

        let plan = pipeline.transform(scenario_a()).unwrap();

        assert_eq!(plan.record, scenario_a());
        assert_eq!(plan.provinces_dir, "provinces");
        assert_eq!(plan.national_output, "全国.html");
        assert!(storage.file_names().is_empty());
    }

    #[test]
    fn test_load_renders_provinces_then_national() {
        let storage = MockStorage::default();
        let renderer = RecordingRenderer::default();
        let pipeline = pipeline(&storage, &renderer);

        let mut record = scenario_a();
        record.insert("云南", vec!["昆明".to_string()]);

        let plan = pipeline.transform(record).unwrap();
        let summary = pipeline.load(plan).unwrap();

        assert_eq!(
            summary.rendered_provinces,
            vec!["广东".to_string(), "云南".to_string()]
        );
        assert_eq!(summary.skipped_provinces, vec!["西藏".to_string()]);
        assert_eq!(summary.national_output, "全国.html");
        assert_eq!(*storage.dirs.lock().unwrap(), vec!["provinces".to_string()]);
        assert_eq!(storage.file_names().len(), 3);
        assert!(!storage.has_file(&province_output_path("provinces", "西藏", "html")));

        let rendered: Vec<String> = renderer
            .requests()
            .into_iter()
            .map(|r| r.map_type)
            .collect();
        assert_eq!(
            rendered,
            vec!["广东".to_string(), "云南".to_string(), "china".to_string()]
        );
    }

    #[test]
    fn test_empty_record_still_renders_national() {
        let storage = MockStorage::default();
        let renderer = RecordingRenderer::default();
        let pipeline = pipeline(&storage, &renderer);

        let plan = pipeline.transform(TravelRecord::new()).unwrap();
        let summary = pipeline.load(plan).unwrap();

        assert!(summary.rendered_provinces.is_empty());
        assert_eq!(storage.file_names(), vec!["全国.html".to_string()]);
        assert!(renderer.requests()[0].data.is_empty());
    }

    #[test]
    fn test_unknown_map_type_aborts_remaining_batch() {
        let storage = MockStorage::default();
        let renderer = RecordingRenderer::rejecting("火星");
        let pipeline = pipeline(&storage, &renderer);

        let mut record = TravelRecord::new();
        record.insert("广东", vec!["广州".to_string()]);
        record.insert("火星", vec!["奥林匹斯".to_string()]);
        record.insert("云南", vec!["昆明".to_string()]);

        let plan = pipeline.transform(record).unwrap();
        let result = pipeline.load(plan);

        assert!(matches!(
            result,
            Err(FootprintError::UnknownMapType { ref map_type }) if map_type == "火星"
        ));
        assert_eq!(
            storage.file_names(),
            vec![province_output_path("provinces", "广东", "html")]
        );
        assert!(!storage.has_file("全国.html"));
    }
}
