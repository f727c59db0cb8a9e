use anyhow::Context;
use clap::Parser;
use travel_footprint::utils::{logger, validation::Validate};
use travel_footprint::{
    CliConfig, EChartsRenderer, FootprintEngine, FootprintPipeline, LocalStorage, RenderSettings,
};

fn load_settings(path: Option<&str>) -> anyhow::Result<RenderSettings> {
    let settings = match path {
        Some(path) => RenderSettings::from_file(path)
            .with_context(|| format!("failed to load render settings from '{}'", path))?,
        None => RenderSettings::default(),
    };
    settings.validate().context("invalid render settings")?;
    Ok(settings)
}

fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting travel-footprint");
    tracing::debug!("CLI config: {:?}", cli);

    let config = cli.run_config();
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let settings = match load_settings(cli.settings.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ {:#}", e);
            eprintln!("❌ {:#}", e);
            std::process::exit(1);
        }
    };

    let storage = LocalStorage::default();
    let renderer = EChartsRenderer::new(settings.clone());
    let pipeline = FootprintPipeline::new(storage, renderer, config, settings);
    let engine = FootprintEngine::new(pipeline);

    match engine.run() {
        Ok(summary) => {
            println!("✅ 生成 {} 个省份足迹地图", summary.rendered_provinces.len());
            println!("✅ 全国足迹地图生成成功: {}", summary.national_output);
        }
        Err(e) => {
            tracing::error!(
                "❌ Rendering failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            std::process::exit(e.exit_code());
        }
    }
}
