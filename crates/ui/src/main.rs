use anyhow::Context as _;
use ultratrace_core::SessionConfig;
use ultratrace_ui::{UltraTraceApp, logging};

const CONFIG_ENV: &str = "ULTRATRACE_CONFIG";
const DEBUG_ENV: &str = "ULTRATRACE_DEBUG";

fn load_config() -> anyhow::Result<SessionConfig> {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) => SessionConfig::load(&path)
            .with_context(|| format!("failed to load config from {}", path.to_string_lossy())),
        None => Ok(SessionConfig::default()),
    }
}

fn main() -> anyhow::Result<()> {
    let debug = cfg!(debug_assertions) || std::env::var(DEBUG_ENV).is_ok_and(|v| v == "1");
    logging::init(debug);

    let config = load_config()?;
    tracing::info!(?config, "starting ultratrace");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("ultratrace")
            .with_inner_size([1100.0, 720.0]),
        ..Default::default()
    };
    eframe::run_native(
        "ultratrace",
        options,
        Box::new(move |cc| Ok(Box::new(UltraTraceApp::new(cc, config)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe failed: {e}"))
}
