use std::path::PathBuf;

use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use techline_core::{EngineConfig, TimelineEngine};
use techline_platform::Result;
use techline_ui::{run, UiOptions};

const CONFIG_ENV: &str = "TECHLINE_CONFIG";
const FONT_ENV: &str = "TECHLINE_FONT";

fn main() {
    // Init logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    info!("Techline starting");
    if let Err(e) = start() {
        eprintln!("Techline error: {e}");
        std::process::exit(1);
    }
}

fn start() -> Result<()> {
    let config = match std::env::var_os(CONFIG_ENV) {
        Some(path) => {
            info!("loading config from {}", PathBuf::from(&path).display());
            EngineConfig::load(path)?
        }
        None => EngineConfig::illustrated(),
    };
    let engine = TimelineEngine::new(config)?;
    let options = UiOptions {
        font_path: std::env::var_os(FONT_ENV).map(PathBuf::from),
        ..UiOptions::default()
    };
    run(engine, options)
}
