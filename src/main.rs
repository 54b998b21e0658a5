#![allow(non_snake_case)]

mod app;
mod components;
mod context;
mod pages;
mod theme;

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use folio_core::logging::LoggingBuilder;
use folio_core::FolioConfig;

/// Global configuration, loaded once at startup
static CONFIG: OnceLock<FolioConfig> = OnceLock::new();

/// Get the startup configuration (defaults if startup never stored one)
pub fn get_config() -> FolioConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("folio")
}

/// Folio - portfolio desktop app
#[derive(Parser, Debug)]
#[command(name = "folio-desktop")]
#[command(about = "Folio - portfolio with contact form and developer tools")]
struct Args {
    /// Data directory for config and logs
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Config file (default: <data-dir>/folio.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the simulated contact-form send latency
    #[arg(long)]
    submit_delay_ms: Option<u64>,
}

fn load_config(args: &Args, data_dir: &Path) -> FolioConfig {
    let loaded = match &args.config {
        Some(path) => FolioConfig::load(path),
        None => FolioConfig::load_or_default(data_dir),
    };

    let mut config = loaded.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Falling back to default config");
        FolioConfig::default()
    });
    if let Some(delay) = args.submit_delay_ms {
        config.submit_delay_ms = delay;
    }
    config
}

fn main() {
    let args = Args::parse();

    let data_dir = args.data_dir.clone().unwrap_or_else(default_data_dir);

    if let Err(e) = LoggingBuilder::new(data_dir.join("logs"), "desktop")
        .with_filter("folio=info,folio_core=info,folio_ui=info,warn")
        .init()
    {
        tracing_subscriber::fmt::init();
        tracing::warn!(error = %e, "JSONL logging disabled");
    }

    let config = load_config(&args, &data_dir);

    let _ = CONFIG.set(config);

    tracing::info!("Starting with data dir: {:?}", data_dir);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Folio")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1200.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
