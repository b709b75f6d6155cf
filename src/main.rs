#![allow(non_snake_case)]

mod app;
mod audio;
mod components;
pub mod context;
mod theme;

use std::sync::{Arc, OnceLock};

use beeper_core::config::{DEFAULT_ENDPOINT, DEFAULT_MODEL};
use beeper_core::{RewriteConfig, Rewriter, Viewport};
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;

use crate::context::AppRewriter;

/// Global rewriter, built from command line / environment before launch
static REWRITER: OnceLock<Arc<AppRewriter>> = OnceLock::new();

/// Initial window size, also the desk size until it is measured
static INITIAL_VIEWPORT: OnceLock<Viewport> = OnceLock::new();

/// Get the rewriter (unconfigured if launch never set one)
pub fn get_rewriter() -> Arc<AppRewriter> {
    REWRITER
        .get_or_init(|| Arc::new(Rewriter::unconfigured()))
        .clone()
}

pub fn get_initial_viewport() -> Viewport {
    INITIAL_VIEWPORT.get().copied().unwrap_or_default()
}

/// Beeper - a 90s alphanumeric pager on your desktop
#[derive(Parser, Debug)]
#[command(name = "beeper-desktop")]
#[command(about = "Beeper - type, rephrase into pager slang, and pin messages to a virtual desk")]
struct Args {
    /// Gemini API key; without it rephrase only uppercases
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Gemini model used for rephrasing
    #[arg(long, default_value = DEFAULT_MODEL)]
    model: String,

    /// Gemini API base URL
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 800.0)]
    height: f64,

    /// Log filter (overrides RUST_LOG)
    #[arg(long)]
    log: Option<String>,
}

fn init_tracing(filter: Option<&str>) {
    let filter = match filter {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("beeper_desktop=info,beeper_core=info")),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() {
    let args = Args::parse();
    init_tracing(args.log.as_deref());

    // Older deployments only set API_KEY
    let api_key = args.api_key.or_else(|| std::env::var("API_KEY").ok());

    let config = RewriteConfig::default()
        .with_api_key(api_key)
        .with_model(args.model)
        .with_endpoint(args.endpoint);
    let _ = REWRITER.set(Arc::new(Rewriter::from_config(&config)));

    let viewport = Viewport::new(args.width, args.height);
    let _ = INITIAL_VIEWPORT.set(viewport);

    tracing::info!(
        rewrite = config.is_configured(),
        model = %config.model,
        "Starting beeper ({}x{})",
        viewport.width,
        viewport.height
    );

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("BEEPER.FIX")
            .with_inner_size(dioxus::desktop::LogicalSize::new(
                viewport.width,
                viewport.height,
            ))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
