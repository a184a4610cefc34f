//! Entry point for the portfolio page.

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;

use folio_core::SiteConfig;
use folio_logging::FolioSubscriberBuilder;
use folio_site::cli::Args;
use folio_site::components::App;

/// Global storage for the validated configuration.
static SITE_CONFIG: OnceLock<SiteConfig> = OnceLock::new();

fn main() {
    let args = Args::parse();

    // Keep the guard alive for the whole run when logging to a file
    let _log_guard = FolioSubscriberBuilder::new()
        .with_config(args.log_config())
        .init();

    let config = match args.site_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            eprintln!("folio: {}", e);
            std::process::exit(2);
        }
    };

    tracing::info!(
        layout = ?config.layout,
        data_dir = %config.data_dir.display(),
        ticker = config.ticker.enabled,
        "Starting folio"
    );

    let window = WindowBuilder::new()
        .with_title(&config.window.title)
        .with_inner_size(LogicalSize::new(config.window.width, config.window.height));

    SITE_CONFIG.set(config).ok();

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(window)
                .with_custom_head(folio_site::custom_head()),
        )
        .launch(RootApp);
}

/// Root component; hands the global configuration to the app.
#[component]
fn RootApp() -> Element {
    let config = use_hook(|| SITE_CONFIG.get().cloned().unwrap_or_default());

    use_drop(|| {
        tracing::info!("Shutting down folio");
    });

    rsx! {
        App { config }
    }
}
