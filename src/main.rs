//! ERP Shell - desktop ERP workspace with supplier management and company settings.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use eframe::egui;
use erp_shell as app;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use app::config::{AppConfig, ConfigLoadResult};
use app::db;
use app::menu::{Menu, default_erp_menu};
use app::ui::App;

/// Desktop ERP workspace.
#[derive(Parser)]
#[command(name = "erp-shell", version)]
struct Cli {
    /// Use config.toml from current directory (dev mode)
    #[arg(long)]
    dev: bool,

    /// Path to config file
    #[arg(long, value_name = "PATH", conflicts_with = "dev")]
    config: Option<PathBuf>,

    /// Start without connecting to the database
    #[arg(long)]
    offline: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered log lines are flushed on exit.
    let _log_guard = init_logging();

    tracing::info!("ERP Shell starting...");

    let config_path = if cli.dev {
        tracing::info!("Dev mode: loading config from current directory");
        PathBuf::from("config.toml")
    } else {
        cli.config.clone().unwrap_or_else(AppConfig::default_path)
    };
    tracing::info!("Config path: {:?}", config_path);

    let config = match AppConfig::try_load(&config_path) {
        ConfigLoadResult::Loaded(config) => {
            tracing::info!("Config loaded successfully");
            config
        }
        ConfigLoadResult::Missing => {
            tracing::info!("Config missing, writing defaults");
            let config = AppConfig::default();
            if let Err(e) = config.save(&config_path) {
                tracing::warn!("Could not write default config: {}", e);
            }
            config
        }
        ConfigLoadResult::Invalid(e) => {
            tracing::warn!("Config invalid, using defaults: {}", e);
            AppConfig::default()
        }
    }
    .with_env_overrides();

    let menu = load_menu(&config);

    let rt = tokio::runtime::Runtime::new().context("Failed to create tokio runtime")?;

    let (pool, database_error) = if cli.offline {
        tracing::info!("Offline mode requested");
        (None, None)
    } else {
        match rt.block_on(connect_database(&config)) {
            Ok(pool) => (Some(pool), None),
            Err(e) => {
                tracing::error!("Database bootstrap failed: {}", e);
                (None, Some(e.to_string()))
            }
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("ERP Shell")
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([900.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "ERP Shell",
        options,
        Box::new(move |cc| {
            egui_phosphor_fonts(&cc.egui_ctx);
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(App::new(rt, pool, database_error, config, config_path, menu)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("UI error: {e}"))
}

/// Stdout plus a daily rolling log file.
fn init_logging() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter).with(fmt::layer());

    let log_dir = AppConfig::log_dir();
    match std::fs::create_dir_all(&log_dir) {
        Ok(()) => {
            let appender = tracing_appender::rolling::daily(&log_dir, "erp-shell.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            registry.with(fmt::layer().with_ansi(false).with_writer(writer)).init();
            Some(guard)
        }
        Err(e) => {
            registry.init();
            tracing::warn!("File logging disabled ({}): {}", log_dir.display(), e);
            None
        }
    }
}

/// Built-in menu unless config names a menu file that parses.
fn load_menu(config: &AppConfig) -> Menu {
    if config.ui.menu_file.is_empty() {
        return default_erp_menu();
    }

    let loaded = std::fs::read_to_string(&config.ui.menu_file)
        .map_err(|e| e.to_string())
        .and_then(|content| Menu::from_toml_str(&content).map_err(|e| e.to_string()));

    match loaded {
        Ok(menu) => {
            tracing::info!("Menu loaded from {}", config.ui.menu_file);
            menu
        }
        Err(e) => {
            tracing::warn!("Menu file {} rejected, using built-in menu: {}", config.ui.menu_file, e);
            default_erp_menu()
        }
    }
}

async fn connect_database(config: &AppConfig) -> app::Result<sea_orm::DatabaseConnection> {
    let conn = db::bootstrap(&config.database).await?;

    if let Ok(version) = db::get_version(&conn).await {
        tracing::info!("PostgreSQL: {}", version);
    }

    if let Ok(counts) = db::get_table_counts(&conn).await {
        tracing::info!(
            "Tables: {} suppliers, {} settings rows",
            counts.suppliers,
            counts.settings_rows
        );
    }

    Ok(conn)
}

fn egui_phosphor_fonts(ctx: &egui::Context) {
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
    ctx.set_fonts(fonts);
}
