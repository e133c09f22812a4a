//! screen-pager - swipeable screen pager for terminal dashboards

use anyhow::Result;
use clap::{Parser as ClapParser, Subcommand};
use screen_pager::config::{self, Config};
use screen_pager::core::{AutoRotateTick, HostNotification, Notification, PagingController};
use screen_pager::dashboard::Dashboard;
use screen_pager::frontend::tui::{input::key_to_notification, MouseAction};
use screen_pager::frontend::{Frontend, FrontendEvent, Scene, TuiFrontend};
use screen_pager::validator::{self, IssueKind};
use std::path::PathBuf;
use std::time::Instant;

#[derive(ClapParser)]
#[command(name = "screen-pager")]
#[command(about = "Swipeable screen pager for terminal dashboards", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Profile name for loading profile-specific settings
    #[arg(short, long)]
    profile: Option<String>,

    /// Custom data directory (default: ~/.screen-pager)
    /// Can also be set via SCREEN_PAGER_DIR environment variable
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Rotate screens automatically regardless of config
    #[arg(long)]
    auto_rotate: bool,

    /// Log configuration and notifications
    #[arg(long)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate screen configuration
    ValidateConfig {
        /// Config file to validate
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // TUI apps can't log to stdout, so we write to a file
    // (use RUST_LOG env var to control level, e.g. RUST_LOG=debug)
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("screen-pager.log")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false) // No color codes in log file
        .init();

    let cli = Cli::parse();

    // Set custom data directory if specified (via CLI or environment variable)
    if let Some(data_dir) = &cli.data_dir {
        std::env::set_var(config::DIR_ENV_VAR, data_dir);
        tracing::info!("Using custom data directory: {:?}", data_dir);
    } else if let Ok(env_dir) = std::env::var(config::DIR_ENV_VAR) {
        tracing::info!("Using data directory from {}: {}", config::DIR_ENV_VAR, env_dir);
    }

    if let Some(command) = cli.command {
        match command {
            Commands::ValidateConfig { file } => {
                let path = match file {
                    Some(path) => path,
                    None => Config::config_path(cli.profile.as_deref())?,
                };
                println!("Validating config file: {:?}", path);
                validate_config(&path);
                return Ok(());
            }
        }
    }

    // Load configuration
    let profile = cli.profile.as_deref();
    let mut config = if let Some(config_path) = &cli.config {
        Config::load_from_path(config_path, profile)?
    } else {
        Config::load_with_options(profile)?
    };
    if cli.auto_rotate {
        config.pager.auto_rotate = true;
    }
    if cli.debug {
        config.pager.debug = true;
    }

    // Use tokio runtime for the auto-rotation timer
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run_tui(config))
}

/// Print the resolved screens and validation report; exits 1 on errors
fn validate_config(path: &std::path::Path) {
    let (config, result) = match validator::validate_config_path(path) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("✗ Failed to load config: {:#}", e);
            std::process::exit(1);
        }
    };

    println!("✓ Config loaded successfully");
    println!(
        "  {} screens, {} modules defined",
        config.pager.screens.len(),
        config.modules.len()
    );
    for (i, screen) in config.pager.screens.iter().enumerate() {
        println!("  [{}] {}: {}", i, screen.name, screen.members.join(", "));
    }

    let mut errors = 0;
    let mut warnings = 0;
    for issue in &result.issues {
        match issue.kind {
            IssueKind::Error => {
                eprintln!("✗ Error: {}: {}", issue.subject, issue.message);
                errors += 1;
            }
            IssueKind::Warning => {
                eprintln!("⚠ Warning: {}: {}", issue.subject, issue.message);
                warnings += 1;
            }
        }
    }

    if errors == 0 && warnings == 0 {
        println!("✓ Config is valid with no issues");
    } else {
        if errors > 0 {
            eprintln!("\n✗ Found {} error(s)", errors);
        }
        if warnings > 0 {
            println!("⚠ Found {} warning(s)", warnings);
        }
    }

    if errors > 0 {
        std::process::exit(1);
    }
}

/// Terminal host loop
async fn run_tui(config: Config) -> Result<()> {
    use tokio::sync::mpsc;

    let (tick_tx, mut tick_rx) = mpsc::unbounded_channel::<AutoRotateTick>();
    let (bus_tx, mut bus_rx) = mpsc::unbounded_channel::<HostNotification>();

    let dashboard = Dashboard::from_config(&config);
    let mut frontend = TuiFrontend::new(&config.ui, config.pager.show_indicators)?;
    let mut pager = PagingController::new(config.pager.clone(), dashboard, bus_tx, tick_tx);

    // Host startup sequence: view mounted, then every module running
    pager.set_viewport(frontend.viewport());
    pager.handle_notification(Notification::ViewReady);
    pager.handle_notification(Notification::AllModulesStarted);

    let mut running = true;
    while running {
        let events = frontend.poll_events()?;

        for event in events {
            if event.is_quit_key() {
                running = false;
                break;
            }

            match event {
                FrontendEvent::Key { code, .. } => {
                    if pager.handle_key(code) {
                        continue;
                    }
                    if let Some(notification) = key_to_notification(code) {
                        pager.handle_notification(notification);
                    }
                }
                FrontendEvent::Mouse { kind, x, y, .. } => {
                    match frontend.translate_mouse(kind, x, y, Instant::now()) {
                        Some(MouseAction::Pointer(pointer)) => {
                            pager.handle_pointer(pointer);
                        }
                        Some(MouseAction::Indicator(index)) => {
                            pager.click_indicator(index);
                        }
                        None => {}
                    }
                }
                FrontendEvent::Resize { width, height } => {
                    tracing::debug!("Terminal resized to {}x{}", width, height);
                    pager.set_viewport(frontend.viewport());
                    if !pager.is_initialized() {
                        pager.handle_notification(Notification::ViewReady);
                        pager.handle_notification(Notification::AllModulesStarted);
                    }
                }
                FrontendEvent::FocusLost => pager.suspend(),
                FrontendEvent::FocusGained => pager.resume(),
                FrontendEvent::Quit => running = false,
            }
        }

        while let Ok(tick) = tick_rx.try_recv() {
            pager.on_auto_rotate_tick(tick);
        }

        // Outbound notifications would go to other host modules; this host only logs them
        while let Ok(notification) = bus_rx.try_recv() {
            match serde_json::to_string(&notification) {
                Ok(json) => tracing::info!("Host notification: {}", json),
                Err(e) => tracing::warn!("Failed to encode notification: {}", e),
            }
        }

        pager.modules_mut().settle(Instant::now());
        let frame = pager.frame();
        frontend.render(&Scene {
            frame: frame.as_ref(),
            dashboard: pager.modules(),
        })?;
    }

    frontend.cleanup()?;
    Ok(())
}
