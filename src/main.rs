use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};

use wishlist::app::settings::{default_log_path, load_settings};
use wishlist::cli::Cli;
use wishlist::{logging, runner, App};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logging is best-effort: a read-only home directory should not stop
    // the UI from starting.
    let _guard = match cli.log_file.clone().or_else(default_log_path) {
        Some(path) => match logging::init_logging(&path) {
            Ok(guard) => Some(guard),
            Err(e) => {
                eprintln!("wishlist: logging disabled: {:#}", e);
                None
            }
        },
        None => None,
    };
    info!(version = env!("CARGO_PKG_VERSION"), "starting");

    let mut settings = load_settings(cli.config.as_deref()).context("failed to load settings")?;
    cli.apply_to(&mut settings);
    if !settings.keys.is_empty() {
        info!(actions = settings.keys.len(), "custom key bindings");
    }

    let app = App::with_settings(&settings).context("invalid settings")?;
    if let Err(e) = runner::run_app(app) {
        warn!("ui exited with error: {:#}", e);
        return Err(e);
    }
    Ok(())
}
