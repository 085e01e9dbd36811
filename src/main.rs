//! hourglass - terminal countdown timer.
//!
//! # Configuration
//!
//! See [`hourglass::config`] for environment variable configuration.
//!
//! ```bash
//! # Skip the landing menu and log at debug level
//! HOURGLASS_START_SCREEN=input RUST_LOG=debug hourglass
//! ```

use std::process::ExitCode;
use std::sync::Arc;

use bubbletea_rs::Program;
use tracing::{error, info};

use hourglass::app::{self, App};
use hourglass::config::Config;
use hourglass::logging;
use hourglass::notify::{DesktopNotifier, DisabledNotifier, NotificationSink};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "hourglass exited with an error");
            eprintln!("Error: {err}");
            ExitCode::from(1)
        }
    }
}

async fn run() -> hourglass::Result<()> {
    let config = Config::from_env()?;
    logging::init(&config.log_file)?;

    info!(
        start_screen = ?config.start_screen,
        completion_screen = config.completion_screen,
        tick_ms = config.tick_interval.as_millis() as u64,
        notifications = config.notifications,
        sound = config.sound,
        "hourglass starting"
    );

    let notifier: Arc<dyn NotificationSink> = if config.notifications {
        Arc::new(DesktopNotifier::new().with_sound(config.sound))
    } else {
        Arc::new(DisabledNotifier)
    };
    app::install(config.app_options(), notifier);

    let program = Program::<App>::builder()
        .alt_screen(true)
        .signal_handler(true)
        .build()?;
    program.run().await?;

    info!("hourglass exiting");
    Ok(())
}
