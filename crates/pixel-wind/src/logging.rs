//! File logging. The terminal belongs to the UI, so nothing is written to it.

use std::fs::{self, File, OpenOptions};
use std::path::Path;

use pixel_wind_config::Config;

/// Log file name inside the platform data directory.
const LOG_FILE: &str = "pixel-wind.log";

/// Install a `tracing` subscriber writing to the log file.
///
/// Verbosity comes from `RUST_LOG` on top of a `warn` default. Logging is
/// skipped when there is no data directory or the file cannot be opened.
pub fn init() -> color_eyre::Result<()> {
    let Some(dirs) = Config::project_dirs() else {
        return Ok(());
    };
    let Some(log_file) = open_log_file(dirs.data_local_dir()) else {
        return Ok(());
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .init();
    Ok(())
}

/// Create `dir` if needed and open the log file in it for appending.
fn open_log_file(dir: &Path) -> Option<File> {
    fs::create_dir_all(dir).ok()?;
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE))
        .ok()
}
