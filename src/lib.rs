pub mod cli;
mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod preset;
pub mod responsive;
pub mod scale;
pub use error::{AppError, AppResult};
pub use preset::ScalePreset;
pub use responsive::{interpolate, interpolate_scale, ResponsiveFontSize};
pub use scale::{RatioSetting, ScaleRatio, Tier, TypographicScale};

use config::{ConfigError, ScaleConfig};

/// Entrypoint used by the `typescale` binary.
pub fn run(cli: cli::Cli) -> AppResult<()> {
    logging::init(cli.verbose);
    tracing::info!("starting typescale");

    let config = match cli.config.as_deref() {
        Some(path) => config::load_config_from(path)?,
        None => match config::load_config() {
            Ok(config) => config,
            Err(ConfigError::MissingHomeDirectory) => {
                tracing::warn!("HOME and XDG_CONFIG_HOME unset; using default settings");
                ScaleConfig::default()
            }
            Err(err) => return Err(err.into()),
        },
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::execute(&cli.command, &config, &mut out)
}
