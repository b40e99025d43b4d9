use crate::config::ConfigError;
use crate::export::ExportError;
use crate::preset::PresetError;
use crate::scale::ScaleError;
use thiserror::Error;

pub type AppResult<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Scale(#[from] ScaleError),
    #[error(transparent)]
    Preset(#[from] PresetError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error("failed to write output")]
    Output(#[from] std::io::Error),
}
