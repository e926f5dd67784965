use thiserror::Error;

use crate::config::ConfigError;
use crate::input::InputError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("cannot encode report: {0}")]
    Json(#[from] serde_json::Error),
}
