//! Application error type.

use std::io;

use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("client error: {0}")]
    Client(#[from] countries_lib::error::Error),

    #[error("logger error: {0}")]
    Logger(#[from] log::SetLoggerError),
}
