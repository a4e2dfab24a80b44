use std::env;

use crate::error::AppError;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Clone, Debug)]
pub struct Config {
    pub app_port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_port_var(env::var("PORT").ok())
    }

    /// Unset or blank falls back to [`DEFAULT_PORT`]; anything else must parse as a port.
    pub fn from_port_var(raw: Option<String>) -> Result<Self, AppError> {
        let app_port = match raw.as_deref().map(str::trim) {
            None | Some("") => DEFAULT_PORT,
            Some(value) => value.parse::<u16>().map_err(|source| AppError::InvalidPort {
                value: value.to_string(),
                source,
            })?,
        };

        Ok(Self { app_port })
    }
}
