// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Connection configuration.
//!
//! The client selects a schema source through
//! `workspace/didChangeConfiguration`:
//!
//! ```json
//! {
//!   "settings": {
//!     "squill": {
//!       "driver": "mock",
//!       "dataSourceName": ""
//!     }
//!   }
//! }
//! ```
//!
//! Driver `"mock"` activates the in-memory fixture schema; anything else is
//! rejected until a live driver implementing the catalog trait registers
//! itself here.

use serde::Deserialize;

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown driver '{0}'")]
    UnknownDriver(String),

    #[error("invalid settings payload: {0}")]
    InvalidSettings(String),
}

/// Known schema-source drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Driver {
    /// In-memory fixture schema, no database required.
    Mock,
}

impl Driver {
    pub fn from_name(name: &str) -> Result<Self, ConfigError> {
        match name {
            "mock" => Ok(Driver::Mock),
            other => Err(ConfigError::UnknownDriver(other.to_string())),
        }
    }
}

/// The `squill` section of the client settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConnectionSettings {
    pub driver: String,
    pub data_source_name: String,
}

impl ConnectionSettings {
    /// Extract and validate settings from a `didChangeConfiguration`
    /// payload.
    pub fn from_settings(settings: &serde_json::Value) -> Result<Self, ConfigError> {
        let section = settings
            .get("squill")
            .ok_or_else(|| ConfigError::InvalidSettings("missing 'squill' section".to_string()))?;
        serde_json::from_value(section.clone())
            .map_err(|e| ConfigError::InvalidSettings(e.to_string()))
    }

    pub fn driver(&self) -> Result<Driver, ConfigError> {
        Driver::from_name(&self.driver)
    }
}
