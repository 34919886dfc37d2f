// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Error types for catalog operations.

use serde::Serialize;
use thiserror::Error;

/// Result type alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors that can occur while loading schema information.
#[derive(Debug, Error, Clone, Serialize)]
pub enum CatalogError {
    /// Failed to connect to the schema source.
    #[error("failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Schema listing failed after the connection was established.
    #[error("failed to fetch schema: {0}")]
    SchemaFetch(String),

    /// Requested table was not found.
    #[error("table '{0}' not found")]
    TableNotFound(String),

    /// The operation is not supported by this catalog implementation.
    #[error("not supported: {0}")]
    NotSupported(String),
}
