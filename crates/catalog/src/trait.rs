// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! The async catalog trait.

use crate::error::CatalogResult;
use crate::metadata::TableMetadata;

/// Schema source abstraction.
///
/// Implementations may connect to live databases or serve fixtures; the
/// server calls [`Catalog::list_tables`] once per configuration change and
/// caches the result, so implementations do not need their own caching.
///
/// # Examples
///
/// ```rust,ignore
/// use squill_catalog::{Catalog, SchemaCache};
///
/// async fn connect(catalog: &dyn Catalog) -> anyhow::Result<SchemaCache> {
///     Ok(SchemaCache::load(catalog).await?)
/// }
/// ```
#[async_trait::async_trait]
pub trait Catalog: Send + Sync {
    /// List every table visible to the connection, columns included.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ConnectionFailed` when the source is
    /// unreachable and `CatalogError::SchemaFetch` when the listing query
    /// fails.
    async fn list_tables(&self) -> CatalogResult<Vec<TableMetadata>>;
}
