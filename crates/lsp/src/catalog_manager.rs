// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Catalog management.
//!
//! Maps a validated driver selection to a catalog instance and loads the
//! schema cache from it. This happens once per configuration change; the
//! resulting cache is immutable and shared with completion requests.

use std::sync::Arc;

use squill_catalog::{Catalog, MockCatalog, SchemaCache};
use tracing::info;

use crate::backend::LspError;
use crate::config::{ConnectionSettings, Driver};

/// Creates catalogs for configured drivers.
#[derive(Debug, Default)]
pub struct CatalogManager;

impl CatalogManager {
    pub fn new() -> Self {
        Self
    }

    /// Instantiate the catalog for `settings`.
    pub fn catalog_for(
        &self,
        settings: &ConnectionSettings,
    ) -> Result<Arc<dyn Catalog>, LspError> {
        match settings.driver()? {
            Driver::Mock => Ok(Arc::new(MockCatalog::world())),
        }
    }

    /// Resolve the driver and snapshot its schema.
    pub async fn connect(&self, settings: &ConnectionSettings) -> Result<SchemaCache, LspError> {
        let catalog = self.catalog_for(settings)?;
        let cache = SchemaCache::load(catalog.as_ref()).await?;
        info!(driver = %settings.driver, "schema cache loaded");
        Ok(cache)
    }
}
