// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! The schema cache.
//!
//! Populated once when a data source is configured and read-only from then
//! on. Tables are keyed by upper-cased name so lookups from parsed SQL are
//! case-insensitive without repeated folding.

use std::collections::HashMap;

use crate::error::CatalogResult;
use crate::metadata::{ColumnMetadata, TableMetadata, TableType};
use crate::r#trait::Catalog;

/// Immutable, upper-case-keyed snapshot of a schema.
#[derive(Debug, Clone, Default)]
pub struct SchemaCache {
    tables: HashMap<String, TableMetadata>,
}

impl SchemaCache {
    /// Build a cache from already-fetched metadata.
    pub fn from_tables(tables: Vec<TableMetadata>) -> Self {
        let tables = tables
            .into_iter()
            .map(|t| (t.name.to_uppercase(), t))
            .collect();
        Self { tables }
    }

    /// Fetch the schema from `catalog` and snapshot it.
    pub async fn load(catalog: &dyn Catalog) -> CatalogResult<Self> {
        Ok(Self::from_tables(catalog.list_tables().await?))
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Look a table up by any casing of its name.
    pub fn table(&self, name: &str) -> Option<&TableMetadata> {
        self.tables.get(&name.to_uppercase())
    }

    /// Columns of `name`, if the table exists.
    pub fn columns(&self, name: &str) -> Option<&[ColumnMetadata]> {
        self.table(name).map(|t| t.columns.as_slice())
    }

    /// All table metadata of the given type, sorted by name for
    /// deterministic iteration.
    pub fn tables_of(&self, table_type: TableType) -> Vec<&TableMetadata> {
        let mut tables: Vec<&TableMetadata> = self
            .tables
            .values()
            .filter(|t| t.table_type == table_type)
            .collect();
        tables.sort_by(|a, b| a.name.cmp(&b.name));
        tables
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{ColumnMetadata, DataType};
    use crate::mock::MockCatalog;

    #[tokio::test]
    async fn load_snapshots_the_catalog() {
        let cache = SchemaCache::load(&MockCatalog::world()).await.unwrap();
        assert!(!cache.is_empty());
        assert!(cache.table("city").is_some());
        assert!(cache.table("CITY").is_some());
        assert!(cache.table("nope").is_none());
    }

    #[tokio::test]
    async fn columns_keep_schema_order() {
        let cache = SchemaCache::load(&MockCatalog::world()).await.unwrap();
        let names: Vec<&str> = cache
            .columns("city")
            .unwrap()
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec!["ID", "Name", "CountryCode", "District", "Population"]
        );
    }

    #[test]
    fn tables_of_sorts_by_name() {
        let cache = SchemaCache::from_tables(vec![
            TableMetadata::new("zebra"),
            TableMetadata::new("apple")
                .with_columns(vec![ColumnMetadata::new("id", DataType::Integer)]),
        ]);
        let names: Vec<&str> = cache
            .tables_of(TableType::Table)
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(names, vec!["apple", "zebra"]);
    }
}
