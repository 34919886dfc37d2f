// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! The mock catalog.
//!
//! Selected with driver name `"mock"`; serves a predefined schema without a
//! database so the server can be exercised end-to-end. The default fixture
//! is the `world` sample schema the test scenarios assert against.

use async_trait::async_trait;

use crate::error::CatalogResult;
use crate::metadata::{ColumnMetadata, DataType, TableMetadata};
use crate::r#trait::Catalog;

/// In-memory catalog with predefined schema data.
#[derive(Debug, Clone)]
pub struct MockCatalog {
    tables: Vec<TableMetadata>,
}

impl MockCatalog {
    pub fn new(tables: Vec<TableMetadata>) -> Self {
        Self { tables }
    }

    /// The `world` sample schema: `city`, `country`, `countrylanguage`.
    pub fn world() -> Self {
        let city = TableMetadata::new("city")
            .with_columns(vec![
                ColumnMetadata::new("ID", DataType::Integer)
                    .primary_key()
                    .with_extra("auto_increment"),
                ColumnMetadata::new("Name", DataType::Char(Some(35)))
                    .not_null()
                    .with_default(""),
                ColumnMetadata::new("CountryCode", DataType::Char(Some(3)))
                    .not_null()
                    .with_default(""),
                ColumnMetadata::new("District", DataType::Char(Some(20)))
                    .not_null()
                    .with_default(""),
                ColumnMetadata::new("Population", DataType::Integer)
                    .not_null()
                    .with_default("0"),
            ])
            .with_comment("Cities of the world");

        let country = TableMetadata::new("country")
            .with_columns(vec![
                ColumnMetadata::new("Code", DataType::Char(Some(3))).primary_key(),
                ColumnMetadata::new("Name", DataType::Char(Some(52))).not_null(),
                ColumnMetadata::new("CountryCode", DataType::Char(Some(3))).not_null(),
                ColumnMetadata::new("Continent", DataType::Varchar(Some(13))).not_null(),
                ColumnMetadata::new("Region", DataType::Char(Some(26))).not_null(),
                ColumnMetadata::new("SurfaceArea", DataType::Decimal).not_null(),
                ColumnMetadata::new("IndepYear", DataType::SmallInt),
                ColumnMetadata::new("LifeExpectancy", DataType::Decimal),
                ColumnMetadata::new("GNP", DataType::Decimal),
                ColumnMetadata::new("GNPOld", DataType::Decimal),
                ColumnMetadata::new("LocalName", DataType::Char(Some(45))).not_null(),
                ColumnMetadata::new("GovernmentForm", DataType::Char(Some(45))).not_null(),
                ColumnMetadata::new("HeadOfState", DataType::Char(Some(60))),
                ColumnMetadata::new("Capital", DataType::Integer),
                ColumnMetadata::new("Code2", DataType::Char(Some(2))).not_null(),
            ])
            .with_comment("Countries of the world");

        let countrylanguage = TableMetadata::new("countrylanguage").with_columns(vec![
            ColumnMetadata::new("CountryCode", DataType::Char(Some(3))).primary_key(),
            ColumnMetadata::new("Language", DataType::Char(Some(30))).primary_key(),
            ColumnMetadata::new("IsOfficial", DataType::Char(Some(1)))
                .not_null()
                .with_default("F"),
            ColumnMetadata::new("Percentage", DataType::Decimal)
                .not_null()
                .with_default("0.0"),
        ]);

        Self::new(vec![city, country, countrylanguage])
    }
}

impl Default for MockCatalog {
    fn default() -> Self {
        Self::world()
    }
}

#[async_trait]
impl Catalog for MockCatalog {
    async fn list_tables(&self) -> CatalogResult<Vec<TableMetadata>> {
        Ok(self.tables.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn world_fixture_tables() {
        let catalog = MockCatalog::world();
        let tables = catalog.list_tables().await.unwrap();
        let names: Vec<&str> = tables.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["city", "country", "countrylanguage"]);
    }

    #[tokio::test]
    async fn country_has_join_scenario_columns() {
        let catalog = MockCatalog::world();
        let tables = catalog.list_tables().await.unwrap();
        let country = tables.iter().find(|t| t.name == "country").unwrap();
        for expected in ["Code", "Continent", "Code2", "HeadOfState"] {
            assert!(
                country.column_names().any(|c| c == expected),
                "missing {expected}"
            );
        }
    }
}
