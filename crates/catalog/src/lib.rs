// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # squill - Catalog Layer
//!
//! Database schema abstraction for the squill language server.
//!
//! The completion engine never talks to a database directly; it consults an
//! immutable [`SchemaCache`] built once at configuration time from a
//! [`Catalog`] implementation. A live driver is an external collaborator
//! that implements the same trait; in this tree the [`MockCatalog`]
//! supplies the fixture schema used by the end-to-end scenarios.
//!
//! ## Metadata Types
//!
//! - [`TableMetadata`]: table name, type, columns, comment
//! - [`ColumnMetadata`]: column details; only `name` participates in
//!   completion
//! - [`DataType`]: SQL data type representation

pub mod cache;
pub mod error;
pub mod metadata;
pub mod mock;
pub mod r#trait;

// Re-exports
pub use cache::SchemaCache;
pub use error::{CatalogError, CatalogResult};
pub use metadata::{ColumnMetadata, DataType, TableMetadata, TableType};
pub use mock::MockCatalog;
pub use r#trait::Catalog;
