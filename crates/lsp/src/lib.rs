// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # squill - Language Server Protocol
//!
//! The LSP frontend of the squill SQL language server.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         Client (VS Code, etc.)          │
//! └──────────────┬──────────────────────────┘
//!                │ LSP over stdio
//!                ↓
//! ┌─────────────────────────────────────────┐
//! │         LSP Backend (tower-lsp)         │
//! ├─────────────────────────────────────────┤
//! │  • did_open / did_change / did_close    │
//! │  • didChangeConfiguration → schema load │
//! │  • completion                           │
//! └──────┬───────────────┬──────────────────┘
//!        ↓               ↓
//! ┌────────────┐  ┌──────────────┐
//! │  Document  │  │ Schema Cache │
//! │   Store    │  │ (catalog)    │
//! └────────────┘  └──────────────┘
//! ```
//!
//! Each completion request re-parses the full document text (parses are
//! cheap, one per keystroke), classifies the cursor context, and
//! synthesizes candidates from the parse tree plus the schema cache. The
//! cache is loaded once per `workspace/didChangeConfiguration` and is
//! read-only afterwards.
//!
//! ## Modules
//!
//! - [`backend`]: the tower-lsp `LanguageServer` implementation
//! - [`document`]: document table (full-text synchronization)
//! - [`config`]: `settings.squill` parsing and driver selection
//! - [`catalog_manager`]: driver name → catalog → schema cache
//! - [`completion`]: context classifier and candidate synthesizer

pub mod backend;
pub mod catalog_manager;
pub mod completion;
pub mod config;
pub mod document;

// Re-exports for convenience
pub use backend::{LspBackend, LspError};
pub use catalog_manager::CatalogManager;
pub use completion::CompletionEngine;
pub use config::{ConfigError, ConnectionSettings, Driver};
pub use document::{Document, DocumentError, DocumentStore};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Server name
pub const SERVER_NAME: &str = "squill";
