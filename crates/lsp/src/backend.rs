// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! LSP backend implementation.
//!
//! The backend wires tower-lsp to the rest of the system: document
//! lifecycle notifications maintain the document table, configuration
//! changes (re)load the schema cache, and completion requests run the
//! engine against both. Requests for a document observe every prior
//! lifecycle notification for it because reads and writes go through the
//! same store.
//!
//! Error policy: malformed SQL is never an error (the parser is total);
//! an unknown driver or a failed schema load is reported to the user and
//! leaves the previous state untouched; "nothing useful to suggest" is an
//! empty successful reply.

use std::sync::Arc;

use squill_catalog::SchemaCache;
use tokio::sync::RwLock;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer};
use tracing::{error, info, warn};

use crate::catalog_manager::CatalogManager;
use crate::completion::CompletionEngine;
use crate::config::ConnectionSettings;
use crate::document::{DocumentError, DocumentStore};

/// LSP backend errors.
#[derive(Debug, thiserror::Error)]
pub enum LspError {
    #[error("configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("document error: {0}")]
    Document(#[from] DocumentError),

    #[error("catalog error: {0}")]
    Catalog(#[from] squill_catalog::CatalogError),
}

/// Main entry point for all LSP protocol operations.
pub struct LspBackend {
    /// LSP client handle for notifications toward the editor.
    client: Client,

    /// Open documents, uri → text.
    documents: Arc<DocumentStore>,

    /// Schema snapshot; `None` until a data source is configured.
    schema: Arc<RwLock<Option<Arc<SchemaCache>>>>,

    /// Driver registry.
    catalog_manager: CatalogManager,
}

impl LspBackend {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            documents: Arc::new(DocumentStore::new()),
            schema: Arc::new(RwLock::new(None)),
            catalog_manager: CatalogManager::new(),
        }
    }

    pub fn documents(&self) -> &DocumentStore {
        &self.documents
    }

    async fn show_message(&self, message: &str, message_type: MessageType) {
        self.client.show_message(message_type, message).await;
    }

    /// Apply a configuration payload: resolve the driver and load the
    /// schema cache. On failure the previous cache stays in place.
    async fn apply_settings(&self, settings: ConnectionSettings) {
        match self.catalog_manager.connect(&settings).await {
            Ok(cache) => {
                *self.schema.write().await = Some(Arc::new(cache));
                info!(driver = %settings.driver, "data source configured");
            }
            Err(e) => {
                error!("failed to configure data source: {e}");
                self.show_message(
                    &format!("squill: failed to configure data source: {e}"),
                    MessageType::ERROR,
                )
                .await;
            }
        }
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for LspBackend {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        info!("initializing language server");
        if let Some(client_info) = &params.client_info {
            info!(name = %client_info.name, "client connected");
        }

        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                // every change carries the full document text
                text_document_sync: Some(TextDocumentSyncCapability::Kind(
                    TextDocumentSyncKind::FULL,
                )),
                completion_provider: Some(CompletionOptions {
                    resolve_provider: Some(false),
                    trigger_characters: Some(vec![".".to_string()]),
                    work_done_progress_options: WorkDoneProgressOptions {
                        work_done_progress: Some(false),
                    },
                    all_commit_characters: None,
                    completion_item: None,
                }),
                code_action_provider: Some(CodeActionProviderCapability::Simple(true)),
                ..Default::default()
            },
            server_info: Some(ServerInfo {
                name: crate::SERVER_NAME.to_string(),
                version: Some(crate::VERSION.to_string()),
            }),
        })
    }

    async fn initialized(&self, _params: InitializedParams) {
        info!("language server initialized");
    }

    async fn shutdown(&self) -> Result<()> {
        info!("shutting down");
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let doc = params.text_document;
        info!(uri = %doc.uri, version = doc.version, "document opened");
        self.documents
            .open(doc.uri, doc.text, doc.version, doc.language_id)
            .await;
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let identifier = params.text_document;
        match self
            .documents
            .update(&identifier, &params.content_changes)
            .await
        {
            Ok(()) => {}
            Err(DocumentError::NotFound(uri)) => {
                warn!(%uri, "change for unopened document");
            }
        }
    }

    async fn did_save(&self, params: DidSaveTextDocumentParams) {
        let uri = params.text_document.uri;
        if let Err(DocumentError::NotFound(uri)) = self.documents.save(&uri, params.text).await {
            warn!(%uri, "save for unopened document");
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        let uri = params.text_document.uri;
        if self.documents.close(&uri).await {
            info!(%uri, "document closed");
        } else {
            warn!(%uri, "close for unopened document");
        }
    }

    async fn did_change_configuration(&self, params: DidChangeConfigurationParams) {
        match ConnectionSettings::from_settings(&params.settings) {
            Ok(settings) => self.apply_settings(settings).await,
            Err(e) => {
                warn!("ignoring configuration change: {e}");
            }
        }
    }

    async fn completion(&self, params: CompletionParams) -> Result<Option<CompletionResponse>> {
        let uri = params.text_document_position.text_document.uri;
        let position = params.text_document_position.position;
        info!(%uri, line = position.line, character = position.character, "completion requested");

        let Some(document) = self.documents.get(&uri).await else {
            warn!(%uri, "completion for unopened document");
            return Ok(None);
        };

        // No schema configured yet: an empty list, not an error.
        let Some(cache) = self.schema.read().await.clone() else {
            return Ok(Some(CompletionResponse::Array(Vec::new())));
        };

        let engine = CompletionEngine::new(cache);
        let items = engine.complete(document.text(), position);
        info!(count = items.len(), "completion answered");
        Ok(Some(CompletionResponse::Array(items)))
    }

    async fn code_action(&self, _params: CodeActionParams) -> Result<Option<CodeActionResponse>> {
        // declared in capabilities; no actions are produced yet
        Ok(None)
    }
}
