// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Document management.
//!
//! The server declares full-document synchronization, so every change
//! carries the complete text and a document is just a string with
//! metadata. Writes happen only on lifecycle notifications; completion
//! requests read through the same lock, which serializes them against
//! edits per the LSP ordering guarantees.

use std::collections::HashMap;

use tokio::sync::RwLock;
use tower_lsp::lsp_types::{TextDocumentContentChangeEvent, Url, VersionedTextDocumentIdentifier};

/// Document errors.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("document not found: {0}")]
    NotFound(Url),
}

/// An open document.
#[derive(Debug, Clone)]
pub struct Document {
    uri: Url,
    language_id: String,
    version: i32,
    text: String,
}

impl Document {
    pub fn new(uri: Url, text: String, version: i32, language_id: String) -> Self {
        Self {
            uri,
            language_id,
            version,
            text,
        }
    }

    pub fn uri(&self) -> &Url {
        &self.uri
    }

    pub fn language_id(&self) -> &str {
        &self.language_id
    }

    pub fn version(&self) -> i32 {
        self.version
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Table of open documents, keyed by URI.
#[derive(Debug, Default)]
pub struct DocumentStore {
    documents: RwLock<HashMap<Url, Document>>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a newly opened document, replacing any stale entry.
    pub async fn open(&self, uri: Url, text: String, version: i32, language_id: String) {
        let document = Document::new(uri.clone(), text, version, language_id);
        self.documents.write().await.insert(uri, document);
    }

    /// Apply a change notification.
    ///
    /// With full synchronization the last change event carries the whole
    /// new text; earlier events in the same notification are superseded.
    pub async fn update(
        &self,
        identifier: &VersionedTextDocumentIdentifier,
        changes: &[TextDocumentContentChangeEvent],
    ) -> Result<(), DocumentError> {
        let mut documents = self.documents.write().await;
        let document = documents
            .get_mut(&identifier.uri)
            .ok_or_else(|| DocumentError::NotFound(identifier.uri.clone()))?;
        if let Some(change) = changes.last() {
            document.text = change.text.clone();
        }
        document.version = identifier.version;
        Ok(())
    }

    /// Apply the text an editor sent along with `didSave`, if any.
    pub async fn save(&self, uri: &Url, text: Option<String>) -> Result<(), DocumentError> {
        let mut documents = self.documents.write().await;
        let document = documents
            .get_mut(uri)
            .ok_or_else(|| DocumentError::NotFound(uri.clone()))?;
        if let Some(text) = text {
            document.text = text;
        }
        Ok(())
    }

    /// Drop a closed document. Returns false when it was never open.
    pub async fn close(&self, uri: &Url) -> bool {
        self.documents.write().await.remove(uri).is_some()
    }

    /// Snapshot of a document, if open.
    pub async fn get(&self, uri: &Url) -> Option<Document> {
        self.documents.read().await.get(uri).cloned()
    }

    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }
}
