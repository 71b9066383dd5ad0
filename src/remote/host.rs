//! Document host transport
//!
//! The portal persists to a gist-style document hosting API: documents carry
//! an id and a filename-keyed file collection. [`HttpDocumentHost`] is the
//! real transport; [`InMemoryDocumentHost`] backs the tests.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::types::{PortalError, Result};

/// Fixed accept-format header the document host expects
const ACCEPT_FORMAT: &str = "application/vnd.github.v3+json";

// ============================================================================
// Wire types
// ============================================================================

/// One named file inside a hosted document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentFile {
    pub content: String,
}

/// A hosted document: identifier plus filename-keyed file collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    #[serde(default)]
    pub files: HashMap<String, DocumentFile>,
}

#[derive(Debug, Serialize)]
struct CreatePayload<'a> {
    description: &'a str,
    public: bool,
    files: &'a HashMap<String, DocumentFile>,
}

#[derive(Debug, Serialize)]
struct UpdatePayload<'a> {
    files: &'a HashMap<String, DocumentFile>,
}

#[derive(Debug, Deserialize)]
struct CreatedDocument {
    id: String,
}

// ============================================================================
// Transport trait
// ============================================================================

/// Transport operations against the document host (allows mocking in tests)
#[async_trait]
pub trait DocumentHost: Send + Sync {
    /// Create a document, returning its identifier
    async fn create_document(
        &self,
        token: &str,
        description: &str,
        public: bool,
        files: HashMap<String, DocumentFile>,
    ) -> Result<String>;

    /// Replace the file collection of an existing document
    async fn update_document(
        &self,
        token: &str,
        id: &str,
        files: HashMap<String, DocumentFile>,
    ) -> Result<()>;

    /// Read a document; `Ok(None)` when the host reports it missing
    async fn read_document(&self, token: &str, id: &str) -> Result<Option<Document>>;

    /// List all documents owned by the authenticated identity
    async fn list_documents(&self, token: &str) -> Result<Vec<Document>>;

    /// Check token validity; any non-success response means invalid
    async fn verify_token(&self, token: &str) -> Result<bool>;
}

// ============================================================================
// HTTP transport
// ============================================================================

/// reqwest-backed transport against a gist-style API
pub struct HttpDocumentHost {
    base_url: String,
    http_client: reqwest::Client,
}

impl HttpDocumentHost {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http_client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http_client,
        })
    }

    fn request(&self, method: reqwest::Method, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.http_client
            .request(method, format!("{}{}", self.base_url, path))
            .header("Authorization", format!("token {}", token))
            .header("Accept", ACCEPT_FORMAT)
    }
}

#[async_trait]
impl DocumentHost for HttpDocumentHost {
    async fn create_document(
        &self,
        token: &str,
        description: &str,
        public: bool,
        files: HashMap<String, DocumentFile>,
    ) -> Result<String> {
        let payload = CreatePayload {
            description,
            public,
            files: &files,
        };

        let response = self
            .request(reqwest::Method::POST, "/gists", token)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(PortalError::Remote(format!(
                "HTTP {} creating document",
                response.status()
            )));
        }

        let created: CreatedDocument = response.json().await?;
        debug!(id = %created.id, "Document created");
        Ok(created.id)
    }

    async fn update_document(
        &self,
        token: &str,
        id: &str,
        files: HashMap<String, DocumentFile>,
    ) -> Result<()> {
        let payload = UpdatePayload { files: &files };

        let response = self
            .request(reqwest::Method::PATCH, &format!("/gists/{}", id), token)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(PortalError::Remote(format!(
                "HTTP {} updating document {}",
                response.status(),
                id
            )));
        }

        Ok(())
    }

    async fn read_document(&self, token: &str, id: &str) -> Result<Option<Document>> {
        let response = self
            .request(reqwest::Method::GET, &format!("/gists/{}", id), token)
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            warn!(id = %id, "Document not found on host");
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(PortalError::Remote(format!(
                "HTTP {} reading document {}",
                response.status(),
                id
            )));
        }

        let document: Document = response.json().await?;
        Ok(Some(document))
    }

    async fn list_documents(&self, token: &str) -> Result<Vec<Document>> {
        let response = self
            .request(reqwest::Method::GET, "/gists", token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(PortalError::Remote(format!(
                "HTTP {} listing documents",
                response.status()
            )));
        }

        let documents: Vec<Document> = response.json().await?;
        Ok(documents)
    }

    async fn verify_token(&self, token: &str) -> Result<bool> {
        let response = self.request(reqwest::Method::GET, "/user", token).send().await?;
        Ok(response.status().is_success())
    }
}

// ============================================================================
// In-memory transport
// ============================================================================

/// HashMap-backed host for tests and offline use
#[derive(Default)]
pub struct InMemoryDocumentHost {
    documents: RwLock<HashMap<String, Document>>,
    next_id: AtomicU64,
    valid_tokens: RwLock<Vec<String>>,
}

impl InMemoryDocumentHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a token `verify_token` will accept
    pub async fn accept_token(&self, token: &str) {
        self.valid_tokens.write().await.push(token.to_string());
    }

    /// Number of documents currently hosted
    pub async fn document_count(&self) -> usize {
        self.documents.read().await.len()
    }

    /// Seed a document directly, as if another client had created it
    pub async fn insert_document(&self, document: Document) {
        self.documents
            .write()
            .await
            .insert(document.id.clone(), document);
    }
}

#[async_trait]
impl DocumentHost for InMemoryDocumentHost {
    async fn create_document(
        &self,
        _token: &str,
        _description: &str,
        _public: bool,
        files: HashMap<String, DocumentFile>,
    ) -> Result<String> {
        let id = format!("doc-{}", self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        let document = Document {
            id: id.clone(),
            files,
        };
        self.documents.write().await.insert(id.clone(), document);
        Ok(id)
    }

    async fn update_document(
        &self,
        _token: &str,
        id: &str,
        files: HashMap<String, DocumentFile>,
    ) -> Result<()> {
        let mut documents = self.documents.write().await;
        match documents.get_mut(id) {
            Some(document) => {
                document.files = files;
                Ok(())
            }
            None => Err(PortalError::Remote(format!(
                "HTTP 404 Not Found updating document {}",
                id
            ))),
        }
    }

    async fn read_document(&self, _token: &str, id: &str) -> Result<Option<Document>> {
        Ok(self.documents.read().await.get(id).cloned())
    }

    async fn list_documents(&self, _token: &str) -> Result<Vec<Document>> {
        let mut documents: Vec<Document> = self.documents.read().await.values().cloned().collect();
        documents.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(documents)
    }

    async fn verify_token(&self, token: &str) -> Result<bool> {
        Ok(self.valid_tokens.read().await.iter().any(|t| t == token))
    }
}
