//! Document client
//!
//! High-level save/load over the transport, plus the mechanical
//! create/update/fetch/discover calls they delegate to. The split keeps the
//! "which document" decision (identifier cached or not) and the best-effort
//! discovery fallback out of the callers: the application only ever touches
//! `save` and `load`.

use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

use crate::credentials::{CredentialStore, KeyValueStore};
use crate::model::PortalSnapshot;
use crate::remote::host::{DocumentFile, DocumentHost};
use crate::types::{PortalError, Result};

/// Filename key identifying the portal's document inside a file collection
pub const DATA_FILENAME: &str = "leadership-portal-data.json";
/// Description attached to the document on creation
pub const DATA_DESCRIPTION: &str = "Leadership Portal Data";

/// Client for the portal's single remote document
pub struct DocumentClient<H: DocumentHost, S: KeyValueStore> {
    host: Arc<H>,
    credentials: CredentialStore<S>,
}

impl<H: DocumentHost, S: KeyValueStore> DocumentClient<H, S> {
    pub fn new(host: Arc<H>, credentials: CredentialStore<S>) -> Self {
        Self { host, credentials }
    }

    fn require_token(&self) -> Result<String> {
        self.credentials
            .token()
            .ok_or_else(|| PortalError::Auth("no token stored".to_string()))
    }

    fn snapshot_files(snapshot: &PortalSnapshot) -> Result<HashMap<String, DocumentFile>> {
        let content = serde_json::to_string_pretty(snapshot)?;
        let mut files = HashMap::new();
        files.insert(DATA_FILENAME.to_string(), DocumentFile { content });
        Ok(files)
    }

    /// Create the remote document, caching and returning its identifier
    pub async fn create(&self, snapshot: &PortalSnapshot) -> Result<String> {
        let token = self.require_token()?;
        let files = Self::snapshot_files(snapshot)?;

        let id = self
            .host
            .create_document(&token, DATA_DESCRIPTION, false, files)
            .await?;
        self.credentials.set_document_id(&id)?;

        info!(id = %id, "Remote document created");
        Ok(id)
    }

    /// Update the existing remote document; requires a cached identifier
    pub async fn update(&self, snapshot: &PortalSnapshot) -> Result<()> {
        let token = self.require_token()?;
        let id = self
            .credentials
            .document_id()
            .ok_or_else(|| PortalError::Config("no document identifier".to_string()))?;

        let files = Self::snapshot_files(snapshot)?;
        self.host.update_document(&token, &id, files).await?;

        debug!(id = %id, "Remote document updated");
        Ok(())
    }

    /// Fetch the snapshot from the cached document; `None` when no identifier
    /// is cached, the host reports the document missing, or the named file is
    /// absent from its collection
    pub async fn fetch(&self) -> Result<Option<PortalSnapshot>> {
        let token = self.require_token()?;
        let Some(id) = self.credentials.document_id() else {
            return Ok(None);
        };

        let Some(document) = self.host.read_document(&token, &id).await? else {
            return Ok(None);
        };

        match document.files.get(DATA_FILENAME) {
            Some(file) => {
                let snapshot: PortalSnapshot = serde_json::from_str(&file.content)?;
                Ok(Some(snapshot))
            }
            None => {
                debug!(id = %id, "Document has no portal data file");
                Ok(None)
            }
        }
    }

    /// Locate a pre-existing portal document owned by the authenticated
    /// identity, caching its identifier. Best-effort: every failure is
    /// treated as "not found".
    pub async fn discover(&self) -> Option<String> {
        let token = self.credentials.token()?;

        let documents = match self.host.list_documents(&token).await {
            Ok(documents) => documents,
            Err(e) => {
                debug!(error = %e, "Document discovery failed");
                return None;
            }
        };

        let existing = documents
            .into_iter()
            .find(|d| d.files.contains_key(DATA_FILENAME))?;

        if self.credentials.set_document_id(&existing.id).is_err() {
            return None;
        }

        info!(id = %existing.id, "Recovered existing remote document");
        Some(existing.id)
    }

    /// Save the snapshot, creating the document on first use. Repeated calls
    /// with an unchanged identifier always update the same document.
    pub async fn save(&self, snapshot: &PortalSnapshot) -> Result<String> {
        match self.credentials.document_id() {
            None => self.create(snapshot).await,
            Some(id) => {
                self.update(snapshot).await?;
                Ok(id)
            }
        }
    }

    /// Load the snapshot, falling back to discovery when no identifier is
    /// cached; `None` when there is nothing to load
    pub async fn load(&self) -> Result<Option<PortalSnapshot>> {
        if self.credentials.document_id().is_none() && self.discover().await.is_none() {
            return Ok(None);
        }
        self.fetch().await
    }

    /// Remote token check; any non-success response means invalid
    pub async fn verify(&self, token: &str) -> Result<bool> {
        self.host.verify_token(token).await
    }

    // Credential passthroughs for the application layer

    pub fn is_authenticated(&self) -> bool {
        self.credentials.is_authenticated()
    }

    pub fn set_token(&self, token: &str) -> Result<()> {
        self.credentials.set_token(token)
    }

    pub fn document_id(&self) -> Option<String> {
        self.credentials.document_id()
    }

    pub fn clear_credentials(&self) -> Result<()> {
        self.credentials.clear()
    }
}
