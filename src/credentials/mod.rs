//! Credential storage
//!
//! The portal keeps two secrets between sessions: the bearer token for the
//! document host and the identifier of the remote document it last wrote.
//! Both live in a small key-value area injected into the client, so tests
//! substitute [`MemoryKvStore`] while the CLI uses [`FileKvStore`] to survive
//! process restarts.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;
use tracing::debug;

use crate::types::Result;

/// Key under which the bearer token is stored
pub const TOKEN_KEY: &str = "portal_token";
/// Key under which the remote document identifier is stored
pub const DOCUMENT_ID_KEY: &str = "document_id";

/// Persistent key-value area backing the credential store
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// Credential accessors over an injected key-value backend.
///
/// No validation happens locally; token verification is a remote capability
/// on the document client.
pub struct CredentialStore<S: KeyValueStore> {
    backend: S,
}

impl<S: KeyValueStore> CredentialStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn token(&self) -> Option<String> {
        self.backend.get(TOKEN_KEY)
    }

    pub fn set_token(&self, token: &str) -> Result<()> {
        self.backend.set(TOKEN_KEY, token)
    }

    pub fn document_id(&self) -> Option<String> {
        self.backend.get(DOCUMENT_ID_KEY)
    }

    pub fn set_document_id(&self, id: &str) -> Result<()> {
        self.backend.set(DOCUMENT_ID_KEY, id)
    }

    /// True iff a token is present
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Remove both the token and the document identifier
    pub fn clear(&self) -> Result<()> {
        self.backend.remove(TOKEN_KEY)?;
        self.backend.remove(DOCUMENT_ID_KEY)
    }
}

// ============================================================================
// Backends
// ============================================================================

/// In-memory backend; state lives only for the process lifetime
#[derive(Default)]
pub struct MemoryKvStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKvStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .read()
            .expect("kv lock poisoned")
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .write()
            .expect("kv lock poisoned")
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries
            .write()
            .expect("kv lock poisoned")
            .remove(key);
        Ok(())
    }
}

/// File-backed backend persisted as a JSON object, written on every mutation
pub struct FileKvStore {
    path: PathBuf,
    entries: RwLock<HashMap<String, String>>,
}

impl FileKvStore {
    /// Open the store, loading existing entries if the file is present
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e.into()),
        };

        debug!(path = %path.display(), entries = entries.len(), "Credential store opened");

        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    fn persist(&self, entries: &HashMap<String, String>) -> Result<()> {
        let json = serde_json::to_string_pretty(entries)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

impl KeyValueStore for FileKvStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .read()
            .expect("kv lock poisoned")
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.write().expect("kv lock poisoned");
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.write().expect("kv lock poisoned");
        entries.remove(key);
        self.persist(&entries)
    }
}
