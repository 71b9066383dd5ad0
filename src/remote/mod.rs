//! Remote document persistence
//!
//! Maps the portal snapshot to and from a single named document in a remote
//! per-user document store. The transport lives behind the [`DocumentHost`]
//! trait so the client logic (identifier caching, discovery fallback) is
//! testable without a network.

pub mod client;
pub mod host;

pub use client::{DocumentClient, DATA_DESCRIPTION, DATA_FILENAME};
pub use host::{Document, DocumentFile, DocumentHost, HttpDocumentHost, InMemoryDocumentHost};
