//! portal-sync - data layer for the Leadership Portal
//!
//! Persists the portal's delegation tracker and performance-review dataset to
//! a user's personal cloud document store and derives dashboard alerts and
//! aggregate scores from the loaded data.
//!
//! ## Components
//!
//! - **Credentials**: bearer token + document identifier over an injected
//!   key-value backend
//! - **Remote**: document client with identifier caching and best-effort
//!   discovery of a pre-existing document
//! - **Derive**: pure score averaging and alert generation, clock injected

pub mod config;
pub mod credentials;
pub mod derive;
pub mod model;
pub mod remote;
pub mod types;

pub use config::Args;
pub use credentials::{CredentialStore, FileKvStore, KeyValueStore, MemoryKvStore};
pub use derive::{
    category_average, generate_alerts, goals_average, overall_score, rating_color, rating_label,
    Alert, AlertKind, Category, ScorePair,
};
pub use model::{default_snapshot, PortalSnapshot};
pub use remote::{DocumentClient, DocumentHost, HttpDocumentHost, InMemoryDocumentHost};
pub use types::{PortalError, Result};
