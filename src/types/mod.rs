//! Shared types for the portal data layer

pub mod error;

pub use error::{PortalError, Result};
