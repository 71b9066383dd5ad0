//! Derivation engine
//!
//! Pure functions over a loaded snapshot: score aggregation and alert
//! generation. No I/O, no mutation of the input; the current date is an
//! explicit parameter so callers (and tests) control the clock.

pub mod alerts;
pub mod scores;

pub use alerts::{generate_alerts, Alert, AlertKind};
pub use scores::{
    category_average, goals_average, overall_score, rating_color, rating_label, Category,
    ScorePair,
};
