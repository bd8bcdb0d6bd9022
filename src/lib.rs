//! Holistic screening engine for dyslexia-related learning differences.
//!
//! The crate turns the raw metrics of four short interactive tests (reading,
//! spelling, visual, cognitive) into a structured screening outcome: per-test
//! evaluated metrics, normalized 0-100 sub-scores, per-dimension severity
//! classifications, cross-dimension correlation signals, an inferred condition
//! profile, and a recommended set of accessibility features.
//!
//! The classification path is pure and synchronous; the only asynchronous
//! boundary is the optional narrative generator consulted by
//! [`ScreeningEngine::screen_with_narrative`], which falls back to a
//! deterministic templated summary on failure or timeout.

pub mod config;
pub mod error;
pub mod screening;

pub use config::ScreeningConfig;
pub use error::{NarrativeError, ValidationError};
pub use screening::ScreeningEngine;
