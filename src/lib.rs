// src/lib.rs
// Public library surface for the binaries and integration tests.

pub mod analysis;
pub mod analyze;
pub mod api;
pub mod config;
pub mod history;
pub mod metrics;
pub mod samples;
pub mod service;

// ---- Re-exports for stable public API ----
pub use crate::analysis::{AnalysisResponse, Sentiment, Tone, ToneAnalysis, ToneScores};
pub use crate::api::router;
pub use crate::config::ToneConfig;
pub use crate::service::ToneService;
