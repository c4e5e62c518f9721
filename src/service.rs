//! # Tone Service
//! Owns one `ToneEngine` and the analysis history. Construct it once at
//! startup and share it (`Arc<ToneService>`); there is no global instance.
//!
//! `analyze` never fails for odd input. A panic inside the pipeline is caught
//! and reported as a failure envelope; nothing is stored in that case.

use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use chrono::Utc;
use sha2::{Digest, Sha256};
use tracing::{info, warn};

use crate::analysis::{AnalysisError, AnalysisResponse, Envelope, ToneAnalysis};
use crate::analyze::{ToneEngine, ToneReport};
use crate::config::ToneConfig;
use crate::history::AnalysisHistory;
use crate::metrics;

pub const FAILURE_MESSAGE: &str = "Failed to analyze email. Please try again.";

#[derive(Debug)]
pub struct ToneService {
    engine: ToneEngine,
    history: AnalysisHistory,
    seq: AtomicU64,
}

impl Default for ToneService {
    fn default() -> Self {
        Self::new(&ToneConfig::default())
    }
}

impl ToneService {
    pub fn new(config: &ToneConfig) -> Self {
        Self::with_engine(
            ToneEngine::new(config.keyword_options()),
            config.history.capacity,
        )
    }

    pub fn with_engine(engine: ToneEngine, history_capacity: usize) -> Self {
        Self {
            engine,
            history: AnalysisHistory::with_capacity(history_capacity),
            seq: AtomicU64::new(0),
        }
    }

    pub fn engine(&self) -> &ToneEngine {
        &self.engine
    }

    /// Analyze `text`, record the result, and wrap it in an envelope.
    pub fn analyze(&self, text: &str) -> AnalysisResponse {
        match self.try_analyze(text) {
            Ok(a) => Envelope::ok(a),
            Err(e) => {
                warn!(target: "tone", error = %e, text_id = %fingerprint(text), "analysis failed");
                Envelope::failed(FAILURE_MESSAGE)
            }
        }
    }

    pub fn try_analyze(&self, text: &str) -> Result<ToneAnalysis, AnalysisError> {
        let started = Instant::now();
        let report = guarded(|| self.engine.run(text)).map_err(|e| {
            metrics::record_failure();
            e
        })?;
        let analysis = self.assemble(text, report);

        let len = self.history.push(analysis.clone());
        let elapsed_ms = started.elapsed().as_secs_f64() * 1_000.0;
        metrics::record_analysis(analysis.overall_sentiment, elapsed_ms);
        metrics::set_history_len(len);

        info!(
            target: "tone",
            id = %analysis.id,
            text_id = %fingerprint(text),
            sentiment = %analysis.overall_sentiment,
            dominant = analysis.tones.dominant().as_str(),
            confidence = analysis.confidence,
            keywords = analysis.keywords.len(),
            elapsed_ms,
            "analysis complete"
        );
        Ok(analysis)
    }

    /// Snapshot of stored analyses, oldest first.
    pub fn history(&self) -> Vec<ToneAnalysis> {
        self.history.snapshot()
    }

    pub fn history_last_n(&self, n: usize) -> Vec<ToneAnalysis> {
        self.history.snapshot_last_n(n)
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn history_capacity(&self) -> usize {
        self.history.capacity()
    }

    pub fn get_by_id(&self, id: &str) -> Option<ToneAnalysis> {
        self.history.find(id)
    }

    fn assemble(&self, text: &str, report: ToneReport) -> ToneAnalysis {
        let timestamp = Utc::now();
        let seq = self.seq.fetch_add(1, Ordering::Relaxed) + 1;
        let mut h = Sha256::new();
        h.update(seq.to_le_bytes());
        h.update(timestamp.timestamp_nanos_opt().unwrap_or_default().to_le_bytes());
        h.update(text.as_bytes());
        let id = format!("ta-{seq}-{}", hex_prefix(&h.finalize(), 6));

        ToneAnalysis {
            id,
            email_content: text.to_string(),
            timestamp,
            overall_sentiment: report.sentiment,
            confidence: report.confidence,
            tones: report.tones,
            suggestions: report.suggestions,
            keywords: report.keywords,
        }
    }
}

/// Runs one pipeline pass, turning a panic into `AnalysisError::Internal`.
fn guarded<F: FnOnce() -> ToneReport>(f: F) -> Result<ToneReport, AnalysisError> {
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(|payload| {
        let msg = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());
        AnalysisError::Internal(msg)
    })
}

/// Short SHA-256 fingerprint; logs carry this instead of the email text.
pub(crate) fn fingerprint(text: &str) -> String {
    hex_prefix(&Sha256::digest(text.as_bytes()), 6)
}

fn hex_prefix(digest: &[u8], bytes: usize) -> String {
    use std::fmt::Write as _;
    let mut out = String::with_capacity(bytes * 2);
    for b in digest.iter().take(bytes) {
        let _ = write!(&mut out, "{:02x}", b);
    }
    out
}
