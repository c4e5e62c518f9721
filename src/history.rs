//! history.rs: in-memory record of completed analyses.
//!
//! Insertion-ordered and capped: once `cap` entries are stored the oldest
//! one is evicted. Appends from concurrent handlers go through one mutex.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::analysis::ToneAnalysis;

pub const DEFAULT_HISTORY_CAP: usize = 1_000;
pub const MAX_HISTORY_CAP: usize = 100_000;

#[derive(Debug)]
pub struct AnalysisHistory {
    inner: Mutex<VecDeque<ToneAnalysis>>,
    cap: usize,
}

impl Default for AnalysisHistory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAP)
    }
}

impl AnalysisHistory {
    pub fn with_capacity(cap: usize) -> Self {
        let cap = cap.clamp(1, MAX_HISTORY_CAP);
        Self {
            inner: Mutex::new(VecDeque::with_capacity(cap.min(1_024))),
            cap,
        }
    }

    pub fn capacity(&self) -> usize {
        self.cap
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<ToneAnalysis>> {
        // Entries are only ever pushed whole, so a poisoned guard is still consistent.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Appends one result; returns the new length.
    pub fn push(&self, analysis: ToneAnalysis) -> usize {
        let mut v = self.lock();
        v.push_back(analysis);
        while v.len() > self.cap {
            v.pop_front();
        }
        v.len()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Copy of every stored result, oldest first.
    pub fn snapshot(&self) -> Vec<ToneAnalysis> {
        self.lock().iter().cloned().collect()
    }

    /// Copy of the newest `n` results, oldest first.
    pub fn snapshot_last_n(&self, n: usize) -> Vec<ToneAnalysis> {
        let v = self.lock();
        let start = v.len().saturating_sub(n);
        v.iter().skip(start).cloned().collect()
    }

    pub fn find(&self, id: &str) -> Option<ToneAnalysis> {
        self.lock().iter().find(|a| a.id == id).cloned()
    }
}
