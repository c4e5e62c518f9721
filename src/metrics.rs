use anyhow::Context;
use axum::{routing::get, Router};
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use crate::analysis::Sentiment;

pub struct Metrics {
    pub handle: PrometheusHandle,
}

impl Metrics {
    /// Install the global Prometheus recorder and publish the history capacity.
    /// Fails if a recorder is already installed in this process.
    pub fn init(history_capacity: usize) -> anyhow::Result<Self> {
        let handle = PrometheusBuilder::new()
            .install_recorder()
            .context("prometheus: install recorder")?;

        gauge!("tone_history_capacity").set(history_capacity as f64);

        Ok(Self { handle })
    }

    /// Returns a router exposing `/metrics` with the Prometheus exposition format.
    pub fn router(&self) -> Router {
        let handle = self.handle.clone();
        Router::new().route(
            "/metrics",
            get(move || {
                let h = handle.clone();
                async move { h.render() }
            }),
        )
    }
}

// The helpers below are no-ops until `Metrics::init` installs a recorder.

pub fn record_analysis(sentiment: Sentiment, duration_ms: f64) {
    counter!("tone_analyses_total", "sentiment" => sentiment.as_str()).increment(1);
    histogram!("tone_analysis_duration_ms").record(duration_ms);
}

pub fn record_failure() {
    counter!("tone_analysis_failures_total").increment(1);
}

pub fn set_history_len(len: usize) {
    gauge!("tone_history_len").set(len as f64);
}
