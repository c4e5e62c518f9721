//! Email Tone Analyzer: Binary Entrypoint
//! Boots the Axum HTTP server, wiring routes, shared state, and middleware.

use anyhow::Context;
use shuttle_axum::ShuttleAxum;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use email_tone_analyzer::api::{self, AppState};
use email_tone_analyzer::metrics::Metrics;
use email_tone_analyzer::ToneConfig;

/// Compact logs by default, JSON lines when `TONE_LOG_JSON=1`.
/// Filter comes from `RUST_LOG`, falling back to `tone=info,warn`.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tone=info,warn"));
    let json = std::env::var("TONE_LOG_JSON").ok().as_deref() == Some("1");

    // The runtime may already have installed a subscriber; keep theirs in that case.
    let _ = if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().compact())
            .try_init()
    };
}

#[shuttle_runtime::main]
async fn axum() -> ShuttleAxum {
    // Load .env in local/dev; no-op in prod environments.
    let _ = dotenvy::dotenv();

    init_tracing();

    let cfg = ToneConfig::load_default().context("loading tone config")?;
    info!(
        target: "tone",
        history_capacity = cfg.history.capacity,
        max_chars = cfg.limits.max_chars,
        top_n = cfg.keywords.top_n,
        "tone config loaded"
    );

    let state = AppState::from_config(&cfg);
    let mut router = api::router(state);

    if std::env::var("METRICS_ENABLED").ok().as_deref() == Some("1") {
        let metrics = Metrics::init(cfg.history.capacity)?;
        router = router.merge(metrics.router());
        info!(target: "tone", "prometheus /metrics mounted");
    }

    Ok(router.into())
}
