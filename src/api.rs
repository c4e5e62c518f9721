use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shuttle_axum::axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::CorsLayer;
use tracing::debug;

use crate::analysis::{AnalysisResponse, Envelope, Sentiment, ToneAnalysis, ToneScores};
use crate::analyze::{suggest, Breakdown};
use crate::config::tone::LimitsSection;
use crate::config::ToneConfig;
use crate::samples::{self, EmailSample};
use crate::service::ToneService;

pub const ENV_DEBUG_ROUTES: &str = "DEBUG_ROUTES";

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ToneService>,
    pub limits: LimitsSection,
    /// Mounts `/debug/*` when set.
    pub debug_routes: bool,
}

impl AppState {
    pub fn from_config(cfg: &ToneConfig) -> Self {
        Self {
            service: Arc::new(ToneService::new(cfg)),
            limits: cfg.limits.clone(),
            debug_routes: std::env::var(ENV_DEBUG_ROUTES).ok().as_deref() == Some("1"),
        }
    }

    /// Config from `TONE_CONFIG_PATH` / `config/tone.toml` / defaults, plus env overrides.
    pub fn from_env() -> anyhow::Result<Self> {
        let cfg = ToneConfig::load_default()?;
        Ok(Self::from_config(&cfg))
    }
}

pub fn router(state: AppState) -> Router {
    let mut r = Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/v1/analyze", post(analyze))
        .route("/v1/analysis/{id}", get(get_analysis))
        .route("/v1/history", get(history))
        .route("/v1/batch", post(batch))
        .route("/v1/samples", get(list_samples))
        .route("/v1/samples/{id}", get(get_sample));

    if state.debug_routes {
        r = r
            .route("/debug/breakdown", get(debug_breakdown))
            .route("/debug/rules", get(debug_rules));
    }

    r.layer(CorsLayer::very_permissive()).with_state(state)
}

/// Failure response carrying the usual `{ success: false, error }` body.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(rejection.status(), rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(Envelope::<()>::failed(self.message))).into_response()
    }
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeOptions {
    #[serde(default = "default_true")]
    pub include_suggestions: bool,
    #[serde(default)]
    pub confidence_threshold: f32,
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_true() -> bool {
    true
}
fn default_language() -> String {
    "en".to_string()
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            include_suggestions: true,
            confidence_threshold: 0.0,
            language: default_language(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeReq {
    pub email_content: String,
    #[serde(default)]
    pub options: AnalyzeOptions,
}

/// `/v1/analyze` payload: the stored analysis shaped by the request options.
#[derive(Debug, Serialize)]
pub struct AnalyzeData {
    pub id: String,
    pub email_content: String,
    pub timestamp: DateTime<Utc>,
    pub overall_sentiment: Sentiment,
    pub confidence: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tones: Option<ToneScores>,
    pub suggestions: Vec<String>,
    pub keywords: Vec<String>,
    pub processing_time_ms: f64,
}

impl AnalyzeData {
    fn shape(a: ToneAnalysis, opts: &AnalyzeOptions, processing_time_ms: f64) -> Self {
        let tones = (a.confidence >= opts.confidence_threshold).then_some(a.tones);
        let suggestions = if opts.include_suggestions {
            a.suggestions
        } else {
            Vec::new()
        };
        Self {
            id: a.id,
            email_content: a.email_content,
            timestamp: a.timestamp,
            overall_sentiment: a.overall_sentiment,
            confidence: a.confidence,
            tones,
            suggestions,
            keywords: a.keywords,
            processing_time_ms,
        }
    }
}

fn check_length(text: &str, limits: &LimitsSection) -> Result<(), ApiError> {
    let chars = text.chars().count();
    if chars > limits.max_chars {
        return Err(ApiError::new(
            StatusCode::PAYLOAD_TOO_LARGE,
            format!("Email exceeds {} characters", limits.max_chars),
        ));
    }
    Ok(())
}

async fn analyze(
    State(state): State<AppState>,
    body: Result<Json<AnalyzeReq>, JsonRejection>,
) -> Result<Json<Envelope<AnalyzeData>>, ApiError> {
    let Json(body) = body?;
    if !body.options.language.eq_ignore_ascii_case("en") {
        debug!(target: "tone", language = %body.options.language, "rejecting unsupported language");
        return Err(ApiError::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            format!("Unsupported language: {}", body.options.language),
        ));
    }
    check_length(&body.email_content, &state.limits)?;

    let started = Instant::now();
    let resp = state.service.analyze(&body.email_content);
    let elapsed_ms = started.elapsed().as_secs_f64() * 1_000.0;

    match resp.into_result() {
        Ok(a) => Ok(Json(Envelope::ok(AnalyzeData::shape(
            a,
            &body.options,
            elapsed_ms,
        )))),
        Err(msg) => Err(ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, msg)),
    }
}

async fn get_analysis(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<ToneAnalysis>>, ApiError> {
    state
        .service
        .get_by_id(&id)
        .map(|a| Json(Envelope::ok(a)))
        .ok_or_else(|| ApiError::new(StatusCode::NOT_FOUND, format!("Analysis not found: {id}")))
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<usize>,
}

async fn history(
    State(state): State<AppState>,
    Query(q): Query<HistoryQuery>,
) -> Json<Envelope<Vec<ToneAnalysis>>> {
    let rows = match q.limit {
        Some(n) => state.service.history_last_n(n),
        None => state.service.history(),
    };
    Json(Envelope::ok(rows))
}

#[derive(Debug, Deserialize)]
pub struct BatchReq {
    pub emails: Vec<String>,
}

async fn batch(
    State(state): State<AppState>,
    body: Result<Json<BatchReq>, JsonRejection>,
) -> Result<Json<Vec<AnalysisResponse>>, ApiError> {
    let Json(body) = body?;
    if body.emails.len() > state.limits.max_batch {
        return Err(ApiError::new(
            StatusCode::PAYLOAD_TOO_LARGE,
            format!("Batch exceeds {} emails", state.limits.max_batch),
        ));
    }

    let out = body
        .emails
        .iter()
        .map(|text| match check_length(text, &state.limits) {
            Ok(()) => state.service.analyze(text),
            Err(e) => Envelope::failed(e.message),
        })
        .collect();
    Ok(Json(out))
}

async fn list_samples() -> Json<Envelope<&'static [EmailSample]>> {
    Json(Envelope::ok(samples::samples()))
}

async fn get_sample(Path(id): Path<String>) -> Result<Json<Envelope<EmailSample>>, ApiError> {
    samples::find(&id)
        .map(|s| Json(Envelope::ok(*s)))
        .ok_or_else(|| ApiError::new(StatusCode::NOT_FOUND, format!("Sample not found: {id}")))
}

#[derive(Debug, Deserialize)]
pub struct BreakdownQuery {
    #[serde(default)]
    pub text: String,
}

async fn debug_breakdown(
    State(state): State<AppState>,
    Query(q): Query<BreakdownQuery>,
) -> Json<Breakdown> {
    Json(state.service.engine().breakdown(&q.text))
}

async fn debug_rules() -> Json<Vec<&'static str>> {
    Json(suggest::RULES.iter().map(|r| r.name).collect())
}
