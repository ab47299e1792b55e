//! Route handlers for the article generation API.

use crate::agent::{Agent, AgentConfig, journalist_system};
use crate::llm::ChatClient;
use crate::pipeline::{ProgressCallback, generate_article};
use crate::request::{Credentials, GenerationRequest};
use crate::server::AppState;
use crate::server::ui::INDEX_HTML;
use crate::tools::{FetchTool, SearchTool};
use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::{
        Html, IntoResponse, Response,
        sse::{Event as SseEvent, KeepAlive, Sse},
    },
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::convert::Infallible;
use std::sync::Arc;
use tokio_stream::StreamExt;
use tokio_stream::wrappers::BroadcastStream;

/// Error payload returned to the UI: a single generic message containing
/// the underlying error text, regardless of category.
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

/// GET / - Embedded single-page UI
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /health - Health check
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// PUT /credentials - Install session credentials
pub async fn put_credentials(
    State(state): State<AppState>,
    Json(credentials): Json<Credentials>,
) -> StatusCode {
    *state.credentials.lock().unwrap() = Some(credentials);
    StatusCode::NO_CONTENT
}

#[derive(Serialize)]
pub struct GenerateResponse {
    research: String,
    analysis: String,
    article: String,
    download_url: &'static str,
}

/// POST /generate - Run the three-stage pipeline synchronously
///
/// On success the intermediate texts and article are stored in the
/// session; on failure the session is left unchanged and the error text is
/// returned as-is.
pub async fn generate(
    State(state): State<AppState>,
    Json(request): Json<GenerationRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let credentials = state
        .credentials
        .lock()
        .unwrap()
        .clone()
        .ok_or_else(|| ApiError::new(StatusCode::UNAUTHORIZED, "credentials not configured"))?;

    request
        .validate()
        .map_err(|e| ApiError::new(StatusCode::UNPROCESSABLE_ENTITY, e.to_string()))?;

    tracing::info!(topic = %request.topic, model = request.model.id(), "generating article");

    let agent = build_journalist_agent(&credentials, &request);

    let progress_state = state.clone();
    let progress: ProgressCallback = Arc::new(move |event| progress_state.emit_progress(event));

    match generate_article(&agent, &request, Some(progress)).await {
        Ok(bundle) => {
            state.session.lock().unwrap().record(&request, &bundle);
            Ok(Json(GenerateResponse {
                research: bundle.research,
                analysis: bundle.analysis,
                article: bundle.article,
                download_url: "/download",
            }))
        }
        Err(e) => Err(ApiError::new(StatusCode::BAD_GATEWAY, e.to_string())),
    }
}

/// One journalist agent with both capabilities, reused for all three
/// stages of the request.
fn build_journalist_agent(credentials: &Credentials, request: &GenerationRequest) -> Agent {
    let config = AgentConfig::new(request.model.id()).system(journalist_system(request));

    let mut agent =
        Agent::new(ChatClient::new(&credentials.llm_api_key), config).verbose(true);
    agent.register(SearchTool::new(&credentials.search_api_key));
    agent.register(FetchTool::new());
    agent
}

/// GET /events - Server-sent progress milestones
pub async fn event_stream(
    State(state): State<AppState>,
) -> Sse<impl tokio_stream::Stream<Item = Result<SseEvent, Infallible>>> {
    let receiver = state.subscribe();
    let stream = BroadcastStream::new(receiver).filter_map(|result| {
        let event = result.ok()?;
        let json = serde_json::to_string(&event).ok()?;
        Some(Ok(SseEvent::default().event("progress").data(json)))
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}

/// GET /download - Last article as a markdown attachment
pub async fn download(State(state): State<AppState>) -> Result<Response, ApiError> {
    let stored = state
        .session
        .lock()
        .unwrap()
        .last_article
        .clone()
        .ok_or_else(|| ApiError::new(StatusCode::NOT_FOUND, "no article generated yet"))?;

    let headers = [
        (header::CONTENT_TYPE, "text/markdown; charset=utf-8".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", stored.filename),
        ),
    ];
    Ok((headers, stored.body).into_response())
}

#[derive(Deserialize)]
pub struct FeedbackBody {
    rating: FeedbackRating,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
enum FeedbackRating {
    Great,
    Good,
    NeedsImprovement,
}

/// POST /feedback - Acknowledge article feedback; nothing is persisted
pub async fn feedback(Json(body): Json<FeedbackBody>) -> impl IntoResponse {
    let message = match body.rating {
        FeedbackRating::Great => "Thanks for your positive feedback!",
        FeedbackRating::Good => "Thanks for your feedback! What could be improved?",
        FeedbackRating::NeedsImprovement => "We appreciate your honest feedback!",
    };
    Json(json!({ "message": message }))
}
