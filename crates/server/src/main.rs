// Copyright (C) 2026 PawCare Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions, clippy::unused_async)]

use axum::{
    Json, Router,
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use pawcare_api::{
    ApiError, ApplyCommandRequest, ApplyCommandResponse, ReturnQuery, SchedulePreviewRequest,
    SchedulePreviewResponse, StartWizardRequest, SubmissionResponse, WizardResponse,
    WizardStateDto, apply_command, preview_schedule, resume_wizard, start_wizard, submit_booking,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// `PawCare` booking server - HTTP surface for the booking wizard
///
/// The server keeps no drafts. Clients hold the wizard state and send it
/// with every request.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to bind the server to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct HealthResponse {
    status: String,
    version: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match err {
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::DomainRuleViolation { .. } | ApiError::IncompleteBooking { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        warn!(status = %status, error = %err, "Request failed");
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Handler for GET `/health` endpoint.
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: String::from("ok"),
        version: String::from(env!("CARGO_PKG_VERSION")),
    })
}

/// Handler for POST `/schedule/preview` endpoint.
///
/// Expands a recurrence pattern and prices the resulting sessions.
async fn handle_preview_schedule(
    Json(req): Json<SchedulePreviewRequest>,
) -> Result<Json<SchedulePreviewResponse>, HttpError> {
    Ok(Json(preview_schedule(req)?))
}

/// Handler for POST `/wizard/start` endpoint.
///
/// Starts a blank draft, or a rebooking when a prior booking is supplied.
async fn handle_start_wizard(
    Json(req): Json<StartWizardRequest>,
) -> Result<Json<WizardResponse>, HttpError> {
    Ok(Json(start_wizard(req)?))
}

/// Handler for GET `/wizard/resume` endpoint.
///
/// Restores a draft from return-navigation query parameters.
async fn handle_resume_wizard(
    Query(query): Query<ReturnQuery>,
) -> Result<Json<WizardResponse>, HttpError> {
    Ok(Json(resume_wizard(query)?))
}

/// Handler for POST `/wizard/apply` endpoint.
async fn handle_apply_command(
    Json(req): Json<ApplyCommandRequest>,
) -> Result<Json<ApplyCommandResponse>, HttpError> {
    Ok(Json(apply_command(req)?))
}

/// Handler for POST `/wizard/submit` endpoint.
///
/// Validates a draft on review and returns the payload for payment.
async fn handle_submit_booking(
    Json(state): Json<WizardStateDto>,
) -> Result<Json<SubmissionResponse>, HttpError> {
    Ok(Json(submit_booking(state)?))
}

/// Builds the application router with all endpoints.
fn build_router() -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .route("/schedule/preview", post(handle_preview_schedule))
        .route("/wizard/start", post(handle_start_wizard))
        .route("/wizard/resume", get(handle_resume_wizard))
        .route("/wizard/apply", post(handle_apply_command))
        .route("/wizard/submit", post(handle_submit_booking))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing PawCare booking server");

    let app: Router = build_router();

    // Bind to address
    let addr: std::net::SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
