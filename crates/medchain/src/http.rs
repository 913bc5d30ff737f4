use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing};
use serde::Serialize;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::error::ChainError;
use crate::ledger::Ledger;
use crate::types::{CheckoutRecord, MedRecord};

/// JSON error body returned by every failing endpoint.
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub status: u16,
    pub message: String,
    pub detail: Option<String>,
}

impl ApiError {
    fn new(status: StatusCode, message: &str, detail: Option<String>) -> Self {
        Self {
            status: status.as_u16(),
            message: message.to_string(),
            detail,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

impl From<ChainError> for ApiError {
    fn from(value: ChainError) -> Self {
        let detail = Some(value.to_string());
        match value {
            ChainError::Linkage { .. } => {
                Self::new(StatusCode::CONFLICT, "block rejected: stale chain tail", detail)
            }
            ChainError::Serialization(_) => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "could not serialize checkout record",
                detail,
            ),
            ChainError::Integrity { .. }
            | ChainError::Ordering { .. }
            | ChainError::InvalidGenesis(_) => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "block rejected: chain integrity violation",
                detail,
            ),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub valid: bool,
    pub height: u64,
    pub broken_at: Option<usize>,
    pub reason: Option<String>,
}

/// HTTP API in front of the ledger.
pub struct LedgerApi {
    router: Router,
    ledger: Ledger,
}

impl LedgerApi {
    #[must_use]
    pub fn new(ledger: Ledger) -> Self {
        let router = Router::new()
            .route("/", routing::get(get_chain).post(write_block))
            .route("/new", routing::post(new_medrecord))
            .route("/validate", routing::get(validate_chain))
            .route("/height", routing::get(get_height))
            .route("/block/{position}", routing::get(get_block))
            .route("/health_check", routing::get(health_check))
            .layer(TraceLayer::new_for_http())
            .with_state(ledger.clone());

        Self { router, ledger }
    }

    #[must_use]
    pub const fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the HTTP server.
    ///
    /// # Errors
    /// Returns an error if the server fails to start.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        axum::serve(listener, self.router).await
    }
}

/// The whole chain, pretty-printed.
async fn get_chain(State(ledger): State<Ledger>) -> Result<Response, ApiError> {
    let blocks = ledger.snapshot().await;
    let body = serde_json::to_string_pretty(&blocks).map_err(|e| {
        ApiError::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "could not serialize chain",
            Some(e.to_string()),
        )
    })?;

    Ok(([(CONTENT_TYPE, "application/json")], body).into_response())
}

/// Append a checkout record to the chain.
async fn write_block(
    State(ledger): State<Ledger>,
    Json(record): Json<CheckoutRecord>,
) -> Result<impl IntoResponse, ApiError> {
    let block = ledger.append(record).await?;
    Ok(Json(block))
}

/// Assign an id to a new medical record and echo it back.
async fn new_medrecord(Json(record): Json<MedRecord>) -> impl IntoResponse {
    Json(record.with_derived_id())
}

async fn validate_chain(State(ledger): State<Ledger>) -> impl IntoResponse {
    let (height, result) = ledger.validate_with_height().await;
    let response = match result {
        Ok(()) => ValidateResponse {
            valid: true,
            height,
            broken_at: None,
            reason: None,
        },
        Err(broken) => {
            tracing::warn!(index = broken.index, error = %broken.reason, "chain failed validation");
            ValidateResponse {
                valid: false,
                height,
                broken_at: Some(broken.index),
                reason: Some(broken.reason.to_string()),
            }
        }
    };
    Json(response)
}

async fn get_height(State(ledger): State<Ledger>) -> impl IntoResponse {
    Json(serde_json::json!({ "height": ledger.height().await }))
}

async fn get_block(
    State(ledger): State<Ledger>,
    Path(position): Path<u64>,
) -> Result<impl IntoResponse, ApiError> {
    ledger.block(position).await.map(Json).ok_or_else(|| {
        ApiError::new(
            StatusCode::NOT_FOUND,
            "block not found",
            Some(format!("no block at position {position}")),
        )
    })
}

async fn health_check() -> StatusCode {
    StatusCode::OK
}
