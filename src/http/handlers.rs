//! Request handlers for the gateway endpoints.

use crate::core::gateway::CommandGateway;
use crate::core::{CommandOutput, CommandRequest, RepositoryHost};
use crate::utils::error::{ErrorCategory, GatewayError, Result};
use axum::body::Bytes;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::Value;
use std::sync::Arc;

/// `POST /mcp/query`: run one command against the upstream API.
pub async fn query<H: RepositoryHost + 'static>(
    State(gateway): State<Arc<CommandGateway<H>>>,
    body: Bytes,
) -> std::result::Result<Json<CommandOutput>, GatewayError> {
    let outcome = match parse_body(&body) {
        Ok(request) => gateway.handle(request).await,
        Err(e) => Err(e),
    };

    match outcome {
        Ok(output) => Ok(Json(output)),
        Err(e) => {
            match e.category() {
                ErrorCategory::Client => tracing::warn!("Rejected query: {}", e),
                category => tracing::error!("Query failed: {} (Category: {:?})", e, category),
            }
            Err(e)
        }
    }
}

/// An empty body is a request without a command; anything else must be a JSON object.
fn parse_body(body: &[u8]) -> Result<CommandRequest> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(CommandRequest::default());
    }

    let value: Value = serde_json::from_slice(body).map_err(|e| GatewayError::InvalidBody {
        message: e.to_string(),
    })?;
    if !value.is_object() {
        return Err(GatewayError::InvalidBody {
            message: "expected a JSON object".to_string(),
        });
    }

    serde_json::from_value(value).map_err(|e| GatewayError::InvalidBody {
        message: e.to_string(),
    })
}

/// `GET /health`
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok"
    }))
}
