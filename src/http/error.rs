//! The single place where failures become status codes and JSON bodies.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::error::Error as StoreError;

/// Body of the framework-level 404 (unknown route or non-integer id).
pub const ROUTE_NOT_FOUND: &str = "404 Not Found: The requested URL was not found on the server. \
If you entered the URL manually please check your spelling and try again.";

/// Body of the 405 for a known path hit with the wrong method.
pub const METHOD_NOT_ALLOWED: &str =
    "405 Method Not Allowed: The method is not allowed for the requested URL.";

/// What the handler was doing when an unclassified error hit. Picks the
/// prefix of the generic 500 message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    /// `GET /items/{id}`
    Get,
    /// `POST /items`
    Create,
    /// `PUT /items/{id}`
    Update,
    /// `DELETE /items/{id}`
    Delete,
}

impl Operation {
    fn failure_prefix(self) -> &'static str {
        match self {
            Operation::Get => "Error obteniendo el elemento",
            Operation::Create => "Error agregando el elemento",
            Operation::Update => "Error actualizando el elemento",
            Operation::Delete => "Error eliminando el elemento",
        }
    }
}

/// Error returned by every handler, rendered as `{"error": "<message>"}`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// 400
    #[error("Solicitud incorrecta: {0}")]
    BadRequest(String),

    /// 404 for a well-formed id that matches nothing.
    #[error("Elemento no encontrado")]
    ItemNotFound,

    /// 404 for a path the router does not know.
    #[error("{}", ROUTE_NOT_FOUND)]
    RouteNotFound,

    /// 405 for a known path hit with an unsupported method.
    #[error("{}", METHOD_NOT_ALLOWED)]
    MethodNotAllowed,

    /// 500 after a failed write. Memory already holds the change.
    #[error("Error guardando los datos: {0}")]
    Save(String),

    /// 500 for anything else.
    #[error("{}: {message}", .operation.failure_prefix())]
    Internal {
        /// Handler that failed.
        operation: Operation,
        /// Underlying description.
        message: String,
    },
}

impl ApiError {
    /// Validation failure for a missing required field.
    pub fn missing_field(field: &str) -> Self {
        ApiError::BadRequest(format!("El campo '{field}' es obligatorio"))
    }

    /// Classify a store error raised while running `operation`.
    pub fn from_store(operation: Operation, err: StoreError) -> Self {
        match err {
            StoreError::MissingField(field) => Self::missing_field(field),
            StoreError::NotFound(_) => ApiError::ItemNotFound,
            StoreError::Persistence(msg) => ApiError::Save(msg),
            other => ApiError::Internal {
                operation,
                message: other.to_string(),
            },
        }
    }

    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::ItemNotFound | ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Save(_) | ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(%status, error = %self, "request failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
