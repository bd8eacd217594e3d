//! Request handlers for the `/items` resource.
//!
//! Store calls run inline: the response goes out only after the data file
//! has been rewritten (or the write has failed).

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

use super::error::{ApiError, Operation};
use super::SharedStore;
use crate::item::{Item, NAME_FIELD};

fn item_id(path: Result<Path<u64>, PathRejection>) -> Result<u64, ApiError> {
    match path {
        Ok(Path(id)) => Ok(id),
        Err(rejection) => {
            tracing::debug!(%rejection, "rejected item id");
            Err(ApiError::RouteNotFound)
        }
    }
}

/// `GET /items`
pub async fn list_items(State(store): State<SharedStore>) -> Json<Vec<Item>> {
    Json(store.list())
}

/// `GET /items/{id}`
pub async fn get_item(
    State(store): State<SharedStore>,
    path: Result<Path<u64>, PathRejection>,
) -> Result<Json<Item>, ApiError> {
    let id = item_id(path)?;
    store
        .get(id)
        .map(Json)
        .map_err(|e| ApiError::from_store(Operation::Get, e))
}

/// `POST /items`
pub async fn create_item(
    State(store): State<SharedStore>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let body = match payload {
        Ok(Json(body)) => body,
        Err(rejection) => {
            tracing::debug!(%rejection, "rejected create body");
            return Err(ApiError::missing_field(NAME_FIELD));
        }
    };
    let item = store
        .create(body)
        .map_err(|e| ApiError::from_store(Operation::Create, e))?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// `PUT /items/{id}`
pub async fn update_item(
    State(store): State<SharedStore>,
    path: Result<Path<u64>, PathRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Item>, ApiError> {
    let id = item_id(path)?;
    let patch = match payload {
        Ok(Json(Value::Object(patch))) => patch,
        other => {
            if let Err(rejection) = other {
                tracing::debug!(%rejection, "rejected update body");
            }
            // unknown ids report 404 before the body is judged
            if !store.contains(id) {
                return Err(ApiError::ItemNotFound);
            }
            return Err(ApiError::BadRequest(
                "El cuerpo debe ser un objeto JSON".to_owned(),
            ));
        }
    };
    store
        .update(id, patch)
        .map(Json)
        .map_err(|e| ApiError::from_store(Operation::Update, e))
}

/// `DELETE /items/{id}`
pub async fn delete_item(
    State(store): State<SharedStore>,
    path: Result<Path<u64>, PathRejection>,
) -> Result<Json<Value>, ApiError> {
    let id = item_id(path)?;
    store
        .delete(id)
        .map_err(|e| ApiError::from_store(Operation::Delete, e))?;
    Ok(Json(json!({ "mensaje": "Elemento eliminado" })))
}

/// Anything the router does not know.
pub async fn not_found() -> ApiError {
    ApiError::RouteNotFound
}

/// Known path, unsupported method.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
