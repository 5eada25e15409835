//! Handlers HTTP: extraen y validan la entrada, llaman a `ItemRegistry` y
//! eligen el status. No contienen reglas de negocio.
//!
//! Los extractores de path y query se reciben como `Result` para que un
//! valor ilegible responda 422 (`ApiError`) y no el 400 por defecto de axum.
use std::sync::Arc;

use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use item_core::{Item, ItemEvent, ItemRegistry, UpsertOutcome};
use serde::Deserialize;
use serde_json::{json, Value};

use super::params::{event_cursor, page_limit, AtParams, EventsParams, HistoryParams, ResetParams};
use crate::errors::ApiError;

pub type SharedRegistry = Arc<ItemRegistry>;

/// Cuerpo de `POST /items` y `PUT /items/{id}`.
#[derive(Debug, Deserialize)]
pub struct NameBody {
    pub name: String,
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn create_item(State(registry): State<SharedRegistry>,
                         Json(body): Json<NameBody>)
                         -> Result<(StatusCode, Json<Item>), ApiError> {
    let item = registry.create_item(&body.name)?;
    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn get_item(State(registry): State<SharedRegistry>,
                      path: Result<Path<u64>, PathRejection>,
                      query: Result<Query<AtParams>, QueryRejection>)
                      -> Result<Json<Item>, ApiError> {
    let Path(item_id) = path?;
    let Query(params) = query?;
    let at = event_cursor("at", params.at)?;
    Ok(Json(registry.get_item(item_id, at)?))
}

pub async fn list_items(State(registry): State<SharedRegistry>,
                        query: Result<Query<AtParams>, QueryRejection>)
                        -> Result<Json<Vec<Item>>, ApiError> {
    let Query(params) = query?;
    let at = event_cursor("at", params.at)?;
    Ok(Json(registry.list_items(at)))
}

pub async fn update_item(State(registry): State<SharedRegistry>,
                         path: Result<Path<u64>, PathRejection>,
                         Json(body): Json<NameBody>)
                         -> Result<(StatusCode, Json<Item>), ApiError> {
    let Path(item_id) = path?;
    let (item, outcome) = registry.update_item(item_id, &body.name)?;
    let status = match outcome {
        UpsertOutcome::Created => StatusCode::CREATED,
        UpsertOutcome::Updated => StatusCode::OK,
    };
    Ok((status, Json(item)))
}

pub async fn delete_item(State(registry): State<SharedRegistry>,
                         path: Result<Path<u64>, PathRejection>)
                         -> Result<StatusCode, ApiError> {
    let Path(item_id) = path?;
    registry.delete_item(item_id);
    Ok(StatusCode::NO_CONTENT)
}

pub async fn reset(State(registry): State<SharedRegistry>,
                   query: Result<Query<ResetParams>, QueryRejection>)
                   -> Result<StatusCode, ApiError> {
    let Query(params) = query?;
    registry.reset(params.keep_events);
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_events(State(registry): State<SharedRegistry>,
                         query: Result<Query<EventsParams>, QueryRejection>)
                         -> Result<Json<Vec<ItemEvent>>, ApiError> {
    let Query(params) = query?;
    let since = event_cursor("since", params.since)?;
    let limit = page_limit(params.limit)?;
    Ok(Json(registry.list_events(since, limit)))
}

pub async fn item_history(State(registry): State<SharedRegistry>,
                          path: Result<Path<u64>, PathRejection>,
                          query: Result<Query<HistoryParams>, QueryRejection>)
                          -> Result<Json<Vec<ItemEvent>>, ApiError> {
    let Path(item_id) = path?;
    let Query(params) = query?;
    let limit = page_limit(params.limit)?;
    Ok(Json(registry.item_history(item_id, params.include_resets, limit)))
}
