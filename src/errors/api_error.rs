//! Traducción de errores del registro a respuestas HTTP.
//!
//! - validación -> 422 con `{"detail": [{"msg": ...}]}`
//! - conflicto -> 409 con `{"detail": "Name already exists"}`
//! - no encontrado -> 404 con `{"detail": "Item not found"}`
//! - query/path ilegible (p.ej. `?at=abc`) -> 422, igual que la validación
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use item_core::{ErrorClass, RegistryError};
use log::debug;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Registry(#[from] RegistryError),
    /// Parámetro de query fuera de rango (se valida antes de llamar al core).
    #[error("invalid query parameter `{param}`: {msg}")]
    InvalidQuery { param: &'static str, msg: String },
    /// Query o path que el extractor no pudo deserializar.
    #[error("malformed {loc}: {msg}")]
    Malformed { loc: &'static str, msg: String },
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Malformed { loc: "query",
                          msg: rejection.body_text() }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::Malformed { loc: "path",
                          msg: rejection.body_text() }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Registry(e) => match e.class() {
                ErrorClass::Validation => StatusCode::UNPROCESSABLE_ENTITY,
                ErrorClass::Conflict => StatusCode::CONFLICT,
                ErrorClass::NotFound => StatusCode::NOT_FOUND,
            },
            Self::InvalidQuery { .. } | Self::Malformed { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        debug!("request failed status={} error={self}", status.as_u16());
        let body = match &self {
            Self::Registry(e) if e.class() == ErrorClass::Validation => {
                json!({ "detail": [{ "loc": ["body"], "msg": e.to_string(), "type": "value_error" }] })
            }
            Self::Registry(e) => json!({ "detail": e.to_string() }),
            Self::InvalidQuery { param, msg } => {
                json!({ "detail": [{ "loc": ["query", param], "msg": msg, "type": "value_error" }] })
            }
            Self::Malformed { loc, msg } => {
                json!({ "detail": [{ "loc": [loc], "msg": msg, "type": "type_error" }] })
            }
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_follows_error_class() {
        assert_eq!(ApiError::from(RegistryError::name_too_short()).status(),
                   StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(ApiError::from(RegistryError::name_taken()).status(), StatusCode::CONFLICT);
        assert_eq!(ApiError::from(RegistryError::NotFound { item_id: 3 }).status(),
                   StatusCode::NOT_FOUND);
        let q = ApiError::InvalidQuery { param: "limit",
                                         msg: "must be at most 1000".into() };
        assert_eq!(q.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn unparsable_query_maps_to_422() {
        #[derive(Debug, serde::Deserialize)]
        struct At {
            #[allow(dead_code)]
            at: Option<i64>,
        }
        let uri: axum::http::Uri = "/items?at=abc".parse().unwrap();
        let rejection = axum::extract::Query::<At>::try_from_uri(&uri).unwrap_err();
        let err = ApiError::from(rejection);
        assert!(matches!(err, ApiError::Malformed { loc: "query", .. }));
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
