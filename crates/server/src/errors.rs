use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

/// JSON error body: `{"error": <title>, "detail": <message>}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: &'static str,
    pub detail: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: &'static str, detail: Option<String>) -> Self {
        Self { status, error, detail }
    }

    pub(crate) fn invalid(detail: String) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, "Validation Error", Some(detail))
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        (self.status, Json(serde_json::json!({"error": self.error, "detail": self.detail}))).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, "Not Found", Some(msg)),
            ServiceError::Validation(_) => Self::invalid(e.to_string()),
            ServiceError::Conflict(_) => Self::new(StatusCode::CONFLICT, "Conflict", Some(e.to_string())),
            ServiceError::Db(_) => {
                error!(err = %e, "database operation failed");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Database Error", Some("internal database error".into()))
            }
        }
    }
}

impl From<JsonRejection> for JsonApiError {
    fn from(r: JsonRejection) -> Self { Self::invalid(r.body_text()) }
}

impl From<PathRejection> for JsonApiError {
    fn from(r: PathRejection) -> Self { Self::invalid(r.body_text()) }
}

impl From<QueryRejection> for JsonApiError {
    fn from(r: QueryRejection) -> Self { Self::invalid(r.body_text()) }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("database unavailable: {0}")]
    Database(String),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_status_codes() {
        let cases = [
            (ServiceError::not_found("Doctor"), StatusCode::NOT_FOUND),
            (ServiceError::Validation("FullName required".into()), StatusCode::UNPROCESSABLE_ENTITY),
            (ServiceError::Conflict("UNIQUE".into()), StatusCode::CONFLICT),
            (ServiceError::Db("boom".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(JsonApiError::from(err).status, status);
        }
    }

    #[test]
    fn database_error_text_stays_out_of_the_body() {
        let e = JsonApiError::from(ServiceError::Db("relation \"Patients\" does not exist".into()));
        assert_eq!(e.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(e.detail.as_deref(), Some("internal database error"));
    }

    #[test]
    fn not_found_detail_is_entity_specific() {
        let e = JsonApiError::from(ServiceError::not_found("Treatment"));
        assert_eq!(e.detail.as_deref(), Some("Treatment not found"));
    }
}
