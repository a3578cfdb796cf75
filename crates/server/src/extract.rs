//! Extractor wrappers whose rejections render as [`JsonApiError`] (422) instead of axum's plain text.
use axum::async_trait;
use axum::extract::FromRequest;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use service::errors::ServiceError;

use crate::errors::JsonApiError;

#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(JsonApiError))]
pub struct ValidJson<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(JsonApiError))]
pub struct ValidPath<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(JsonApiError))]
pub struct ValidQuery<T>(pub T);

/// `:id` path segment.
///
/// Any integer is accepted. One outside the `i32` key range cannot match a row, so it resolves to
/// NotFound rather than a validation error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordId {
    Key(i32),
    OutOfRange,
}

impl RecordId {
    pub fn parse(raw: &str) -> Result<Self, JsonApiError> {
        if let Ok(id) = raw.parse::<i32>() {
            return Ok(Self::Key(id));
        }
        let digits = raw.strip_prefix(|c: char| c == '-' || c == '+').unwrap_or(raw);
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self::OutOfRange)
        } else {
            Err(JsonApiError::invalid(format!("Invalid URL: Cannot parse `{raw}` to an integer")))
        }
    }

    /// The key to look up, or NotFound for `entity` when no row can carry this id.
    pub fn key(self, entity: &str) -> Result<i32, JsonApiError> {
        match self {
            Self::Key(id) => Ok(id),
            Self::OutOfRange => Err(ServiceError::not_found(entity).into()),
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = JsonApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let ValidPath(raw) = ValidPath::<String>::from_request_parts(parts, state).await?;
        Self::parse(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn in_range_ids_are_keys() {
        assert_eq!(RecordId::parse("17").unwrap(), RecordId::Key(17));
        assert_eq!(RecordId::parse("-3").unwrap(), RecordId::Key(-3));
    }

    #[test]
    fn oversized_integers_resolve_to_not_found() {
        for raw in ["3000000000", "-3000000000", "99999999999999999999999"] {
            let id = RecordId::parse(raw).unwrap();
            assert_eq!(id, RecordId::OutOfRange);
            let err = id.key("Patient").unwrap_err();
            assert_eq!(err.status, StatusCode::NOT_FOUND);
            assert_eq!(err.detail.as_deref(), Some("Patient not found"));
        }
    }

    #[test]
    fn non_integers_are_rejected() {
        for raw in ["abc", "", "-", "1.5", "12x"] {
            assert_eq!(RecordId::parse(raw).unwrap_err().status, StatusCode::UNPROCESSABLE_ENTITY, "{raw}");
        }
    }
}
