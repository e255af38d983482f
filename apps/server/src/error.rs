use aurora_market_data::{ErrorKind, MarketDataError, SnapshotError, SnapshotField};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    MarketData(#[from] MarketDataError),
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    BadRequest(String),
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    kind: Option<ErrorKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<SnapshotField>,
}

/// HTTP status for a provider failure.
///
/// A missing credential is the server's configuration problem, and failures
/// on the far side of an adapter are reported as gateway errors.
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
        ErrorKind::AuthenticationFailed => StatusCode::BAD_GATEWAY,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Upstream => StatusCode::BAD_GATEWAY,
        ErrorKind::Transport => StatusCode::GATEWAY_TIMEOUT,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, kind, field) = match &self {
            ApiError::MarketData(e) => (status_for(e.kind()), Some(e.kind()), None),
            ApiError::Snapshot(e) => (status_for(e.kind()), Some(e.kind()), Some(e.field)),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, None, None),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, None, None),
        };
        if status.is_server_error() {
            tracing::warn!("Request failed with {}: {}", status, self);
        }
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message: self.to_string(),
            kind,
            field,
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(status_for(ErrorKind::NotConfigured), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(status_for(ErrorKind::AuthenticationFailed), StatusCode::BAD_GATEWAY);
        assert_eq!(status_for(ErrorKind::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(status_for(ErrorKind::Upstream), StatusCode::BAD_GATEWAY);
        assert_eq!(status_for(ErrorKind::Transport), StatusCode::GATEWAY_TIMEOUT);
    }

    #[test]
    fn test_snapshot_error_response_status() {
        let err = ApiError::from(SnapshotError {
            symbol: "AAPL".to_string(),
            field: SnapshotField::News,
            source: MarketDataError::Transport {
                provider: "BENZINGA".to_string(),
                message: "request timed out".to_string(),
            },
        });
        assert_eq!(err.into_response().status(), StatusCode::GATEWAY_TIMEOUT);
    }
}
