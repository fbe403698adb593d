use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::concepts::ConceptError;
use crate::session::SessionStoreError;

#[derive(Debug)]
pub enum AppError {
    Concept(ConceptError),
    SessionStore(SessionStoreError),
    MissingSession,
}

#[derive(Serialize)]
struct ErrorResponse {
    code: u16,
    msg: String,
}

impl From<ConceptError> for AppError {
    fn from(e: ConceptError) -> Self {
        AppError::Concept(e)
    }
}

impl From<SessionStoreError> for AppError {
    fn from(e: SessionStoreError) -> Self {
        AppError::SessionStore(e)
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Concept(ConceptError::Unauthenticated(_)) => StatusCode::UNAUTHORIZED,
            AppError::SessionStore(_) | AppError::MissingSession => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let msg = match self {
            AppError::Concept(e) => e.to_string(),
            AppError::SessionStore(e) => e.to_string(),
            AppError::MissingSession => "Session unavailable".to_string(),
        };

        let body = Json(ErrorResponse {
            code: status.as_u16(),
            msg,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthenticated_maps_to_401() {
        let err = AppError::from(ConceptError::unauthenticated("Must be logged in!"));
        assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(err.into_response().status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn store_failures_map_to_500() {
        let err = AppError::from(SessionStoreError::Backend("connection refused".into()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            AppError::MissingSession.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
