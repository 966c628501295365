use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("Data error: {0}")]
    Data(String),
    #[error("Template error: {0}")]
    Template(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    BadRequest(String),
}

pub type Result<T> = std::result::Result<T, AppError>;

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

/// Maps errors reaching a handler boundary to the fixed JSON error bodies.
/// Anything that is not a not-found or bad-request condition is reported as
/// a generic 500 without leaking detail to the caller.
impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::NotFound(msg) => HttpResponse::NotFound().json(json!({ "error": msg })),
            AppError::BadRequest(msg) => {
                HttpResponse::BadRequest().json(json!({ "status": "error", "message": msg }))
            }
            _ => HttpResponse::InternalServerError()
                .json(json!({ "error": "Internal server error" })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn not_found_maps_to_404() {
        let err = AppError::NotFound("Project not found".into());
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn bad_request_maps_to_400() {
        let err = AppError::BadRequest("No data received".into());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn internal_errors_stay_opaque() {
        let err = AppError::Template("boom".into());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = err.error_response();
        assert_eq!(body.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
