use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

/// Errors returned by the API handlers. Every variant renders as a JSON body
/// `{"message": ..., "error": ...}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(&'static str),

    #[error("{message}")]
    BadRequest {
        message: &'static str,
        detail: String,
    },

    /// `context` is the user-facing message for the failed operation
    #[error("{context}: {source}")]
    Database {
        context: &'static str,
        #[source]
        source: mongodb::error::Error,
    },
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiError {
    /// Adapter for `map_err` on driver calls
    pub fn database(context: &'static str) -> impl FnOnce(mongodb::error::Error) -> Self {
        move |source| ApiError::Database { context, source }
    }

    pub fn body(&self) -> ErrorBody {
        match self {
            ApiError::NotFound(message) => ErrorBody {
                message: message.to_string(),
                error: None,
            },
            ApiError::BadRequest { message, detail } => ErrorBody {
                message: message.to_string(),
                error: Some(detail.clone()),
            },
            ApiError::Database { context, source } => ErrorBody {
                message: context.to_string(),
                error: Some(source.to_string()),
            },
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ApiError::Database { context, source } = self {
            log::error!("{}: {}", context, source);
        }
        HttpResponse::build(self.status_code()).json(self.body())
    }
}
