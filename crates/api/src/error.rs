use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use estate_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// A missing referenced row is a [`CoreError::NotFound`]; every other
/// failure collapses into [`AppError::Unhandled`], which carries the
/// handler's message and the raw failure text. Transient and permanent
/// database failures are not told apart.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `estate_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Any other failure, described by the operation that hit it.
    #[error("{message}: {error}")]
    Unhandled { message: &'static str, error: String },
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// Attach a handler message to a fallible call, turning its error into
/// [`AppError::Unhandled`].
pub trait OrUnhandled<T> {
    fn or_unhandled(self, message: &'static str) -> AppResult<T>;
}

impl<T, E: std::fmt::Display> OrUnhandled<T> for Result<T, E> {
    fn or_unhandled(self, message: &'static str) -> AppResult<T> {
        self.map_err(|e| AppError::Unhandled {
            message,
            error: e.to_string(),
        })
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Core(CoreError::NotFound { entity, id }) => (
                StatusCode::NOT_FOUND,
                json!({
                    "error": format!("{entity} with id {id} not found"),
                    "code": "NOT_FOUND",
                }),
            ),
            AppError::Unhandled { message, error } => {
                tracing::error!(%error, "{message}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "message": message,
                        "error": error,
                        "code": "INTERNAL_ERROR",
                    }),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}
