//! Application error taxonomy.
//!
//! Every error crosses the HTTP boundary as an [`ErrorBody`] JSON object.
//! The machine-readable `code` picks the HTTP status code and the message
//! from a fixed catalog, see [`lookup`].

use aide::OperationIo;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use db::DbErr;
use derive_more::{Display, Error};
use schemars::JsonSchema;
use serde::Serialize;
use tracing::error;

/// Errors produced by the quality workflow.
#[derive(Debug, Display, Error, OperationIo)]
#[aide(output)]
pub enum AppError {
    /// Requested entity does not exist.
    #[display(fmt = "not found: {}", detail)]
    NotFound { detail: String },

    /// Caller-supplied input or record state violates a precondition.
    #[display(fmt = "validation error: {}", detail)]
    Validation { detail: String },

    /// Database-related error.
    #[display(fmt = "database error: {}", _0)]
    Database(DbErr),

    /// Reserved for authentication failures.
    #[allow(dead_code)]
    #[display(fmt = "unauthorized: {}", detail)]
    Unauthorized { detail: String },
}

impl AppError {
    pub(crate) fn not_found(detail: impl Into<String>) -> Self {
        Self::NotFound {
            detail: detail.into(),
        }
    }

    pub(crate) fn validation(detail: impl Into<String>) -> Self {
        Self::Validation {
            detail: detail.into(),
        }
    }

    /// Stable machine-readable error code.
    pub(crate) fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "not_found",
            Self::Validation { .. } => "validation_error",
            Self::Database(_) => "database_error",
            Self::Unauthorized { .. } => "unauthorized",
        }
    }

    /// Diagnostic detail attached to the error response.
    pub(crate) fn detail(&self) -> String {
        match self {
            Self::NotFound { detail }
            | Self::Validation { detail }
            | Self::Unauthorized { detail } => detail.clone(),
            Self::Database(err) => err.to_string(),
        }
    }

    /// Status code and JSON body of this error.
    pub(crate) fn to_parts(&self) -> (StatusCode, ErrorBody) {
        ErrorBody::new(self.code(), Some(self.detail()))
    }
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        Self::Database(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Self::Database(err) = &self {
            error!(%err, "database request failed");
        }

        let (status, body) = self.to_parts();

        (status, Json(body)).into_response()
    }
}

/// Error catalog entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct CatalogEntry {
    pub status: StatusCode,
    pub message: &'static str,
}

/// Code used for errors missing from the catalog.
pub(crate) const UNKNOWN_ERROR: &str = "unknown_error";

/// Find a catalog entry for the provided error code.
pub(crate) fn lookup(code: &str) -> Option<CatalogEntry> {
    let (status, message) = match code {
        "not_found" => (
            StatusCode::NOT_FOUND,
            "The requested resource does not exist.",
        ),
        "validation_error" => (
            StatusCode::UNPROCESSABLE_ENTITY,
            "The provided data is not valid.",
        ),
        "database_error" => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "A database error occurred.",
        ),
        "unauthorized" => (StatusCode::UNAUTHORIZED, "Unauthorized."),
        _ => return None,
    };

    Some(CatalogEntry { status, message })
}

/// JSON error response body.
#[derive(Serialize, JsonSchema, Debug, PartialEq, Eq)]
pub(crate) struct ErrorBody {
    /// Machine-readable error code.
    pub code: String,

    /// Human-readable error message.
    pub message: String,

    /// Diagnostic detail.
    pub detail: Option<String>,
}

impl ErrorBody {
    /// Build an error body for an arbitrary code.
    ///
    /// Codes unknown to the catalog degrade to a generic server error.
    pub(crate) fn new(code: &str, detail: Option<String>) -> (StatusCode, Self) {
        match lookup(code) {
            Some(entry) => (
                entry.status,
                Self {
                    code: code.to_owned(),
                    message: entry.message.to_owned(),
                    detail,
                },
            ),
            None => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Self {
                    code: UNKNOWN_ERROR.to_owned(),
                    message: String::from("Unexpected error."),
                    detail,
                },
            ),
        }
    }
}
