//! Conversions from external infrastructure errors into domain errors.

use reqwest::Error as HttpError;
use reqwest::StatusCode;
use rizzmaster_domain::RizzError;
use rusqlite::Error as SqlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub RizzError);

impl From<InfraError> for RizzError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<RizzError> for InfraError {
    fn from(value: RizzError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoRizzError {
    fn into_rizz(self) -> RizzError;
}

/* -------------------------------------------------------------------------- */
/* rusqlite::Error → RizzError */
/* -------------------------------------------------------------------------- */

impl IntoRizzError for SqlError {
    fn into_rizz(self) -> RizzError {
        use rusqlite::ffi::ErrorCode;
        use rusqlite::Error as RE;

        match self {
            RE::SqliteFailure(err, maybe_message) => {
                let message = maybe_message.unwrap_or_default();
                match err.code {
                    ErrorCode::DatabaseBusy => RizzError::Database("database is busy".into()),
                    ErrorCode::DatabaseLocked => RizzError::Database("database is locked".into()),
                    ErrorCode::CannotOpen => {
                        RizzError::Database(format!("unable to open local store: {message}"))
                    }
                    _ => RizzError::Database(format!(
                        "sqlite failure {:?} (code {}): {}",
                        err.code, err.extended_code, message
                    )),
                }
            }
            RE::QueryReturnedNoRows => RizzError::NotFound("no rows returned by query".into()),
            RE::FromSqlConversionFailure(_, _, cause) => {
                RizzError::Database(format!("failed to convert sqlite value: {cause}"))
            }
            RE::InvalidColumnType(_, _, ty) => {
                RizzError::Database(format!("invalid column type: {ty}"))
            }
            RE::InvalidPath(path) => RizzError::Database(format!(
                "invalid database path: {}",
                path.to_string_lossy()
            )),
            other => RizzError::Database(other.to_string()),
        }
    }
}

impl From<SqlError> for InfraError {
    fn from(value: SqlError) -> Self {
        InfraError(value.into_rizz())
    }
}

/* -------------------------------------------------------------------------- */
/* r2d2::Error → RizzError */
/* -------------------------------------------------------------------------- */

impl From<r2d2::Error> for InfraError {
    fn from(value: r2d2::Error) -> Self {
        InfraError(RizzError::Database(format!("connection pool error: {value}")))
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → RizzError */
/* -------------------------------------------------------------------------- */

impl IntoRizzError for serde_json::Error {
    fn into_rizz(self) -> RizzError {
        use serde_json::error::Category;

        match self.classify() {
            Category::Io => RizzError::Internal(format!("JSON I/O failure: {self}")),
            Category::Syntax | Category::Eof => {
                RizzError::Database(format!("stored record is not valid JSON: {self}"))
            }
            Category::Data => {
                RizzError::Database(format!("stored record has unexpected shape: {self}"))
            }
        }
    }
}

impl From<serde_json::Error> for InfraError {
    fn from(value: serde_json::Error) -> Self {
        InfraError(value.into_rizz())
    }
}

/* -------------------------------------------------------------------------- */
/* tokio::task::JoinError → RizzError */
/* -------------------------------------------------------------------------- */

impl From<tokio::task::JoinError> for InfraError {
    fn from(value: tokio::task::JoinError) -> Self {
        InfraError(RizzError::Internal(format!("blocking task failed: {value}")))
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → RizzError */
/* -------------------------------------------------------------------------- */

/// Map an HTTP status (plus optional server-provided detail) onto the domain
/// taxonomy.
pub fn status_to_error(status: StatusCode, detail: Option<&str>) -> RizzError {
    let code = status.as_u16();
    let mut message = format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));
    if let Some(detail) = detail.filter(|d| !d.trim().is_empty()) {
        message.push_str(": ");
        message.push_str(detail.trim());
    }

    match code {
        401 | 403 => RizzError::Auth(message),
        404 => RizzError::NotFound(message),
        429 => RizzError::Network(message),
        400..=499 => RizzError::InvalidInput(message),
        _ => RizzError::Network(message),
    }
}

impl IntoRizzError for HttpError {
    fn into_rizz(self) -> RizzError {
        if self.is_timeout() {
            return RizzError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return RizzError::Network("HTTP connection failure".into());
        }

        if let Some(status) = self.status() {
            return status_to_error(status, None);
        }

        if self.is_decode() {
            return RizzError::Network(format!("unexpected response body: {self}"));
        }

        RizzError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_rizz())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
