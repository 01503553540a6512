pub mod course;
pub mod health;
pub mod outcome;
pub mod program;
pub mod root;

use axum::http::StatusCode;
use sea_orm::DbErr;

/// Logs a database failure and hides it behind a 500
pub(crate) fn internal_error(err: DbErr) -> StatusCode {
    log::error!("Database error: {err}");
    StatusCode::INTERNAL_SERVER_ERROR
}
