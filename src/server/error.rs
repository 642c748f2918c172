use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{debug, error};

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{entity} with ID {id} not found")]
    NotFound { entity: &'static str, id: i32 },
    #[error("Invalid state transition: {0}")]
    InvalidState(String),
    #[error("No available copies of book ID {0}")]
    OutOfStock(i32),
    #[error("Student ID {0} already has an active bus assignment")]
    AlreadyAssigned(i32),
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Error::NotFound { .. } => (StatusCode::NOT_FOUND, self.to_string()),
            Error::InvalidState(_) | Error::OutOfStock(_) | Error::AlreadyAssigned(_) => {
                (StatusCode::CONFLICT, self.to_string())
            }
            Error::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, self.to_string()),
            Error::MissingEnvVar(_) | Error::DbErr(_) => {
                error!("Internal server error: {}", self);

                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response();
            }
        };

        debug!("Request rejected: {}", self);

        (status, Json(ErrorDto { error: message })).into_response()
    }
}
