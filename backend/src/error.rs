use rocket::http::Status;
use rocket::response::Responder;
use rocket::serde::json::Json;
use shared::{Error, ErrorCode, ValidationError, VotingError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid vote option: {0}")]
    InvalidCategory(String),
    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] ValidationError),
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),
    #[error("Invalid request method")]
    MethodNotAllowed,
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<VotingError> for ApiError {
    fn from(err: VotingError) -> Self {
        match err {
            VotingError::InvalidCategory(label) => ApiError::InvalidCategory(label),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl ApiError {
    pub fn status(&self) -> Status {
        match self {
            ApiError::InvalidCategory(_) => Status::BadRequest,
            ApiError::InvalidRequest(_) => Status::BadRequest,
            ApiError::MalformedPayload(_) => Status::BadRequest,
            ApiError::MethodNotAllowed => Status::MethodNotAllowed,
            ApiError::Internal(_) => Status::InternalServerError,
        }
    }

    pub fn body(&self) -> Error {
        match self {
            ApiError::InvalidCategory(label) => VotingError::InvalidCategory(label.clone()).into(),
            ApiError::InvalidRequest(e) => Error::new(ErrorCode::InvalidInput, e.to_string()),
            ApiError::MalformedPayload(reason) => {
                Error::with_details(ErrorCode::MalformedPayload, "Malformed request body", reason.clone())
            }
            ApiError::MethodNotAllowed => Error::new(ErrorCode::MethodNotAllowed, self.to_string()),
            ApiError::Internal(_) => Error::new(ErrorCode::SystemError, "An internal server error occurred."),
        }
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for ApiError {
    fn respond_to(self, req: &'r rocket::Request<'_>) -> rocket::response::Result<'o> {
        let status = self.status();

        rocket::Response::build_from(Json(self.body()).respond_to(req)?)
            .status(status)
            .ok()
    }
}
