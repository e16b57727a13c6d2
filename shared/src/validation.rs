use crate::models::VoteRequest;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing user id")]
    MissingUserId,
}

/// Only checks that a user id is present. The vote label is left to
/// `Categories::parse` so an empty label reads as an unknown option.
pub fn validate_vote_request(request: &VoteRequest) -> Result<(), ValidationError> {
    if request.user_id.trim().is_empty() { return Err(ValidationError::MissingUserId); }
    Ok(())
}
