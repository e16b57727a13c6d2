use rocket::{State, delete, get, patch, post, put, http::Status, serde::json::{self, Json}};
use tracing::{debug, info, instrument, warn};
use shared::{models::*, validation::validate_vote_request, Tally};
use crate::{error::ApiError, store::VoteStore};

#[rocket::options("/<_..>")]
pub async fn all_options() -> Status {
    Status::Ok
}

#[instrument(skip(store, request))]
#[post("/vote", data = "<request>")]
pub fn cast_vote(
    store: &State<VoteStore>,
    request: Result<Json<VoteRequest>, json::Error<'_>>,
) -> Result<&'static str, ApiError> {
    let request = request
        .map_err(|e| {
            warn!("Undecodable vote request: {}", e);
            ApiError::MalformedPayload(e.to_string())
        })?
        .into_inner();

    if let Err(e) = validate_vote_request(&request) {
        warn!("Rejected vote request: {}", e);
        return Err(e.into());
    }

    let outcome = store.cast_vote(&request.user_id, &request.vote).map_err(|e| {
        warn!(user_id = %request.user_id, "Rejected vote: {}", e);
        ApiError::from(e)
    })?;

    info!(user_id = %request.user_id, vote = %request.vote, "Vote received");
    if let Some(previous) = &outcome.previous {
        debug!(user_id = %request.user_id, "Replaced previous vote {}", previous);
    }
    debug!("Current counts: {:?}", outcome.tally);

    Ok(VOTE_RECORDED)
}

#[get("/results")]
pub fn get_results(store: &State<VoteStore>) -> Json<Tally> {
    Json(store.snapshot())
}

// Every other verb on the two endpoints answers 405 rather than falling
// through to the 404 catcher.

#[get("/vote")]
pub fn vote_get() -> ApiError { ApiError::MethodNotAllowed }

#[put("/vote")]
pub fn vote_put() -> ApiError { ApiError::MethodNotAllowed }

#[patch("/vote")]
pub fn vote_patch() -> ApiError { ApiError::MethodNotAllowed }

#[delete("/vote")]
pub fn vote_delete() -> ApiError { ApiError::MethodNotAllowed }

#[post("/results")]
pub fn results_post() -> ApiError { ApiError::MethodNotAllowed }

#[put("/results")]
pub fn results_put() -> ApiError { ApiError::MethodNotAllowed }

#[patch("/results")]
pub fn results_patch() -> ApiError { ApiError::MethodNotAllowed }

#[delete("/results")]
pub fn results_delete() -> ApiError { ApiError::MethodNotAllowed }
