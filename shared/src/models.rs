use serde::{Serialize, Deserialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VoteRequest {
    pub user_id: String,
    pub vote: String,
}

/// Body of `GET /results`: category label to count.
pub type VoteResults = HashMap<String, u64>;

pub const VOTE_RECORDED: &str = "Vote recorded successfully";
