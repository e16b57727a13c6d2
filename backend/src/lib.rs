pub mod catchers;
pub mod config;
pub mod cors;
pub mod error;
pub mod routes;
pub mod store;

use rocket::figment::Figment;
use rocket::{catchers, routes, Build, Rocket};

use crate::catchers::{bad_request, internal_error, not_found};
use crate::config::{ConfigError, VotingConfig};
use crate::cors::CORS;
use crate::routes::{
    all_options, cast_vote, get_results,
    vote_delete, vote_get, vote_patch, vote_put,
    results_delete, results_patch, results_post, results_put,
};
use crate::store::VoteStore;

/// Assembles the server from a figment carrying both Rocket's settings and
/// the `[voting]` table.
pub fn build_rocket(figment: Figment) -> Result<Rocket<Build>, ConfigError> {
    let voting = VotingConfig::from_figment(&figment)?;
    let store = VoteStore::new(voting.categories()?);

    Ok(rocket::custom(figment)
        .attach(CORS::new(&voting.cors))
        .manage(store)
        .mount(
            "/",
            routes![
                cast_vote,
                get_results,
                vote_get,
                vote_put,
                vote_patch,
                vote_delete,
                results_post,
                results_put,
                results_patch,
                results_delete,
                all_options
            ],
        )
        .register("/", catchers![bad_request, not_found, internal_error]))
}

#[cfg(test)]
mod tests;
