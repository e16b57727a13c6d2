use rocket::figment::providers::Serialized;
use rocket::figment::Figment;
use rocket::http::{ContentType, Header, Status};
use rocket::local::blocking::Client;
use serde_json::{json, Value};
use shared::{VoteResults, VOTE_RECORDED};

use crate::build_rocket;
use crate::config::{CorsConfig, VotingConfig, VOTING_KEY};

fn figment(voting: VotingConfig) -> Figment {
    Figment::from(rocket::Config::debug_default())
        .merge(("log_level", "off"))
        .merge(Serialized::default(VOTING_KEY, voting))
}

fn client_with(voting: VotingConfig) -> Client {
    Client::tracked(build_rocket(figment(voting)).unwrap()).unwrap()
}

fn client() -> Client {
    client_with(VotingConfig {
        categories: vec!["Hot".into(), "Mild".into(), "Cold".into()],
        ..Default::default()
    })
}

fn vote(client: &Client, user_id: &str, label: &str) -> (Status, String) {
    let response = client
        .post("/vote")
        .header(ContentType::JSON)
        .body(json!({ "userId": user_id, "vote": label }).to_string())
        .dispatch();
    (response.status(), response.into_string().unwrap_or_default())
}

fn results(client: &Client) -> VoteResults {
    let response = client.get("/results").dispatch();
    assert_eq!(response.status(), Status::Ok);
    assert_eq!(response.content_type(), Some(ContentType::JSON));
    response.into_json().unwrap()
}

fn counts(client: &Client) -> (u64, u64, u64) {
    let r = results(client);
    assert_eq!(r.len(), 3);
    (r["Hot"], r["Mild"], r["Cold"])
}

#[test]
fn results_start_at_zero() {
    let client = client();
    assert_eq!(counts(&client), (0, 0, 0));
}

#[test]
fn default_categories_are_served() {
    let client = client_with(VotingConfig::default());
    let r = results(&client);
    assert_eq!(r.len(), 3);
    assert_eq!(r.get("あつい"), Some(&0));
    assert_eq!(r.get("ちょうどよい"), Some(&0));
    assert_eq!(r.get("さむい"), Some(&0));

    assert_eq!(vote(&client, "u1", "さむい").0, Status::Ok);
    assert_eq!(results(&client).get("さむい"), Some(&1));
}

#[test]
fn accepted_vote_signals_success() {
    let client = client();
    let (status, body) = vote(&client, "u1", "Hot");
    assert_eq!(status, Status::Ok);
    assert_eq!(body, VOTE_RECORDED);
    assert_eq!(counts(&client), (1, 0, 0));
}

#[test]
fn reference_scenario_over_http() {
    let client = client();

    vote(&client, "u1", "Hot");
    assert_eq!(counts(&client), (1, 0, 0));
    vote(&client, "u1", "Cold");
    assert_eq!(counts(&client), (0, 0, 1));
    vote(&client, "u1", "Cold");
    assert_eq!(counts(&client), (0, 0, 2));
    vote(&client, "u2", "Hot");
    assert_eq!(counts(&client), (1, 0, 2));
}

#[test]
fn unknown_label_is_rejected_without_mutation() {
    let client = client();
    vote(&client, "u1", "Mild");

    let (status, body) = vote(&client, "u1", "Scorching");
    assert_eq!(status, Status::BadRequest);
    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["code"], "invalidCategory");
    assert_eq!(body["message"], "Invalid vote option");
    assert_eq!(body["details"], "Scorching");

    assert_eq!(counts(&client), (0, 1, 0));
}

#[test]
fn malformed_body_is_a_bad_request() {
    let client = client();

    let response = client.post("/vote").header(ContentType::JSON).body("{not json").dispatch();
    assert_eq!(response.status(), Status::BadRequest);
    let body: Value = response.into_json().unwrap();
    assert_eq!(body["code"], "malformedPayload");

    let response = client
        .post("/vote")
        .header(ContentType::JSON)
        .body(r#"{"vote":"Hot"}"#)
        .dispatch();
    assert_eq!(response.status(), Status::BadRequest);

    assert_eq!(counts(&client), (0, 0, 0));
}

#[test]
fn blank_user_id_is_rejected() {
    let client = client();
    let (status, body) = vote(&client, "  ", "Hot");
    assert_eq!(status, Status::BadRequest);
    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["code"], "invalidInput");
    assert_eq!(counts(&client), (0, 0, 0));
}

#[test]
fn empty_vote_label_is_an_unknown_option() {
    let client = client();
    let (status, body) = vote(&client, "u1", "");
    assert_eq!(status, Status::BadRequest);
    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["code"], "invalidCategory");
    assert_eq!(body["message"], "Invalid vote option");
    assert_eq!(counts(&client), (0, 0, 0));
}

#[test]
fn long_user_id_is_accepted() {
    let client = client();
    let (status, _) = vote(&client, &"x".repeat(4096), "Mild");
    assert_eq!(status, Status::Ok);
    assert_eq!(counts(&client), (0, 1, 0));
}

#[test]
fn wrong_method_is_not_allowed() {
    let client = client();

    let response = client.get("/vote").dispatch();
    assert_eq!(response.status(), Status::MethodNotAllowed);
    let body: Value = response.into_json().unwrap();
    assert_eq!(body["code"], "methodNotAllowed");
    assert_eq!(body["message"], "Invalid request method");

    for response in [
        client.put("/vote").dispatch(),
        client.patch("/vote").dispatch(),
        client.delete("/vote").dispatch(),
        client.post("/results").dispatch(),
        client.put("/results").dispatch(),
        client.patch("/results").dispatch(),
        client.delete("/results").dispatch(),
    ] {
        assert_eq!(response.status(), Status::MethodNotAllowed);
        let body: Value = response.into_json().unwrap();
        assert_eq!(body["code"], "methodNotAllowed");
    }

    assert_eq!(counts(&client), (0, 0, 0));
}

#[test]
fn unknown_path_uses_json_catcher() {
    let client = client();
    let response = client.get("/nowhere").dispatch();
    assert_eq!(response.status(), Status::NotFound);
    let body: Value = response.into_json().unwrap();
    assert_eq!(body["status"], 404);
}

#[test]
fn wildcard_cors_headers() {
    let client = client();

    let response = client
        .get("/results")
        .header(Header::new("Origin", "https://app.example"))
        .dispatch();
    let headers = response.headers();
    assert_eq!(headers.get_one("Access-Control-Allow-Origin"), Some("*"));
    assert_eq!(headers.get_one("Access-Control-Allow-Methods"), Some("GET, POST"));

    let response = client.get("/results").dispatch();
    assert!(response.headers().get_one("Access-Control-Allow-Origin").is_none());
}

#[test]
fn preflight_is_answered() {
    let client = client();
    let response = client
        .options("/vote")
        .header(Header::new("Origin", "https://app.example"))
        .header(Header::new("Access-Control-Request-Method", "POST"))
        .dispatch();
    assert_eq!(response.status(), Status::Ok);
    assert_eq!(response.headers().get_one("Access-Control-Allow-Origin"), Some("*"));
    assert_eq!(response.headers().get_one("Access-Control-Allow-Headers"), Some("Content-Type"));
}

#[test]
fn listed_origins_are_echoed() {
    let client = client_with(VotingConfig {
        cors: CorsConfig {
            allowed_origins: vec!["https://app.example".into()],
            ..Default::default()
        },
        ..Default::default()
    });

    let response = client
        .get("/results")
        .header(Header::new("Origin", "https://app.example"))
        .dispatch();
    assert_eq!(response.headers().get_one("Access-Control-Allow-Origin"), Some("https://app.example"));
    assert_eq!(response.headers().get_one("Vary"), Some("Origin"));

    let response = client
        .get("/results")
        .header(Header::new("Origin", "https://evil.example"))
        .dispatch();
    assert!(response.headers().get_one("Access-Control-Allow-Origin").is_none());
}

#[test]
fn invalid_category_config_fails_to_build() {
    let voting = VotingConfig { categories: vec![], ..Default::default() };
    assert!(build_rocket(figment(voting)).is_err());
}
