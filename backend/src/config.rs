use rocket::figment::providers::{Env, Format, Serialized, Toml};
use rocket::figment::{Figment, Profile};
use serde::{Deserialize, Serialize};
use shared::{Categories, VotingError, DEFAULT_CATEGORIES};
use thiserror::Error;

pub const DEFAULT_ADDRESS: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const VOTING_KEY: &str = "voting";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Figment(#[from] Box<rocket::figment::Error>),
    #[error("Invalid vote categories: {0}")]
    Categories(#[from] VotingError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["*".into()],
            allowed_methods: vec!["GET".into(), "POST".into()],
            allowed_headers: vec!["Content-Type".into()],
        }
    }
}

/// The `[voting]` table of the Rocket configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VotingConfig {
    pub categories: Vec<String>,
    pub cors: CorsConfig,
}

impl Default for VotingConfig {
    fn default() -> Self {
        Self {
            categories: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
            cors: CorsConfig::default(),
        }
    }
}

impl VotingConfig {
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        figment.extract_inner(VOTING_KEY).map_err(|e| ConfigError::Figment(Box::new(e)))
    }

    pub fn categories(&self) -> Result<Categories, ConfigError> {
        Ok(Categories::new(self.categories.iter().cloned())?)
    }
}

/// Rocket's own provider chain with the service defaults slotted in under
/// `Rocket.toml` and `ROCKET_*` overrides.
pub fn figment() -> Figment {
    Figment::from(rocket::Config::default())
        .merge(("address", DEFAULT_ADDRESS))
        .merge(("port", DEFAULT_PORT))
        .merge(Serialized::default(VOTING_KEY, VotingConfig::default()))
        .merge(Toml::file(Env::var_or("ROCKET_CONFIG", "Rocket.toml")).nested())
        .merge(Env::prefixed("ROCKET_").ignore(&["PROFILE"]).global())
        .select(Profile::from_env_or("ROCKET_PROFILE", rocket::Config::DEFAULT_PROFILE))
}
