use rocket::fairing::{Fairing, Info, Kind};
use rocket::{Request, Response};
use rocket::http::Header;

use crate::config::CorsConfig;

const WILDCARD: &str = "*";
const MAX_AGE_SECS: &str = "86400";

pub struct CORS {
    allowed_origins: Vec<String>,
    allowed_methods: String,
    allowed_headers: String,
}

impl CORS {
    pub fn new(config: &CorsConfig) -> Self {
        Self {
            allowed_origins: config.allowed_origins.clone(),
            allowed_methods: config.allowed_methods.join(", "),
            allowed_headers: config.allowed_headers.join(", "),
        }
    }

    fn allows_any(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == WILDCARD)
    }

    fn allows(&self, origin: &str) -> bool {
        self.allows_any() || self.allowed_origins.iter().any(|o| o == origin)
    }
}

impl Default for CORS {
    fn default() -> Self {
        Self::new(&CorsConfig::default())
    }
}

#[rocket::async_trait]
impl Fairing for CORS {
    fn info(&self) -> Info {
        Info {
            name: "CORS",
            kind: Kind::Response
        }
    }

    async fn on_response<'r>(&self, req: &'r Request<'_>, res: &mut Response<'r>) {
        let Some(origin) = req.headers().get_one("Origin") else { return };
        if !self.allows(origin) {
            return;
        }

        if self.allows_any() {
            res.set_header(Header::new("Access-Control-Allow-Origin", WILDCARD));
        } else {
            res.set_header(Header::new("Access-Control-Allow-Origin", origin.to_string()));
            res.set_header(Header::new("Vary", "Origin"));
        }
        res.set_header(Header::new("Access-Control-Allow-Methods", self.allowed_methods.clone()));
        res.set_header(Header::new("Access-Control-Allow-Headers", self.allowed_headers.clone()));
        res.set_header(Header::new("Access-Control-Max-Age", MAX_AGE_SECS));
    }
}
