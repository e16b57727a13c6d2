use backend::{build_rocket, config};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[rocket::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    info!("🚀 Starting vote server");

    let rocket = build_rocket(config::figment()).map_err(|e| {
        error!("Could not configure server: {}", e);
        e
    })?;

    if let Err(e) = rocket.launch().await {
        error!("Could not start server: {}", e);
        return Err(e.into());
    }

    info!("Server shut down");
    Ok(())
}
