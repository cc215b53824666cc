//! HTTP server for the Overtime Computation Engine.

use overtime_engine::api::{AppState, create_router};
use overtime_engine::config::ConfigLoader;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the YAML configuration file.
const CONFIG_PATH_ENV: &str = "OVERTIME_ENGINE_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "./config/engine.yaml";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(fmt::layer())
        .init();

    let config_path =
        std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let config = ConfigLoader::load(&config_path)?.apply_env_overrides();

    let policy = config.policy();
    info!(
        config_path = %config_path,
        daily_base_hours = %policy.daily_base_hours,
        default_lunch_minutes = policy.default_lunch_minutes,
        weekly_target_hours = %policy.weekly_target_hours,
        "Loaded configuration"
    );

    let bind_address = config.server().bind_address.clone();
    let app = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!(address = %bind_address, "Overtime engine listening");
    axum::serve(listener, app).await?;

    Ok(())
}
