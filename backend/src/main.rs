//! Personnel API entry-point: loads settings, connects to PostgreSQL and
//! serves the REST endpoints.

mod server;

use actix_web::web;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use personnel::inbound::http::health::HealthState;
use personnel::outbound::persistence::DbPool;
use personnel::settings::AppSettings;

use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::from_process().map_err(std::io::Error::other)?;
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;
    let mut config = ServerConfig::new(bind_addr, settings.runtime_mode());

    if let Some(pool_config) = settings.pool_config() {
        match DbPool::new(pool_config).await {
            Ok(pool) => config = config.with_db_pool(pool),
            Err(e) => {
                error!(error = %e, "database pool unavailable");
                return Err(std::io::Error::other(e));
            }
        }
    } else {
        info!("PERSONNEL_DATABASE_URL not set");
    }

    let health_state = web::Data::new(HealthState::new());
    create_server(health_state, config)?.await
}
