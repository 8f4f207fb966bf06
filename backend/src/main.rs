use anyhow::Result;
use backend::axum_http::http_serve;
use backend::config::config_loader;
use crates::infra::db::postgres::postgres_connection;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        error!("Backend exited with error: {:?}", error);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    crates::observability::init_observability("backend")?;

    let dotenvy_env = config_loader::load()?;
    info!(stage = %dotenvy_env.stage, "ENV has been loaded");

    let postgres_pool = Arc::new(postgres_connection::establish_connection(
        &dotenvy_env.database.url,
    )?);
    info!("Postgres connection has been established");

    if let Some(bootstrap) = dotenvy_env.admin_bootstrap.as_ref() {
        let created = http_serve::admin_auth_usecase(&dotenvy_env, Arc::clone(&postgres_pool))
            .bootstrap_admin(&bootstrap.username, &bootstrap.password)
            .await?;
        info!(created, username = %bootstrap.username, "Admin bootstrap checked");
    }

    http_serve::start(Arc::new(dotenvy_env), postgres_pool).await?;

    Ok(())
}
