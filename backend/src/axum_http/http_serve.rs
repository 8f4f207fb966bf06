use crate::{
    axum_http::{default_routers, routers},
    config::config_model::DotEnvyConfig,
    usecases::{admin_auth::AdminAuthUseCase, checkout::UpiPayee},
};
use anyhow::{Context, Result};
use axum::{
    Router,
    http::{
        HeaderValue, Method,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
    routing::get,
};
use crates::{
    infra::{
        cms::sanity_client::{SanityClient, SanityConfig},
        db::{
            postgres::postgres_connection::PgPoolSquad,
            repositories::{admin_sessions::AdminSessionPostgres, admin_users::AdminUserPostgres},
        },
    },
    payments::razorpay_client::RazorpayClient,
};
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tokio::net::TcpListener;
use tower_http::{
    cors::CorsLayer, limit::RequestBodyLimitLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use tracing::{error, info};

pub fn admin_auth_usecase(
    config: &DotEnvyConfig,
    db_pool: Arc<PgPoolSquad>,
) -> AdminAuthUseCase<AdminUserPostgres, AdminSessionPostgres> {
    AdminAuthUseCase::new(
        Arc::new(AdminUserPostgres::new(Arc::clone(&db_pool))),
        Arc::new(AdminSessionPostgres::new(Arc::clone(&db_pool))),
        chrono::Duration::hours(config.session.ttl_hours),
    )
}

pub async fn start(config: Arc<DotEnvyConfig>, db_pool: Arc<PgPoolSquad>) -> Result<()> {
    let sanity_client = Arc::new(SanityClient::new(SanityConfig {
        project_id: config.sanity.project_id.clone(),
        dataset: config.sanity.dataset.clone(),
        api_version: config.sanity.api_version.clone(),
        token: config.sanity.token.clone(),
        use_cdn: config.sanity.use_cdn,
    }));
    let razorpay_client = Arc::new(RazorpayClient::new(
        config.razorpay.key_id.clone(),
        config.razorpay.key_secret.clone(),
    ));
    let upi_payee = UpiPayee {
        vpa: config.upi.vpa.clone(),
        payee_name: config.upi.payee_name.clone(),
    };
    let admin_auth = Arc::new(admin_auth_usecase(&config, Arc::clone(&db_pool)));

    let frontend_origin = HeaderValue::from_str(&config.backend_server.frontend_origin)
        .context("FRONTEND_ORIGIN is not a valid header value")?;

    let app = Router::new()
        .fallback(default_routers::not_found)
        .nest(
            "/api/auth",
            routers::admin_auth::routes(
                Arc::clone(&admin_auth),
                config.stage.requires_secure_cookies(),
            ),
        )
        .nest(
            "/api/content",
            routers::content::routes(Arc::clone(&sanity_client)),
        )
        .nest(
            "/api/coupons",
            routers::coupons::routes(Arc::clone(&db_pool), Arc::clone(&sanity_client)),
        )
        .nest(
            "/api/checkout",
            routers::checkout::routes(
                Arc::clone(&db_pool),
                Arc::clone(&sanity_client),
                razorpay_client,
                upi_payee,
            ),
        )
        .nest(
            "/api/packages",
            routers::packages::routes(Arc::clone(&db_pool), Arc::clone(&admin_auth)),
        )
        .nest(
            "/api/testimonials",
            routers::testimonials::routes(Arc::clone(&db_pool), Arc::clone(&admin_auth)),
        )
        .nest(
            "/api/blogs",
            routers::blogs::routes(Arc::clone(&db_pool), Arc::clone(&admin_auth)),
        )
        .nest(
            "/api/payments",
            routers::payment_trackings::routes(Arc::clone(&db_pool), Arc::clone(&admin_auth)),
        )
        .nest(
            "/api/leads",
            routers::leads::routes(Arc::clone(&db_pool), Arc::clone(&admin_auth)),
        )
        .merge(routers::leads::submit_routes(Arc::clone(&db_pool)))
        .route("/api/health-check", get(default_routers::health_check))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.backend_server.timeout,
        )))
        .layer(RequestBodyLimitLayer::new(
            (config.backend_server.body_limit * 1024 * 1024).try_into()?,
        ))
        .layer(
            // Credentials need an explicit origin, never a wildcard.
            CorsLayer::new()
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([AUTHORIZATION, CONTENT_TYPE])
                .allow_origin(frontend_origin)
                .allow_credentials(true),
        )
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.backend_server.port));
    let listener = TcpListener::bind(addr).await?;

    info!(
        port = config.backend_server.port,
        stage = %config.stage,
        "Server is running"
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(error = ?err, "Failed to install CTRL+C signal handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                error!(error = ?err, "Failed to install terminate signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received ctrl+C signal"),
        _ = terminate => info!("Received terminate signal"),
    }
}
