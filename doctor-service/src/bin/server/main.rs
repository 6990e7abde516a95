use std::sync::Arc;

use auth::Authenticator;
use auth::CredentialHasher;
use doctor_service::config::Config;
use doctor_service::domain::doctor::service::DoctorService;
use doctor_service::inbound::http::router::create_router;
use doctor_service::outbound::repositories::PostgresDoctorRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "doctor_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "doctor-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    // Fails fast when the token secret is absent
    let config = Config::load()?;

    tracing::info!(
        database_url = %config.database.url,
        http_port = config.server.http_port,
        hash_cost = config.auth.hash_cost,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let hasher = Arc::new(CredentialHasher::new(config.auth.hash_cost)?);
    let authenticator = Arc::new(Authenticator::new(
        config.auth.token_secret.as_bytes(),
        Arc::clone(&hasher),
    ));
    let repository = Arc::new(PostgresDoctorRepository::new(pg_pool));
    let doctor_service = Arc::new(DoctorService::new(repository, hasher));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let application = create_router(doctor_service, authenticator);
    axum::serve(http_listener, application).await?;

    Ok(())
}
