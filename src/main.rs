use actix_web::{web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use content_api::auth::adapter::outgoing::AuthAdapterPostgres;
use content_api::auth::application::ports::outgoing::AuthAdapter;
use content_api::auth::application::services::{ExpiredRecordSweeper, SessionResolver};
use content_api::config::AppConfig;
use content_api::content::adapter::outgoing::StaticContentQuery;
use content_api::content::application::services::ListContentService;
use content_api::{init_routes, shutdown, AppState};

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Try .env.{environment} first, then fall back to .env
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env().context("Invalid configuration")?;
    let server_url = config.bind_address();

    // Database connection
    let mut opt = ConnectOptions::new(config.database.url.clone());
    opt.max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect_timeout(config.database.connect_timeout)
        .acquire_timeout(config.database.connect_timeout)
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;

    if config.run_migrations {
        Migrator::up(&conn, None)
            .await
            .context("Failed to apply migrations")?;
        info!("Migrations applied");
    }

    let db_arc = Arc::new(conn);

    let auth_adapter: Arc<dyn AuthAdapter> = Arc::new(AuthAdapterPostgres::new(Arc::clone(&db_arc)));

    let sweeper_handle = config.sweep_interval.map(|period| {
        info!(period_secs = period.as_secs(), "Expired record sweeper enabled");
        let sweeper = ExpiredRecordSweeper::new(Arc::clone(&auth_adapter));
        actix_web::rt::spawn(sweeper.run_every(period))
    });

    let state = AppState {
        list_content_use_case: Arc::new(ListContentService::new(StaticContentQuery::new())),
        resolve_session_use_case: Arc::new(SessionResolver::new(Arc::clone(&auth_adapter))),
        content_requires_session: config.content_requires_session,
        session_cookie_names: config.session_cookie_names.clone(),
    };

    info!(
        address = %server_url,
        content_requires_session = config.content_requires_session,
        "Server listening"
    );

    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .configure(init_routes)
    })
    .bind(&server_url)
    .with_context(|| format!("Failed to bind {server_url}"))?
    .run()
    .await?;

    info!("Server stopped, shutting down");

    drop(auth_adapter);
    shutdown(sweeper_handle, db_arc)
        .await
        .context("Failed to close database")?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
