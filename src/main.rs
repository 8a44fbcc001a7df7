use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use babyname_match::config::{LoggingSettings, Settings, StoreBackend};
use babyname_match::routes::{self, AppState};
use babyname_match::services::{MemoryRepository, PostgresRepository, Repository};
use std::io;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn init_logging(logging: &LoggingSettings) {
    // RUST_LOG wins over the configured level when set
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.level.as_str()));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match logging.format.as_str() {
        "pretty" => subscriber.pretty().init(),
        "compact" => subscriber.compact().init(),
        _ => subscriber.init(),
    }
}

async fn build_repository(settings: &Settings) -> io::Result<Arc<dyn Repository>> {
    match settings.store.backend {
        StoreBackend::Memory => {
            warn!("Using in-memory store, judgments will be lost on restart");
            Ok(Arc::new(MemoryRepository::new()))
        }
        StoreBackend::Postgres => {
            let db = &settings.database;
            let repo = PostgresRepository::from_settings(
                &db.url,
                db.max_connections,
                db.min_connections,
                db.acquire_timeout_secs,
                db.idle_timeout_secs,
            )
            .await
            .map_err(|e| {
                error!("Failed to connect to PostgreSQL: {}", e);
                io::Error::new(io::ErrorKind::Other, e)
            })?;

            info!(
                "PostgreSQL repository initialized (max: {} connections)",
                db.max_connections.unwrap_or(10)
            );
            Ok(Arc::new(repo))
        }
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;

    init_logging(&settings.logging);

    info!("Starting babyname matching service...");
    info!("Configuration loaded successfully (store: {:?})", settings.store.backend);

    let repo = build_repository(&settings).await?;
    let app_state = AppState::new(repo);

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .configure(routes::configure_extractors)
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
