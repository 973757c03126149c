use anyhow::Result;
use std::sync::Arc;
use tokio::{net::TcpListener, signal};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod error;
mod models;
mod password;
mod repositories;
mod routes;
mod service;
mod settings;
mod state;
mod validation;

use common::database::{health_check, init_database};

use crate::{
    repositories::MongoUserRepository, service::UserService, settings::Settings, state::AppState,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting user record service");

    let settings = Settings::load()?;
    info!(
        profile = ?settings.validation_profile,
        list_include_password_hash = settings.list_include_password_hash,
        "Settings loaded"
    );

    // Open the database handle once; it is shared by every request
    let database = init_database(&settings.database_config()).await?;

    if health_check(&database).await? {
        info!("Database connection successful");
    } else {
        anyhow::bail!("Failed to connect to database");
    }

    let user_repository = MongoUserRepository::new(&database);
    user_repository.ensure_indexes().await?;

    let user_service = UserService::new(
        Arc::new(user_repository),
        settings.validation_profile,
        settings.list_include_password_hash,
    );

    let app = routes::create_router(AppState { user_service });

    let address = settings.bind_address();
    let listener = TcpListener::bind(&address).await?;
    info!("User record service listening on {}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("User record service stopped");
    Ok(())
}

/// Resolve on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
