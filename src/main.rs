mod configuration;
mod controllers;
mod data;

use std::sync::Arc;
use axum::Router;
use axum::extract::FromRef;
use axum::routing::{delete, get, post};
use tokio::signal;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use crate::configuration::Configuration;
use crate::data::activities_store::ActivitiesStore;

#[derive(FromRef, Clone)]
pub struct ApplicationState {
    configuration: Arc<Configuration>,
    activities: ActivitiesStore
}

impl ApplicationState {
    pub fn new(configuration: Configuration, activities: ActivitiesStore) -> Self {
        Self {
            configuration: Arc::new(configuration),
            activities
        }
    }
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into())
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let configuration_path = Configuration::path();
    tracing::info!("Loading configuration from {:?}", configuration_path);
    let configuration = Configuration::load(&configuration_path).await?;

    let activities = ActivitiesStore::seeded();
    tracing::info!("Seeded {} activities", activities.len().await);

    let addr = configuration.listen_address;
    let app = build_router(ApplicationState::new(configuration, activities));

    tracing::info!("Listening on {}", addr);
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down");
    Ok(())
}

pub fn build_router(application_state: ApplicationState) -> Router {
    let static_files = ServeDir::new(&application_state.configuration.static_directory);

    Router::new()
        .route("/", get(controllers::base::root))
        .route("/activities", get(controllers::activities::list_activities))
        .route("/activities/:activityName/signup", post(controllers::activities::signup))
        .route("/activities/:activityName/unregister", delete(controllers::activities::unregister))
        .nest_service("/static", static_files)
        .with_state(application_state)
        .layer(TraceLayer::new_for_http())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }

        tracing::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install terminate handler: {}", e);
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
}
