use anyhow::Context;
use axum::Router;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod config;
mod error;
mod routes;

use adapters::EdamamClient;
use application::FoodSearchService;
use config::Config;

/// Application service with the concrete provider implementation
pub type AppFoodSearchService = FoodSearchService<EdamamClient>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub food_search: Arc<AppFoodSearchService>,
}

impl AppState {
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let edamam = EdamamClient::new(&config.edamam_base_url, config.upstream_timeout)
            .context("Failed to initialize Edamam client")?;
        let food_search = FoodSearchService::new(Arc::new(edamam), config.credentials.clone());

        Ok(Self {
            food_search: Arc::new(food_search),
        })
    }
}

pub fn build_router(state: AppState) -> Router {
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .merge(routes::root::router())
        .merge(routes::food::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("🥦 Nutri API initializing...");

    let config = Config::from_env();

    if config.credentials.is_some() {
        tracing::info!("🔐 Edamam credentials loaded");
    } else {
        tracing::warn!(
            "⚠️  EDAMAM_APP_ID / EDAMAM_APP_KEY not set - /search-food will answer 500"
        );
    }
    tracing::info!(
        "🌐 Edamam endpoint: {} (timeout {:?})",
        config.edamam_base_url,
        config.upstream_timeout
    );

    let state = AppState::from_config(&config)?;
    let router = build_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Nutri API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("👋 Nutri API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
