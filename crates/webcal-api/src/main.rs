// Web Calendar API server
// Decision: Store handle is built once in main and injected through router state
// Decision: CORS layer is only added when origins are configured

mod config;
mod error;
mod events;
mod services;
mod validation;

use anyhow::{Context, Result};
use axum::http::{header, HeaderValue, Method};
use axum::{routing::get, Json, Router};
use clap::Parser;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use webcal_contracts::*;
use webcal_storage::Database;

use crate::config::{Cli, ServerConfig};

/// GET / - Home page
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Static greeting", body = String)
    ),
    tag = "home"
)]
async fn home() -> Json<&'static str> {
    Json("Home Page")
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        home,
        events::list_events,
        events::create_event,
        events::list_today,
        events::get_event,
        events::delete_event,
    ),
    components(
        schemas(
            Event,
            CreateEventRequest,
            EventCreated,
            MessageResponse,
            FieldErrorResponse,
        )
    ),
    tags(
        (name = "home", description = "Landing endpoint"),
        (name = "events", description = "Calendar event endpoints")
    ),
    info(
        title = "Web Calendar API",
        version = "0.1.0",
        description = "API for creating, listing, filtering and deleting calendar events",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "webcal_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env(Cli::parse());

    tracing::info!("webcal-api starting...");

    // Initialize database
    let db = Database::from_url(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    db.migrate().await?;
    tracing::info!(url = %config.database_url, "Connected to database");

    let events_state = events::AppState::new(Arc::new(db));
    let app = build_router(events_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()));

    let cors_origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|s| s.parse().ok())
        .collect();

    // Add CORS layer only if origins are configured
    let app = if cors_origins.is_empty() {
        tracing::info!("CORS not configured (same-origin requests only)");
        app
    } else {
        tracing::info!(origins = ?cors_origins, "CORS origins configured");
        app.layer(
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(cors_origins))
                .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::ORIGIN]),
        )
    };

    // Add tracing
    let app = app.layer(TraceLayer::new_for_http());

    // Start server
    let listener = tokio::net::TcpListener::bind((config.bind.host.as_str(), config.bind.port))
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind))?;
    tracing::info!("Listening on {}", config.bind);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

/// Home, health and event routes (extracted for testing)
fn build_router(events_state: events::AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health))
        .merge(events::routes(events_state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    async fn test_router() -> Router {
        let db = Database::in_memory().await.unwrap();
        db.migrate().await.unwrap();
        build_router(events::AppState::new(Arc::new(db)))
    }

    #[tokio::test]
    async fn test_home_page() {
        let app = test_router().await;

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], br#""Home Page""#);
    }

    #[tokio::test]
    async fn test_health() {
        let app = test_router().await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let health: HealthResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(health.status, "ok");
    }

    #[tokio::test]
    async fn test_event_routes_are_mounted() {
        let app = test_router().await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/event/today")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
    }

    #[test]
    fn test_openapi_lists_event_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/event"));
        assert!(doc.paths.paths.contains_key("/event/today"));
        assert!(doc.paths.paths.contains_key("/event/{event_id}"));
    }
}
