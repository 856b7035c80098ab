//! # HTTP Server
//!
//! Combines the Pokemon and health routers behind the CORS policy and
//! request tracing, and runs them on a Tokio listener.

use std::sync::Arc;

use axum::http::{header, Method};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::observability::{log_event, Event};

use super::config::{ConfigResult, HttpServerConfig};
use super::health_routes::health_routes;
use super::pokemon_routes::{pokemon_routes, PokemonState};

/// HTTP Server for the Pokemon API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server backed by an in-memory store built from `config`
    pub fn with_config(config: HttpServerConfig) -> ConfigResult<Self> {
        let state = PokemonState::in_memory(config.id_strategy, config.seed);
        if config.seed {
            log_event(Event::SeedLoaded);
        }
        Self::with_state(config, Arc::new(state))
    }

    /// Create a server over an existing state
    pub fn with_state(config: HttpServerConfig, state: Arc<PokemonState>) -> ConfigResult<Self> {
        config.validate()?;
        let router = build_router(&config, state)?;
        Ok(Self { config, router })
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind the configured address and serve until Ctrl-C
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr = self.config.socket_addr();
        let listener = match TcpListener::bind(&addr).await {
            Ok(listener) => listener,
            Err(e) => {
                tracing::error!(event = %Event::BindFailed, addr = %addr, error = %e, "failed to bind listener");
                return Err(e);
            }
        };

        self.serve(listener).await
    }

    /// Serve on an already bound listener until Ctrl-C
    pub async fn serve(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let local_addr = listener.local_addr()?;
        tracing::info!(event = %Event::ServerListening, addr = %local_addr, "pokedex listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        log_event(Event::ServerStopped);
        Ok(())
    }
}

/// Build the combined router with all endpoints
pub fn build_router(config: &HttpServerConfig, state: Arc<PokemonState>) -> ConfigResult<Router> {
    let cors = cors_layer(config)?;

    Ok(Router::new()
        .merge(health_routes())
        .nest("/api", pokemon_routes(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}

/// Single allowed origin with credentials
fn cors_layer(config: &HttpServerConfig) -> ConfigResult<CorsLayer> {
    let origin = config.cors_origin_header()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list([origin]))
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE]))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "ctrl-c handler unavailable, running until killed");
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn server() -> HttpServer {
        HttpServer::with_config(HttpServerConfig::default()).unwrap()
    }

    #[test]
    fn test_server_creation() {
        assert_eq!(server().socket_addr(), "0.0.0.0:8000");
    }

    #[test]
    fn test_server_with_custom_port() {
        let config = HttpServerConfig::with_port(8080);
        let server = HttpServer::with_config(config).unwrap();
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = HttpServerConfig {
            cors_origin: String::new(),
            ..Default::default()
        };
        assert!(HttpServer::with_config(config).is_err());
    }

    #[tokio::test]
    async fn test_cors_allowed_origin() {
        let req = Request::get("/api/pokemons")
            .header(header::ORIGIN, "http://localhost:3000")
            .body(Body::empty())
            .unwrap();
        let response = server().router().oneshot(req).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers();
        assert_eq!(
            headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "http://localhost:3000"
        );
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
    }

    #[tokio::test]
    async fn test_cors_other_origin_not_allowed() {
        let req = Request::get("/api/pokemons")
            .header(header::ORIGIN, "http://evil.example")
            .body(Body::empty())
            .unwrap();
        let response = server().router().oneshot(req).await.unwrap();

        assert!(response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }

    #[tokio::test]
    async fn test_cors_preflight() {
        let req = Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/pokemon/1")
            .header(header::ORIGIN, "http://localhost:3000")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PUT")
            .body(Body::empty())
            .unwrap();
        let response = server().router().oneshot(req).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "http://localhost:3000"
        );
    }

    #[tokio::test]
    async fn test_health_mounted_at_root() {
        let req = Request::get("/health").body(Body::empty()).unwrap();
        let response = server().router().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
