use crate::{
    middlewares::auth::auth_middleware,
    routes::apply_routes,
    services::infopoint::infopoint_service::{InfoPointService, InfoPointServiceConfig},
    types::app_state::AppState,
};
use axum::{middleware, routing::get, Router};
use tower_http::cors::CorsLayer;

pub use crate::config::app_config::AppConfig;

pub fn gen_app(config: AppConfig) -> Router {
    let cors_middleware = CorsLayer::new();
    let state = AppState {
        infopoint_service: InfoPointService::new(InfoPointServiceConfig {
            host: config.infopoint_host,
        }),
        auth_key: config.auth_key,
    };

    apply_routes(Router::new())
        .route("/", get(root))
        .layer(cors_middleware)
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ))
        .with_state(state)
}

async fn root() -> &'static str {
    "OK"
}

#[cfg(test)]
pub struct MockApp {
    pub app: Router,
    pub infopoint_server: mockito::ServerGuard,
}

/// App wired to a local mock InfoPoint server, without auth.
#[cfg(test)]
pub async fn gen_mock_app() -> MockApp {
    let infopoint_server = mockito::Server::new_async().await;

    let app = gen_app(AppConfig {
        infopoint_host: infopoint_server.url(),
        auth_key: None,
        bind_address: "127.0.0.1:0".to_string(),
    });

    MockApp {
        app,
        infopoint_server,
    }
}
