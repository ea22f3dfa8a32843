//! Rotas da API
//!
//! Cada recurso tem seu próprio router; as rotas protegidas passam pelo
//! middleware de autenticação JWT.

pub mod auditoria_routes;
pub mod auth_routes;
pub mod cliente_routes;
pub mod estatisticas_routes;
pub mod venda_routes;

use axum::{middleware, routing::get, Json, Router};
use serde_json::json;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::middleware::auth::auth_middleware;
use crate::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use crate::state::AppState;

/// Montar o router completo da aplicação
pub fn criar_rotas(state: AppState) -> Router {
    let protegidas = Router::new()
        .route("/api/auth/me", get(auth_routes::me))
        .nest("/api/clientes", cliente_routes::create_cliente_router())
        .nest("/api/vendas", venda_routes::create_venda_router())
        .nest(
            "/api/estatisticas",
            estatisticas_routes::create_estatisticas_router(),
        )
        .nest("/api/auditoria", auditoria_routes::create_auditoria_router())
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    // Em produção o CORS fica restrito às origens configuradas
    let cors = if state.config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(&state.config.cors_origins)
    };

    Router::new()
        .route("/health", get(health))
        .nest("/api/auth", auth_routes::create_auth_router())
        .merge(protegidas)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}

/// Endpoint de liveness
async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "service": "reino-brinquedos",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
