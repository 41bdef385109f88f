use crate::handlers::{market, order, ws};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/orders", post(order::submit_order))
        .route("/bbo", get(market::get_bbo))
        .route("/depth", get(market::get_depth))
        .route("/ws/trades", get(ws::trades_handler))
        .route("/ws/marketdata", get(ws::marketdata_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
