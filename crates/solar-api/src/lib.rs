#![allow(non_snake_case)]

pub mod routes;
pub mod state;

use axum::Router;

pub use crate::state::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::api_routes())
        .with_state(state)
}
