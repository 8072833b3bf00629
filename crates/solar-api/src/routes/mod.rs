pub mod buildings;
pub mod health;

use axum::Router;

use crate::state::AppState;

pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(buildings::routes())
}
