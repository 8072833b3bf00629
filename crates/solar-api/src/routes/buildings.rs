use axum::{extract::State, routing::get, Json, Router};
use solar_types::CardContent;

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/v1/buildings", get(get_buildings))
}

async fn get_buildings(State(state): State<AppState>) -> Json<CardContent> {
    Json(state.buildings.as_ref().clone())
}
