use axum::{http::StatusCode, routing::get, Router};

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/v1/ping", get(ping))
}

/// Succeeds whenever the server is up. Dependent services are not checked.
async fn ping() -> StatusCode {
    tracing::debug!("ping");
    StatusCode::OK
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::{api_router, AppState};

    #[tokio::test]
    async fn ping_returns_empty_ok() {
        let response = api_router(AppState::default())
            .oneshot(Request::builder().uri("/api/v1/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let response = api_router(AppState::default())
            .oneshot(Request::builder().uri("/api/v1/topics").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
