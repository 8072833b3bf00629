use axum::Router;
use leptos::prelude::*;
use leptos_axum::{generate_route_list, LeptosRoutes};
use solar_api::AppState;
use solar_ui::{shell, App};
use tower_http::trace::TraceLayer;

/// Leptos pages, static files and the JSON API behind one router.
pub fn app_router(leptosOptions: LeptosOptions, state: AppState) -> Router {
    let routes = generate_route_list(App);

    Router::new()
        .leptos_routes(&leptosOptions, routes, {
            let leptosOptions = leptosOptions.clone();
            move || shell(leptosOptions.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptosOptions)
        .merge(solar_api::api_router(state))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use super::*;

    fn router() -> Router {
        let leptosOptions = LeptosOptions::builder()
            .output_name("solar-console")
            .build();
        app_router(leptosOptions, AppState::default())
    }

    async fn get(path: &str) -> (StatusCode, String) {
        let response = router()
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8_lossy(&body).into_owned())
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn api_routes_survive_the_merge() {
        let (status, body) = get("/api/v1/ping").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.is_empty());

        let (status, body) = get("/api/v1/buildings").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#""sectionLabel":"Buildings""#));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn pages_render_the_buildings_card() {
        for path in ["/", "/buildings"] {
            let (status, body) = get(path).await;
            assert_eq!(status, StatusCode::OK, "{path}");
            assert!(body.contains("About Solar Arrays Located on UW Campus"), "{path}");
            assert!(body.contains("Mercer Court A"), "{path}");
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn unknown_path_hits_the_fallback() {
        let (status, _) = get("/no-such-page").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
