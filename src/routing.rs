//! Application router configuration for the dashboard page and the transactions API.

use axum::{Router, http::Method, response::Redirect, routing::get};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
};

use crate::{
    AppState, dashboard::get_dashboard_page, endpoints, internal_server_error::handle_panic,
    not_found::get_404_not_found, transaction::get_transactions_endpoint,
};

/// Return a router with all the app's routes.
///
/// The JSON API accepts cross-origin `GET` requests so that it can be used by
/// front ends served from elsewhere. The HTML pages are same-origin only.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route(endpoints::TRANSACTIONS_API, get(get_transactions_endpoint))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET]),
        );

    let page_routes = Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::DASHBOARD_VIEW, get(get_dashboard_page));

    page_routes
        .merge(api_routes)
        .fallback(get_404_not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

/// The root path '/' redirects to the dashboard page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::DASHBOARD_VIEW)
}

#[cfg(test)]
mod root_route_tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::{endpoints, routing::get_index_page};

    #[tokio::test]
    async fn root_redirects_to_dashboard() {
        let response = get_index_page().await.into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let location = response.headers().get("location").unwrap();
        assert_eq!(location, endpoints::DASHBOARD_VIEW);
    }
}
