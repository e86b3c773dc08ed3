use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::{get, patch},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        health::livez,
        items::{create_item, delete_item, get_item, list_items, update_item, update_item_status},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // CORS configuration for API endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE]);

    // API routes with CORS
    let api_routes = Router::new()
        .route("/items", get(list_items).post(create_item))
        .route(
            "/items/{id}",
            get(get_item).put(update_item).delete(delete_item),
        )
        .route("/items/{id}/status", patch(update_item_status))
        .layer(cors);

    // Main application router
    Router::new()
        .route("/livez", get(livez))
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    fn draft_body(name: &str, status: &str) -> serde_json::Value {
        serde_json::json!({
            "name": name,
            "status": status,
            "summary": "Article Summary",
        })
    }

    #[tokio::test]
    async fn test_livez() {
        let app = create_app(AppState::default());

        let response = app.oneshot(get_request("/livez")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_list_items_empty() {
        let app = create_app(AppState::default());

        let response = app.oneshot(get_request("/api/v1/items")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert!(json.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_and_get_item() {
        let app = create_app(AppState::default());

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/v1/items",
                draft_body("Article Title", "CURRENT"),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let item = body_json(response).await;
        assert!(item["id"].as_i64().unwrap() > 0);
        assert_eq!(item["name"], "Article Title");
        assert_eq!(item["status"], "CURRENT");
        assert_eq!(item["created_at"], item["last_modified_at"]);
        assert!(item["discontinued_at"].is_null());

        let id = item["id"].as_i64().unwrap();
        let response = app
            .oneshot(get_request(&format!("/api/v1/items/{id}")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let fetched = body_json(response).await;
        assert_eq!(fetched, item);
    }

    #[tokio::test]
    async fn test_get_nonexistent_item() {
        let app = create_app(AppState::default());

        let response = app.oneshot(get_request("/api/v1/items/404")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["status"], 404);
        assert_eq!(body["error"], "Not Found");
        assert_eq!(body["message"], "Item not found: 404");
    }

    #[tokio::test]
    async fn test_create_with_blank_name_is_rejected() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(json_request(
                "POST",
                "/api/v1/items",
                draft_body("  ", "CURRENT"),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_with_unknown_status_is_rejected() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(json_request(
                "POST",
                "/api/v1/items",
                draft_body("Article Title", "RETIRED"),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_list_rejects_unknown_status_filter() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(get_request("/api/v1/items?status=retired"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_list_filters_by_status_case_insensitively() {
        let app = create_app(AppState::default());

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/v1/items",
                draft_body("Kept", "CURRENT"),
            ))
            .await
            .unwrap();
        let kept = body_json(response).await;

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/v1/items",
                draft_body("Dropped", "CURRENT"),
            ))
            .await
            .unwrap();
        let dropped = body_json(response).await;
        let dropped_id = dropped["id"].as_i64().unwrap();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("PATCH")
                    .uri(format!("/api/v1/items/{dropped_id}/status?status=discontinued"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .clone()
            .oneshot(get_request("/api/v1/items?status=current"))
            .await
            .unwrap();
        let json = body_json(response).await;
        let listed = json.as_array().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0]["id"], kept["id"]);

        // No filter returns the union of both statuses
        let response = app.oneshot(get_request("/api/v1/items")).await.unwrap();
        let json = body_json(response).await;
        assert_eq!(json.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_list_orders_current_before_discontinued() {
        let app = create_app(AppState::default());

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/v1/items",
                draft_body("First", "CURRENT"),
            ))
            .await
            .unwrap();
        let first = body_json(response).await;
        let first_id = first["id"].as_i64().unwrap();

        let _ = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/v1/items",
                draft_body("Second", "CURRENT"),
            ))
            .await
            .unwrap();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("PATCH")
                    .uri(format!("/api/v1/items/{first_id}/status?status=DISCONTINUED"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app.oneshot(get_request("/api/v1/items")).await.unwrap();
        let json = body_json(response).await;
        let listed = json.as_array().unwrap();

        assert_eq!(listed[0]["name"], "Second");
        assert_eq!(listed[1]["name"], "First");
    }

    #[tokio::test]
    async fn test_update_item_replaces_fields() {
        let app = create_app(AppState::default());

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/v1/items",
                draft_body("Before", "CURRENT"),
            ))
            .await
            .unwrap();
        let created = body_json(response).await;
        let id = created["id"].as_i64().unwrap();

        let response = app
            .clone()
            .oneshot(json_request(
                "PUT",
                &format!("/api/v1/items/{id}"),
                draft_body("After", "CURRENT"),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let updated = body_json(response).await;
        assert_eq!(updated["name"], "After");
        assert_eq!(updated["created_at"], created["created_at"]);
    }

    #[tokio::test]
    async fn test_update_nonexistent_item() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(json_request(
                "PUT",
                "/api/v1/items/404",
                draft_body("Ghost", "CURRENT"),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_item_lifecycle_scenario() {
        let app = create_app(AppState::default());

        // Create
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/v1/items",
                draft_body("Article Title", "CURRENT"),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let item = body_json(response).await;
        let id = item["id"].as_i64().unwrap();
        assert!(id > 0);
        assert_eq!(item["status"], "CURRENT");
        assert!(item["discontinued_at"].is_null());

        // Discontinue
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("PATCH")
                    .uri(format!("/api/v1/items/{id}/status?status=DISCONTINUED"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let discontinued = body_json(response).await;
        assert_eq!(discontinued["status"], "DISCONTINUED");
        assert!(!discontinued["discontinued_at"].is_null());

        // Delete
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/api/v1/items/{id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        // Get after delete is a clean not-found
        let response = app
            .oneshot(get_request(&format!("/api/v1/items/{id}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
