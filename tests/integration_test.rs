mod common;

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::json;
    use storefront_proxy::api::server::create_app;
    use storefront_proxy::AppState;
    use tower::ServiceExt;

    use crate::common::offline_settings;

    fn app() -> axum::Router {
        create_app(AppState::new(&offline_settings()))
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn post(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "OK");
    }

    #[tokio::test]
    async fn test_get_on_deepl_is_405() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/deepl")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body_text(response).await, "Method not allowed");
    }

    #[tokio::test]
    async fn test_put_on_translations_is_405_regardless_of_body() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/api/translations")
                    .header("content-type", "application/json")
                    .body(Body::from(json!({"action": "get"}).to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_delete_on_shopify_is_405() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/api/shopify")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_invalid_json_is_400_before_any_outbound_call() {
        // Upstreams point at a closed port, so reaching one would surface
        // as a 500, not this 400
        for uri in ["/api/deepl", "/api/shopify", "/api/translations"] {
            let response = app().oneshot(post(uri, "not json")).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_eq!(body_text(response).await, "Invalid JSON");
        }
    }

    #[tokio::test]
    async fn test_deepl_empty_texts_is_400() {
        let response = app()
            .oneshot(post(
                "/api/deepl",
                &json!({"texts": [], "target_lang": "FR"}).to_string(),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "Missing texts or target_lang");
    }

    #[tokio::test]
    async fn test_deepl_missing_target_lang_is_400() {
        let response = app()
            .oneshot(post(
                "/api/deepl",
                &json!({"texts": ["Hello"]}).to_string(),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "Missing texts or target_lang");
    }

    #[tokio::test]
    async fn test_shopify_unknown_type_is_400() {
        let response = app()
            .oneshot(post(
                "/api/shopify",
                &json!({"type": "soap", "endpoint": "products.json"}).to_string(),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_text(response).await.contains("Invalid type"));
    }

    #[tokio::test]
    async fn test_shopify_missing_type_is_400() {
        let response = app()
            .oneshot(post("/api/shopify", &json!({"query": "{}"}).to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_translations_unknown_action_is_400() {
        let response = app()
            .oneshot(post(
                "/api/translations",
                &json!({"action": "push"}).to_string(),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_text(response).await.contains("Invalid action"));
    }

    #[tokio::test]
    async fn test_translations_save_without_payload_is_400() {
        let response = app()
            .oneshot(post(
                "/api/translations",
                &json!({"action": "save", "sha": "abc123"}).to_string(),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "Missing translations");
    }
}
