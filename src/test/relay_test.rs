#[cfg(test)]
pub mod tests {
    use actix_cors::Cors;
    use actix_web::body::to_bytes;
    use actix_web::http::{Method, StatusCode};
    use actix_web::{test, App};
    use async_trait::async_trait;
    use serde_json::{json, Value};

    use crate::apis::relay_api::render::render_ai;
    use crate::apis::relay_api::sketch::{health, sketch_ai, Generator};
    use crate::cores::generation_models::generation_controller::GenerationProvider;

    struct StubProvider {
        result: Result<Value, String>,
    }

    #[async_trait]
    impl GenerationProvider for StubProvider {
        async fn generate(&self, _prompt: &str, _images: Vec<String>) -> Result<Value, String> {
            self.result.clone()
        }
    }

    #[actix_rt::test]
    async fn test_health() {
        let mut app = test::init_service(App::new().service(health)).await;
        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&mut app, req).await;
        assert!(resp.status().is_success());
        let body = test::read_body(resp).await;
        assert_eq!(body, "OK");
    }

    // The upstream object must come back byte-for-byte, no field stripping.
    #[actix_rt::test]
    async fn test_relay_passes_upstream_body_through() {
        let upstream = json!({"id": "resp_1", "output": []});
        let generator = Generator::new(Box::new(StubProvider { result: Ok(upstream.clone()) }));

        let req = test::TestRequest::post().uri("/api/sketch-ai").to_http_request();
        let resp = generator.relay(&req, "turn this into a watercolor", vec!["iVBORw0KGgo...".to_string()]).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = to_bytes(resp.into_body()).await.unwrap();
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body, upstream);
    }

    // Failures ride in the body under `error`; the status stays 200.
    #[actix_rt::test]
    async fn test_relay_reports_failure_in_body_with_status_ok() {
        let generator = Generator::new(Box::new(StubProvider {
            result: Err("rate limit exceeded".to_string()),
        }));

        let req = test::TestRequest::post().uri("/api/sketch-ai").to_http_request();
        let resp = generator.relay(&req, "turn this into a watercolor", vec!["iVBORw0KGgo...".to_string()]).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = to_bytes(resp.into_body()).await.unwrap();
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body, json!({"error": "rate limit exceeded"}));
    }

    #[actix_rt::test]
    async fn test_sketch_ai_rejects_missing_field() {
        let mut app = test::init_service(App::new().service(sketch_ai)).await;
        let req = test::TestRequest::post()
            .uri("/api/sketch-ai")
            .set_json(json!({"promptText": "turn this into a watercolor"}))
            .to_request();
        let resp = test::call_service(&mut app, req).await;
        assert!(resp.status().is_client_error());
    }

    #[actix_rt::test]
    async fn test_render_ai_rejects_empty_sketch() {
        let mut app = test::init_service(App::new().service(render_ai)).await;
        let req = test::TestRequest::post()
            .uri("/api/render-ai")
            .set_json(json!({"base64Sketch": "", "promptText": "render it"}))
            .to_request();
        let resp = test::call_service(&mut app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = test::read_body(resp).await;
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body, json!({"error": "Missing base64Sketch or promptText"}));
    }

    #[actix_rt::test]
    async fn test_cors_preflight_allows_any_origin() {
        let mut app = test::init_service(
            App::new().wrap(Cors::permissive()).service(sketch_ai),
        ).await;
        let req = test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri("/api/sketch-ai")
            .insert_header(("Origin", "http://example.com"))
            .insert_header(("Access-Control-Request-Method", "POST"))
            .to_request();
        let resp = test::call_service(&mut app, req).await;
        assert!(resp.status().is_success());
        assert_eq!(
            resp.headers().get("access-control-allow-origin").unwrap(),
            "http://example.com"
        );
        assert_eq!(
            resp.headers().get("access-control-allow-credentials").unwrap(),
            "true"
        );
    }
}
