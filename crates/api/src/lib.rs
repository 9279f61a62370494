pub mod cors;
pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::Router;
use stats::Dataset;

pub fn module_ready() -> bool {
    true
}

pub fn app(dataset: Arc<Dataset>) -> Router {
    routes::router(state::AppState::new(dataset))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
        response::Response,
        Router,
    };
    use stats::Dataset;
    use tower::ServiceExt;

    use crate::app;

    fn sample_app() -> Router {
        let dataset = Dataset::from_json_str(
            r#"[
                {"region": "eu-west", "latency_ms": 120.0, "uptime_pct": 99.5},
                {"region": "eu-west", "latency_ms": 80.0, "uptime_pct": 98.5},
                {"region": "us-east", "latency_ms": 40.0, "uptime_pct": 100.0},
                {"region": "ap-south", "latency_ms": 200.0, "uptime_pct": 97.0}
            ]"#,
        )
        .unwrap();
        app(Arc::new(dataset))
    }

    fn metrics_request(body: &str) -> Request<Body> {
        Request::post("/metrics")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_owned()))
            .unwrap()
    }

    async fn json_body(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn post_metrics_summarizes_each_requested_region() {
        let response = sample_app()
            .oneshot(metrics_request(
                r#"{"regions": ["eu-west", "us-east"], "threshold_ms": 100.0}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(
            body,
            serde_json::json!({
                "eu-west": {
                    "avg_latency": 100.0,
                    "p95_latency": 80.0,
                    "avg_uptime": 99.0,
                    "breaches": 1
                },
                "us-east": {
                    "avg_latency": 40.0,
                    "p95_latency": 40.0,
                    "avg_uptime": 100.0,
                    "breaches": 0
                }
            })
        );
    }

    #[tokio::test]
    async fn post_metrics_omits_unknown_regions() {
        let response = sample_app()
            .oneshot(metrics_request(
                r#"{"regions": ["atlantis"], "threshold_ms": 50.0}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, serde_json::json!({}));
    }

    #[tokio::test]
    async fn post_metrics_accepts_empty_body_object() {
        let response = sample_app().oneshot(metrics_request("{}")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, serde_json::json!({}));
    }

    #[tokio::test]
    async fn post_metrics_rejects_malformed_json() {
        let response = sample_app()
            .oneshot(metrics_request("not json"))
            .await
            .unwrap();

        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn get_regions_lists_known_region_names() {
        let response = sample_app()
            .oneshot(Request::get("/regions").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            serde_json::json!({"regions": ["ap-south", "eu-west", "us-east"]})
        );
    }

    #[tokio::test]
    async fn responses_carry_permissive_cors_headers() {
        let response = sample_app()
            .oneshot(metrics_request(r#"{"regions": []}"#))
            .await
            .unwrap();

        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .map(|value| value.as_bytes()),
            Some(b"*".as_ref())
        );
    }

    #[tokio::test]
    async fn options_preflight_answers_no_content_with_cors_headers() {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/metrics")
            .body(Body::empty())
            .unwrap();

        let response = sample_app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_METHODS));
        assert!(response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_HEADERS));
    }
}
