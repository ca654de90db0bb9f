use crate::infra::AppState;
use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Extension;
use axum::Json;
use kpi_bonus::calculation::calculation_router;
use kpi_bonus::divisions::{DivisionProfile, DivisionSummary};
use serde_json::json;

pub(crate) fn with_calculation_routes() -> axum::Router {
    calculation_router()
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route("/api/v1/divisions", axum::routing::get(divisions_endpoint))
        .route(
            "/api/v1/divisions/:slug",
            axum::routing::get(division_detail_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn divisions_endpoint() -> Json<Vec<DivisionSummary>> {
    Json(
        DivisionProfile::standard_presets()
            .iter()
            .map(DivisionProfile::summary)
            .collect(),
    )
}

pub(crate) async fn division_detail_endpoint(Path(slug): Path<String>) -> Response {
    match DivisionProfile::find_preset(&slug) {
        Some(profile) => Json(profile).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": format!("unknown division '{slug}'") })),
        )
            .into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use serde_json::Value;
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn state(ready: bool) -> AppState {
        AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
        }
    }

    async fn read_json_body(response: Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .expect("read body");
        serde_json::from_slice(&body).expect("json payload")
    }

    #[tokio::test]
    async fn readiness_reports_initializing_until_bound() {
        let response = readiness_endpoint(Extension(state(false)))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let response = readiness_endpoint(Extension(state(true)))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn divisions_listing_includes_weight_checks() {
        let Json(summaries) = divisions_endpoint().await;
        assert_eq!(summaries.len(), 4);
        assert!(summaries.iter().all(|summary| summary.balanced));
        assert_eq!(summaries[0].slug, "advertiser-mp");
        assert_eq!(summaries[0].kpi_count, 9);
    }

    #[tokio::test]
    async fn division_detail_resolves_slugs() {
        let app = with_calculation_routes().layer(Extension(state(true)));

        let response = app
            .clone()
            .oneshot(
                Request::get("/api/v1/divisions/tim-kreatif")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json_body(response).await;
        assert_eq!(payload["calculationMethod"], "POINTS_BASED");
        assert_eq!(payload["kpis"].as_array().map(Vec::len), Some(4));

        let response = app
            .oneshot(
                Request::get("/api/v1/divisions/finance")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn calculation_routes_are_mounted() {
        let request = DivisionProfile::find_preset("Admin Support")
            .expect("preset")
            .request(Default::default());

        let response = with_calculation_routes()
            .layer(Extension(state(true)))
            .oneshot(
                Request::post("/api/v1/calculate")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(serde_json::to_vec(&request).unwrap()))
                    .unwrap(),
            )
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json_body(response).await;
        assert_eq!(payload["finalBonus"], 0.0);
        assert_eq!(payload["details"].as_array().map(Vec::len), Some(4));
    }
}
