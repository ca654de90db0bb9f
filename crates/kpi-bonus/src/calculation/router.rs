use axum::{routing::post, Json, Router};
use tracing::{debug, warn};

use super::domain::{CalculationRequest, CalculationResult};
use crate::divisions::weight_check;

/// Router builder exposing the calculation endpoint under its legacy and versioned paths.
pub fn calculation_router() -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/api/v1/calculate", post(calculate_handler))
}

pub(crate) async fn calculate_handler(
    Json(request): Json<CalculationRequest>,
) -> Json<CalculationResult> {
    let weights = weight_check(&request.kpi_configs);
    if !weights.balanced {
        warn!(
            weight_total = weights.total,
            kpis = request.kpi_configs.len(),
            "kpi weights do not sum to 100"
        );
    }

    let result = request.calculate();

    debug!(
        method = ?request.bonus_calculation_method,
        kpis = result.details.len(),
        grand_total_points = result.grand_total_points,
        final_bonus = result.final_bonus,
        "calculation served"
    );

    Json(result)
}
