use axum::{
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use log::error;

use crate::algorithm::compare;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::web::models::*;
use crate::web::Weight;
use crate::{BellmanFord, Dijkstra, Error, Tsinghua};

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Create the API router
pub fn create_router() -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/shortest-path/dijkstra", post(run_dijkstra))
        .route("/api/shortest-path/bellman-ford", post(run_bellman_ford))
        .route("/api/shortest-path/tsinghua", post(run_tsinghua))
        .route("/api/shortest-path/compare", post(run_compare))
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Run the priority engine
pub async fn run_dijkstra(
    Json(request): Json<ComputeRequest>,
) -> Result<Json<AlgorithmResponse>, ApiError> {
    let (graph, source_id, target_id) = request.into_parts().map_err(reject)?;
    let result: ShortestPathResult<Weight> = Dijkstra::new()
        .run(&graph, &source_id, target_id.as_deref())
        .map_err(reject)?;
    Ok(Json(AlgorithmResponse::from_result("dijkstra", result, false)))
}

/// Run the classic relaxation engine
pub async fn run_bellman_ford(
    Json(request): Json<ComputeRequest>,
) -> Result<Json<AlgorithmResponse>, ApiError> {
    let (graph, source_id, target_id) = request.into_parts().map_err(reject)?;
    let result: ShortestPathResult<Weight> = BellmanFord::new()
        .run(&graph, &source_id, target_id.as_deref())
        .map_err(reject)?;
    Ok(Json(AlgorithmResponse::from_result(
        "bellman-ford",
        result,
        true,
    )))
}

/// Run the partitioned frontier engine
pub async fn run_tsinghua(
    Json(request): Json<ComputeRequest>,
) -> Result<Json<AlgorithmResponse>, ApiError> {
    let (graph, source_id, target_id) = request.into_parts().map_err(reject)?;
    let result: ShortestPathResult<Weight> = Tsinghua::new()
        .run(&graph, &source_id, target_id.as_deref())
        .map_err(reject)?;
    Ok(Json(AlgorithmResponse::from_result("tsinghua", result, false)))
}

/// Run all three engines against identical input
pub async fn run_compare(
    Json(request): Json<ComputeRequest>,
) -> Result<Json<CompareResponse>, ApiError> {
    let (graph, source_id, target_id) = request.into_parts().map_err(reject)?;
    let results = compare::run_all::<Weight>(&graph, &source_id, target_id.as_deref())
        .map_err(reject)?;

    Ok(Json(CompareResponse {
        dijkstra: AlgorithmResponse::from_result("dijkstra", results.dijkstra, false),
        bellman_ford: AlgorithmResponse::from_result("bellman-ford", results.bellman_ford, true),
        tsinghua: AlgorithmResponse::from_result("tsinghua", results.tsinghua, false),
    }))
}

/// Maps a library error onto the HTTP boundary: caller mistakes are 400,
/// anything else is 500.
fn reject(err: Error) -> ApiError {
    let (status, kind) = match &err {
        Error::InvalidSource(_) => (StatusCode::BAD_REQUEST, "invalid_source"),
        Error::MalformedInput(_) => (StatusCode::BAD_REQUEST, "malformed_input"),
        Error::NegativeWeightUnsupported(_) => (StatusCode::BAD_REQUEST, "negative_weight"),
        Error::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
    };

    if status == StatusCode::INTERNAL_SERVER_ERROR {
        error!("request failed: {}", err);
    }

    (
        status,
        Json(ErrorResponse {
            error: kind.to_string(),
            message: err.to_string(),
        }),
    )
}
