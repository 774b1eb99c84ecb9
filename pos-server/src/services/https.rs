use crate::core::ServerState;
use crate::utils::{AppError, ErrorCode};
use axum::error_handling::HandleErrorLayer;
use axum::{BoxError, Router, middleware};
use std::time::Duration;
use tower::ServiceBuilder;
use tower::timeout::TimeoutLayer;
use tower::timeout::error::Elapsed;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

/// HTTP 请求日志中间件
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();
    let started = std::time::Instant::now();

    let response = next.run(request).await;

    let status = response.status();

    tracing::info!(
        target: "http_access",
        "{} {} {} {}ms [{}]",
        method,
        uri,
        status,
        started.elapsed().as_millis(),
        request_id
    );

    response
}

async fn not_found() -> AppError {
    AppError::with_message(ErrorCode::NotFound, "Route not found")
}

/// 中间件错误转为统一响应格式 (超时 408)
async fn handle_middleware_error(err: BoxError) -> AppError {
    if err.is::<Elapsed>() {
        tracing::warn!("Request timed out");
        AppError::new(ErrorCode::TimeoutError)
    } else {
        AppError::internal(format!("Unhandled middleware error: {err}"))
    }
}

/// Build the Axum router (without state)
pub fn build_router() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(crate::api::health::router())
        .merge(crate::api::categories::router())
        .merge(crate::api::dishes::router())
        .merge(crate::api::payment::router())
        .fallback(not_found)
}

/// Build the full application: routes, state and tower middleware
pub fn build_app(state: ServerState) -> Router {
    let timeout = Duration::from_millis(state.config.request_timeout_ms);

    build_router()
        .with_state(state)
        // HTTP 请求日志中间件
        .layer(middleware::from_fn(log_request))
        // Tower HTTP 中间件
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_middleware_error))
                .layer(TimeoutLayer::new(timeout)),
        )
        .layer(TraceLayer::new_for_http())
        // 请求 ID: 外层生成，内层回写到响应
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}
