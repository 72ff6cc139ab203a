//! Router assembly: routes, JSON 404 fallback, request deadline, panic recovery, tracing and CORS.

use crate::config::AppConfig;
use crate::error::AppError;
use crate::handlers::not_found;
use crate::routes::{common_routes, faq_routes};
use crate::state::AppState;
use axum::{
    error_handling::HandleErrorLayer,
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    response::{IntoResponse, Response},
    BoxError, Router,
};
use std::any::Any;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, Any as AnyOrigin, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Full application router. Middleware runs outermost first: CORS, tracing, panic recovery, deadline.
pub fn build_router(state: AppState, config: &AppConfig) -> Router {
    let request_timeout = Duration::from_secs(config.request_timeout_secs);
    Router::new()
        .merge(common_routes())
        .merge(faq_routes(state))
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_middleware_error))
                .timeout(request_timeout),
        )
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors_layer(&config.cors_allowed_origins))
}

/// The deadline fired (or another middleware failed): the handler future and any
/// open transaction have been dropped, so report a generic failure.
async fn handle_middleware_error(err: BoxError) -> AppError {
    if err.is::<tower::timeout::error::Elapsed>() {
        AppError::Internal("request deadline exceeded".into())
    } else {
        AppError::Internal(format!("middleware: {}", err))
    }
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    AppError::Internal(format!("handler panicked: {}", detail)).into_response()
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);
    if origins.iter().any(|o| o == "*") {
        return layer.allow_origin(AnyOrigin);
    }
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match o.parse() {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!(origin = %o, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(allowed))
}
