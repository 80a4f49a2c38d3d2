use axum::http::{Method, header};
use tower_http::cors::{Any, CorsLayer};

/// Any origin may call the listed methods with a JSON body.
///
/// Preflight `OPTIONS` requests are answered by the layer itself with an
/// empty `200` response.
pub fn permissive_cors(methods: impl Into<Vec<Method>>) -> CorsLayer {
    let mut methods = methods.into();
    if !methods.contains(&Method::OPTIONS) {
        methods.push(Method::OPTIONS);
    }

    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(methods)
        .allow_headers([header::CONTENT_TYPE])
}
