//! Request builders for driving a router with `tower::ServiceExt::oneshot`.

use axum::body::Body;
use http::{Method, Request, header};

use crate::auth::MockCaller;

/// Build a request carrying the caller's headers and an optional JSON body.
pub fn json_request(
    method: Method,
    uri: &str,
    caller: MockCaller,
    body: Option<serde_json::Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    for (name, value) in caller.headers().iter() {
        builder = builder.header(name, value);
    }
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    builder.body(body).expect("valid test request")
}
