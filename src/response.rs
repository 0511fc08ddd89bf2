//! HTTP response building module
//!
//! Builds the plain-text responses the router selects, decoupled from
//! routing itself.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

use crate::logger;
use crate::router::Reply;

/// Build a plain-text response for a canned reply.
pub fn build_text_response(reply: Reply) -> Response<Full<Bytes>> {
    Response::builder()
        .status(reply.status)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from_static(reply.body.as_bytes())))
        .unwrap_or_else(|e| {
            log_build_error(reply.status.as_u16(), &e);
            Response::new(Full::new(Bytes::from_static(reply.body.as_bytes())))
        })
}

/// Log response build error
fn log_build_error(status: u16, error: &hyper::http::Error) {
    logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyper::StatusCode;

    #[test]
    fn test_text_response_ok() {
        let resp = build_text_response(Reply {
            status: StatusCode::OK,
            body: "ok",
        });
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers().get("Content-Type").unwrap(), "text/plain");
    }

    #[test]
    fn test_text_response_not_found() {
        let resp = build_text_response(Reply {
            status: StatusCode::NOT_FOUND,
            body: "not found",
        });
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(resp.headers().get("Content-Type").unwrap(), "text/plain");
    }
}
