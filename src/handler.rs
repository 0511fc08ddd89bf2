//! Request handling module
//!
//! Entry point for HTTP request processing: consult the routing table and
//! answer with the matching canned reply.

use crate::config::Config;
use crate::logger;
use crate::response;
use crate::router;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

/// Main entry point for HTTP request handling.
///
/// Never fails: every request resolves to one of the fixed replies.
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    config: Arc<Config>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method();
    let path = req.uri().path();

    let reply = router::route(method, path);

    if config.logging.access_log {
        logger::log_access(method, path, reply.status.as_u16(), reply.body.len());
    }

    Ok(response::build_text_response(reply))
}
