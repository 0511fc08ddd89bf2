//! Request routing module
//!
//! Maps (method, path) pairs onto a fixed reply table. Matching is exact:
//! no wildcards, no query-string handling, no trailing-slash normalization.

use hyper::{Method, StatusCode};

/// A canned plain-text reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reply {
    pub status: StatusCode,
    pub body: &'static str,
}

/// A fixed route: one (method, path) pair mapped to its reply.
struct Route {
    method: Method,
    path: &'static str,
    reply: Reply,
}

/// Reply for any unmatched (method, path) combination.
const NOT_FOUND: Reply = Reply {
    status: StatusCode::NOT_FOUND,
    body: "not found",
};

/// The routing table, scanned in order; first match wins.
static ROUTES: [Route; 2] = [
    Route {
        method: Method::GET,
        path: "/",
        reply: Reply {
            status: StatusCode::OK,
            body: "ok",
        },
    },
    Route {
        method: Method::GET,
        path: "/health",
        reply: Reply {
            status: StatusCode::OK,
            body: "healthy",
        },
    },
];

/// Resolve a request to its reply.
///
/// Total over all inputs: every (method, path) pair yields exactly one of
/// the three fixed replies.
pub fn route(method: &Method, path: &str) -> Reply {
    ROUTES
        .iter()
        .find(|r| r.method == *method && r.path == path)
        .map_or(NOT_FOUND, |r| r.reply)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_root() {
        let reply = route(&Method::GET, "/");
        assert_eq!(reply.status, StatusCode::OK);
        assert_eq!(reply.body, "ok");
    }

    #[test]
    fn test_route_health() {
        let reply = route(&Method::GET, "/health");
        assert_eq!(reply.status, StatusCode::OK);
        assert_eq!(reply.body, "healthy");
    }

    #[test]
    fn test_route_unknown_path() {
        let reply = route(&Method::GET, "/missing");
        assert_eq!(reply.status, StatusCode::NOT_FOUND);
        assert_eq!(reply.body, "not found");
    }

    #[test]
    fn test_route_method_mismatch() {
        // Known paths with the wrong method still fall through to 404
        assert_eq!(route(&Method::POST, "/"), NOT_FOUND);
        assert_eq!(route(&Method::PUT, "/health"), NOT_FOUND);
        assert_eq!(route(&Method::DELETE, "/"), NOT_FOUND);
        assert_eq!(route(&Method::HEAD, "/health"), NOT_FOUND);
    }

    #[test]
    fn test_route_exact_match_only() {
        assert_eq!(route(&Method::GET, "/healthz"), NOT_FOUND);
        assert_eq!(route(&Method::GET, "/health/"), NOT_FOUND);
        assert_eq!(route(&Method::GET, "//"), NOT_FOUND);
        assert_eq!(route(&Method::GET, ""), NOT_FOUND);
    }

    #[test]
    fn test_route_stateless() {
        // Same request twice in any order yields identical replies
        let first = route(&Method::GET, "/health");
        let between = route(&Method::POST, "/");
        let second = route(&Method::GET, "/health");
        assert_eq!(first, second);
        assert_eq!(between, NOT_FOUND);
    }
}
