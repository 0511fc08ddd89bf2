//! Logger module
//!
//! Plain-text logging helpers: startup banner, per-request access lines,
//! error reporting to stderr.

use chrono::{DateTime, Local};
use std::net::SocketAddr;

pub fn log_server_start(addr: &SocketAddr) {
    println!("======================================");
    println!("Status server started successfully");
    println!("Listening on: http://{addr}");
    println!("Using Tokio runtime for concurrency");
    println!("======================================\n");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[Connection] Accepted from: {peer_addr}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

/// Write one access log line for a completed request.
pub fn log_access(method: &hyper::Method, path: &str, status: u16, body_bytes: usize) {
    println!(
        "{}",
        format_access_line(&Local::now(), method.as_str(), path, status, body_bytes)
    );
}

/// Common-log style line: `[time] "METHOD /path" status bytes`.
fn format_access_line(
    time: &DateTime<Local>,
    method: &str,
    path: &str,
    status: u16,
    body_bytes: usize,
) -> String {
    format!(
        "[{}] \"{method} {path}\" {status} {body_bytes}",
        time.format("%d/%b/%Y:%H:%M:%S %z"),
    )
}
