//! Logger module
//!
//! Console logging helpers for the HTTP server:
//! - Server lifecycle logging
//! - Access logging in Common or Combined format
//! - Error and warning logging

mod format;

pub use format::AccessLogEntry;

use crate::config::{Config, StaticMount};
use std::net::SocketAddr;

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    println!("======================================");
    println!("Async server started successfully");
    println!("Listening on: http://{addr}");
    println!("Log level: {}", config.logging.level);
    if let Some(workers) = config.server.workers {
        println!("Worker threads: {workers}");
    }
    println!("Using Tokio runtime for concurrency");
    println!("======================================\n");
}

/// Log the startup-time static mount decision
pub fn log_static_mount(mount: Option<&StaticMount>) {
    match mount {
        Some(m) => println!(
            "[INFO] Static mount: {} -> {}",
            m.url_prefix,
            m.directory.display()
        ),
        None => println!("[INFO] No static directory found; static requests will return 404"),
    }
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    println!("{}", entry.format(format));
}
