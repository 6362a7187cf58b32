//! GreenAI web server
//!
//! Serves a fixed HTML greeting on `/` and, when a `static` directory exists
//! at startup, files from it under the `/static/` prefix.

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
