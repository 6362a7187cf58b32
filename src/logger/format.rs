//! Access log format module
//!
//! Supports the two classic formats:
//! - `common` (Common Log Format - CLF)
//! - `combined` (Apache/Nginx combined format)

use chrono::Local;

/// Access log entry containing request/response information
#[derive(Debug, Clone)]
pub struct AccessLogEntry {
    /// Client address
    pub remote_addr: String,
    /// Request timestamp
    pub time: chrono::DateTime<Local>,
    /// HTTP method (GET, POST, etc.)
    pub method: String,
    /// Request URI path
    pub path: String,
    /// Query string (without leading ?)
    pub query: Option<String>,
    /// HTTP version (1.0, 1.1, 2)
    pub http_version: String,
    /// Response status code
    pub status: u16,
    /// Response body size in bytes
    pub body_bytes: usize,
    /// Referer header
    pub referer: Option<String>,
    /// User-Agent header
    pub user_agent: Option<String>,
}

impl AccessLogEntry {
    /// Create a new access log entry with current timestamp
    pub fn new(remote_addr: String, method: String, path: String) -> Self {
        Self {
            remote_addr,
            time: Local::now(),
            method,
            path,
            query: None,
            http_version: "1.1".to_string(),
            status: 200,
            body_bytes: 0,
            referer: None,
            user_agent: None,
        }
    }

    /// Format the log entry according to the specified format.
    /// Unknown format names fall back to `common`.
    pub fn format(&self, format: &str) -> String {
        match format {
            "combined" => self.format_combined(),
            _ => self.format_common(),
        }
    }

    fn request_line(&self) -> String {
        format!(
            "{} {}{} HTTP/{}",
            self.method,
            self.path,
            self.query
                .as_ref()
                .map(|q| format!("?{q}"))
                .unwrap_or_default(),
            self.http_version,
        )
    }

    /// Common Log Format (CLF)
    /// `$remote_addr - - [$time_local] "$request" $status $body_bytes_sent`
    fn format_common(&self) -> String {
        format!(
            "{} - - [{}] \"{}\" {} {}",
            self.remote_addr,
            self.time.format("%d/%b/%Y:%H:%M:%S %z"),
            self.request_line(),
            self.status,
            self.body_bytes,
        )
    }

    /// Apache/Nginx Combined Log Format
    /// `$remote_addr - - [$time_local] "$request" $status $body_bytes_sent "$http_referer" "$http_user_agent"`
    fn format_combined(&self) -> String {
        format!(
            "{} \"{}\" \"{}\"",
            self.format_common(),
            self.referer.as_deref().unwrap_or("-"),
            self.user_agent.as_deref().unwrap_or("-"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> AccessLogEntry {
        let mut entry = AccessLogEntry::new(
            "127.0.0.1:54321".to_string(),
            "GET".to_string(),
            "/".to_string(),
        );
        entry.status = 200;
        entry.body_bytes = 22;
        entry.user_agent = Some("curl/8.0".to_string());
        entry
    }

    #[test]
    fn common_format_has_request_line_and_status() {
        let line = entry().format("common");
        assert!(line.starts_with("127.0.0.1:54321 - - ["));
        assert!(line.contains("\"GET / HTTP/1.1\" 200 22"));
        assert!(!line.contains("curl"));
    }

    #[test]
    fn combined_format_appends_referer_and_user_agent() {
        let line = entry().format("combined");
        assert!(line.contains("\"GET / HTTP/1.1\" 200 22"));
        assert!(line.ends_with("\"-\" \"curl/8.0\""));
    }

    #[test]
    fn query_string_appears_in_request_line() {
        let mut e = entry();
        e.query = Some("a=1".to_string());
        assert!(e.format("common").contains("\"GET /?a=1 HTTP/1.1\""));
    }

    #[test]
    fn unknown_format_falls_back_to_common() {
        let e = entry();
        assert_eq!(e.format("bogus"), e.format("common"));
    }
}
