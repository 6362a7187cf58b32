//! Static file serving module
//!
//! Resolves request paths inside the mount directory and builds file
//! responses with MIME detection and `ETag` validation.

use crate::config::StaticMount;
use crate::handler::router::RequestContext;
use crate::http::{self, cache, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Serve a request that landed under the static mount prefix
pub async fn serve_mount(ctx: &RequestContext<'_>, mount: &StaticMount) -> Response<Full<Bytes>> {
    match load_from_mount(mount, ctx.path).await {
        Some((content, content_type)) => build_file_response(
            content,
            content_type,
            ctx.if_none_match.as_deref(),
            ctx.is_head,
        ),
        None => http::build_404_response(),
    }
}

/// Resolve a URL path inside the mount directory and read the file.
///
/// Directory paths (and the mount root) fall back to the configured index
/// files. Returns `None` for anything that does not resolve to a readable
/// file inside the mount.
pub async fn load_from_mount(mount: &StaticMount, path: &str) -> Option<(Vec<u8>, &'static str)> {
    let relative = strip_url_prefix(path, &mount.url_prefix)?;

    // Reject traversal components before touching the filesystem
    let clean = relative.replace("..", "");

    let mut file_path = mount.directory.join(clean.trim_start_matches('/'));

    if file_path.is_dir() || clean.is_empty() || clean.ends_with('/') {
        file_path = resolve_index(&file_path, &mount.index_files)?;
    }

    // File not found is common (404), no need to log at warning level
    let canonical = file_path.canonicalize().ok()?;

    // The canonical path must stay inside the mount directory, which was
    // itself canonicalized at startup
    if !canonical.starts_with(&mount.directory) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {path} -> {}",
            canonical.display()
        ));
        return None;
    }

    let content = match fs::read(&canonical).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {e}",
                canonical.display()
            ));
            return None;
        }
    };

    let content_type = mime::content_type_for(canonical.extension().and_then(|e| e.to_str()));
    Some((content, content_type))
}

/// Strip the mount prefix, returning the path relative to the mount root
fn strip_url_prefix<'a>(path: &'a str, url_prefix: &str) -> Option<&'a str> {
    let prefix = url_prefix.trim_end_matches('/');
    if path == prefix {
        return Some("");
    }
    path.strip_prefix(prefix)
        .filter(|rest| rest.starts_with('/'))
        .map(|rest| &rest[1..])
}

/// Try the configured index files in order for a directory path
fn resolve_index(dir: &Path, index_files: &[String]) -> Option<PathBuf> {
    index_files
        .iter()
        .map(|name| dir.join(name))
        .find(|candidate| candidate.is_file())
}

/// Build a file response with `ETag` validation and HEAD support
fn build_file_response(
    data: Vec<u8>,
    content_type: &str,
    if_none_match: Option<&str>,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let etag = cache::generate_etag(&data);

    if cache::etag_matches(if_none_match, &etag) {
        return http::build_304_response(&etag);
    }

    http::build_cached_response(Bytes::from(data), content_type, &etag, is_head)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mount_for(dir: &Path) -> StaticMount {
        StaticMount {
            url_prefix: "/static".to_string(),
            directory: dir.canonicalize().unwrap(),
            index_files: vec!["index.html".to_string(), "index.htm".to_string()],
        }
    }

    #[tokio::test]
    async fn loads_existing_file_with_mime_type() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("style.css"), "body {}").unwrap();
        let mount = mount_for(dir.path());

        let (content, content_type) = load_from_mount(&mount, "/static/style.css")
            .await
            .expect("file should load");
        assert_eq!(content, b"body {}");
        assert_eq!(content_type, "text/css");
    }

    #[tokio::test]
    async fn missing_file_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let mount = mount_for(dir.path());
        assert!(load_from_mount(&mount, "/static/missing.txt").await.is_none());
    }

    #[tokio::test]
    async fn mount_root_resolves_index_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html></html>").unwrap();
        let mount = mount_for(dir.path());

        for path in ["/static", "/static/"] {
            let (content, content_type) = load_from_mount(&mount, path)
                .await
                .expect("index should resolve");
            assert_eq!(content, b"<html></html>");
            assert!(content_type.contains("text/html"));
        }
    }

    #[tokio::test]
    async fn subdirectory_resolves_index_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("docs")).unwrap();
        std::fs::write(dir.path().join("docs/index.html"), "docs").unwrap();
        let mount = mount_for(dir.path());

        let (content, _) = load_from_mount(&mount, "/static/docs")
            .await
            .expect("index should resolve");
        assert_eq!(content, b"docs");
    }

    #[tokio::test]
    async fn directory_without_index_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("empty")).unwrap();
        let mount = mount_for(dir.path());
        assert!(load_from_mount(&mount, "/static/empty").await.is_none());
    }

    #[tokio::test]
    async fn traversal_cannot_escape_mount() {
        let parent = tempfile::tempdir().unwrap();
        let root = parent.path().join("webroot");
        std::fs::create_dir(&root).unwrap();
        std::fs::write(parent.path().join("secret.txt"), "secret").unwrap();
        let mount = mount_for(&root);

        assert!(load_from_mount(&mount, "/static/../secret.txt").await.is_none());
        assert!(load_from_mount(&mount, "/static/..%2Fsecret.txt").await.is_none());
    }

    #[tokio::test]
    async fn path_outside_prefix_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.txt"), "a").unwrap();
        let mount = mount_for(dir.path());

        assert!(load_from_mount(&mount, "/staticx/a.txt").await.is_none());
        assert!(load_from_mount(&mount, "/a.txt").await.is_none());
    }

    #[tokio::test]
    async fn head_response_keeps_length_but_drops_body() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.txt"), "hello").unwrap();
        let mount = mount_for(dir.path());

        let ctx = RequestContext {
            path: "/static/a.txt",
            is_head: true,
            if_none_match: None,
        };
        let response = serve_mount(&ctx, &mount).await;
        assert_eq!(response.status(), 200);
        assert_eq!(
            response
                .headers()
                .get("content-length")
                .unwrap()
                .to_str()
                .unwrap(),
            "5"
        );
    }

    #[tokio::test]
    async fn matching_etag_returns_304() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.txt"), "hello").unwrap();
        let mount = mount_for(dir.path());

        let first = serve_mount(
            &RequestContext {
                path: "/static/a.txt",
                is_head: false,
                if_none_match: None,
            },
            &mount,
        )
        .await;
        let etag = first.headers().get("etag").unwrap().to_str().unwrap().to_string();

        let revalidated = serve_mount(
            &RequestContext {
                path: "/static/a.txt",
                is_head: false,
                if_none_match: Some(etag),
            },
            &mount,
        )
        .await;
        assert_eq!(revalidated.status(), 304);
    }
}
