// Application state module
// Holds the loaded config and the startup-time static mount decision

use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;

use super::types::Config;

/// Static mount resolved once at startup.
///
/// The directory is stored canonicalized so per-request containment checks
/// compare against a stable root.
#[derive(Debug, Clone)]
pub struct StaticMount {
    pub url_prefix: String,
    pub directory: PathBuf,
    pub index_files: Vec<String>,
}

/// Application state
pub struct AppState {
    pub config: Config,
    /// `Some` when the static directory existed at startup, `None` otherwise.
    /// Never re-evaluated; directory changes take effect on restart.
    pub static_mount: Option<StaticMount>,

    // Cached config value for lock-free access on the request path
    pub cached_access_log: AtomicBool,
}

impl AppState {
    /// Create `AppState` from a loaded config.
    ///
    /// The static directory existence check runs here, exactly once.
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
            static_mount: resolve_static_mount(config),
            cached_access_log: AtomicBool::new(config.logging.access_log),
        }
    }
}

fn resolve_static_mount(config: &Config) -> Option<StaticMount> {
    let static_files = &config.static_files;
    let dir = Path::new(&static_files.directory);
    if !dir.is_dir() {
        return None;
    }
    let directory = dir.canonicalize().ok()?;
    Some(StaticMount {
        url_prefix: static_files.url_prefix.clone(),
        directory,
        index_files: static_files.index_files.clone(),
    })
}
