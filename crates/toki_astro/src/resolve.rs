//! Ephemeris source resolution and the process-wide oracle cache.
//!
//! Resolution precedence, first hit wins:
//! explicit request path → `TOKI_EPHEMERIS_PATH` → explicit name →
//! `TOKI_EPHEMERIS` → the default kernel name under `data/`.
//!
//! The resolved name is echoed verbatim in record metadata. The handle is
//! initialized once per source and shared immutably afterwards; no reload
//! happens on configuration change within a process.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, OnceLock};

use tracing::debug;

use crate::analytic::AnalyticProvider;
use crate::error::AstroError;
use crate::provider::AstronomyEngine;

/// Environment variable naming the ephemeris file.
pub const EPHEMERIS_ENV: &str = "TOKI_EPHEMERIS";

/// Environment variable with an explicit ephemeris path.
pub const EPHEMERIS_PATH_ENV: &str = "TOKI_EPHEMERIS_PATH";

/// Default ephemeris kernel name, resolved under a `data/` directory.
pub const DEFAULT_EPHEMERIS: &str = "de440s.bsp";

/// Caller-supplied ephemeris selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EphemerisRequest {
    /// Kernel name, e.g. `de440s.bsp`.
    pub ephemeris: Option<String>,
    /// Explicit kernel path; wins over everything else.
    pub ephemeris_path: Option<PathBuf>,
}

/// Outcome of resolution: the name for record metadata plus the explicit
/// path when one was requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEphemeris {
    pub name: String,
    pub path: Option<PathBuf>,
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// Apply the resolution precedence to a request plus the environment.
pub fn resolve_ephemeris(request: &EphemerisRequest) -> ResolvedEphemeris {
    let explicit_path = request
        .ephemeris_path
        .clone()
        .filter(|p| !p.as_os_str().is_empty())
        .or_else(|| {
            non_empty(std::env::var(EPHEMERIS_PATH_ENV).ok()).map(PathBuf::from)
        });

    if let Some(path) = explicit_path {
        let name = path
            .file_name()
            .map(|f| f.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_EPHEMERIS.to_string());
        return ResolvedEphemeris {
            name,
            path: Some(path),
        };
    }

    let name = non_empty(request.ephemeris.clone())
        .or_else(|| non_empty(std::env::var(EPHEMERIS_ENV).ok()))
        .unwrap_or_else(|| DEFAULT_EPHEMERIS.to_string());

    ResolvedEphemeris { name, path: None }
}

fn engine_cache() -> &'static Mutex<HashMap<String, Arc<AstronomyEngine>>> {
    static CACHE: OnceLock<Mutex<HashMap<String, Arc<AstronomyEngine>>>> = OnceLock::new();
    CACHE.get_or_init(|| Mutex::new(HashMap::new()))
}

/// Acquire the process-wide engine for a resolved source.
///
/// Initialization happens once per source behind the cache lock; the
/// returned engine is immutable and may be shared across requests. An
/// explicitly requested path that does not exist is refused here, before
/// any computation starts.
pub fn engine_for(resolved: &ResolvedEphemeris) -> Result<Arc<AstronomyEngine>, AstroError> {
    if let Some(path) = &resolved.path {
        if !path.exists() {
            return Err(AstroError::EphemerisUnavailable(format!(
                "ephemeris path not found: {} (set {} or pass ephemeris_path)",
                path.display(),
                EPHEMERIS_PATH_ENV
            )));
        }
    }

    let key = format!(
        "{}|{}",
        resolved.name,
        resolved
            .path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default()
    );

    let mut cache = engine_cache().lock().expect("engine cache poisoned");
    if let Some(engine) = cache.get(&key) {
        return Ok(Arc::clone(engine));
    }

    debug!(ephemeris = %resolved.name, "initializing astronomy engine");
    let engine = Arc::new(AstronomyEngine::new(
        Arc::new(AnalyticProvider::new()),
        resolved.name.clone(),
    ));
    cache.insert(key, Arc::clone(&engine));
    Ok(engine)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_resolution() {
        // Environment-dependent branches are covered by explicit requests;
        // the default name applies when nothing else is set.
        let resolved = resolve_ephemeris(&EphemerisRequest::default());
        if std::env::var(EPHEMERIS_PATH_ENV).is_err() && std::env::var(EPHEMERIS_ENV).is_err() {
            assert_eq!(resolved.name, DEFAULT_EPHEMERIS);
            assert!(resolved.path.is_none());
        }
    }

    #[test]
    fn explicit_name_wins_over_default() {
        let req = EphemerisRequest {
            ephemeris: Some("de421.bsp".into()),
            ephemeris_path: None,
        };
        if std::env::var(EPHEMERIS_PATH_ENV).is_err() {
            let resolved = resolve_ephemeris(&req);
            assert_eq!(resolved.name, "de421.bsp");
        }
    }

    #[test]
    fn explicit_path_wins_over_name() {
        let req = EphemerisRequest {
            ephemeris: Some("de421.bsp".into()),
            ephemeris_path: Some(PathBuf::from("/tmp/kernels/de440s.bsp")),
        };
        let resolved = resolve_ephemeris(&req);
        assert_eq!(resolved.name, "de440s.bsp");
        assert_eq!(resolved.path, Some(PathBuf::from("/tmp/kernels/de440s.bsp")));
    }

    #[test]
    fn blank_name_is_ignored() {
        let req = EphemerisRequest {
            ephemeris: Some("   ".into()),
            ephemeris_path: None,
        };
        if std::env::var(EPHEMERIS_PATH_ENV).is_err() && std::env::var(EPHEMERIS_ENV).is_err() {
            assert_eq!(resolve_ephemeris(&req).name, DEFAULT_EPHEMERIS);
        }
    }

    #[test]
    fn missing_explicit_path_is_unavailable() {
        let resolved = ResolvedEphemeris {
            name: "de440s.bsp".into(),
            path: Some(PathBuf::from("/nonexistent/dir/de440s.bsp")),
        };
        assert!(matches!(
            engine_for(&resolved),
            Err(AstroError::EphemerisUnavailable(_))
        ));
    }

    #[test]
    fn engine_cache_returns_same_handle() {
        let resolved = ResolvedEphemeris {
            name: "cache-test".into(),
            path: None,
        };
        let a = engine_for(&resolved).unwrap();
        let b = engine_for(&resolved).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
