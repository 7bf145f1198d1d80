use std::path::PathBuf;

const PREFS_PATH_VAR: &str = "PORTFOLIO_PREFS_PATH";

/// Location of the preferences file used by native builds.
///
/// Returns `None` when the variable is unset or blank; the caller then runs
/// without persistence.
pub fn prefs_path() -> Option<PathBuf> {
    let path = resolve_prefs_path(std::env::var(PREFS_PATH_VAR).ok());
    if path.is_none() {
        log::warn!("{} not set, theme preference will not be persisted", PREFS_PATH_VAR);
    }
    path
}

fn resolve_prefs_path(value: Option<String>) -> Option<PathBuf> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}
