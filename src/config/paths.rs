use std::env;
use std::path::{Path, PathBuf};

/// Environment variable pointing at an explicit settings file.
pub const CONFIG_PATH_ENV: &str = "HAPPYTUMMY_CONFIG";

/// Determine the settings file path, searching in priority order.
///
/// Order: `$HAPPYTUMMY_CONFIG`, `$HOME/.config/happytummy/settings.conf`,
/// `$XDG_CONFIG_HOME/happytummy/settings.conf`. Only existing files are returned.
pub(crate) fn resolve_settings_config_path() -> Option<PathBuf> {
    if let Ok(p) = env::var(CONFIG_PATH_ENV)
        && !p.trim().is_empty()
    {
        let path = PathBuf::from(p);
        return path.is_file().then_some(path);
    }
    let home = env::var("HOME").ok();
    let xdg_config = env::var("XDG_CONFIG_HOME").ok();
    let mut candidates: Vec<PathBuf> = Vec::new();
    if let Some(h) = home.as_deref() {
        candidates.push(
            Path::new(h)
                .join(".config")
                .join("happytummy")
                .join("settings.conf"),
        );
    }
    if let Some(xdg) = xdg_config.as_deref() {
        candidates.push(Path::new(xdg).join("happytummy").join("settings.conf"));
    }
    candidates.into_iter().find(|p| p.is_file())
}

/// Resolve an XDG base directory from environment or default to `$HOME` + segments.
///
/// Inputs:
/// - `var`: Environment variable to check (e.g., `XDG_CONFIG_HOME`).
/// - `home_default`: Fallback path segments relative to `$HOME` if `var` is unset/empty.
///
/// Output: Resolved base directory path.
fn xdg_base_dir(var: &str, home_default: &[&str]) -> PathBuf {
    if let Ok(p) = env::var(var)
        && !p.trim().is_empty()
    {
        return PathBuf::from(p);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let mut base = PathBuf::from(home);
    for seg in home_default {
        base = base.join(seg);
    }
    base
}

/// Config directory for Happy Tummy (ensured to exist).
///
/// Prefers `$HOME/.config/happytummy`, falls back to `$XDG_CONFIG_HOME/happytummy`.
pub fn config_dir() -> PathBuf {
    if let Ok(home) = env::var("HOME") {
        let dir = Path::new(&home).join(".config").join("happytummy");
        if std::fs::create_dir_all(&dir).is_ok() {
            return dir;
        }
    }
    let dir = xdg_base_dir("XDG_CONFIG_HOME", &[".config"]).join("happytummy");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Logs directory under config: "$HOME/.config/happytummy/logs" (ensured to exist)
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}
