use shared_types::{AppConfig, ConfigError};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Environment variable naming an override config file (native builds only).
#[cfg(not(target_arch = "wasm32"))]
pub const CONFIG_ENV: &str = "ATTENDANCE_CONFIG";

/// Resolve the configuration and store it in the global `OnceLock`.
///
/// An override file is layered over the embedded one, so it only needs the
/// keys it changes. Never fails: an unreadable override falls back to the embedded file, and
/// an invalid embedded file falls back to `AppConfig::default()`. The errors
/// that forced a fallback are returned so they can be logged once the logger
/// is up. Only the first call does any work.
pub fn load_config() -> Vec<ConfigError> {
    let mut fallbacks = Vec::new();
    CONFIG.get_or_init(|| resolve(&mut fallbacks));
    fallbacks
}

/// The loaded configuration. Returns defaults if `load_config()` hasn't been
/// called yet.
pub fn config() -> &'static AppConfig {
    CONFIG.get_or_init(AppConfig::default)
}

fn resolve(fallbacks: &mut Vec<ConfigError>) -> AppConfig {
    if let Some(result) = read_override() {
        match result {
            Ok(config) => return config,
            Err(e) => fallbacks.push(e),
        }
    }
    AppConfig::embedded().unwrap_or_else(|e| {
        fallbacks.push(e);
        AppConfig::default()
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn read_override() -> Option<Result<AppConfig, ConfigError>> {
    // A missing .env is fine.
    let _ = dotenvy::dotenv();
    let path = std::env::var(CONFIG_ENV).ok()?;
    Some(read_file(std::path::Path::new(&path)))
}

#[cfg(target_arch = "wasm32")]
fn read_override() -> Option<Result<AppConfig, ConfigError>> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
fn read_file(path: &std::path::Path) -> Result<AppConfig, ConfigError> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::io(format!("{}: {e}", path.display())))?;
    AppConfig::embedded_with_overrides(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::ConfigErrorKind;

    fn scratch_file(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("{}-{name}", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn missing_override_is_an_io_error() {
        let err = read_file(std::path::Path::new("/definitely/not/here.toml")).unwrap_err();
        assert_eq!(err.kind, ConfigErrorKind::Io);
        assert!(err.message.contains("here.toml"));
    }

    #[test]
    fn override_file_is_parsed() {
        let path = scratch_file(
            "override.toml",
            "[verification]\ntick_ms = 20\n[logging]\nlevel = \"debug\"\n",
        );
        let config = read_file(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(config.verification.tick_ms, 20);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.fixtures.teacher.classes.len(), 3);
        assert_eq!(config.fixtures.student.profile.name, "Alex Johnson");
    }

    #[test]
    fn invalid_override_is_reported() {
        let path = scratch_file("bad.toml", "[verification]\nstep = 101\n");
        let err = read_file(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert_eq!(err.kind, ConfigErrorKind::InvalidTiming);
    }

    #[test]
    fn resolves_embedded_config_without_fallbacks() {
        let mut fallbacks = Vec::new();
        let config = resolve(&mut fallbacks);
        assert!(fallbacks.is_empty(), "{fallbacks:?}");
        assert_eq!(config.fixtures.student.profile.name, "Alex Johnson");
    }
}
