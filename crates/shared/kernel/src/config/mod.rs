pub mod property;

use config::{Config, Environment, File};
use ladmin_domain::config::AdminSettings;
use ladmin_domain::constants::ENV_PREFIX;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Settings file looked up in the working directory when no explicit path is given.
pub const DEFAULT_SETTINGS_FILE: &str = "lightadmin";

/// Custom error type for settings loading.
#[ladmin_derive::ladmin_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Builds the layered settings source: a file, then `LIGHTADMIN__`-prefixed environment overrides.
///
/// An explicit `path` must exist. Without one, [`DEFAULT_SETTINGS_FILE`] is used if present
/// (any extension the `config` crate understands, e.g. `lightadmin.toml`).
/// Nested keys use double underscores: `LIGHTADMIN__LOGGING__LEVEL` maps to `logging.level`.
///
/// # Errors
/// Returns [`ConfigError::Config`] if an explicit file is missing or cannot be parsed.
pub fn build_source(path: Option<impl AsRef<Path>>) -> Result<Config, ConfigError> {
    let (effective_path, required) = path.map_or_else(
        || (PathBuf::from(DEFAULT_SETTINGS_FILE), false),
        |p| (p.as_ref().to_path_buf(), true),
    );

    info!(path = %effective_path.display(), required, "Loading administration settings");

    Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(
            Environment::with_prefix(ENV_PREFIX).separator("__").convert_case(config::Case::Snake),
        )
        .build()
        .context("Failed to build settings source")
}

/// Loads and deserializes any settings structure from the layered source.
///
/// # Errors
/// Returns [`ConfigError::Config`] if the source cannot be built or does not match `T`.
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    build_source(path)?.try_deserialize::<T>().context("Failed to deserialize settings")
}

/// Loads [`AdminSettings`] from the layered source.
///
/// # Errors
/// See [`load_config`].
///
/// # Example
/// ```rust,no_run
/// use ladmin_kernel::config::load_settings;
///
/// let settings = load_settings(None::<&str>).unwrap_or_default();
/// let _namespaces = settings.base_package.as_deref();
/// ```
pub fn load_settings(path: Option<impl AsRef<Path>>) -> Result<AdminSettings, ConfigError> {
    load_config(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn settings_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write settings");
        file
    }

    #[test]
    fn loads_base_package_and_logging_from_file() {
        let file = settings_file(
            r#"
base_package = "pkg.models, pkg.billing"

[logging]
level = "debug"
"#,
        );

        let settings = load_settings(Some(file.path())).expect("settings load");
        assert_eq!(settings.base_package.as_deref(), Some("pkg.models, pkg.billing"));
        assert_eq!(settings.logging.level, "debug");
        assert!(settings.logging.console);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let err = load_settings(Some("/definitely/not/here/lightadmin.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Config { context: Some(_), .. }));
    }

    #[test]
    fn malformed_file_reports_context() {
        let file = settings_file("base_package = [1, 2");
        let err = load_settings(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("Failed to build settings source"));
    }
}
