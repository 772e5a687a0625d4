use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level administration settings.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AdminSettingsInner {
    /// Delimited list of namespaces to scan (`,`, `;` or whitespace separated).
    pub base_package: Option<String>,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped settings for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct AdminSettings {
    #[serde(flatten, default)]
    inner: Arc<AdminSettingsInner>,
}

impl Deref for AdminSettings {
    type Target = AdminSettingsInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for AdminSettings {
    fn deref_mut(&mut self) -> &mut AdminSettingsInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Logging knobs consumed by the host application.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub filter: Option<String>,
    pub console: bool,
    pub directory: Option<PathBuf>,
    pub json: bool,
    pub max_files: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            filter: None,
            console: true,
            directory: None,
            json: false,
            max_files: 10,
        }
    }
}
