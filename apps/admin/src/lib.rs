//! The `lightadmin` host: loads settings, bootstraps the administration registry and reports
//! what got registered. The binary ships demo models under [`DEMO_NAMESPACE`].

use clap::Parser;
use lightadmin::AdministrationRegistry;
use lightadmin::domain::config::AdminSettings;
use lightadmin::kernel::config::{ConfigError, load_settings};
use std::path::PathBuf;

/// Namespace of the models bundled with the `lightadmin` binary.
pub const DEMO_NAMESPACE: &str = "lightadmin.demo";

#[derive(Debug, Parser)]
#[command(name = "lightadmin", version, about = "Bootstraps the administration registry")]
pub struct Cli {
    /// Settings file; defaults to `lightadmin.<ext>` in the working directory when present.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Namespaces to scan, overriding `base_package` from the settings.
    #[arg(short, long, value_name = "NAMESPACES")]
    pub base_package: Option<String>,

    /// Also scan the bundled demo models.
    #[arg(long)]
    pub demo: bool,
}

impl Cli {
    /// Settings from the file and environment, with the command-line override applied.
    ///
    /// # Errors
    /// [`ConfigError`] when the settings cannot be loaded.
    pub fn settings(&self) -> Result<AdminSettings, ConfigError> {
        let mut settings = load_settings(self.config.as_deref())?;
        if let Some(base_package) = &self.base_package {
            settings.base_package = Some(base_package.clone());
        }
        if self.demo {
            let base_package = match settings.base_package.take() {
                Some(existing) => format!("{existing}, {DEMO_NAMESPACE}"),
                None => DEMO_NAMESPACE.to_owned(),
            };
            settings.base_package = Some(base_package);
        }
        Ok(settings)
    }
}

/// One line per registered domain type, in registration order.
#[must_use]
pub fn summary(registry: &AdministrationRegistry) -> Vec<String> {
    let mut lines = vec![format!("{} administered domain type(s)", registry.len())];
    lines.extend(registry.iter().map(|configuration| {
        format!(
            "{} ({}): {} list field(s), {} filter(s)",
            configuration.domain_type,
            configuration.entity.plural_name,
            configuration.list_view.len(),
            configuration.filters.len(),
        )
    }));
    lines
}
