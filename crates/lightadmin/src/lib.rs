//! Facade crate for the administration bootstrap.
//! Re-exports the domain, kernel and bootstrap crates and wires them together for hosts.
//! Keep this crate thin: it composes the other crates, it does not implement pipeline logic.
//!
//! ## Usage
//! - Load settings with [`kernel::config::load_settings`].
//! - Call [`bootstrap`] once at startup and [`publish`] the result.
//! - Types deriving `Administration` need `ladmin-bootstrap` as a direct dependency, since the
//!   generated code refers to it by name.

pub use ladmin_bootstrap as bootstrap_pipeline;
pub use ladmin_bootstrap::registry::{global, publish};
pub use ladmin_bootstrap::{
    AdministrationRegistry, BootstrapError, GlobalAdministrationConfiguration,
    GlobalAdministrationConfigurationProcessor,
};
#[cfg(feature = "derive")]
pub use ladmin_bootstrap::Administration;
pub use ladmin_domain as domain;
pub use ladmin_kernel as kernel;

use ladmin_domain::config::AdminSettings;
use std::path::Path;
use tracing::info;

/// Build-time enabled features (by Cargo feature).
pub const ENABLED: &[&str] = &[
    #[cfg(feature = "derive")]
    "derive",
];

/// Runs the bootstrap pipeline over the namespaces named by `settings.base_package`.
///
/// # Errors
/// The first [`BootstrapError`] the pipeline hits.
pub fn bootstrap(settings: &AdminSettings) -> Result<AdministrationRegistry, BootstrapError> {
    let registry = GlobalAdministrationConfigurationProcessor::from_properties(settings).run()?;
    info!(registered = registry.len(), "Administration configurations ready");
    Ok(registry)
}

/// Loads settings from `path` (plus `LIGHTADMIN__*` overrides) and bootstraps.
///
/// # Errors
/// [`BootstrapError::Config`] for unreadable settings, otherwise as [`bootstrap`].
pub fn bootstrap_from(path: Option<impl AsRef<Path>>) -> Result<AdministrationRegistry, BootstrapError> {
    let settings = kernel::config::load_settings(path)?;
    bootstrap(&settings)
}
