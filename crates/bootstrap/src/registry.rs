//! The process-wide administration registry.
//!
//! Bootstrap writes into a [`GlobalAdministrationConfiguration`], freezes it into an
//! [`AdministrationRegistry`] snapshot and [`publish`]es that exactly once. Readers only ever
//! see the frozen snapshot through [`global`].

use crate::error::BootstrapError;
use fxhash::FxHashMap;
use ladmin_domain::{AdministrationConfiguration, DomainTypeId};
use std::sync::{Arc, OnceLock};
use tracing::info;

#[derive(Debug, Clone, Default)]
struct Entries {
    order: Vec<AdministrationConfiguration>,
    index: FxHashMap<DomainTypeId, usize>,
}

impl Entries {
    fn insert(&mut self, configuration: AdministrationConfiguration) -> Option<AdministrationConfiguration> {
        let key = configuration.domain_type.clone();
        if let Some(&position) = self.index.get(&key) {
            return Some(std::mem::replace(&mut self.order[position], configuration));
        }
        self.index.insert(key, self.order.len());
        self.order.push(configuration);
        None
    }

    fn get(&self, domain_type: &str) -> Option<&AdministrationConfiguration> {
        self.index.get(domain_type).map(|&position| &self.order[position])
    }
}

/// Mutable registry object, populated during bootstrap only.
#[derive(Debug, Default)]
pub struct GlobalAdministrationConfiguration {
    entries: Entries,
}

impl GlobalAdministrationConfiguration {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `configuration` under its domain type.
    ///
    /// Registering a domain type again replaces the earlier configuration in place, keeping its
    /// position, and returns the replaced one.
    pub fn register_entry(
        &mut self,
        configuration: AdministrationConfiguration,
    ) -> Option<AdministrationConfiguration> {
        self.entries.insert(configuration)
    }

    #[must_use]
    pub fn get(&self, domain_type: &str) -> Option<&AdministrationConfiguration> {
        self.entries.get(domain_type)
    }

    #[must_use]
    pub fn contains(&self, domain_type: &str) -> bool {
        self.entries.index.contains_key(domain_type)
    }

    /// Configurations in registration order.
    pub fn iter(&self) -> std::slice::Iter<'_, AdministrationConfiguration> {
        self.entries.order.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.order.is_empty()
    }

    /// Ends the populating phase.
    #[must_use]
    pub fn freeze(self) -> AdministrationRegistry {
        AdministrationRegistry { entries: Arc::new(self.entries) }
    }
}

/// Read-only registry snapshot. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct AdministrationRegistry {
    entries: Arc<Entries>,
}

impl AdministrationRegistry {
    #[must_use]
    pub fn get(&self, domain_type: &str) -> Option<&AdministrationConfiguration> {
        self.entries.get(domain_type)
    }

    #[must_use]
    pub fn contains(&self, domain_type: &str) -> bool {
        self.entries.index.contains_key(domain_type)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AdministrationConfiguration> {
        self.entries.order.iter()
    }

    pub fn domain_types(&self) -> impl Iterator<Item = &DomainTypeId> {
        self.iter().map(|configuration| &configuration.domain_type)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.order.is_empty()
    }
}

impl<'a> IntoIterator for &'a AdministrationRegistry {
    type Item = &'a AdministrationConfiguration;
    type IntoIter = std::slice::Iter<'a, AdministrationConfiguration>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

static GLOBAL_REGISTRY: OnceLock<AdministrationRegistry> = OnceLock::new();

/// Makes `registry` the process-wide registry.
///
/// # Errors
/// [`BootstrapError::AlreadyPublished`] on every call after the first; the earlier registry
/// stays in place.
pub fn publish(registry: AdministrationRegistry) -> Result<&'static AdministrationRegistry, BootstrapError> {
    let mut published = false;
    let global = GLOBAL_REGISTRY.get_or_init(|| {
        published = true;
        registry
    });

    if !published {
        return Err(BootstrapError::AlreadyPublished { context: None });
    }
    info!(entries = global.len(), "Administration registry published");
    Ok(global)
}

/// The published registry, `None` until [`publish`] succeeded.
#[must_use]
pub fn global() -> Option<&'static AdministrationRegistry> {
    GLOBAL_REGISTRY.get()
}
