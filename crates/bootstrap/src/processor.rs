//! The discovery, validation and registration pipeline.

use crate::error::BootstrapError;
use crate::factory::{AdministrationConfigurationFactory, DomainTypeAdministrationConfigurationFactory};
use crate::lifecycle::{Component, LifecycleHook};
use crate::registry::{AdministrationRegistry, GlobalAdministrationConfiguration};
use crate::scanning::{AdministrationClassScanner, CandidateType, ClassScanner, scan_namespaces};
use crate::source::{ConfigurationSourceFactory, DomainConfigurationSourceFactory};
use crate::validation::{ConfigurationSourceValidator, DefaultValidatorFactory, FailFastReporter, ValidatorFactory};
use fxhash::FxHashMap;
use ladmin_domain::DomainTypeId;
use ladmin_kernel::{NamespaceList, PropertySource, resolve_namespaces};
use std::fmt;
use tracing::{debug, error, info, instrument, warn};

/// Populates a [`GlobalAdministrationConfiguration`] from the types declared under the
/// configured namespaces.
///
/// Every candidate is described, validated and compiled in scan order, and registered only
/// once it passed validation. The first failure aborts the run; entries registered before it
/// stay in the registry object, which the host must then discard.
///
/// ```rust
/// use ladmin_bootstrap::processor::GlobalAdministrationConfigurationProcessor;
///
/// let registry = GlobalAdministrationConfigurationProcessor::builder()
///     .base_package("pkg.nothing.here")
///     .build()
///     .run()
///     .unwrap();
/// assert!(registry.is_empty());
/// ```
pub struct GlobalAdministrationConfigurationProcessor {
    namespaces: NamespaceList,
    scanner: Box<dyn ClassScanner>,
    source_factory: Box<dyn ConfigurationSourceFactory>,
    validator_factory: Box<dyn ValidatorFactory>,
    configuration_factory: Box<dyn AdministrationConfigurationFactory>,
}

impl GlobalAdministrationConfigurationProcessor {
    #[must_use]
    pub fn builder() -> ProcessorBuilder {
        ProcessorBuilder::default()
    }

    /// Processor with the default collaborators reading its namespaces from `properties`.
    #[must_use]
    pub fn from_properties<P: PropertySource + ?Sized>(properties: &P) -> Self {
        Self::builder().properties(properties).build()
    }

    #[must_use]
    pub fn namespaces(&self) -> &NamespaceList {
        &self.namespaces
    }

    /// Runs the pipeline into a fresh registry and freezes it.
    ///
    /// # Errors
    /// See [`process`](Self::process).
    pub fn run(&self) -> Result<AdministrationRegistry, BootstrapError> {
        let mut registry = GlobalAdministrationConfiguration::new();
        self.process(&mut registry)?;
        Ok(registry.freeze())
    }

    /// Runs the pipeline into `registry` and returns how many entries it registered.
    ///
    /// # Errors
    /// * [`BootstrapError::ValidationViolation`] for the first invalid source.
    /// * [`BootstrapError::ConstructionFailure`] when a candidate cannot be compiled.
    /// * [`BootstrapError::DuplicateDomainType`] when two candidates administer one domain type.
    #[instrument(name = "administration_bootstrap", skip_all, fields(namespaces = ?self.namespaces.as_slice()))]
    pub fn process(&self, registry: &mut GlobalAdministrationConfiguration) -> Result<usize, BootstrapError> {
        if self.namespaces.is_empty() {
            warn!("No base package configured, no administration will be registered");
            return Ok(0);
        }

        let candidates = scan_namespaces(self.scanner.as_ref(), &self.namespaces);
        info!(candidates = candidates.len(), "Discovered administration candidates");

        let validator = self.validator_factory.validator();
        let mut administered_by = FxHashMap::default();
        let mut registered = 0;

        for candidate in &candidates {
            if let Err(err) = self.register(candidate, &validator, &mut administered_by, registry) {
                error!(
                    kind = err.kind(),
                    type_name = %candidate.id(),
                    registered,
                    error = %err,
                    "Administration bootstrap aborted"
                );
                return Err(err);
            }
            registered += 1;
        }

        info!(registered, "Administration bootstrap completed");
        Ok(registered)
    }

    fn register(
        &self,
        candidate: &CandidateType,
        validator: &ConfigurationSourceValidator,
        administered_by: &mut FxHashMap<DomainTypeId, DomainTypeId>,
        registry: &mut GlobalAdministrationConfiguration,
    ) -> Result<(), BootstrapError> {
        let source = self.source_factory.create_configuration_source(candidate)?;

        validator.validate(&source, &mut FailFastReporter)?;

        if let Some(first) = administered_by.get(&source.domain_type) {
            return Err(BootstrapError::DuplicateDomainType {
                domain_type: source.domain_type.clone(),
                first: first.clone(),
                second: candidate.id().clone(),
                context: None,
            });
        }
        administered_by.insert(source.domain_type.clone(), candidate.id().clone());

        let configuration = self.configuration_factory.create_administration_configuration(source)?;
        info!(
            domain_type = %configuration.domain_type,
            configuration_type = %configuration.configuration_type,
            "Registering administration"
        );
        registry.register_entry(configuration);
        Ok(())
    }
}

impl LifecycleHook for GlobalAdministrationConfigurationProcessor {
    fn after_initialization(&self, component: Component, name: &str) -> Result<Component, BootstrapError> {
        match component.downcast::<GlobalAdministrationConfiguration>() {
            Ok(mut registry) => {
                debug!(component = name, "Populating administration registry");
                self.process(&mut registry)?;
                Ok(registry)
            },
            Err(component) => Ok(component),
        }
    }
}

impl fmt::Debug for GlobalAdministrationConfigurationProcessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GlobalAdministrationConfigurationProcessor")
            .field("namespaces", &self.namespaces)
            .finish_non_exhaustive()
    }
}

/// Builder for [`GlobalAdministrationConfigurationProcessor`]; every collaborator has a default.
#[derive(Default)]
pub struct ProcessorBuilder {
    namespaces: NamespaceList,
    scanner: Option<Box<dyn ClassScanner>>,
    source_factory: Option<Box<dyn ConfigurationSourceFactory>>,
    validator_factory: Option<Box<dyn ValidatorFactory>>,
    configuration_factory: Option<Box<dyn AdministrationConfigurationFactory>>,
}

impl ProcessorBuilder {
    #[must_use]
    pub fn namespaces(mut self, namespaces: NamespaceList) -> Self {
        self.namespaces = namespaces;
        self
    }

    /// Parses a delimited namespace list, e.g. `"pkg.models, pkg.billing"`.
    #[must_use]
    pub fn base_package(self, base_package: &str) -> Self {
        self.namespaces(NamespaceList::parse(Some(base_package)))
    }

    #[must_use]
    pub fn properties<P: PropertySource + ?Sized>(self, properties: &P) -> Self {
        self.namespaces(resolve_namespaces(properties))
    }

    #[must_use]
    pub fn scanner(mut self, scanner: impl ClassScanner + 'static) -> Self {
        self.scanner = Some(Box::new(scanner));
        self
    }

    #[must_use]
    pub fn source_factory(mut self, factory: impl ConfigurationSourceFactory + 'static) -> Self {
        self.source_factory = Some(Box::new(factory));
        self
    }

    #[must_use]
    pub fn validator_factory(mut self, factory: impl ValidatorFactory + 'static) -> Self {
        self.validator_factory = Some(Box::new(factory));
        self
    }

    #[must_use]
    pub fn configuration_factory(mut self, factory: impl AdministrationConfigurationFactory + 'static) -> Self {
        self.configuration_factory = Some(Box::new(factory));
        self
    }

    #[must_use]
    pub fn build(self) -> GlobalAdministrationConfigurationProcessor {
        GlobalAdministrationConfigurationProcessor {
            namespaces: self.namespaces,
            scanner: self.scanner.unwrap_or_else(|| Box::new(AdministrationClassScanner::new())),
            source_factory: self.source_factory.unwrap_or_else(|| Box::new(DomainConfigurationSourceFactory)),
            validator_factory: self.validator_factory.unwrap_or_else(|| Box::new(DefaultValidatorFactory::new())),
            configuration_factory: self
                .configuration_factory
                .unwrap_or_else(|| Box::new(DomainTypeAdministrationConfigurationFactory)),
        }
    }
}

impl fmt::Debug for ProcessorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProcessorBuilder").field("namespaces", &self.namespaces).finish_non_exhaustive()
    }
}
