use crate::error::BootstrapError;
use ladmin_domain::administration::AdministrationConfigurationInner;
use ladmin_domain::{
    AdministrationConfiguration, ConfigurationSource, EntityConfiguration, FieldConfiguration,
    FieldDeclaration, Units,
};

/// Compiles a validated source into the configuration that gets registered.
pub trait AdministrationConfigurationFactory: Send + Sync {
    /// # Errors
    /// [`BootstrapError::ConstructionFailure`]; never expected for validated input.
    fn create_administration_configuration(
        &self,
        source: ConfigurationSource,
    ) -> Result<AdministrationConfiguration, BootstrapError>;
}

/// Splits the declared fields into per-view lists, keeping declaration order.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomainTypeAdministrationConfigurationFactory;

impl AdministrationConfigurationFactory for DomainTypeAdministrationConfigurationFactory {
    fn create_administration_configuration(
        &self,
        source: ConfigurationSource,
    ) -> Result<AdministrationConfiguration, BootstrapError> {
        let view = |unit: Units| -> Vec<FieldConfiguration> {
            source.fields.iter().filter(|f| f.units.contains(unit)).map(field_configuration).collect()
        };

        let inner = AdministrationConfigurationInner {
            list_view: view(Units::LIST),
            quick_view: view(Units::QUICK),
            show_view: view(Units::SHOW),
            form_view: view(Units::FORM),
            filters: view(Units::FILTER),
            scopes: source.scopes.iter().map(|s| s.name.to_string()).collect(),
            default_scope: source.scopes.iter().find(|s| s.default).map(|s| s.name.to_string()),
            entity: EntityConfiguration {
                name: source.entity_name,
                plural_name: source.plural_name,
                name_field: source.name_field,
                id_field: source.id_field,
            },
            domain_type: source.domain_type,
            configuration_type: source.configuration_type,
        };

        Ok(AdministrationConfiguration::new(inner))
    }
}

fn field_configuration(field: &FieldDeclaration) -> FieldConfiguration {
    FieldConfiguration {
        name: field.name.to_string(),
        label: field.label.as_deref().unwrap_or(&field.name).to_owned(),
        kind: field.kind.clone(),
        required: field.required,
    }
}
