use crate::identity::DomainTypeId;
use crate::metadata::{FieldDeclaration, ScopeDeclaration};
use serde::{Deserialize, Serialize};

/// Normalized, pre-validation descriptor of one administered domain type.
///
/// Built fresh for every scanned candidate and handed by reference to the validator,
/// then by value to the administration configuration factory. Nothing retains it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationSource {
    /// Identity of the scanned candidate that declared this configuration.
    pub configuration_type: DomainTypeId,
    /// The domain type being administered (registry key).
    pub domain_type: DomainTypeId,
    pub entity_name: String,
    pub plural_name: String,
    pub name_field: Option<String>,
    pub id_field: Option<String>,
    /// Declared fields in declaration order, labels filled in.
    pub fields: Vec<FieldDeclaration>,
    pub scopes: Vec<ScopeDeclaration>,
}

impl ConfigurationSource {
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDeclaration> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn identifiers(&self) -> impl Iterator<Item = &FieldDeclaration> {
        self.fields.iter().filter(|f| f.identifier)
    }
}
