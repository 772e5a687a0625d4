//! Registry-ready administration configuration.

use crate::identity::DomainTypeId;
use crate::markers::Units;
use crate::metadata::FieldKind;
use serde::{Deserialize, Serialize};
use std::ops::Deref;
use std::sync::Arc;

/// Entity-level settings of an administered type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityConfiguration {
    pub name: String,
    pub plural_name: String,
    pub name_field: Option<String>,
    pub id_field: Option<String>,
}

/// A field as presented by one administration view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldConfiguration {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdministrationConfigurationInner {
    pub domain_type: DomainTypeId,
    pub configuration_type: DomainTypeId,
    pub entity: EntityConfiguration,
    pub list_view: Vec<FieldConfiguration>,
    pub quick_view: Vec<FieldConfiguration>,
    pub show_view: Vec<FieldConfiguration>,
    pub form_view: Vec<FieldConfiguration>,
    pub filters: Vec<FieldConfiguration>,
    pub scopes: Vec<String>,
    pub default_scope: Option<String>,
}

/// Final, immutable configuration of one administered domain type.
///
/// Arc-wrapped so that registry lookups hand out inexpensive clones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdministrationConfiguration {
    #[serde(flatten)]
    inner: Arc<AdministrationConfigurationInner>,
}

impl AdministrationConfiguration {
    #[must_use]
    pub fn new(inner: AdministrationConfigurationInner) -> Self {
        Self { inner: Arc::new(inner) }
    }

    /// Fields shown by the given view. `Units` combinations return an empty slice.
    #[must_use]
    pub fn view(&self, unit: Units) -> &[FieldConfiguration] {
        [
            (Units::LIST, &self.inner.list_view),
            (Units::QUICK, &self.inner.quick_view),
            (Units::SHOW, &self.inner.show_view),
            (Units::FORM, &self.inner.form_view),
            (Units::FILTER, &self.inner.filters),
        ]
        .into_iter()
        .find_map(|(candidate, fields)| (candidate == unit).then_some(fields.as_slice()))
        .unwrap_or(&[])
    }

    /// `true` when both handles share the same allocation.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Deref for AdministrationConfiguration {
    type Target = AdministrationConfigurationInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
