//! Raw declared metadata, as produced by a type's administration declaration.

use crate::identity::DomainTypeId;
use crate::markers::Units;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Value kind of a declared field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum FieldKind {
    Text,
    Integer,
    Decimal,
    Boolean,
    Date,
    /// Single-valued relationship to another domain type.
    Association { target: DomainTypeId },
    /// Many-valued relationship to another domain type.
    Collection { target: DomainTypeId },
    Other,
}

impl FieldKind {
    #[must_use]
    pub const fn target(&self) -> Option<&DomainTypeId> {
        match self {
            Self::Association { target } | Self::Collection { target } => Some(target),
            _ => None,
        }
    }
}

/// One field declaration of an administered type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDeclaration {
    pub name: Cow<'static, str>,
    pub kind: FieldKind,
    pub label: Option<Cow<'static, str>>,
    pub required: bool,
    pub identifier: bool,
    pub units: Units,
}

impl FieldDeclaration {
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            label: None,
            required: false,
            identifier: false,
            units: Units::default(),
        }
    }

    #[must_use]
    pub fn label(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Marks the field as the entity identifier. Identifiers are always required.
    #[must_use]
    pub const fn identifier(mut self) -> Self {
        self.identifier = true;
        self.required = true;
        self
    }

    #[must_use]
    pub const fn units(mut self, units: Units) -> Self {
        self.units = units;
        self
    }
}

/// Named query scope offered in the list view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeDeclaration {
    pub name: Cow<'static, str>,
    pub default: bool,
}

impl ScopeDeclaration {
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self { name: name.into(), default: false }
    }

    #[must_use]
    pub fn default_scope(name: impl Into<Cow<'static, str>>) -> Self {
        Self { name: name.into(), default: true }
    }
}

/// Everything a declaration states about one administered domain type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeMetadata {
    pub domain_type: DomainTypeId,
    pub label: Option<Cow<'static, str>>,
    pub plural: Option<Cow<'static, str>>,
    pub name_field: Option<Cow<'static, str>>,
    pub fields: Vec<FieldDeclaration>,
    pub scopes: Vec<ScopeDeclaration>,
}

impl TypeMetadata {
    #[must_use]
    pub fn new(domain_type: impl Into<DomainTypeId>) -> Self {
        Self {
            domain_type: domain_type.into(),
            label: None,
            plural: None,
            name_field: None,
            fields: Vec::new(),
            scopes: Vec::new(),
        }
    }

    #[must_use]
    pub fn label(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn plural(mut self, plural: impl Into<Cow<'static, str>>) -> Self {
        self.plural = Some(plural.into());
        self
    }

    #[must_use]
    pub fn name_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.name_field = Some(field.into());
        self
    }

    #[must_use]
    pub fn field(mut self, field: FieldDeclaration) -> Self {
        self.fields.push(field);
        self
    }

    #[must_use]
    pub fn scope(mut self, scope: ScopeDeclaration) -> Self {
        self.scopes.push(scope);
        self
    }
}
