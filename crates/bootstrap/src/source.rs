use crate::error::BootstrapError;
use crate::scanning::CandidateType;
use ladmin_domain::{ConfigurationSource, FieldDeclaration};
use std::borrow::Cow;

/// Turns a scanned candidate into its normalized [`ConfigurationSource`].
///
/// Selection belongs to the scanner: every candidate it yields is described, whatever its markers.
pub trait ConfigurationSourceFactory: Send + Sync {
    /// # Errors
    /// [`BootstrapError::ConstructionFailure`] when the candidate cannot be described.
    fn create_configuration_source(
        &self,
        candidate: &CandidateType,
    ) -> Result<ConfigurationSource, BootstrapError>;
}

/// Normalizes declared metadata: entity and plural names, identifier and humanized labels.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomainConfigurationSourceFactory;

impl ConfigurationSourceFactory for DomainConfigurationSourceFactory {
    fn create_configuration_source(
        &self,
        candidate: &CandidateType,
    ) -> Result<ConfigurationSource, BootstrapError> {
        let metadata = candidate.metadata();
        let domain_type = metadata.domain_type.clone();

        let entity_name = metadata
            .label
            .as_deref()
            .map_or_else(|| domain_type.short_name().to_owned(), str::to_owned);
        let plural_name = metadata
            .plural
            .as_deref()
            .map_or_else(|| format!("{entity_name}s"), str::to_owned);

        let fields: Vec<FieldDeclaration> = metadata
            .fields
            .iter()
            .map(|field| {
                let mut field = field.clone();
                if field.label.is_none() {
                    field.label = Some(Cow::Owned(humanize(&field.name)));
                }
                field
            })
            .collect();
        let id_field = fields.iter().find(|f| f.identifier).map(|f| f.name.to_string());

        Ok(ConfigurationSource {
            configuration_type: candidate.id().clone(),
            domain_type,
            entity_name,
            plural_name,
            name_field: metadata.name_field.as_deref().map(str::to_owned),
            id_field,
            fields,
            scopes: metadata.scopes.clone(),
        })
    }
}

/// `created_at` and `createdAt` both become `Created at`.
#[must_use]
pub fn humanize(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut previous_lower = false;

    for ch in name.chars() {
        if ch == '_' || ch == '-' || ch.is_whitespace() {
            if !out.is_empty() && !out.ends_with(' ') {
                out.push(' ');
            }
            previous_lower = false;
            continue;
        }
        if ch.is_uppercase() && previous_lower {
            out.push(' ');
        }
        if out.is_empty() {
            out.extend(ch.to_uppercase());
        } else {
            out.extend(ch.to_lowercase());
        }
        previous_lower = ch.is_lowercase() || ch.is_ascii_digit();
    }

    out.truncate(out.trim_end().len());
    out
}
