//! Structural validation of configuration sources.
//!
//! A [`ConfigurationSourceValidator`] runs an ordered [`RuleSet`] over one source and reports
//! every violation through a [`ProblemReporter`]. With the [`FailFastReporter`] the first
//! violation becomes the error that aborts the bootstrap.
//!
//! ```rust
//! use ladmin_bootstrap::validation::{CollectingReporter, RuleSet, ConfigurationSourceValidator};
//! use ladmin_bootstrap::domain::{ConfigurationSource, DomainTypeId};
//!
//! let source = ConfigurationSource {
//!     configuration_type: DomainTypeId::from("pkg.Bad"),
//!     domain_type: DomainTypeId::from("pkg.Bad"),
//!     entity_name: "Bad".into(),
//!     plural_name: "Bads".into(),
//!     name_field: None,
//!     id_field: None,
//!     fields: Vec::new(),
//!     scopes: Vec::new(),
//! };
//!
//! let mut reporter = CollectingReporter::new();
//! ConfigurationSourceValidator::new(RuleSet::default_rules())
//!     .validate(&source, &mut reporter)
//!     .unwrap();
//! assert_eq!(reporter.problems()[0].rule, "identifier-declared");
//! ```

mod reporter;
pub mod rules;

pub use reporter::{CollectingReporter, FailFastReporter, Problem, ProblemReporter};
pub use rules::ValidationRule;

use crate::error::BootstrapError;
use ladmin_domain::ConfigurationSource;
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// Ordered, shareable list of rules.
#[derive(Clone, Default)]
pub struct RuleSet {
    rules: Arc<[Box<dyn ValidationRule>]>,
}

impl RuleSet {
    #[must_use]
    pub fn builder() -> RuleSetBuilder {
        RuleSetBuilder::default()
    }

    /// The built-in rules, in their fixed order.
    #[must_use]
    pub fn default_rules() -> Self {
        Self::builder()
            .rule(rules::DomainTypePresent)
            .rule(rules::IdentifierDeclared)
            .rule(rules::UniqueFieldNames)
            .rule(rules::NameFieldDeclared)
            .rule(rules::AssociationTarget)
            .rule(rules::UnitFieldsVisible)
            .rule(rules::ScopesConsistent)
            .build()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|rule| rule.name())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

#[derive(Default)]
pub struct RuleSetBuilder {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl RuleSetBuilder {
    #[must_use]
    pub fn rule(mut self, rule: impl ValidationRule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    #[must_use]
    pub fn build(self) -> RuleSet {
        RuleSet { rules: self.rules.into() }
    }
}

impl fmt::Debug for RuleSetBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.rules.iter().map(|rule| rule.name())).finish()
    }
}

/// Runs a [`RuleSet`] over configuration sources.
#[derive(Debug, Clone)]
pub struct ConfigurationSourceValidator {
    rules: RuleSet,
}

impl ConfigurationSourceValidator {
    #[must_use]
    pub const fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// Checks `source` against every rule in order.
    ///
    /// # Errors
    /// The first error a rule propagates from `reporter`.
    pub fn validate(
        &self,
        source: &ConfigurationSource,
        reporter: &mut dyn ProblemReporter,
    ) -> Result<(), BootstrapError> {
        for rule in self.rules.rules.iter() {
            trace!(type_name = %source.configuration_type, rule = rule.name(), "Checking rule");
            rule.check(source, reporter)?;
        }
        Ok(())
    }
}

/// Supplies the validator the pipeline runs. The pipeline always reports through a
/// [`FailFastReporter`].
pub trait ValidatorFactory: Send + Sync {
    fn validator(&self) -> ConfigurationSourceValidator;
}

/// Built-in rules unless configured otherwise.
#[derive(Debug, Clone, Default)]
pub struct DefaultValidatorFactory {
    rules: Option<RuleSet>,
}

impl DefaultValidatorFactory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates with `rules` instead of the built-in set.
    #[must_use]
    pub fn with_rules(rules: RuleSet) -> Self {
        Self { rules: Some(rules) }
    }
}

impl ValidatorFactory for DefaultValidatorFactory {
    fn validator(&self) -> ConfigurationSourceValidator {
        ConfigurationSourceValidator::new(self.rules.clone().unwrap_or_else(RuleSet::default_rules))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ladmin_domain::{DomainTypeId, FieldDeclaration, FieldKind, ScopeDeclaration, Units};

    fn source(fields: Vec<FieldDeclaration>) -> ConfigurationSource {
        ConfigurationSource {
            configuration_type: DomainTypeId::from("pkg.models.Order"),
            domain_type: DomainTypeId::from("pkg.models.Order"),
            entity_name: "Order".into(),
            plural_name: "Orders".into(),
            name_field: None,
            id_field: None,
            fields,
            scopes: Vec::new(),
        }
    }

    fn valid() -> ConfigurationSource {
        source(vec![
            FieldDeclaration::new("id", FieldKind::Integer).identifier(),
            FieldDeclaration::new("number", FieldKind::Text),
        ])
    }

    fn collect(source: &ConfigurationSource) -> Vec<Problem> {
        let mut reporter = CollectingReporter::new();
        DefaultValidatorFactory::new().validator().validate(source, &mut reporter).unwrap();
        reporter.into_problems()
    }

    fn rules_of(source: &ConfigurationSource) -> Vec<&'static str> {
        collect(source).into_iter().map(|p| p.rule).collect()
    }

    #[test]
    fn default_rule_order() {
        let names: Vec<_> = RuleSet::default_rules().names().collect();
        assert_eq!(
            names,
            [
                "domain-type-present",
                "identifier-declared",
                "unique-field-names",
                "name-field-declared",
                "association-target",
                "unit-fields-visible",
                "scopes-consistent",
            ]
        );
    }

    #[test]
    fn valid_source_passes_fail_fast() {
        let validator = DefaultValidatorFactory::new().validator();
        assert!(validator.validate(&valid(), &mut FailFastReporter).is_ok());
    }

    #[test]
    fn fail_fast_stops_at_the_first_violation() {
        let mut bad = source(vec![FieldDeclaration::new("number", FieldKind::Text)]);
        bad.domain_type = DomainTypeId::from(" ");

        let err = DefaultValidatorFactory::new()
            .validator()
            .validate(&bad, &mut FailFastReporter)
            .unwrap_err();

        assert_eq!(err.rule(), Some("domain-type-present"));
        assert_eq!(err.type_name().map(DomainTypeId::as_str), Some("pkg.models.Order"));
        assert_eq!(rules_of(&bad), ["domain-type-present", "identifier-declared"]);
    }

    #[test]
    fn missing_identifier_is_a_missing_required_field() {
        let problems = collect(&source(vec![FieldDeclaration::new("number", FieldKind::Text)]));
        assert_eq!(problems.len(), 1);
        assert_eq!(problems[0].rule, "identifier-declared");
        assert!(problems[0].message.contains("missing required field"));
    }

    #[test]
    fn conflicting_declarations() {
        let problems = collect(&source(vec![
            FieldDeclaration::new("id", FieldKind::Integer).identifier(),
            FieldDeclaration::new("code", FieldKind::Text).identifier(),
            FieldDeclaration::new("code", FieldKind::Text),
            FieldDeclaration::new("code", FieldKind::Text),
        ]));
        let rules: Vec<_> = problems.iter().map(|p| p.rule).collect();
        assert_eq!(rules, ["identifier-declared", "unique-field-names"]);
        assert!(problems[0].message.contains("id, code"));
    }

    #[test]
    fn name_field_and_association_targets() {
        let mut bad = source(vec![
            FieldDeclaration::new("id", FieldKind::Integer).identifier(),
            FieldDeclaration::new("customer", FieldKind::Association { target: DomainTypeId::from("") }),
            FieldDeclaration::new("lines", FieldKind::Collection { target: DomainTypeId::from("pkg.Line") }),
        ]);
        bad.name_field = Some("title".into());
        assert_eq!(rules_of(&bad), ["name-field-declared", "association-target"]);
    }

    #[test]
    fn domain_type_needs_a_type_name() {
        let mut bad = valid();
        bad.domain_type = DomainTypeId::from("pkg.");

        let err = DefaultValidatorFactory::new()
            .validator()
            .validate(&bad, &mut FailFastReporter)
            .unwrap_err();
        assert_eq!(err.rule(), Some("domain-type-present"));
        assert!(err.to_string().contains("has no type name"));
    }

    #[test]
    fn list_view_needs_a_field() {
        let bad = source(vec![
            FieldDeclaration::new("id", FieldKind::Integer).identifier().units(Units::FORM),
        ]);
        assert_eq!(rules_of(&bad), ["unit-fields-visible"]);
    }

    #[test]
    fn scopes_must_be_named_unique_and_single_default() {
        let mut bad = valid();
        bad.scopes = vec![
            ScopeDeclaration::default_scope("all"),
            ScopeDeclaration::default_scope("open"),
            ScopeDeclaration::new("open"),
            ScopeDeclaration::new(" "),
        ];
        let problems = collect(&bad);
        assert_eq!(problems.len(), 3);
        assert!(problems.iter().all(|p| p.rule == "scopes-consistent"));
    }

    #[test]
    fn custom_rule_sets() {
        struct AlwaysFails;

        impl ValidationRule for AlwaysFails {
            fn name(&self) -> &'static str {
                "always-fails"
            }

            fn check(
                &self,
                source: &ConfigurationSource,
                reporter: &mut dyn ProblemReporter,
            ) -> Result<(), BootstrapError> {
                reporter.report(Problem::new(source, self.name(), "nope"))
            }
        }

        let rules = RuleSet::builder().rule(AlwaysFails).build();
        assert_eq!(rules.len(), 1);

        let factory = DefaultValidatorFactory::with_rules(rules);
        let err = factory.validator().validate(&valid(), &mut FailFastReporter).unwrap_err();
        assert_eq!(err.rule(), Some("always-fails"));
        assert!(RuleSet::default().is_empty());
    }
}
