//! The built-in structural rules, in the order [`RuleSet::default_rules`] runs them.
//!
//! [`RuleSet::default_rules`]: super::RuleSet::default_rules

use super::reporter::{Problem, ProblemReporter};
use crate::error::BootstrapError;
use fxhash::FxHashSet;
use ladmin_domain::{ConfigurationSource, Units};

/// One structural check over a configuration source.
///
/// A rule reports every problem it finds and propagates the reporter's error, so a
/// fail-fast reporter stops it at the first one.
pub trait ValidationRule: Send + Sync {
    fn name(&self) -> &'static str;

    /// # Errors
    /// Whatever the reporter returns for a reported problem.
    fn check(
        &self,
        source: &ConfigurationSource,
        reporter: &mut dyn ProblemReporter,
    ) -> Result<(), BootstrapError>;
}

/// The administered domain type must be named, down to its last segment.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomainTypePresent;

impl ValidationRule for DomainTypePresent {
    fn name(&self) -> &'static str {
        "domain-type-present"
    }

    fn check(
        &self,
        source: &ConfigurationSource,
        reporter: &mut dyn ProblemReporter,
    ) -> Result<(), BootstrapError> {
        if source.domain_type.is_blank() {
            reporter.report(Problem::new(source, self.name(), "no domain type declared"))?;
        } else if source.domain_type.short_name().trim().is_empty() {
            reporter.report(Problem::new(
                source,
                self.name(),
                format!("domain type `{}` has no type name", source.domain_type),
            ))?;
        }
        Ok(())
    }
}

/// Exactly one identifier field.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentifierDeclared;

impl ValidationRule for IdentifierDeclared {
    fn name(&self) -> &'static str {
        "identifier-declared"
    }

    fn check(
        &self,
        source: &ConfigurationSource,
        reporter: &mut dyn ProblemReporter,
    ) -> Result<(), BootstrapError> {
        let identifiers: Vec<&str> = source.identifiers().map(|f| f.name.as_ref()).collect();
        match identifiers.as_slice() {
            [] => reporter.report(Problem::new(
                source,
                self.name(),
                "missing required field: no identifier declared",
            )),
            [_] => Ok(()),
            many => reporter.report(Problem::new(
                source,
                self.name(),
                format!("conflicting identifier declarations: {}", many.join(", ")),
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UniqueFieldNames;

impl ValidationRule for UniqueFieldNames {
    fn name(&self) -> &'static str {
        "unique-field-names"
    }

    fn check(
        &self,
        source: &ConfigurationSource,
        reporter: &mut dyn ProblemReporter,
    ) -> Result<(), BootstrapError> {
        let mut seen = FxHashSet::default();
        let mut reported = FxHashSet::default();
        for field in &source.fields {
            let name = field.name.as_ref();
            if !seen.insert(name) && reported.insert(name) {
                reporter.report(Problem::new(
                    source,
                    self.name(),
                    format!("conflicting declarations of field `{name}`"),
                ))?;
            }
        }
        Ok(())
    }
}

/// A configured name field must be one of the declared fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameFieldDeclared;

impl ValidationRule for NameFieldDeclared {
    fn name(&self) -> &'static str {
        "name-field-declared"
    }

    fn check(
        &self,
        source: &ConfigurationSource,
        reporter: &mut dyn ProblemReporter,
    ) -> Result<(), BootstrapError> {
        if let Some(name_field) = source.name_field.as_deref()
            && source.field(name_field).is_none()
        {
            reporter.report(Problem::new(
                source,
                self.name(),
                format!("name field `{name_field}` is not declared"),
            ))?;
        }
        Ok(())
    }
}

/// Association and collection fields must name their target type.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssociationTarget;

impl ValidationRule for AssociationTarget {
    fn name(&self) -> &'static str {
        "association-target"
    }

    fn check(
        &self,
        source: &ConfigurationSource,
        reporter: &mut dyn ProblemReporter,
    ) -> Result<(), BootstrapError> {
        for field in &source.fields {
            if field.kind.target().is_some_and(|target| target.is_blank()) {
                reporter.report(Problem::new(
                    source,
                    self.name(),
                    format!("field `{}` has no target type", field.name),
                ))?;
            }
        }
        Ok(())
    }
}

/// The list view must show at least one field.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitFieldsVisible;

impl ValidationRule for UnitFieldsVisible {
    fn name(&self) -> &'static str {
        "unit-fields-visible"
    }

    fn check(
        &self,
        source: &ConfigurationSource,
        reporter: &mut dyn ProblemReporter,
    ) -> Result<(), BootstrapError> {
        if !source.fields.iter().any(|f| f.units.contains(Units::LIST)) {
            reporter.report(Problem::new(source, self.name(), "no field is visible in the list view"))?;
        }
        Ok(())
    }
}

/// Scope names are non-blank and unique, with at most one default.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScopesConsistent;

impl ValidationRule for ScopesConsistent {
    fn name(&self) -> &'static str {
        "scopes-consistent"
    }

    fn check(
        &self,
        source: &ConfigurationSource,
        reporter: &mut dyn ProblemReporter,
    ) -> Result<(), BootstrapError> {
        let mut seen = FxHashSet::default();
        for scope in &source.scopes {
            if scope.name.trim().is_empty() {
                reporter.report(Problem::new(source, self.name(), "scope without a name"))?;
            } else if !seen.insert(scope.name.as_ref()) {
                reporter.report(Problem::new(
                    source,
                    self.name(),
                    format!("scope `{}` declared more than once", scope.name),
                ))?;
            }
        }

        let defaults = source.scopes.iter().filter(|s| s.default).count();
        if defaults > 1 {
            reporter.report(Problem::new(
                source,
                self.name(),
                format!("{defaults} default scopes declared, at most one allowed"),
            ))?;
        }
        Ok(())
    }
}
