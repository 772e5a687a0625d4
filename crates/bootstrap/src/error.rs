use ladmin_domain::DomainTypeId;
use ladmin_kernel::config::ConfigError;
use std::borrow::Cow;

/// Errors that abort the administration bootstrap.
///
/// None of them is recovered locally: the host treats the whole bootstrap as failed.
#[ladmin_derive::ladmin_error]
pub enum BootstrapError {
    /// A configuration source broke a validation rule. Fail-fast: the first one wins.
    #[error("Invalid administration of `{type_name}`{}: rule `{rule}` violated: {message}", format_context(.context))]
    ValidationViolation {
        type_name: DomainTypeId,
        rule: Cow<'static, str>,
        message: Cow<'static, str>,
        context: Option<Cow<'static, str>>,
    },

    /// A candidate could not be turned into a configuration source or configuration.
    #[error("Failed to construct administration of `{type_name}`{}: {message}", format_context(.context))]
    ConstructionFailure {
        type_name: DomainTypeId,
        message: Cow<'static, str>,
        context: Option<Cow<'static, str>>,
    },

    /// Two scanned candidates administer the same domain type.
    #[error("Domain type `{domain_type}` is administered by both `{first}` and `{second}`{}", format_context(.context))]
    DuplicateDomainType {
        domain_type: DomainTypeId,
        first: DomainTypeId,
        second: DomainTypeId,
        context: Option<Cow<'static, str>>,
    },

    #[error("Administration registry is already published{}", format_context(.context))]
    AlreadyPublished { context: Option<Cow<'static, str>> },

    #[error("Settings error{}: {source}", format_context(.context))]
    Config { source: ConfigError, context: Option<Cow<'static, str>> },
}

impl BootstrapError {
    /// The candidate the error is about, when there is one.
    #[must_use]
    pub const fn type_name(&self) -> Option<&DomainTypeId> {
        match self {
            Self::ValidationViolation { type_name, .. } | Self::ConstructionFailure { type_name, .. } => {
                Some(type_name)
            },
            Self::DuplicateDomainType { second, .. } => Some(second),
            Self::AlreadyPublished { .. } | Self::Config { .. } => None,
        }
    }

    /// Name of the violated rule for validation failures.
    #[must_use]
    pub fn rule(&self) -> Option<&str> {
        match self {
            Self::ValidationViolation { rule, .. } => Some(rule),
            _ => None,
        }
    }
}
