use crate::error::BootstrapError;
use ladmin_domain::{ConfigurationSource, DomainTypeId};
use std::borrow::Cow;
use tracing::warn;

/// One rule violation found in one configuration source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub type_name: DomainTypeId,
    pub rule: &'static str,
    pub message: Cow<'static, str>,
}

impl Problem {
    #[must_use]
    pub fn new(
        source: &ConfigurationSource,
        rule: &'static str,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self { type_name: source.configuration_type.clone(), rule, message: message.into() }
    }
}

impl From<Problem> for BootstrapError {
    fn from(problem: Problem) -> Self {
        Self::ValidationViolation {
            type_name: problem.type_name,
            rule: Cow::Borrowed(problem.rule),
            message: problem.message,
            context: None,
        }
    }
}

/// Receives violations while a source is being validated.
pub trait ProblemReporter {
    /// # Errors
    /// Fail-fast reporters turn the first problem into [`BootstrapError::ValidationViolation`].
    fn report(&mut self, problem: Problem) -> Result<(), BootstrapError>;
}

/// Aborts on the first problem. The pipeline always validates with this reporter.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailFastReporter;

impl ProblemReporter for FailFastReporter {
    fn report(&mut self, problem: Problem) -> Result<(), BootstrapError> {
        Err(problem.into())
    }
}

/// Keeps every problem; for diagnostics.
#[derive(Debug, Clone, Default)]
pub struct CollectingReporter {
    problems: Vec<Problem>,
}

impl CollectingReporter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn problems(&self) -> &[Problem] {
        &self.problems
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    #[must_use]
    pub fn into_problems(self) -> Vec<Problem> {
        self.problems
    }
}

impl ProblemReporter for CollectingReporter {
    fn report(&mut self, problem: Problem) -> Result<(), BootstrapError> {
        warn!(
            type_name = %problem.type_name,
            rule = problem.rule,
            message = %problem.message,
            "Administration problem"
        );
        self.problems.push(problem);
        Ok(())
    }
}
