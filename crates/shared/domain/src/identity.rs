use serde::{Deserialize, Serialize};
use std::borrow::{Borrow, Cow};
use std::fmt;

/// Fully-qualified type name, e.g. `pkg.models.Order`.
///
/// Identity of both scanned candidates and the domain types they administer.
/// Static names borrowed from compile-time registrations clone for free.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DomainTypeId(Cow<'static, str>);

impl DomainTypeId {
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// Joins a namespace and a simple type name.
    #[must_use]
    pub fn qualified(namespace: &str, name: &str) -> Self {
        if namespace.is_empty() {
            return Self(Cow::Owned(name.to_owned()));
        }
        Self(Cow::Owned(format!("{namespace}.{name}")))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The segment after the last `.` (or `::`).
    #[must_use]
    pub fn short_name(&self) -> &str {
        let name = self.0.rsplit("::").next().unwrap_or(&self.0);
        name.rsplit('.').next().unwrap_or(name)
    }

    /// Everything before the short name, without the trailing separator.
    #[must_use]
    pub fn namespace(&self) -> &str {
        let short = self.short_name().len();
        let head = &self.0[..self.0.len() - short];
        head.strip_suffix("::").or_else(|| head.strip_suffix('.')).unwrap_or(head)
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<&'static str> for DomainTypeId {
    fn from(value: &'static str) -> Self {
        Self(Cow::Borrowed(value))
    }
}

impl From<String> for DomainTypeId {
    fn from(value: String) -> Self {
        Self(Cow::Owned(value))
    }
}

impl AsRef<str> for DomainTypeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for DomainTypeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DomainTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
