//! Namespace resolution: one delimited settings string into an ordered, distinct scan list.

use crate::config::property::PropertySource;
use fxhash::FxHashSet;
use ladmin_domain::constants::{BASE_PACKAGE_PROPERTY, CONFIG_LOCATION_DELIMITERS};
use std::ops::Deref;
use tracing::debug;

/// Ordered sequence of distinct namespace identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamespaceList(Vec<String>);

impl NamespaceList {
    /// Tokenizes on any run of `,`, `;`, space, tab or newline.
    ///
    /// Blank tokens are dropped and later duplicates are removed, so the first occurrence
    /// decides the position. `None` and empty input yield an empty list.
    #[must_use]
    pub fn parse(input: Option<&str>) -> Self {
        let Some(input) = input else {
            return Self::default();
        };

        let mut seen = FxHashSet::default();
        let namespaces = input
            .split(CONFIG_LOCATION_DELIMITERS)
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .filter(|token| seen.insert(*token))
            .map(str::to_owned)
            .collect();

        Self(namespaces)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl Deref for NamespaceList {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a> IntoIterator for &'a NamespaceList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for NamespaceList {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Reads [`BASE_PACKAGE_PROPERTY`] from `source` and parses it.
///
/// An absent property is not an error: the result is simply empty.
pub fn resolve_namespaces<P: PropertySource + ?Sized>(source: &P) -> NamespaceList {
    let raw = source.property(BASE_PACKAGE_PROPERTY);
    let namespaces = NamespaceList::parse(raw.as_deref());
    debug!(raw = ?raw, resolved = ?namespaces.as_slice(), "Resolved scan namespaces");
    namespaces
}
