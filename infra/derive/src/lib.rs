#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros for the administration workspace.
//!
//! * [`ladmin_error`]: turns an enum into a `thiserror` error with context support.
//! * [`Administration`]: the declarative marker the bootstrap scanner discovers.
//!
//! Generated code refers to `::ladmin_bootstrap`, so crates deriving [`Administration`] must
//! depend on `ladmin-bootstrap` directly.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for domain-specific error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` unless present.
/// * **Context Support**: Generates a companion `...Ext` trait that adds `.context()`
///   to any `Result` that can be converted into this error type.
/// * **Standard Conversions**: Implements `From<T>` for variants with a `source` field,
///   so upstream errors propagate with `?`.
/// * **Internal Fallback**: `From<&str>` and `From<String>` when an `Internal` variant exists.
/// * **Kind**: a `kind()` method returning the variant name, for structured logging.
///
/// # Requirements
///
/// 1. Enums only.
/// 2. Variants with a source also need `context: Option<Cow<'static, str>>`.
/// 3. Tuple and unit variants are rejected.
///
/// # Example
///
/// ```rust,ignore
/// use ladmin_derive::ladmin_error;
/// use std::borrow::Cow;
///
/// #[ladmin_error]
/// pub enum ConfigError {
///     #[error("Config error{}: {source}", format_context(.context))]
///     Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
/// }
///
/// fn build() -> Result<config::Config, ConfigError> {
///     config::Config::builder().build().context("Failed to build settings source")
/// }
/// ```
#[proc_macro_attribute]
pub fn ladmin_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand(input).into()
}

/// Declares a struct for administration and registers it for scanning.
///
/// Expands to an `Administered` impl describing the struct's fields and an
/// `inventory` submission carrying the `ADMINISTRATION` marker, so the bootstrap's
/// `AdministrationClassScanner` finds it under its namespace.
///
/// # Type attributes
///
/// * `namespace = "..."` (required): the scan namespace.
/// * `domain_type = "..."`: administered type, defaults to `<namespace>.<StructName>`.
/// * `label`, `plural`, `name_field`: entity display hints.
/// * `scope = "..."`, `default_scope = "..."`: list scopes, repeatable.
/// * `entity`, `hidden`: extra markers; `hidden` keeps the type out of scans.
///
/// # Field attributes
///
/// * `id`, `required`, `skip`, `filter`
/// * `label = "..."`, `views = "list, form"` (default: every view)
/// * `association = "pkg.Type"` or `collection = "pkg.Type"`
///
/// # Example
///
/// ```rust,ignore
/// use ladmin_derive::Administration;
///
/// #[derive(Administration)]
/// #[administration(namespace = "pkg.models", name_field = "number", default_scope = "all")]
/// pub struct Order {
///     #[administration(id, views = "list, show")]
///     id: u64,
///     #[administration(required, filter)]
///     number: String,
///     #[administration(association = "pkg.models.Customer")]
///     customer: Option<u64>,
/// }
/// ```
#[proc_macro_derive(Administration, attributes(administration))]
pub fn derive_administration(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::administration::expand(input).into()
}
