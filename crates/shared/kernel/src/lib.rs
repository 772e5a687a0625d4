//! Kernel utilities shared by the bootstrap pipeline and host applications.
//! Keep this crate lightweight: settings loading, property lookup and namespace resolution.
//!
//! ## Namespace resolution
//! ```rust
//! use ladmin_kernel::namespace::NamespaceList;
//!
//! let namespaces = NamespaceList::parse(Some("com.acme.a, com.acme.b;com.acme.a"));
//! assert_eq!(namespaces.as_slice(), ["com.acme.a", "com.acme.b"]);
//! ```
//!
//! ## Settings loading
//! ```rust,ignore
//! use ladmin_kernel::config::load_settings;
//!
//! let settings = load_settings(Some("lightadmin.toml")).unwrap();
//! ```

pub mod config;
pub mod namespace;

pub use config::property::{MapPropertySource, PropertySource};
pub use ladmin_domain as domain;
pub use namespace::{NamespaceList, resolve_namespaces};
