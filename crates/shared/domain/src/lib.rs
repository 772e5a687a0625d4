//! # Domain Models
//!
//! This crate contains pure administration types with minimal dependencies (`serde`, `bitflags`).
//! Keep it lean: no I/O, scanning, or validation logic. Just data and simple helpers that the
//! bootstrap pipeline moves from declaration to registry.

pub mod administration;
pub mod config;
pub mod constants;
pub mod identity;
pub mod markers;
pub mod metadata;
pub mod source;

pub use administration::{AdministrationConfiguration, EntityConfiguration, FieldConfiguration};
pub use identity::DomainTypeId;
pub use markers::{Markers, Units};
pub use metadata::{FieldDeclaration, FieldKind, ScopeDeclaration, TypeMetadata};
pub use source::ConfigurationSource;
