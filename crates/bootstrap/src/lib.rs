//! # Administration Bootstrap
//!
//! Discovers the types declared with `#[derive(Administration)]` under the configured
//! namespaces, validates them and registers their administration configurations.
//!
//! The pipeline, leaves first:
//!
//! 1. [`ladmin_kernel::namespace`] resolves the `base_package` setting into namespaces.
//! 2. [`scanning`] yields an ordered, duplicate-free candidate set.
//! 3. [`source`] normalizes each candidate into a `ConfigurationSource`.
//! 4. [`validation`] checks it, fail-fast.
//! 5. [`factory`] compiles it into an `AdministrationConfiguration`.
//! 6. [`registry`] stores it; the frozen registry is published once per process.
//!
//! [`processor::GlobalAdministrationConfigurationProcessor`] drives the steps, either directly
//! or as a [`lifecycle::LifecycleHook`] of the host.

extern crate self as ladmin_bootstrap;

pub mod error;
pub mod factory;
pub mod lifecycle;
pub mod processor;
pub mod registry;
pub mod scanning;
pub mod source;
pub mod validation;

pub use error::{BootstrapError, BootstrapErrorExt};
pub use inventory;
pub use ladmin_derive::Administration;
pub use ladmin_domain as domain;
pub use processor::GlobalAdministrationConfigurationProcessor;
pub use registry::{AdministrationRegistry, GlobalAdministrationConfiguration};
