use crate::error::BootstrapError;
use std::any::Any;

/// A host-managed component, type-erased.
pub type Component = Box<dyn Any + Send + Sync>;

/// Callbacks a host fires around the initialization of each component it manages.
///
/// Both return the component to keep using; returning the input unchanged is a pass-through.
pub trait LifecycleHook: Send + Sync {
    /// # Errors
    /// Aborts host startup.
    fn before_initialization(&self, component: Component, _name: &str) -> Result<Component, BootstrapError> {
        Ok(component)
    }

    /// # Errors
    /// Aborts host startup.
    fn after_initialization(&self, component: Component, name: &str) -> Result<Component, BootstrapError>;
}
