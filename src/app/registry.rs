//! Registry of named application factories.

use std::collections::HashMap;
use std::sync::Arc;

use crate::app::entrypoint::EntryPoint;
use crate::app::status::StatusApp;
use crate::app::{AppFactory, ResolveError};

/// Maps `module` / `attribute` names to application factories.
///
/// Resolution distinguishes an unknown module from a known module with an
/// unknown attribute so a startup failure names what is actually missing.
#[derive(Default)]
pub struct AppRegistry {
    modules: HashMap<String, HashMap<String, Arc<dyn AppFactory>>>,
}

impl AppRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with the bundled applications.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("status", "app", Arc::new(StatusApp));
        registry
    }

    pub fn register(&mut self, module: &str, attribute: &str, factory: Arc<dyn AppFactory>) {
        self.modules
            .entry(module.to_string())
            .or_default()
            .insert(attribute.to_string(), factory);
    }

    pub fn resolve(&self, entry: &EntryPoint) -> Result<Arc<dyn AppFactory>, ResolveError> {
        let attributes = self
            .modules
            .get(entry.module())
            .ok_or_else(|| ResolveError::UnknownModule(entry.module().to_string()))?;

        attributes
            .get(entry.attribute())
            .cloned()
            .ok_or_else(|| ResolveError::UnknownAttribute {
                module: entry.module().to_string(),
                attribute: entry.attribute().to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_builtin_status_app() {
        let registry = AppRegistry::with_builtins();
        let entry = EntryPoint::parse("status:app").unwrap();
        assert!(registry.resolve(&entry).is_ok());
    }

    #[test]
    fn unknown_module_is_distinguished_from_unknown_attribute() {
        let registry = AppRegistry::with_builtins();

        let entry = EntryPoint::parse("missing:app").unwrap();
        assert!(matches!(
            registry.resolve(&entry),
            Err(ResolveError::UnknownModule(_))
        ));

        let entry = EntryPoint::parse("status:other").unwrap();
        assert!(matches!(
            registry.resolve(&entry),
            Err(ResolveError::UnknownAttribute { .. })
        ));
    }

    #[test]
    fn registered_factories_are_resolvable() {
        let mut registry = AppRegistry::new();
        registry.register("newsbot.api", "app", Arc::new(StatusApp));

        let entry = EntryPoint::parse("newsbot.api:app").unwrap();
        assert!(registry.resolve(&entry).is_ok());
    }
}
