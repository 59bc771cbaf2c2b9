//! Hot-reload registry handle
//!
//! After bootstrap the registry is normally read-only. A deployment that
//! registers commands later shares it through `SharedRegistry`, which takes
//! the write lock for every registration so two writers cannot race on the
//! same (name, scope) key.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use touchline_core::classification::{Classification, Classifier};
use touchline_core::model::{CommandMetadata, CommandRegistration, Scope};
use touchline_core::registry::{CommandRegistry, RegisterOutcome};
use touchline_core::RegistryError;

use crate::bootstrap::{self, FeatureModule};
use crate::errors::Result;

#[derive(Debug, Clone, Default)]
pub struct SharedRegistry {
    inner: Arc<RwLock<CommandRegistry>>,
}

impl SharedRegistry {
    pub fn new(registry: CommandRegistry) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, CommandRegistry>> {
        self.inner.read().map_err(|_| poisoned())
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, CommandRegistry>> {
        self.inner.write().map_err(|_| poisoned())
    }

    /// # Errors
    ///
    /// Registration errors, or `Internal` if the lock is poisoned.
    pub fn register(&self, registration: CommandRegistration) -> Result<RegisterOutcome> {
        Ok(self.write()?.register(registration)?)
    }

    /// Register whole feature modules under one write lock.
    ///
    /// # Errors
    ///
    /// See [`bootstrap::extend`].
    pub fn register_modules(&self, modules: &[&dyn FeatureModule]) -> Result<()> {
        let mut guard = self.write()?;
        bootstrap::extend(&mut guard, modules)
    }

    /// # Errors
    ///
    /// Returns `Internal` if the lock is poisoned.
    pub fn resolve(&self, name: &str, scope: Scope) -> Result<Option<Arc<CommandMetadata>>> {
        Ok(self.read()?.resolve(name, scope))
    }

    /// Resolve then classify the record visible from `scope`.
    ///
    /// # Errors
    ///
    /// `CommandNotFound`, classification validation errors, or `Internal`
    /// if the lock is poisoned.
    pub fn classify(
        &self,
        classifier: &Classifier,
        name: &str,
        scope: Scope,
    ) -> Result<Classification> {
        let record = self.read()?.require(name, scope)?;
        Ok(classifier.classify(name, &record)?)
    }

    /// Run `f` against the registry under the read lock.
    ///
    /// # Errors
    ///
    /// Returns `Internal` if the lock is poisoned.
    pub fn with_registry<R>(&self, f: impl FnOnce(&CommandRegistry) -> R) -> Result<R> {
        let guard = self.read()?;
        Ok(f(&*guard))
    }

    /// Point-in-time copy of the registry
    ///
    /// # Errors
    ///
    /// Returns `Internal` if the lock is poisoned.
    pub fn snapshot(&self) -> Result<CommandRegistry> {
        Ok(self.read()?.clone())
    }
}

fn poisoned() -> crate::EngineError {
    RegistryError::Internal {
        message: "command registry lock poisoned".to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use touchline_core::model::HandlerRef;

    #[test]
    fn test_concurrent_registration_of_same_key() {
        let shared = SharedRegistry::default();
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let shared = shared.clone();
                thread::spawn(move || {
                    shared
                        .register(CommandRegistration::new(
                            "/list",
                            format!("writer {}", i),
                            format!("feature_{}", i),
                            HandlerRef::detached(),
                        ))
                        .unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let snapshot = shared.snapshot().unwrap();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot.variant_count(), 1);
        assert_eq!(snapshot.features().count(), 8);
    }

    #[test]
    fn test_readers_see_registration() {
        let shared = SharedRegistry::default();
        assert!(shared.resolve("/ping", Scope::Main).unwrap().is_none());

        shared
            .register(CommandRegistration::new(
                "/ping",
                "Check the bot responds",
                "system",
                HandlerRef::detached(),
            ))
            .unwrap();

        assert!(shared.resolve("/ping", Scope::Main).unwrap().is_some());
        let classification = shared
            .classify(&Classifier::default(), "/ping", Scope::Main)
            .unwrap();
        assert_eq!(classification.command, "/ping");
        assert_eq!(shared.with_registry(|r| r.len()).unwrap(), 1);
    }

    #[test]
    fn test_classify_missing_command() {
        let shared = SharedRegistry::default();
        let err = shared
            .classify(&Classifier::default(), "/ghost", Scope::Main)
            .unwrap_err();
        assert!(matches!(
            err,
            crate::EngineError::Registry(RegistryError::CommandNotFound { .. })
        ));
    }
}
