//! Registry bootstrap
//!
//! Feature modules are registered explicitly, in the order the caller lists
//! them. Later modules win registration conflicts.

use std::time::Instant;

use touchline_core::registry::CommandRegistry;
use touchline_core::{log_op_end, log_op_error, log_op_start};

use crate::errors::Result;

/// A feature that contributes commands to the registry
pub trait FeatureModule {
    fn name(&self) -> &str;

    /// Register every command of this feature.
    ///
    /// # Errors
    ///
    /// Returns the first registration error.
    fn register(&self, registry: &mut CommandRegistry) -> touchline_core::Result<()>;
}

/// Build a registry from `modules`, registering them in slice order.
///
/// # Errors
///
/// Returns the first module's registration error; no partial registry is
/// returned.
pub fn bootstrap(modules: &[&dyn FeatureModule]) -> Result<CommandRegistry> {
    let mut registry = CommandRegistry::new();
    extend(&mut registry, modules)?;
    Ok(registry)
}

/// Register `modules` into an existing registry.
///
/// # Errors
///
/// Returns the first module's registration error. Modules registered before
/// the failure stay registered.
pub fn extend(registry: &mut CommandRegistry, modules: &[&dyn FeatureModule]) -> Result<()> {
    log_op_start!("bootstrap", modules = modules.len());
    let start = Instant::now();

    let result = modules.iter().try_for_each(|module| {
        tracing::debug!(feature = module.name(), "registering feature module");
        module.register(registry)
    });

    let elapsed = start.elapsed().as_millis() as u64;
    match result {
        Ok(()) => {
            log_op_end!(
                "bootstrap",
                duration_ms = elapsed,
                commands = registry.len(),
                variants = registry.variant_count()
            );
            Ok(())
        }
        Err(e) => {
            log_op_error!("bootstrap", e.clone(), duration_ms = elapsed);
            Err(e.into())
        }
    }
}
