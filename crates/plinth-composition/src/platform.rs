//! Platform contract

use crate::catalog::EntityCatalog;
use crate::registry::Registry;
use plinth_core::{PlatformError, Result};
use plinth_storage::SchemaModule;

/// Capability interface a platform provides
pub trait Platform {
    /// Schema modules for the given entity group names
    fn import_models(&self, names: &[&str]) -> Result<Vec<&'static SchemaModule>> {
        let _ = names;
        Err(PlatformError::not_implemented(
            "import_models() method is not overwritten in derived classes",
        ))
    }
}

/// Platform without any capability implementations
#[derive(Debug, Clone, Copy, Default)]
pub struct BasePlatform;

impl Platform for BasePlatform {}

impl Platform for Registry {
    fn import_models(&self, names: &[&str]) -> Result<Vec<&'static SchemaModule>> {
        EntityCatalog::new().import_groups(names)
    }
}
