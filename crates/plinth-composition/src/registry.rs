//! Capability registry
//!
//! The registry is constructed once from configuration and passed to the
//! code that needs platform services. Each `resolve_*` call selects a
//! backend from the registry's flags, then returns the cached implementation
//! for that backend, loading it through the [`BackendTable`] on first use.

use crate::binding::select_backend;
use once_cell::sync::OnceCell;
use plinth_core::{
    Backend, Capability, PlatformConfig, PlatformError, PlatformFlags, Result, ServiceHandle,
};
use plinth_effects::load_builtin;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Constructor for one backend implementation
pub type ServiceFactory = Arc<dyn Fn(&PlatformConfig) -> Result<ServiceHandle> + Send + Sync>;

/// Registration table mapping backends to their factories
#[derive(Clone, Default)]
pub struct BackendTable {
    factories: HashMap<Backend, ServiceFactory>,
}

impl BackendTable {
    /// A table with no registered backends
    pub fn empty() -> Self {
        Self::default()
    }

    /// A table with every built-in implementation registered
    pub fn builtin() -> Self {
        let mut table = Self::empty();
        for backend in Backend::all() {
            table.register(backend, move |config| load_builtin(backend, config));
        }
        table
    }

    /// Register or replace the factory for a backend
    pub fn register<F>(&mut self, backend: Backend, factory: F) -> &mut Self
    where
        F: Fn(&PlatformConfig) -> Result<ServiceHandle> + Send + Sync + 'static,
    {
        if self.factories.insert(backend, Arc::new(factory)).is_some() {
            tracing::debug!(backend = %backend, "Replaced backend factory");
        }
        self
    }

    /// Builder form of [`BackendTable::register`]
    pub fn with<F>(mut self, backend: Backend, factory: F) -> Self
    where
        F: Fn(&PlatformConfig) -> Result<ServiceHandle> + Send + Sync + 'static,
    {
        self.register(backend, factory);
        self
    }

    /// Whether a factory is registered for `backend`
    pub fn is_registered(&self, backend: Backend) -> bool {
        self.factories.contains_key(&backend)
    }

    /// Construct the implementation of `backend`
    ///
    /// The factory must produce an implementation of the requested backend;
    /// anything else is reported as a load failure.
    pub fn load(&self, backend: Backend, config: &PlatformConfig) -> Result<ServiceHandle> {
        let factory = self.factories.get(&backend).ok_or_else(|| {
            PlatformError::implementation_load(backend.name(), "no factory registered")
        })?;

        let handle = factory(config)?;
        if handle.backend() != backend {
            return Err(PlatformError::implementation_load(
                backend.name(),
                format!("factory produced a {} implementation", handle.backend()),
            ));
        }
        Ok(handle)
    }
}

impl fmt::Debug for BackendTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut backends: Vec<_> = self.factories.keys().map(|b| b.name()).collect();
        backends.sort_unstable();
        f.debug_struct("BackendTable")
            .field("backends", &backends)
            .finish()
    }
}

/// Platform capability registry
///
/// Cheap to clone; clones share loaded implementations.
#[derive(Debug, Clone)]
pub struct Registry {
    flags: PlatformFlags,
    config: Arc<PlatformConfig>,
    table: Arc<BackendTable>,
    loaded: Arc<HashMap<Backend, OnceCell<ServiceHandle>>>,
}

impl Registry {
    /// Registry over the built-in backends with default settings
    pub fn new(flags: PlatformFlags) -> Self {
        Self::with_table(PlatformConfig::default().with_flags(&flags), BackendTable::builtin())
    }

    /// Registry over the built-in backends
    pub fn from_config(config: PlatformConfig) -> Self {
        Self::with_table(config, BackendTable::builtin())
    }

    /// Registry over a custom backend table
    pub fn with_table(config: PlatformConfig, table: BackendTable) -> Self {
        let loaded = Backend::all()
            .into_iter()
            .map(|backend| (backend, OnceCell::new()))
            .collect();
        Self {
            flags: config.flags(),
            config: Arc::new(config),
            table: Arc::new(table),
            loaded: Arc::new(loaded),
        }
    }

    /// A registry with different flags over the same settings and table
    ///
    /// Loaded implementations are not shared with `self`, since some are
    /// built from the deployment flags.
    pub fn with_flags(&self, flags: PlatformFlags) -> Self {
        let config = self.config.as_ref().clone().with_flags(&flags);
        let loaded = Backend::all()
            .into_iter()
            .map(|backend| (backend, OnceCell::new()))
            .collect();
        Self {
            flags,
            config: Arc::new(config),
            table: Arc::clone(&self.table),
            loaded: Arc::new(loaded),
        }
    }

    /// Deployment flags in effect
    pub fn flags(&self) -> &PlatformFlags {
        &self.flags
    }

    /// Settings implementations are built from
    pub fn config(&self) -> &PlatformConfig {
        &self.config
    }

    /// Backend selected for `capability`, without loading it
    pub fn binding(&self, capability: Capability) -> Result<Backend> {
        select_backend(capability, &self.flags)
    }

    /// Whether the implementation of `backend` has been loaded
    pub fn is_loaded(&self, backend: Backend) -> bool {
        self.loaded
            .get(&backend)
            .map_or(false, |cell| cell.get().is_some())
    }

    /// Resolve any capability
    pub fn resolve(&self, capability: Capability) -> Result<ServiceHandle> {
        let backend = self.binding(capability)?;
        self.load(backend)
    }

    fn load(&self, backend: Backend) -> Result<ServiceHandle> {
        let cell = self.loaded.get(&backend).ok_or_else(|| {
            PlatformError::implementation_load(
                backend.name(),
                "backend is not tracked by the registry",
            )
        })?;

        cell.get_or_try_init(|| {
            let handle = self.table.load(backend, &self.config).map_err(|err| {
                tracing::warn!(backend = %backend, error = %err, "Failed to load backend");
                err
            })?;
            tracing::info!(backend = %backend, "Loaded backend implementation");
            Ok(handle)
        })
        .cloned()
    }

    /// Datastore implementation
    pub fn resolve_datastore(&self) -> Result<ServiceHandle> {
        self.resolve(Capability::Datastore)
    }

    /// Cross-entity transaction implementation
    pub fn resolve_transactions(&self) -> Result<ServiceHandle> {
        self.resolve(Capability::Transactions)
    }

    /// Authentication implementation
    pub fn resolve_auth(&self) -> Result<ServiceHandle> {
        self.resolve(Capability::Auth)
    }

    /// App identity implementation
    pub fn resolve_app_identity(&self) -> Result<ServiceHandle> {
        self.resolve(Capability::AppIdentity)
    }

    /// Cache implementation
    pub fn resolve_cache(&self) -> Result<ServiceHandle> {
        self.resolve(Capability::Cache)
    }

    /// Full-text search implementation
    pub fn resolve_search(&self) -> Result<ServiceHandle> {
        self.resolve(Capability::Search)
    }

    /// Transactional email implementation
    ///
    /// Fails with `InvalidConfiguration` for an unsupported provider, in dev
    /// mode too.
    pub fn resolve_email(&self) -> Result<ServiceHandle> {
        self.resolve(Capability::Email)
    }

    /// Bulk email implementation
    pub fn resolve_bulk_email(&self) -> Result<ServiceHandle> {
        self.resolve(Capability::BulkEmail)
    }

    /// Task queue implementation
    pub fn resolve_taskqueue(&self) -> Result<ServiceHandle> {
        self.resolve(Capability::Taskqueue)
    }

    /// Translation implementation
    pub fn resolve_translate(&self) -> Result<ServiceHandle> {
        self.resolve(Capability::Translate)
    }

    /// Blob storage implementation
    pub fn resolve_storage(&self) -> Result<ServiceHandle> {
        self.resolve(Capability::Storage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use plinth_effects::{DevModeStorageServices, RedisCacheServices};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_handles_are_cached_per_backend() {
        let registry = Registry::new(PlatformFlags::local());
        assert!(!registry.is_loaded(Backend::DevModeStorage));

        let first = registry.resolve_storage().unwrap();
        let second = registry.clone().resolve_storage().unwrap();
        assert!(first.same_instance(&second));
        assert!(registry.is_loaded(Backend::DevModeStorage));
        assert!(first.downcast_ref::<DevModeStorageServices>().is_some());
    }

    #[test]
    fn test_failed_load_is_retried() {
        let attempts = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&attempts);
        let table = BackendTable::builtin().with(Backend::RedisCache, move |config| {
            if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                Err(PlatformError::implementation_load("redis_cache", "connection refused"))
            } else {
                Ok(ServiceHandle::new(RedisCacheServices::from_config(config)))
            }
        });
        let registry = Registry::with_table(PlatformConfig::default(), table);

        assert_matches!(
            registry.resolve_cache(),
            Err(PlatformError::ImplementationLoad { .. })
        );
        assert!(!registry.is_loaded(Backend::RedisCache));
        assert!(registry.resolve_cache().is_ok());
        assert!(registry.resolve_cache().is_ok());
        assert_eq!(attempts.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_concurrent_first_use_loads_once() {
        let loads = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&loads);
        let table = BackendTable::builtin().with(Backend::DevModeStorage, move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            std::thread::sleep(std::time::Duration::from_millis(10));
            Ok(ServiceHandle::new(DevModeStorageServices::new()))
        });
        let registry = Registry::with_table(PlatformConfig::default(), table);

        let handles: Vec<ServiceHandle> = std::thread::scope(|scope| {
            let workers: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| registry.resolve_storage()))
                .collect();
            workers
                .into_iter()
                .map(|worker| worker.join().unwrap().unwrap())
                .collect()
        });

        assert_eq!(handles.len(), 8);
        for handle in &handles {
            assert!(handle.same_instance(&handles[0]));
        }
        assert_eq!(loads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_factory_must_produce_requested_backend() {
        let table = BackendTable::builtin().with(Backend::RedisCache, |_| {
            Ok(ServiceHandle::new(DevModeStorageServices::new()))
        });
        let registry = Registry::with_table(PlatformConfig::default(), table);

        let err = registry.resolve_cache().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to load redis_cache implementation: \
             factory produced a dev_mode_storage implementation"
        );
    }

    #[test]
    fn test_unregistered_backend() {
        let registry = Registry::with_table(PlatformConfig::default(), BackendTable::empty());
        assert_matches!(
            registry.resolve_search(),
            Err(PlatformError::ImplementationLoad { ref backend, .. })
                if backend == "elastic_search"
        );
    }

    #[test]
    fn test_with_flags_rebinds() {
        let local = Registry::new(PlatformFlags::local());
        let prod = local.with_flags(PlatformFlags::production());

        assert_eq!(local.binding(Capability::Translate).unwrap(), Backend::DevModeTranslate);
        assert_eq!(prod.binding(Capability::Translate).unwrap(), Backend::CloudTranslate);
        assert!(!prod.config().deployment.emulator_mode);

        local.resolve_auth().unwrap();
        assert!(!prod.is_loaded(Backend::FirebaseAuth));
    }
}
