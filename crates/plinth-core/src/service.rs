//! Implementation handles
//!
//! Every backend implementation exposes [`PlatformService`]. The registry
//! hands callers a [`ServiceHandle`], a cheaply cloneable shared reference
//! that callers downcast to the concrete implementation they expect.

use crate::capability::{Backend, Capability};
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Interface shared by every backend implementation
pub trait PlatformService: Any + Send + Sync + fmt::Debug {
    /// The backend this implementation provides
    fn backend(&self) -> Backend;

    /// The capability this implementation serves
    fn capability(&self) -> Capability {
        self.backend().capability()
    }

    /// Access the concrete type for downcasting
    fn as_any(&self) -> &dyn Any;
}

/// Shared handle to a resolved implementation
///
/// Handles compare equal when they refer to the same backend. Use
/// [`ServiceHandle::same_instance`] to check identity.
#[derive(Clone)]
pub struct ServiceHandle {
    inner: Arc<dyn PlatformService>,
}

impl ServiceHandle {
    /// Wrap an implementation
    pub fn new<S: PlatformService>(service: S) -> Self {
        Self {
            inner: Arc::new(service),
        }
    }

    /// Wrap an already shared implementation
    pub fn from_arc(inner: Arc<dyn PlatformService>) -> Self {
        Self { inner }
    }

    /// The backend behind this handle
    pub fn backend(&self) -> Backend {
        self.inner.backend()
    }

    /// The capability served by this handle
    pub fn capability(&self) -> Capability {
        self.inner.capability()
    }

    /// Borrow the implementation as its concrete type
    pub fn downcast_ref<T: PlatformService>(&self) -> Option<&T> {
        self.inner.as_any().downcast_ref::<T>()
    }

    /// Borrow the implementation as a trait object
    pub fn service(&self) -> &dyn PlatformService {
        self.inner.as_ref()
    }

    /// Whether both handles point at the same loaded instance
    pub fn same_instance(&self, other: &ServiceHandle) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PartialEq for ServiceHandle {
    fn eq(&self, other: &Self) -> bool {
        self.backend() == other.backend()
    }
}

impl Eq for ServiceHandle {}

impl fmt::Debug for ServiceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceHandle")
            .field("backend", &self.backend())
            .field("service", &self.inner)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct FakeCache;

    impl PlatformService for FakeCache {
        fn backend(&self) -> Backend {
            Backend::RedisCache
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[derive(Debug)]
    struct FakeSearch;

    impl PlatformService for FakeSearch {
        fn backend(&self) -> Backend {
            Backend::ElasticSearch
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[test]
    fn test_handle_equality_is_by_backend() {
        let a = ServiceHandle::new(FakeCache);
        let b = ServiceHandle::new(FakeCache);
        assert_eq!(a, b);
        assert!(!a.same_instance(&b));
        assert!(a.same_instance(&a.clone()));
        assert_ne!(a, ServiceHandle::new(FakeSearch));
    }

    #[test]
    fn test_downcast() {
        let handle = ServiceHandle::new(FakeCache);
        assert_eq!(handle.capability(), Capability::Cache);
        assert!(handle.downcast_ref::<FakeCache>().is_some());
        assert!(handle.downcast_ref::<FakeSearch>().is_none());
    }
}
