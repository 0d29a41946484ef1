//! Built-in backend loading
//!
//! Maps each [`Backend`] to the constructor of its implementation.

use crate::app_identity::PlatformAppIdentityServices;
use crate::auth::FirebaseAuthServices;
use crate::bulk_email::{DevModeBulkEmailServices, MailchimpBulkEmailServices};
use crate::cache::RedisCacheServices;
use crate::datastore::{CloudDatastoreServices, MemoryEntityStore};
use crate::email::{DevModeEmailServices, MailgunEmailServices};
use crate::search::ElasticSearchServices;
use crate::storage::{CloudStorageServices, DevModeStorageServices};
use crate::taskqueue::{CloudTaskqueueServices, DevModeTaskqueueServices};
use crate::transactions::CloudTransactionServices;
use crate::translate::{CloudTranslateServices, DevModeTranslateServices};
use plinth_core::{Backend, PlatformConfig, Result, ServiceHandle};
use std::sync::Arc;

/// Load the built-in implementation of a backend
///
/// Fails with `ImplementationLoad` when the backend needs settings that are
/// missing from `config`.
pub fn load_builtin(backend: Backend, config: &PlatformConfig) -> Result<ServiceHandle> {
    tracing::debug!(backend = %backend, "Loading built-in implementation");
    let handle = match backend {
        Backend::CloudDatastore => ServiceHandle::new(CloudDatastoreServices::new(
            config.cloud.project_id.clone(),
            Arc::new(MemoryEntityStore::new()),
        )),
        Backend::CloudTransactions => {
            ServiceHandle::new(CloudTransactionServices::from_config(config))
        }
        Backend::FirebaseAuth => ServiceHandle::new(FirebaseAuthServices::from_config(config)),
        Backend::PlatformAppIdentity => {
            ServiceHandle::new(PlatformAppIdentityServices::from_config(config))
        }
        Backend::RedisCache => ServiceHandle::new(RedisCacheServices::from_config(config)),
        Backend::ElasticSearch => ServiceHandle::new(ElasticSearchServices::from_config(config)),
        Backend::MailgunEmail => ServiceHandle::new(MailgunEmailServices::from_config(config)),
        Backend::DevModeEmail => ServiceHandle::new(DevModeEmailServices::new()),
        Backend::MailchimpBulkEmail => {
            ServiceHandle::new(MailchimpBulkEmailServices::from_config(config))
        }
        Backend::DevModeBulkEmail => ServiceHandle::new(DevModeBulkEmailServices::new()),
        Backend::CloudTaskqueue => ServiceHandle::new(CloudTaskqueueServices::load(config)?),
        Backend::DevModeTaskqueue => ServiceHandle::new(DevModeTaskqueueServices::new()),
        Backend::CloudTranslate => ServiceHandle::new(CloudTranslateServices::from_config(config)),
        Backend::DevModeTranslate => ServiceHandle::new(DevModeTranslateServices),
        Backend::CloudStorage => ServiceHandle::new(CloudStorageServices::load(config)?),
        Backend::DevModeStorage => ServiceHandle::new(DevModeStorageServices::new()),
    };
    Ok(handle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use plinth_core::PlatformError;

    fn complete_config() -> PlatformConfig {
        let mut config = PlatformConfig::default();
        config.cloud.project_id = Some("plinth-test".into());
        config.cloud.storage_bucket = Some("plinth-test-assets".into());
        config
    }

    #[test]
    fn test_every_backend_loads_itself() {
        let config = complete_config();
        for backend in Backend::all() {
            let handle = load_builtin(backend, &config).unwrap();
            assert_eq!(handle.backend(), backend);
            assert_eq!(handle.capability(), backend.capability());
        }
    }

    #[test]
    fn test_cloud_backends_need_settings() {
        let config = PlatformConfig::default();
        for backend in [Backend::CloudTaskqueue, Backend::CloudStorage] {
            let err = load_builtin(backend, &config).unwrap_err();
            assert!(matches!(err, PlatformError::ImplementationLoad { .. }));
        }
        assert!(load_builtin(Backend::DevModeStorage, &config).is_ok());
    }
}
