//! Plinth Effects - Backend Implementations
//!
//! One implementation type per [`Backend`](plinth_core::Backend). Cloud and
//! managed backends carry the settings needed to reach their service; dev
//! mode backends keep their state in process memory.
//!
//! [`load_builtin`] constructs the implementation for a backend from a
//! [`PlatformConfig`](plinth_core::PlatformConfig). The registry calls it
//! through its backend table, so tests can replace individual loaders.

#![forbid(unsafe_code)]

pub mod app_identity;
pub mod auth;
pub mod bulk_email;
pub mod cache;
pub mod datastore;
pub mod email;
pub mod search;
pub mod storage;
pub mod taskqueue;
pub mod transactions;
pub mod translate;

/// Built-in backend loading
pub mod loader;

pub use app_identity::PlatformAppIdentityServices;
pub use auth::FirebaseAuthServices;
pub use bulk_email::{DevModeBulkEmailServices, MailchimpBulkEmailServices};
pub use cache::RedisCacheServices;
pub use datastore::{CloudDatastoreServices, EntityStore, MemoryEntityStore, StoredEntity};
pub use email::{DevModeEmailServices, MailgunEmailServices, OutgoingEmail};
pub use loader::load_builtin;
pub use search::ElasticSearchServices;
pub use storage::{CloudStorageServices, DevModeStorageServices};
pub use taskqueue::{CloudTaskqueueServices, DeferredTask, DevModeTaskqueueServices};
pub use transactions::CloudTransactionServices;
pub use translate::{CloudTranslateServices, DevModeTranslateServices};
