//! Capability and backend vocabulary
//!
//! A [`Capability`] is an abstract infrastructure service. A [`Backend`] is
//! one concrete implementation of exactly one capability. Both enumerations
//! are closed: every binding the registry can produce is listed here.

use crate::errors::PlatformError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Abstract platform capabilities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// Persistent entity storage
    Datastore,
    /// Cross-entity transactions
    Transactions,
    /// User authentication
    Auth,
    /// Application identity (service account, app id)
    AppIdentity,
    /// Distributed in-memory cache
    Cache,
    /// Full-text search
    Search,
    /// Transactional email delivery
    Email,
    /// Bulk (mailing list) email
    BulkEmail,
    /// Background task queueing
    Taskqueue,
    /// Machine translation
    Translate,
    /// Blob storage
    Storage,
}

impl Capability {
    /// Every capability, in declaration order
    pub fn all() -> [Capability; 11] {
        [
            Self::Datastore,
            Self::Transactions,
            Self::Auth,
            Self::AppIdentity,
            Self::Cache,
            Self::Search,
            Self::Email,
            Self::BulkEmail,
            Self::Taskqueue,
            Self::Translate,
            Self::Storage,
        ]
    }

    /// Canonical snake_case name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Datastore => "datastore",
            Self::Transactions => "transactions",
            Self::Auth => "auth",
            Self::AppIdentity => "app_identity",
            Self::Cache => "cache",
            Self::Search => "search",
            Self::Email => "email",
            Self::BulkEmail => "bulk_email",
            Self::Taskqueue => "taskqueue",
            Self::Translate => "translate",
            Self::Storage => "storage",
        }
    }

    /// Backends that can implement this capability
    pub fn backends(&self) -> &'static [Backend] {
        match self {
            Self::Datastore => &[Backend::CloudDatastore],
            Self::Transactions => &[Backend::CloudTransactions],
            Self::Auth => &[Backend::FirebaseAuth],
            Self::AppIdentity => &[Backend::PlatformAppIdentity],
            Self::Cache => &[Backend::RedisCache],
            Self::Search => &[Backend::ElasticSearch],
            Self::Email => &[Backend::MailgunEmail, Backend::DevModeEmail],
            Self::BulkEmail => &[Backend::MailchimpBulkEmail, Backend::DevModeBulkEmail],
            Self::Taskqueue => &[Backend::CloudTaskqueue, Backend::DevModeTaskqueue],
            Self::Translate => &[Backend::CloudTranslate, Backend::DevModeTranslate],
            Self::Storage => &[Backend::CloudStorage, Backend::DevModeStorage],
        }
    }

    /// Whether more than one backend can serve this capability
    pub fn is_switchable(&self) -> bool {
        self.backends().len() > 1
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Capability {
    type Err = PlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|capability| capability.name() == s)
            .ok_or_else(|| PlatformError::invalid_argument(format!("Invalid capability name: {s}")))
    }
}

/// Concrete implementations, one capability each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Backend {
    /// Managed cloud datastore
    CloudDatastore,
    /// Managed cloud transaction coordinator
    CloudTransactions,
    /// External identity provider
    FirebaseAuth,
    /// Platform app-identity service
    PlatformAppIdentity,
    /// Redis-backed cache
    RedisCache,
    /// Elasticsearch full-text search
    ElasticSearch,
    /// Mailgun email provider
    MailgunEmail,
    /// Local email stub that only logs
    DevModeEmail,
    /// Mailchimp bulk email provider
    MailchimpBulkEmail,
    /// Local bulk email stub that only logs
    DevModeBulkEmail,
    /// Managed cloud task queue
    CloudTaskqueue,
    /// Local task queue that defers to an in-process runner
    DevModeTaskqueue,
    /// Managed cloud translation
    CloudTranslate,
    /// Local translation stub
    DevModeTranslate,
    /// Managed cloud blob storage
    CloudStorage,
    /// Local in-memory blob storage
    DevModeStorage,
}

impl Backend {
    /// Every backend, in declaration order
    pub fn all() -> [Backend; 16] {
        [
            Self::CloudDatastore,
            Self::CloudTransactions,
            Self::FirebaseAuth,
            Self::PlatformAppIdentity,
            Self::RedisCache,
            Self::ElasticSearch,
            Self::MailgunEmail,
            Self::DevModeEmail,
            Self::MailchimpBulkEmail,
            Self::DevModeBulkEmail,
            Self::CloudTaskqueue,
            Self::DevModeTaskqueue,
            Self::CloudTranslate,
            Self::DevModeTranslate,
            Self::CloudStorage,
            Self::DevModeStorage,
        ]
    }

    /// The capability this backend implements
    pub fn capability(&self) -> Capability {
        match self {
            Self::CloudDatastore => Capability::Datastore,
            Self::CloudTransactions => Capability::Transactions,
            Self::FirebaseAuth => Capability::Auth,
            Self::PlatformAppIdentity => Capability::AppIdentity,
            Self::RedisCache => Capability::Cache,
            Self::ElasticSearch => Capability::Search,
            Self::MailgunEmail | Self::DevModeEmail => Capability::Email,
            Self::MailchimpBulkEmail | Self::DevModeBulkEmail => Capability::BulkEmail,
            Self::CloudTaskqueue | Self::DevModeTaskqueue => Capability::Taskqueue,
            Self::CloudTranslate | Self::DevModeTranslate => Capability::Translate,
            Self::CloudStorage | Self::DevModeStorage => Capability::Storage,
        }
    }

    /// Canonical snake_case name
    pub fn name(&self) -> &'static str {
        match self {
            Self::CloudDatastore => "cloud_datastore",
            Self::CloudTransactions => "cloud_transactions",
            Self::FirebaseAuth => "firebase_auth",
            Self::PlatformAppIdentity => "platform_app_identity",
            Self::RedisCache => "redis_cache",
            Self::ElasticSearch => "elastic_search",
            Self::MailgunEmail => "mailgun_email",
            Self::DevModeEmail => "dev_mode_email",
            Self::MailchimpBulkEmail => "mailchimp_bulk_email",
            Self::DevModeBulkEmail => "dev_mode_bulk_email",
            Self::CloudTaskqueue => "cloud_taskqueue",
            Self::DevModeTaskqueue => "dev_mode_taskqueue",
            Self::CloudTranslate => "cloud_translate",
            Self::DevModeTranslate => "dev_mode_translate",
            Self::CloudStorage => "cloud_storage",
            Self::DevModeStorage => "dev_mode_storage",
        }
    }

    /// Whether this is a local/emulated stand-in rather than a real service
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Self::DevModeEmail
                | Self::DevModeBulkEmail
                | Self::DevModeTaskqueue
                | Self::DevModeTranslate
                | Self::DevModeStorage
        )
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_backend_listed_under_its_capability() {
        for backend in Backend::all() {
            assert!(
                backend.capability().backends().contains(&backend),
                "{backend} missing from {}",
                backend.capability()
            );
        }
        let listed: usize = Capability::all().iter().map(|c| c.backends().len()).sum();
        assert_eq!(listed, Backend::all().len());
    }

    #[test]
    fn test_switchable_capabilities_have_one_local_backend() {
        for capability in Capability::all() {
            let locals = capability.backends().iter().filter(|b| b.is_local()).count();
            if capability.is_switchable() {
                assert_eq!(locals, 1, "{capability}");
            } else {
                assert_eq!(locals, 0, "{capability}");
            }
        }
    }

    #[test]
    fn test_capability_name_round_trip() {
        for capability in Capability::all() {
            assert_eq!(capability.name().parse::<Capability>().unwrap(), capability);
        }
        let err = "blobs".parse::<Capability>().unwrap_err();
        assert!(err.to_string().contains("Invalid capability name: blobs"));
    }
}
