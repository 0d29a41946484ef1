//! Implementation binding
//!
//! Selecting a backend is a pure function of the capability and the
//! deployment flags. Nothing here loads or caches implementations.

use plinth_core::{Backend, BulkEmailProvider, Capability, EmailProvider, PlatformFlags, Result};

/// Select the backend serving `capability` under `flags`
///
/// Provider names are always validated, even when a dev mode stub replaces
/// the provider, so an invalid configuration fails locally the same way it
/// would in production.
pub fn select_backend(capability: Capability, flags: &PlatformFlags) -> Result<Backend> {
    let backend = match capability {
        Capability::Datastore => Backend::CloudDatastore,
        Capability::Transactions => Backend::CloudTransactions,
        Capability::Auth => Backend::FirebaseAuth,
        Capability::AppIdentity => Backend::PlatformAppIdentity,
        Capability::Cache => Backend::RedisCache,
        Capability::Search => Backend::ElasticSearch,
        Capability::Email => match flags.email_provider().map_err(|err| {
            tracing::warn!(provider = %flags.email_service_provider, "Rejected email provider");
            err
        })? {
            EmailProvider::Mailgun if flags.dev_mode => Backend::DevModeEmail,
            EmailProvider::Mailgun => Backend::MailgunEmail,
        },
        Capability::BulkEmail => match flags.bulk_email_provider().map_err(|err| {
            tracing::warn!(
                provider = %flags.bulk_email_service_provider,
                "Rejected bulk email provider"
            );
            err
        })? {
            BulkEmailProvider::Mailchimp if flags.emulator_mode => Backend::DevModeBulkEmail,
            BulkEmailProvider::Mailchimp => Backend::MailchimpBulkEmail,
        },
        Capability::Taskqueue if flags.emulator_mode => Backend::DevModeTaskqueue,
        Capability::Taskqueue => Backend::CloudTaskqueue,
        Capability::Translate if flags.emulator_mode => Backend::DevModeTranslate,
        Capability::Translate => Backend::CloudTranslate,
        Capability::Storage if flags.emulator_mode => Backend::DevModeStorage,
        Capability::Storage => Backend::CloudStorage,
    };

    tracing::debug!(
        capability = %capability,
        backend = %backend,
        emulator_mode = flags.emulator_mode,
        dev_mode = flags.dev_mode,
        "Selected backend"
    );
    Ok(backend)
}
