//! Bulk (mailing list) email

use parking_lot::Mutex;
use plinth_core::{Backend, PlatformConfig, PlatformError, PlatformService, Result};
use std::any::Any;
use std::collections::HashMap;

/// Mailchimp bulk email provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailchimpBulkEmailServices {
    audience_id: Option<String>,
}

impl MailchimpBulkEmailServices {
    /// Build from configuration
    pub fn from_config(config: &PlatformConfig) -> Self {
        Self {
            audience_id: config.email.mailchimp_audience_id.clone(),
        }
    }

    /// Audience receiving subscription updates
    pub fn audience_id(&self) -> Result<&str> {
        self.audience_id.as_deref().ok_or_else(|| {
            PlatformError::invalid_configuration("Mailchimp audience id is not configured")
        })
    }
}

impl PlatformService for MailchimpBulkEmailServices {
    fn backend(&self) -> Backend {
        Backend::MailchimpBulkEmail
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Local bulk email stub tracking subscription state in memory
#[derive(Debug, Default)]
pub struct DevModeBulkEmailServices {
    subscriptions: Mutex<HashMap<String, bool>>,
}

impl DevModeBulkEmailServices {
    /// Create an empty subscription list
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe or unsubscribe an address
    pub fn add_or_update_user_status(&self, email: &str, can_receive_email_updates: bool) {
        tracing::info!(
            email,
            subscribed = can_receive_email_updates,
            "Updated bulk email subscription in dev mode"
        );
        self.subscriptions
            .lock()
            .insert(email.to_string(), can_receive_email_updates);
    }

    /// Remove an address from the list entirely
    pub fn permanently_delete_user_from_list(&self, email: &str) -> bool {
        self.subscriptions.lock().remove(email).is_some()
    }

    /// Whether an address currently receives updates
    pub fn is_subscribed(&self, email: &str) -> bool {
        self.subscriptions.lock().get(email).copied().unwrap_or(false)
    }
}

impl PlatformService for DevModeBulkEmailServices {
    fn backend(&self) -> Backend {
        Backend::DevModeBulkEmail
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscription_lifecycle() {
        let services = DevModeBulkEmailServices::new();
        assert!(!services.is_subscribed("a@example.com"));

        services.add_or_update_user_status("a@example.com", true);
        assert!(services.is_subscribed("a@example.com"));

        services.add_or_update_user_status("a@example.com", false);
        assert!(!services.is_subscribed("a@example.com"));

        assert!(services.permanently_delete_user_from_list("a@example.com"));
        assert!(!services.permanently_delete_user_from_list("a@example.com"));
    }

    #[test]
    fn test_mailchimp_audience() {
        let mut config = PlatformConfig::default();
        assert!(MailchimpBulkEmailServices::from_config(&config).audience_id().is_err());
        config.email.mailchimp_audience_id = Some("aud-1".into());
        assert_eq!(
            MailchimpBulkEmailServices::from_config(&config).audience_id().unwrap(),
            "aud-1"
        );
    }
}
