//! Transactional email
//!
//! The Mailgun implementation only prepares requests; delivery is the HTTP
//! client's concern. The dev-mode implementation records every message in
//! an in-memory outbox and logs it.

use parking_lot::Mutex;
use plinth_core::{Backend, PlatformConfig, PlatformError, PlatformService, Result};
use serde::Serialize;
use std::any::Any;

/// A message ready to hand to a provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutgoingEmail {
    /// From address
    pub sender: String,
    /// To addresses
    pub recipients: Vec<String>,
    /// Subject line
    pub subject: String,
    /// Plain text body
    pub plaintext_body: String,
    /// HTML body
    pub html_body: String,
}

impl OutgoingEmail {
    fn validate(&self) -> Result<()> {
        if self.recipients.is_empty() {
            return Err(PlatformError::invalid_argument(
                "Email must have at least one recipient",
            ));
        }
        if let Some(bad) = self.recipients.iter().find(|r| !r.contains('@')) {
            return Err(PlatformError::invalid_argument(format!(
                "Invalid recipient email address: {bad}"
            )));
        }
        Ok(())
    }
}

/// Mailgun email provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailgunEmailServices {
    domain: Option<String>,
    sender_address: String,
}

impl MailgunEmailServices {
    /// Build from configuration
    pub fn from_config(config: &PlatformConfig) -> Self {
        Self {
            domain: config.email.mailgun_domain.clone(),
            sender_address: config.email.sender_address.clone(),
        }
    }

    /// Default From address
    pub fn sender_address(&self) -> &str {
        &self.sender_address
    }

    /// Messages endpoint for the configured domain
    pub fn messages_endpoint(&self) -> Result<String> {
        let domain = self.domain.as_deref().ok_or_else(|| {
            PlatformError::invalid_configuration("Mailgun domain is not configured")
        })?;
        Ok(format!("https://api.mailgun.net/v3/{domain}/messages"))
    }

    /// Validate a message and return the endpoint it should be posted to
    pub fn prepare(&self, email: &OutgoingEmail) -> Result<String> {
        email.validate()?;
        self.messages_endpoint()
    }
}

impl PlatformService for MailgunEmailServices {
    fn backend(&self) -> Backend {
        Backend::MailgunEmail
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Local email stub
#[derive(Debug, Default)]
pub struct DevModeEmailServices {
    outbox: Mutex<Vec<OutgoingEmail>>,
}

impl DevModeEmailServices {
    /// Create an empty outbox
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message instead of sending it
    pub fn send_email(&self, email: OutgoingEmail) -> Result<()> {
        email.validate()?;
        tracing::info!(
            sender = %email.sender,
            recipients = ?email.recipients,
            subject = %email.subject,
            "Email not sent in dev mode"
        );
        self.outbox.lock().push(email);
        Ok(())
    }

    /// Messages recorded so far
    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.outbox.lock().clone()
    }
}

impl PlatformService for DevModeEmailServices {
    fn backend(&self) -> Backend {
        Backend::DevModeEmail
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email(recipients: &[&str]) -> OutgoingEmail {
        OutgoingEmail {
            sender: "noreply@example.com".into(),
            recipients: recipients.iter().map(|r| r.to_string()).collect(),
            subject: "Welcome".into(),
            plaintext_body: "Hello".into(),
            html_body: "<p>Hello</p>".into(),
        }
    }

    #[test]
    fn test_dev_mode_records_messages() {
        let services = DevModeEmailServices::new();
        services.send_email(email(&["a@example.com"])).unwrap();
        assert_eq!(services.sent().len(), 1);

        assert!(services.send_email(email(&[])).is_err());
        assert!(services.send_email(email(&["not-an-address"])).is_err());
        assert_eq!(services.sent().len(), 1);
    }

    #[test]
    fn test_mailgun_requires_domain() {
        let mut config = PlatformConfig::default();
        let services = MailgunEmailServices::from_config(&config);
        assert!(matches!(
            services.prepare(&email(&["a@example.com"])),
            Err(PlatformError::InvalidConfiguration { .. })
        ));

        config.email.mailgun_domain = Some("mg.example.com".into());
        let services = MailgunEmailServices::from_config(&config);
        assert_eq!(
            services.prepare(&email(&["a@example.com"])).unwrap(),
            "https://api.mailgun.net/v3/mg.example.com/messages"
        );
    }
}
