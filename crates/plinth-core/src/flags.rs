//! Deployment flags consumed by the registry
//!
//! These are already-resolved values; loading them from files or the
//! environment is the job of [`crate::config`].

use crate::errors::{PlatformError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Provider name selecting Mailgun for transactional email
pub const EMAIL_SERVICE_PROVIDER_MAILGUN: &str = "mailgun";

/// Provider name selecting Mailchimp for bulk email
pub const BULK_EMAIL_SERVICE_PROVIDER_MAILCHIMP: &str = "mailchimp";

/// Supported transactional email providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmailProvider {
    /// Mailgun HTTP API
    Mailgun,
}

impl EmailProvider {
    /// Parse a provider flag, rejecting anything outside the supported set
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            EMAIL_SERVICE_PROVIDER_MAILGUN => Ok(Self::Mailgun),
            other => Err(PlatformError::invalid_configuration(format!(
                "Invalid email service provider: {other}"
            ))),
        }
    }
}

impl fmt::Display for EmailProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mailgun => f.write_str(EMAIL_SERVICE_PROVIDER_MAILGUN),
        }
    }
}

/// Supported bulk email providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BulkEmailProvider {
    /// Mailchimp marketing API
    Mailchimp,
}

impl BulkEmailProvider {
    /// Parse a provider flag, rejecting anything outside the supported set
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            BULK_EMAIL_SERVICE_PROVIDER_MAILCHIMP => Ok(Self::Mailchimp),
            other => Err(PlatformError::invalid_configuration(format!(
                "Invalid bulk email service provider: {other}"
            ))),
        }
    }
}

impl fmt::Display for BulkEmailProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mailchimp => f.write_str(BULK_EMAIL_SERVICE_PROVIDER_MAILCHIMP),
        }
    }
}

/// Flags that select between backends
///
/// Provider strings are kept raw so that an unsupported value is reported
/// verbatim at the point of resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlatformFlags {
    /// Running against local emulators instead of managed cloud services
    pub emulator_mode: bool,

    /// Running a development server
    pub dev_mode: bool,

    /// Transactional email provider name
    pub email_service_provider: String,

    /// Bulk email provider name
    pub bulk_email_service_provider: String,
}

impl Default for PlatformFlags {
    fn default() -> Self {
        Self::local()
    }
}

impl PlatformFlags {
    /// Flags for a local development deployment backed by emulators
    pub fn local() -> Self {
        Self {
            emulator_mode: true,
            dev_mode: true,
            email_service_provider: EMAIL_SERVICE_PROVIDER_MAILGUN.to_string(),
            bulk_email_service_provider: BULK_EMAIL_SERVICE_PROVIDER_MAILCHIMP.to_string(),
        }
    }

    /// Flags for a managed-cloud production deployment
    pub fn production() -> Self {
        Self {
            emulator_mode: false,
            dev_mode: false,
            ..Self::local()
        }
    }

    /// Set emulator mode
    pub fn with_emulator_mode(mut self, emulator_mode: bool) -> Self {
        self.emulator_mode = emulator_mode;
        self
    }

    /// Set dev mode
    pub fn with_dev_mode(mut self, dev_mode: bool) -> Self {
        self.dev_mode = dev_mode;
        self
    }

    /// Set the transactional email provider name
    pub fn with_email_service_provider(mut self, provider: impl Into<String>) -> Self {
        self.email_service_provider = provider.into();
        self
    }

    /// Set the bulk email provider name
    pub fn with_bulk_email_service_provider(mut self, provider: impl Into<String>) -> Self {
        self.bulk_email_service_provider = provider.into();
        self
    }

    /// Parsed transactional email provider
    pub fn email_provider(&self) -> Result<EmailProvider> {
        EmailProvider::parse(&self.email_service_provider)
    }

    /// Parsed bulk email provider
    pub fn bulk_email_provider(&self) -> Result<BulkEmailProvider> {
        BulkEmailProvider::parse(&self.bulk_email_service_provider)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_provider_parsing() {
        assert_eq!(EmailProvider::parse("mailgun").unwrap(), EmailProvider::Mailgun);
        assert_eq!(
            BulkEmailProvider::parse("mailchimp").unwrap(),
            BulkEmailProvider::Mailchimp
        );
    }

    #[test]
    fn test_unknown_provider_is_named_verbatim() {
        let err = EmailProvider::parse("invalid service provider").unwrap_err();
        assert_matches!(err, PlatformError::InvalidConfiguration { ref message }
            if message == "Invalid email service provider: invalid service provider");

        let err = BulkEmailProvider::parse("Mailchimp").unwrap_err();
        assert!(err
            .to_string()
            .contains("Invalid bulk email service provider: Mailchimp"));
    }

    #[test]
    fn test_production_flags() {
        let flags = PlatformFlags::production();
        assert!(!flags.emulator_mode);
        assert!(!flags.dev_mode);
        assert_eq!(flags.email_provider().unwrap(), EmailProvider::Mailgun);
    }
}
