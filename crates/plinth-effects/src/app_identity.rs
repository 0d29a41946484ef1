//! Application identity

use plinth_core::{Backend, PlatformConfig, PlatformService};
use std::any::Any;

/// Application id used when no cloud project is configured
pub const DEV_APPLICATION_ID: &str = "dev-project-id";

/// Platform app-identity service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformAppIdentityServices {
    application_id: String,
    default_bucket: String,
}

impl PlatformAppIdentityServices {
    /// Build from configuration
    pub fn from_config(config: &PlatformConfig) -> Self {
        let application_id = config
            .cloud
            .project_id
            .clone()
            .unwrap_or_else(|| DEV_APPLICATION_ID.to_string());
        let default_bucket = config
            .cloud
            .storage_bucket
            .clone()
            .unwrap_or_else(|| format!("{application_id}-resources"));
        Self {
            application_id,
            default_bucket,
        }
    }

    /// Application id
    pub fn application_id(&self) -> &str {
        &self.application_id
    }

    /// Default blob storage bucket
    pub fn default_bucket(&self) -> &str {
        &self.default_bucket
    }
}

impl PlatformService for PlatformAppIdentityServices {
    fn backend(&self) -> Backend {
        Backend::PlatformAppIdentity
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_project() {
        let identity = PlatformAppIdentityServices::from_config(&PlatformConfig::default());
        assert_eq!(identity.application_id(), "dev-project-id");
        assert_eq!(identity.default_bucket(), "dev-project-id-resources");
    }

    #[test]
    fn test_configured_bucket_wins() {
        let mut config = PlatformConfig::default();
        config.cloud.project_id = Some("plinth-prod".into());
        config.cloud.storage_bucket = Some("assets".into());
        let identity = PlatformAppIdentityServices::from_config(&config);
        assert_eq!(identity.application_id(), "plinth-prod");
        assert_eq!(identity.default_bucket(), "assets");
    }
}
