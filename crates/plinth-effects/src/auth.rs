//! External identity provider

use plinth_core::{Backend, PlatformConfig, PlatformService};
use std::any::Any;

/// Host of the local identity-provider emulator
pub const AUTH_EMULATOR_HOST: &str = "localhost:9099";

/// Firebase identity provider
///
/// There is no dev-mode stand-in for authentication; in emulator mode the
/// same implementation talks to the local emulator instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirebaseAuthServices {
    project_id: Option<String>,
    emulator_host: Option<String>,
}

impl FirebaseAuthServices {
    /// Build from configuration
    pub fn from_config(config: &PlatformConfig) -> Self {
        Self {
            project_id: config.cloud.project_id.clone(),
            emulator_host: config
                .deployment
                .emulator_mode
                .then(|| AUTH_EMULATOR_HOST.to_string()),
        }
    }

    /// Cloud project, if configured
    pub fn project_id(&self) -> Option<&str> {
        self.project_id.as_deref()
    }

    /// Emulator host when running locally
    pub fn emulator_host(&self) -> Option<&str> {
        self.emulator_host.as_deref()
    }
}

impl PlatformService for FirebaseAuthServices {
    fn backend(&self) -> Backend {
        Backend::FirebaseAuth
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emulator_host_follows_mode() {
        let mut config = PlatformConfig::default();
        assert_eq!(
            FirebaseAuthServices::from_config(&config).emulator_host(),
            Some(AUTH_EMULATOR_HOST)
        );

        config.deployment.emulator_mode = false;
        assert_eq!(FirebaseAuthServices::from_config(&config).emulator_host(), None);
    }
}
