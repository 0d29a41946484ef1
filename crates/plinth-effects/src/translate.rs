//! Machine translation

use plinth_core::{Backend, PlatformConfig, PlatformError, PlatformService, Result};
use std::any::Any;

fn validate_language_code(code: &str) -> Result<()> {
    let valid = (2..=3).contains(&code.len()) && code.chars().all(|c| c.is_ascii_lowercase());
    if valid {
        Ok(())
    } else {
        Err(PlatformError::invalid_argument(format!(
            "Invalid language code: {code}"
        )))
    }
}

/// Managed cloud translation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloudTranslateServices {
    project_id: Option<String>,
    location: String,
}

impl CloudTranslateServices {
    /// Build from configuration
    pub fn from_config(config: &PlatformConfig) -> Self {
        Self {
            project_id: config.cloud.project_id.clone(),
            location: config.cloud.location.clone(),
        }
    }

    /// Parent resource for translation requests
    pub fn parent(&self) -> Result<String> {
        let project = self.project_id.as_deref().ok_or_else(|| {
            PlatformError::invalid_configuration("cloud.project_id is not configured")
        })?;
        Ok(format!("projects/{project}/locations/{}", self.location))
    }
}

impl PlatformService for CloudTranslateServices {
    fn backend(&self) -> Backend {
        Backend::CloudTranslate
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Local translation stub
///
/// Returns the source text unchanged after validating the language codes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DevModeTranslateServices;

impl DevModeTranslateServices {
    /// "Translate" text between two languages
    pub fn translate_text(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String> {
        validate_language_code(source_language)?;
        validate_language_code(target_language)?;
        tracing::debug!(source_language, target_language, "Translation stubbed in dev mode");
        Ok(text.to_string())
    }
}

impl PlatformService for DevModeTranslateServices {
    fn backend(&self) -> Backend {
        Backend::DevModeTranslate
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
