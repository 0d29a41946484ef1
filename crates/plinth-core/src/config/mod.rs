//! Platform configuration
//!
//! Configuration is layered: built-in defaults, then a TOML file, then
//! `PLINTH_*` environment variables. The result is validated before the
//! deployment flags are handed to the registry.

pub mod validation;

pub use validation::{ConfigValidator, ValidationError, ValidationResult};

use crate::errors::{PlatformError, Result};
use crate::flags::{
    PlatformFlags, BULK_EMAIL_SERVICE_PROVIDER_MAILCHIMP, EMAIL_SERVICE_PROVIDER_MAILGUN,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "PLINTH_";

fn default_true() -> bool {
    true
}

/// Top-level platform configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlatformConfig {
    /// Deployment mode and provider selection
    #[serde(default)]
    pub deployment: DeploymentConfig,

    /// Managed cloud project settings
    #[serde(default)]
    pub cloud: CloudConfig,

    /// Cache backend settings
    #[serde(default)]
    pub cache: CacheConfig,

    /// Search backend settings
    #[serde(default)]
    pub search: SearchConfig,

    /// Email provider settings
    #[serde(default)]
    pub email: EmailConfig,
}

/// Deployment mode and provider selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeploymentConfig {
    /// Use local emulators instead of managed cloud services
    #[serde(default = "default_true")]
    pub emulator_mode: bool,

    /// Run as a development server
    #[serde(default = "default_true")]
    pub dev_mode: bool,

    /// Transactional email provider name
    #[serde(default = "default_email_provider")]
    pub email_service_provider: String,

    /// Bulk email provider name
    #[serde(default = "default_bulk_email_provider")]
    pub bulk_email_service_provider: String,
}

fn default_email_provider() -> String {
    EMAIL_SERVICE_PROVIDER_MAILGUN.to_string()
}

fn default_bulk_email_provider() -> String {
    BULK_EMAIL_SERVICE_PROVIDER_MAILCHIMP.to_string()
}

impl Default for DeploymentConfig {
    fn default() -> Self {
        Self {
            emulator_mode: true,
            dev_mode: true,
            email_service_provider: default_email_provider(),
            bulk_email_service_provider: default_bulk_email_provider(),
        }
    }
}

/// Managed cloud project settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloudConfig {
    /// Cloud project identifier; required by the cloud task queue
    #[serde(default)]
    pub project_id: Option<String>,

    /// Region used for task queues and translation
    #[serde(default = "default_location")]
    pub location: String,

    /// Default blob storage bucket; required by cloud storage
    #[serde(default)]
    pub storage_bucket: Option<String>,
}

fn default_location() -> String {
    "us-central1".to_string()
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            project_id: None,
            location: default_location(),
            storage_bucket: None,
        }
    }
}

/// Cache backend settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Redis host
    pub host: String,

    /// Redis port
    pub port: u16,

    /// Redis logical database index
    pub db: u8,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 6379,
            db: 0,
        }
    }
}

/// Search backend settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Elasticsearch host
    pub host: String,

    /// Elasticsearch port
    pub port: u16,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 9200,
        }
    }
}

/// Email provider settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailConfig {
    /// Mailgun sending domain
    pub mailgun_domain: Option<String>,

    /// Address used in the From header
    pub sender_address: String,

    /// Mailchimp audience receiving bulk email subscriptions
    pub mailchimp_audience_id: Option<String>,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            mailgun_domain: None,
            sender_address: "noreply@localhost".to_string(),
            mailchimp_audience_id: None,
        }
    }
}

impl PlatformConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            PlatformError::invalid_configuration(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;
        Self::from_toml_str(&content)
    }

    /// Build the layered configuration: defaults, optional file, environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::load_from_file(path)?,
            None => Self::default(),
        };
        config.merge_with_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `PLINTH_*` overrides from the process environment
    pub fn merge_with_env(&mut self) -> Result<()> {
        self.merge_with_vars(std::env::vars())
    }

    /// Apply `PLINTH_*` overrides from an explicit variable list
    pub fn merge_with_vars<I, K, V>(&mut self, vars: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (key, value) in vars {
            let Some(name) = key.as_ref().strip_prefix(ENV_PREFIX) else {
                continue;
            };
            let value: String = value.into();
            match name {
                "EMULATOR_MODE" => self.deployment.emulator_mode = parse_bool(name, &value)?,
                "DEV_MODE" => self.deployment.dev_mode = parse_bool(name, &value)?,
                "EMAIL_SERVICE_PROVIDER" => self.deployment.email_service_provider = value,
                "BULK_EMAIL_SERVICE_PROVIDER" => {
                    self.deployment.bulk_email_service_provider = value;
                }
                "CLOUD_PROJECT_ID" => self.cloud.project_id = Some(value),
                "CLOUD_LOCATION" => self.cloud.location = value,
                "STORAGE_BUCKET" => self.cloud.storage_bucket = Some(value),
                "REDIS_HOST" => self.cache.host = value,
                "REDIS_PORT" => self.cache.port = parse_port(name, &value)?,
                "REDIS_DB" => self.cache.db = parse_db(name, &value)?,
                "ES_HOST" => self.search.host = value,
                "ES_PORT" => self.search.port = parse_port(name, &value)?,
                "MAILGUN_DOMAIN" => self.email.mailgun_domain = Some(value),
                "SENDER_ADDRESS" => self.email.sender_address = value,
                "MAILCHIMP_AUDIENCE_ID" => self.email.mailchimp_audience_id = Some(value),
                _ => tracing::debug!(variable = %key.as_ref(), "Ignoring unknown override"),
            }
        }
        Ok(())
    }

    /// Validate the configuration
    ///
    /// Provider names are not checked here; an unsupported provider is
    /// reported by the registry when that capability is resolved.
    pub fn validate(&self) -> Result<()> {
        let root = ConfigValidator::new();

        let mut cloud = root.for_field("cloud");
        cloud
            .required("location", &self.cloud.location)
            .not_blank("project_id", self.cloud.project_id.as_deref())
            .not_blank("storage_bucket", self.cloud.storage_bucket.as_deref());

        let mut cache = root.for_field("cache");
        cache
            .hostname("host", &self.cache.host)
            .range("port", self.cache.port, Some(1), None)
            .range("db", self.cache.db, None, Some(15));

        let mut search = root.for_field("search");
        search
            .hostname("host", &self.search.host)
            .range("port", self.search.port, Some(1), None);

        let mut email = root.for_field("email");
        email
            .required("sender_address", &self.email.sender_address)
            .not_blank("mailgun_domain", self.email.mailgun_domain.as_deref())
            .not_blank(
                "mailchimp_audience_id",
                self.email.mailchimp_audience_id.as_deref(),
            );

        let mut validator = root;
        validator.merge(cloud);
        validator.merge(cache);
        validator.merge(search);
        validator.merge(email);
        validator.result().map_err(PlatformError::from)
    }

    /// Deployment flags for the registry
    pub fn flags(&self) -> PlatformFlags {
        PlatformFlags {
            emulator_mode: self.deployment.emulator_mode,
            dev_mode: self.deployment.dev_mode,
            email_service_provider: self.deployment.email_service_provider.clone(),
            bulk_email_service_provider: self.deployment.bulk_email_service_provider.clone(),
        }
    }

    /// Replace the deployment section with the given flags
    pub fn with_flags(mut self, flags: &PlatformFlags) -> Self {
        self.deployment = DeploymentConfig {
            emulator_mode: flags.emulator_mode,
            dev_mode: flags.dev_mode,
            email_service_provider: flags.email_service_provider.clone(),
            bulk_email_service_provider: flags.bulk_email_service_provider.clone(),
        };
        self
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(PlatformError::invalid_configuration(format!(
            "{ENV_PREFIX}{name} must be a boolean, got: {value}"
        ))),
    }
}

fn parse_port(name: &str, value: &str) -> Result<u16> {
    value.parse().map_err(|_| {
        PlatformError::invalid_configuration(format!(
            "{ENV_PREFIX}{name} must be a port number, got: {value}"
        ))
    })
}

fn parse_db(name: &str, value: &str) -> Result<u8> {
    value.parse().map_err(|_| {
        PlatformError::invalid_configuration(format!(
            "{ENV_PREFIX}{name} must be a database index, got: {value}"
        ))
    })
}
