//! Plinth Core - Platform Capability Vocabulary
//!
//! Foundation types shared by every layer of the platform registry:
//!
//! - [`Capability`] and [`Backend`]: the closed sets of abstract services and
//!   the concrete implementations that can serve them
//! - [`PlatformFlags`]: the already-resolved deployment flags that select a
//!   backend for each capability
//! - [`PlatformConfig`]: layered configuration that produces those flags and
//!   the settings backend implementations are built from
//! - [`PlatformService`] and [`ServiceHandle`]: the interface every
//!   implementation exposes and the shared handle callers receive
//! - [`PlatformError`]: the unified error taxonomy

#![forbid(unsafe_code)]

/// Capability and backend enumerations
pub mod capability;

/// Layered configuration and validation
pub mod config;

/// Unified error handling
pub mod errors;

/// Deployment flags and provider selection
pub mod flags;

/// Implementation handles
pub mod service;

pub use capability::{Backend, Capability};
pub use config::PlatformConfig;
pub use errors::{PlatformError, Result};
pub use flags::{
    BulkEmailProvider, EmailProvider, PlatformFlags, BULK_EMAIL_SERVICE_PROVIDER_MAILCHIMP,
    EMAIL_SERVICE_PROVIDER_MAILGUN,
};
pub use service::{PlatformService, ServiceHandle};
