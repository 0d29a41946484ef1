//! Plinth Composition - Capability Registry
//!
//! Composes the backend implementations from `plinth-effects` into a single
//! [`Registry`] that hands callers the right implementation for the
//! configured deployment, and exposes the [`EntityCatalog`] of persisted
//! models.
//!
//! ```no_run
//! use plinth_composition::Registry;
//! use plinth_core::PlatformConfig;
//!
//! # fn main() -> plinth_core::Result<()> {
//! let registry = Registry::from_config(PlatformConfig::load(None)?);
//! let storage = registry.resolve_storage()?;
//! println!("storage served by {}", storage.backend());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

/// Backend selection from deployment flags
pub mod binding;

/// Entity-group catalog
pub mod catalog;

/// Platform contract
pub mod platform;

/// Registry and backend registration table
pub mod registry;

pub use binding::select_backend;
pub use catalog::EntityCatalog;
pub use platform::{BasePlatform, Platform};
pub use registry::{BackendTable, Registry, ServiceFactory};
