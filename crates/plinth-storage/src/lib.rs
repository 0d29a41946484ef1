//! Plinth Storage - Entity Group Schema Catalog
//!
//! Declares the closed set of [`EntityGroup`]s and, for each, a
//! [`SchemaModule`] listing the concrete persisted-record models it owns.
//!
//! Concreteness is structural: abstract base forms implement
//! [`StorageModel`] but not [`ConcreteModel`], and only concrete models can
//! be described by a [`ModelClass`].

#![forbid(unsafe_code)]

/// Entity group enumeration
pub mod group;

/// Model traits and descriptors
pub mod model;

/// Per-group schema modules
pub mod schema;

pub use group::EntityGroup;
pub use model::{ConcreteModel, ModelClass, ModelLineage, StorageModel, ABSTRACT_MODEL_NAMES};
pub use schema::{schema_module, SchemaModule};
