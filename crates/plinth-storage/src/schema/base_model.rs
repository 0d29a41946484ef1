//! Abstract base forms shared by every other group
//!
//! This module declares no concrete models. Its schema module lists the
//! abstract bases by name only.

use crate::group::EntityGroup;
use crate::model::ABSTRACT_MODEL_NAMES;
use crate::schema::SchemaModule;

pub use crate::model::{
    BaseCommitLogEntryModel, BaseModel, BaseSnapshotContentModel, BaseSnapshotMetadataModel,
    VersionedModel,
};

/// Schema module for this group
pub static SCHEMA: SchemaModule = SchemaModule {
    group: EntityGroup::BaseModel,
    models: &[],
    abstract_models: ABSTRACT_MODEL_NAMES,
};
