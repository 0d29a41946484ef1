//! Storage model traits and descriptors
//!
//! Every persisted record schema is a type implementing [`StorageModel`].
//! Only types that also implement the [`ConcreteModel`] marker can be turned
//! into a [`ModelClass`], so abstract base forms can never appear in a
//! schema module's model list.

use crate::group::EntityGroup;
use serde::Serialize;
use std::fmt;

/// The abstract base a model specializes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelLineage {
    /// Plain record derived from [`BaseModel`]
    Base,
    /// Versioned record derived from [`VersionedModel`]
    Versioned,
    /// Commit log entry derived from [`BaseCommitLogEntryModel`]
    CommitLogEntry,
    /// Snapshot metadata derived from [`BaseSnapshotMetadataModel`]
    SnapshotMetadata,
    /// Snapshot content derived from [`BaseSnapshotContentModel`]
    SnapshotContent,
}

impl ModelLineage {
    /// Name of the abstract base type this lineage derives from
    pub fn base_name(&self) -> &'static str {
        match self {
            Self::Base => BaseModel::NAME,
            Self::Versioned => VersionedModel::NAME,
            Self::CommitLogEntry => BaseCommitLogEntryModel::NAME,
            Self::SnapshotMetadata => BaseSnapshotMetadataModel::NAME,
            Self::SnapshotContent => BaseSnapshotContentModel::NAME,
        }
    }
}

/// A persisted record schema
pub trait StorageModel {
    /// Schema name, unique across all groups
    const NAME: &'static str;

    /// Abstract base this schema derives from
    const LINEAGE: ModelLineage;
}

/// Marker for schemas that can be instantiated and stored
pub trait ConcreteModel: StorageModel {
    /// Group owning this schema
    const GROUP: EntityGroup;
}

/// Descriptor of a concrete model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ModelClass {
    group: EntityGroup,
    name: &'static str,
    lineage: ModelLineage,
}

impl ModelClass {
    /// Descriptor for a concrete model type
    pub const fn of<T: ConcreteModel>() -> Self {
        Self {
            group: T::GROUP,
            name: T::NAME,
            lineage: T::LINEAGE,
        }
    }

    /// Schema name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Owning group
    pub fn group(&self) -> EntityGroup {
        self.group
    }

    /// Abstract base this model derives from
    pub fn lineage(&self) -> ModelLineage {
        self.lineage
    }

    /// Whether this descriptor was built from `T`
    pub fn is<T: ConcreteModel>(&self) -> bool {
        *self == Self::of::<T>()
    }
}

impl fmt::Display for ModelClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.group, self.name)
    }
}

macro_rules! abstract_models {
    ($( $(#[$meta:meta])* $name:ident : $lineage:ident ),* $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, Default)]
            pub struct $name;

            impl StorageModel for $name {
                const NAME: &'static str = stringify!($name);
                const LINEAGE: ModelLineage = ModelLineage::$lineage;
            }
        )*

        /// Names of every abstract base form
        pub const ABSTRACT_MODEL_NAMES: &[&str] = &[$( stringify!($name) ),*];
    };
}

abstract_models! {
    /// Root of every persisted record
    BaseModel: Base,
    /// Record whose history is kept as snapshots and commits
    VersionedModel: Versioned,
    /// One commit against a versioned record
    BaseCommitLogEntryModel: CommitLogEntry,
    /// Metadata half of a versioned record snapshot
    BaseSnapshotMetadataModel: SnapshotMetadata,
    /// Content half of a versioned record snapshot
    BaseSnapshotContentModel: SnapshotContent,
}

/// Declare concrete models for one group along with the group's schema module
macro_rules! concrete_models {
    ($group:ident; $( $name:ident : $lineage:ident ),* $(,)?) => {
        $(
            #[allow(missing_docs)]
            #[derive(Debug, Clone, Copy, Default)]
            pub struct $name;

            impl $crate::model::StorageModel for $name {
                const NAME: &'static str = stringify!($name);
                const LINEAGE: $crate::model::ModelLineage = $crate::model::ModelLineage::$lineage;
            }

            impl $crate::model::ConcreteModel for $name {
                const GROUP: $crate::group::EntityGroup = $crate::group::EntityGroup::$group;
            }
        )*

        /// Schema module for this group
        pub static SCHEMA: $crate::schema::SchemaModule = $crate::schema::SchemaModule {
            group: $crate::group::EntityGroup::$group,
            models: &[$( $crate::model::ModelClass::of::<$name>() ),*],
            abstract_models: &[],
        };
    };
}

pub(crate) use concrete_models;

#[cfg(test)]
mod tests {
    use super::*;

    struct SampleModel;

    impl StorageModel for SampleModel {
        const NAME: &'static str = "SampleModel";
        const LINEAGE: ModelLineage = ModelLineage::Versioned;
    }

    impl ConcreteModel for SampleModel {
        const GROUP: EntityGroup = EntityGroup::Job;
    }

    #[test]
    fn test_descriptor_from_type() {
        let class = ModelClass::of::<SampleModel>();
        assert_eq!(class.name(), "SampleModel");
        assert_eq!(class.group(), EntityGroup::Job);
        assert_eq!(class.lineage().base_name(), "VersionedModel");
        assert!(class.is::<SampleModel>());
        assert_eq!(class.to_string(), "job.SampleModel");
    }

    #[test]
    fn test_abstract_names() {
        assert_eq!(
            ABSTRACT_MODEL_NAMES,
            &[
                "BaseModel",
                "VersionedModel",
                "BaseCommitLogEntryModel",
                "BaseSnapshotMetadataModel",
                "BaseSnapshotContentModel",
            ]
        );
    }
}
