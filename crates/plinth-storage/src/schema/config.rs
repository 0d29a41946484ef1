//! Runtime configuration properties

use crate::model::concrete_models;

concrete_models! {
    Config;
    ConfigPropertyModel: Versioned,
    ConfigPropertySnapshotMetadataModel: SnapshotMetadata,
    ConfigPropertySnapshotContentModel: SnapshotContent,
    PlatformParameterModel: Versioned,
    PlatformParameterSnapshotMetadataModel: SnapshotMetadata,
    PlatformParameterSnapshotContentModel: SnapshotContent,
}
