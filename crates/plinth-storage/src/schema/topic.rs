//! Topics

use crate::model::concrete_models;

concrete_models! {
    Topic;
    TopicModel: Versioned,
    TopicSnapshotMetadataModel: SnapshotMetadata,
    TopicSnapshotContentModel: SnapshotContent,
    TopicCommitLogEntryModel: CommitLogEntry,
    TopicRightsModel: Versioned,
    TopicRightsSnapshotMetadataModel: SnapshotMetadata,
    TopicRightsSnapshotContentModel: SnapshotContent,
    TopicSummaryModel: Base,
}
