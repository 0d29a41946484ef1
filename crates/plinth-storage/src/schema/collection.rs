//! Collections of explorations

use crate::model::concrete_models;

concrete_models! {
    Collection;
    CollectionModel: Versioned,
    CollectionSnapshotMetadataModel: SnapshotMetadata,
    CollectionSnapshotContentModel: SnapshotContent,
    CollectionCommitLogEntryModel: CommitLogEntry,
    CollectionRightsModel: Versioned,
    CollectionRightsSnapshotMetadataModel: SnapshotMetadata,
    CollectionRightsSnapshotContentModel: SnapshotContent,
    CollectionSummaryModel: Base,
}
