//! Explorations and their history

use crate::model::concrete_models;

concrete_models! {
    Exploration;
    ExplorationModel: Versioned,
    ExplorationSnapshotMetadataModel: SnapshotMetadata,
    ExplorationSnapshotContentModel: SnapshotContent,
    ExplorationCommitLogEntryModel: CommitLogEntry,
    ExplorationRightsModel: Versioned,
    ExplorationRightsSnapshotMetadataModel: SnapshotMetadata,
    ExplorationRightsSnapshotContentModel: SnapshotContent,
    ExpSummaryModel: Base,
    ExplorationContextModel: Base,
    ExplorationVersionHistoryModel: Base,
}
