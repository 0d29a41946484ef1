//! Stories

use crate::model::concrete_models;

concrete_models! {
    Story;
    StoryModel: Versioned,
    StorySnapshotMetadataModel: SnapshotMetadata,
    StorySnapshotContentModel: SnapshotContent,
    StoryCommitLogEntryModel: CommitLogEntry,
    StorySummaryModel: Base,
}
