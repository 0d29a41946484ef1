//! Skills

use crate::model::concrete_models;

concrete_models! {
    Skill;
    SkillModel: Versioned,
    SkillSnapshotMetadataModel: SnapshotMetadata,
    SkillSnapshotContentModel: SnapshotContent,
    SkillCommitLogEntryModel: CommitLogEntry,
    SkillSummaryModel: Base,
}
