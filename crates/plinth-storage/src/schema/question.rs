//! Practice questions

use crate::model::concrete_models;

concrete_models! {
    Question;
    QuestionModel: Versioned,
    QuestionSnapshotMetadataModel: SnapshotMetadata,
    QuestionSnapshotContentModel: SnapshotContent,
    QuestionCommitLogEntryModel: CommitLogEntry,
    QuestionSkillLinkModel: Base,
    QuestionSummaryModel: Base,
}
