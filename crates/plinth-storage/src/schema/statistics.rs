//! Learner statistics and event logs

use crate::model::concrete_models;

concrete_models! {
    Statistics;
    StateCounterModel: Base,
    AnswerSubmittedEventLogEntryModel: Base,
    ExplorationStatsModel: Base,
    ExplorationIssuesModel: Base,
    PlaythroughModel: Base,
    LearnerAnswerDetailsModel: Base,
    ExplorationAnnotationsModel: Base,
    StateAnswersModel: Base,
}
