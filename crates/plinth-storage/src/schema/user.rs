//! Per-user settings, progress and preferences

use crate::model::concrete_models;

concrete_models! {
    User;
    UserSettingsModel: Base,
    CompletedActivitiesModel: Base,
    IncompleteActivitiesModel: Base,
    ExpUserLastPlaythroughModel: Base,
    LearnerGoalsModel: Base,
    LearnerPlaylistModel: Base,
    UserContributionsModel: Base,
    UserEmailPreferencesModel: Base,
    UserSubscriptionsModel: Base,
    UserSubscribersModel: Base,
    UserRecentChangesBatchModel: Base,
    UserStatsModel: Base,
    ExplorationUserDataModel: Base,
    CollectionProgressModel: Base,
    StoryProgressModel: Base,
    UserQueryModel: Base,
    UserBulkEmailsModel: Base,
    UserSkillMasteryModel: Base,
    UserContributionProficiencyModel: Base,
    UserContributionRightsModel: Base,
    PendingDeletionRequestModel: Base,
    DeletedUserModel: Base,
}
