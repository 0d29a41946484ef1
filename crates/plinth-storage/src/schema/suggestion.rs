//! Suggestions and contribution stats

use crate::model::concrete_models;

concrete_models! {
    Suggestion;
    GeneralSuggestionModel: Base,
    GeneralVoiceoverApplicationModel: Base,
    CommunityContributionStatsModel: Base,
    TranslationContributionStatsModel: Base,
}
