//! Exploration recommendations

use crate::model::concrete_models;

concrete_models! {
    Recommendations;
    ExplorationRecommendationsModel: Base,
    TopicSimilaritiesModel: Base,
}
