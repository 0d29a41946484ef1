//! Answer classifier training jobs

use crate::model::concrete_models;

concrete_models! {
    Classifier;
    ClassifierTrainingJobModel: Base,
    StateTrainingJobsMappingModel: Base,
}
