//! Batch pipeline job runs

use crate::model::concrete_models;

concrete_models! {
    BeamJob;
    BeamJobRunModel: Base,
    BeamJobRunResultModel: Base,
}
