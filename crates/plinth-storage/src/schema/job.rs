//! Legacy background job records

use crate::model::concrete_models;

concrete_models! {
    Job;
    JobModel: Base,
}
