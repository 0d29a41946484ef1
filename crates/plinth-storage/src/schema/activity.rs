//! Activity reference lists

use crate::model::concrete_models;

concrete_models! {
    Activity;
    ActivityReferencesModel: Base,
}
