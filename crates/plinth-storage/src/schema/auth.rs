//! Authentication identity records

use crate::model::concrete_models;

concrete_models! {
    Auth;
    UserAuthDetailsModel: Base,
    UserIdentifiersModel: Base,
    UserIdByFirebaseAuthIdModel: Base,
    FirebaseSeedModel: Base,
}
