//! Audit trail records

use crate::model::concrete_models;

concrete_models! {
    Audit;
    RoleQueryAuditModel: Base,
    UsernameChangeAuditModel: Base,
}
