//! Sent email records

use crate::model::concrete_models;

concrete_models! {
    Email;
    SentEmailModel: Base,
    BulkEmailModel: Base,
    FeedbackEmailReplyToIdModel: Base,
}
