//! Feedback threads and messages

use crate::model::concrete_models;

concrete_models! {
    Feedback;
    GeneralFeedbackThreadModel: Base,
    GeneralFeedbackMessageModel: Base,
    GeneralFeedbackThreadUserModel: Base,
    FeedbackAnalyticsModel: Base,
    UnsentFeedbackEmailModel: Base,
}
