//! Entity groups
//!
//! An entity group is a domain area that owns a set of persisted record
//! schemas. The set of groups is closed; any other name is invalid input.

use plinth_core::PlatformError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Domain areas owning persisted entity schemas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityGroup {
    /// Learner activity summaries
    Activity,
    /// Audit trail of role changes
    Audit,
    /// Authentication identities
    Auth,
    /// Abstract base forms shared by every group
    BaseModel,
    /// Batch pipeline jobs
    BeamJob,
    /// Blog posts and their rights
    Blog,
    /// Answer classifier training data
    Classifier,
    /// Exploration collections
    Collection,
    /// Runtime configuration properties
    Config,
    /// Sent email records
    Email,
    /// Explorations and their history
    Exploration,
    /// Feedback threads and messages
    Feedback,
    /// Background job records
    Job,
    /// Practice questions
    Question,
    /// Topic similarity and recommendations
    Recommendations,
    /// Skills and their history
    Skill,
    /// Playthrough and answer statistics
    Statistics,
    /// Stories and their history
    Story,
    /// Suggested content changes
    Suggestion,
    /// Topics and their history
    Topic,
    /// Learner and creator accounts
    User,
}

impl EntityGroup {
    /// Every group, in declaration order
    pub const ALL: [EntityGroup; 21] = [
        Self::Activity,
        Self::Audit,
        Self::Auth,
        Self::BaseModel,
        Self::BeamJob,
        Self::Blog,
        Self::Classifier,
        Self::Collection,
        Self::Config,
        Self::Email,
        Self::Exploration,
        Self::Feedback,
        Self::Job,
        Self::Question,
        Self::Recommendations,
        Self::Skill,
        Self::Statistics,
        Self::Story,
        Self::Suggestion,
        Self::Topic,
        Self::User,
    ];

    /// Canonical snake_case name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Activity => "activity",
            Self::Audit => "audit",
            Self::Auth => "auth",
            Self::BaseModel => "base_model",
            Self::BeamJob => "beam_job",
            Self::Blog => "blog",
            Self::Classifier => "classifier",
            Self::Collection => "collection",
            Self::Config => "config",
            Self::Email => "email",
            Self::Exploration => "exploration",
            Self::Feedback => "feedback",
            Self::Job => "job",
            Self::Question => "question",
            Self::Recommendations => "recommendations",
            Self::Skill => "skill",
            Self::Statistics => "statistics",
            Self::Story => "story",
            Self::Suggestion => "suggestion",
            Self::Topic => "topic",
            Self::User => "user",
        }
    }
}

impl fmt::Display for EntityGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EntityGroup {
    type Err = PlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|group| group.name() == s)
            .ok_or_else(|| PlatformError::invalid_argument(format!("Invalid model name: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_names_parse_back() {
        for group in EntityGroup::ALL {
            assert_eq!(group.name().parse::<EntityGroup>().unwrap(), group);
        }
    }

    #[test]
    fn test_unknown_names_rejected() {
        for name in ["", "users", "User", " user"] {
            let err = name.parse::<EntityGroup>().unwrap_err();
            assert_matches!(err, PlatformError::InvalidArgument { ref message }
                if message == &format!("Invalid model name: {name}"));
        }
    }
}
