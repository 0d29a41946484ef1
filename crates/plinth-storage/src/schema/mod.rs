//! Schema modules, one per entity group

pub mod activity;
pub mod audit;
pub mod auth;
pub mod base_model;
pub mod beam_job;
pub mod blog;
pub mod classifier;
pub mod collection;
pub mod config;
pub mod email;
pub mod exploration;
pub mod feedback;
pub mod job;
pub mod question;
pub mod recommendations;
pub mod skill;
pub mod statistics;
pub mod story;
pub mod suggestion;
pub mod topic;
pub mod user;

use crate::group::EntityGroup;
use crate::model::ModelClass;

/// The set of model declarations owned by one entity group
#[derive(Debug, PartialEq, Eq)]
pub struct SchemaModule {
    pub(crate) group: EntityGroup,
    pub(crate) models: &'static [ModelClass],
    pub(crate) abstract_models: &'static [&'static str],
}

impl SchemaModule {
    /// Group this module belongs to
    pub fn group(&self) -> EntityGroup {
        self.group
    }

    /// Concrete models declared by this module
    pub fn models(&self) -> &'static [ModelClass] {
        self.models
    }

    /// Abstract base forms declared by this module
    pub fn abstract_model_names(&self) -> &'static [&'static str] {
        self.abstract_models
    }

    /// Look up a concrete model by name
    pub fn find(&self, name: &str) -> Option<ModelClass> {
        self.models.iter().copied().find(|model| model.name() == name)
    }
}

/// Schema module for a group
pub fn schema_module(group: EntityGroup) -> &'static SchemaModule {
    match group {
        EntityGroup::Activity => &activity::SCHEMA,
        EntityGroup::Audit => &audit::SCHEMA,
        EntityGroup::Auth => &auth::SCHEMA,
        EntityGroup::BaseModel => &base_model::SCHEMA,
        EntityGroup::BeamJob => &beam_job::SCHEMA,
        EntityGroup::Blog => &blog::SCHEMA,
        EntityGroup::Classifier => &classifier::SCHEMA,
        EntityGroup::Collection => &collection::SCHEMA,
        EntityGroup::Config => &config::SCHEMA,
        EntityGroup::Email => &email::SCHEMA,
        EntityGroup::Exploration => &exploration::SCHEMA,
        EntityGroup::Feedback => &feedback::SCHEMA,
        EntityGroup::Job => &job::SCHEMA,
        EntityGroup::Question => &question::SCHEMA,
        EntityGroup::Recommendations => &recommendations::SCHEMA,
        EntityGroup::Skill => &skill::SCHEMA,
        EntityGroup::Statistics => &statistics::SCHEMA,
        EntityGroup::Story => &story::SCHEMA,
        EntityGroup::Suggestion => &suggestion::SCHEMA,
        EntityGroup::Topic => &topic::SCHEMA,
        EntityGroup::User => &user::SCHEMA,
    }
}
