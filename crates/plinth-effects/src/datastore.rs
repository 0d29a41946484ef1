//! Datastore implementation
//!
//! The cloud datastore validates batched requests and delegates all I/O to
//! an [`EntityStore`]. The store is the seam to the actual database client;
//! [`MemoryEntityStore`] stands in for it locally and in tests.

use async_trait::async_trait;
use parking_lot::RwLock;
use plinth_core::{Backend, PlatformError, PlatformService, Result};
use plinth_storage::ModelClass;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

/// One persisted entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredEntity {
    /// Entity id, unique within its model
    pub id: String,
    /// Entity properties
    pub properties: serde_json::Value,
}

impl StoredEntity {
    /// Create an entity
    pub fn new(id: impl Into<String>, properties: serde_json::Value) -> Self {
        Self {
            id: id.into(),
            properties,
        }
    }
}

/// Entity storage client
#[async_trait]
pub trait EntityStore: Send + Sync + fmt::Debug {
    /// Fetch entities by id; missing ids yield `None` in the same position
    async fn get_multi(
        &self,
        model: ModelClass,
        ids: &[String],
    ) -> Result<Vec<Option<StoredEntity>>>;

    /// Insert or replace entities
    async fn put_multi(&self, model: ModelClass, entities: Vec<StoredEntity>) -> Result<()>;

    /// Delete entities by id; missing ids are ignored
    async fn delete_multi(&self, model: ModelClass, ids: &[String]) -> Result<()>;
}

/// In-memory entity store
#[derive(Debug, Default)]
pub struct MemoryEntityStore {
    entities: RwLock<HashMap<(ModelClass, String), StoredEntity>>,
}

impl MemoryEntityStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entities across all models
    pub fn len(&self) -> usize {
        self.entities.read().len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.entities.read().is_empty()
    }
}

#[async_trait]
impl EntityStore for MemoryEntityStore {
    async fn get_multi(
        &self,
        model: ModelClass,
        ids: &[String],
    ) -> Result<Vec<Option<StoredEntity>>> {
        let entities = self.entities.read();
        Ok(ids
            .iter()
            .map(|id| entities.get(&(model, id.clone())).cloned())
            .collect())
    }

    async fn put_multi(&self, model: ModelClass, entities: Vec<StoredEntity>) -> Result<()> {
        if entities.iter().any(|entity| entity.id.is_empty()) {
            return Err(PlatformError::invalid_argument(format!(
                "Entity id cannot be empty for {}",
                model.name()
            )));
        }

        let mut stored = self.entities.write();
        for entity in entities {
            stored.insert((model, entity.id.clone()), entity);
        }
        Ok(())
    }

    async fn delete_multi(&self, model: ModelClass, ids: &[String]) -> Result<()> {
        let mut stored = self.entities.write();
        for id in ids {
            stored.remove(&(model, id.clone()));
        }
        Ok(())
    }
}

/// Managed cloud datastore
#[derive(Debug, Clone)]
pub struct CloudDatastoreServices {
    project_id: Option<String>,
    store: Arc<dyn EntityStore>,
}

impl CloudDatastoreServices {
    /// Create a datastore over the given client
    pub fn new(project_id: Option<String>, store: Arc<dyn EntityStore>) -> Self {
        Self { project_id, store }
    }

    /// Cloud project, if configured
    pub fn project_id(&self) -> Option<&str> {
        self.project_id.as_deref()
    }

    /// Fetch entities for several models in one call
    ///
    /// Each model may appear at most once; a repeated model fails with
    /// `DuplicateSpecification` before the store is contacted. Results are
    /// returned in request order.
    pub async fn fetch_multiple_entities_by_ids_and_models(
        &self,
        ids_and_models: &[(ModelClass, Vec<String>)],
    ) -> Result<Vec<Vec<Option<StoredEntity>>>> {
        let mut seen = HashSet::with_capacity(ids_and_models.len());
        for (model, _) in ids_and_models {
            if !seen.insert(model.name()) {
                tracing::warn!(model = %model, "Rejected batched fetch with duplicated model");
                return Err(PlatformError::duplicate_specification(
                    "Model names should not be duplicated in input list.",
                ));
            }
        }

        let mut results = Vec::with_capacity(ids_and_models.len());
        for (model, ids) in ids_and_models {
            results.push(self.store.get_multi(*model, ids).await?);
        }
        Ok(results)
    }

    /// Fetch entities of one model
    pub async fn get_multi(
        &self,
        model: ModelClass,
        ids: &[String],
    ) -> Result<Vec<Option<StoredEntity>>> {
        self.store.get_multi(model, ids).await
    }

    /// Insert or replace entities of one model
    pub async fn put_multi(&self, model: ModelClass, entities: Vec<StoredEntity>) -> Result<()> {
        self.store.put_multi(model, entities).await
    }

    /// Delete entities of one model
    pub async fn delete_multi(&self, model: ModelClass, ids: &[String]) -> Result<()> {
        self.store.delete_multi(model, ids).await
    }
}

impl PlatformService for CloudDatastoreServices {
    fn backend(&self) -> Backend {
        Backend::CloudDatastore
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
