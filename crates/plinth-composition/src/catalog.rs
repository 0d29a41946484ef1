//! Entity-group catalog
//!
//! Resolves domain area names into the schema modules declaring their
//! persisted models.

use plinth_core::Result;
use plinth_storage::{schema_module, EntityGroup, ModelClass, SchemaModule};
use std::collections::BTreeSet;

/// Lookup of schema modules by entity group name
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntityCatalog;

impl EntityCatalog {
    /// Create a catalog
    pub fn new() -> Self {
        Self
    }

    /// Schema modules for the given group names
    ///
    /// One module per name in input order; repeated names yield repeated
    /// modules. Fails with `InvalidArgument` on the first unknown name.
    pub fn import_groups<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<&'static SchemaModule>> {
        names
            .iter()
            .map(|name| {
                let group: EntityGroup = name.as_ref().parse()?;
                Ok(schema_module(group))
            })
            .collect()
    }

    /// Concrete models declared by the given groups
    pub fn get_entity_classes_for_groups<S: AsRef<str>>(
        &self,
        names: &[S],
    ) -> Result<BTreeSet<ModelClass>> {
        let modules = self.import_groups(names)?;
        Ok(modules
            .into_iter()
            .flat_map(|module| module.models().iter().copied())
            .collect())
    }

    /// Concrete models declared by every group
    pub fn get_all_entity_classes(&self) -> BTreeSet<ModelClass> {
        EntityGroup::ALL
            .into_iter()
            .flat_map(|group| schema_module(group).models().iter().copied())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plinth_storage::schema::{exploration, user};
    use plinth_storage::ABSTRACT_MODEL_NAMES;

    #[test]
    fn test_import_preserves_order_and_repeats() {
        let modules = EntityCatalog::new()
            .import_groups(&["user", "exploration", "user"])
            .unwrap();
        assert_eq!(modules.len(), 3);
        assert_eq!(modules[0], &user::SCHEMA);
        assert_eq!(modules[1], &exploration::SCHEMA);
        assert_eq!(modules[2], &user::SCHEMA);
    }

    #[test]
    fn test_empty_input() {
        let names: [&str; 0] = [];
        assert!(EntityCatalog::new().import_groups(&names).unwrap().is_empty());
    }

    #[test]
    fn test_classes_for_groups() {
        let classes = EntityCatalog::new()
            .get_entity_classes_for_groups(&["user"])
            .unwrap();
        assert!(classes.contains(&ModelClass::of::<user::UserSettingsModel>()));
        assert!(!classes.contains(&ModelClass::of::<exploration::ExplorationModel>()));
        assert_eq!(classes.len(), user::SCHEMA.models().len());
    }

    #[test]
    fn test_all_classes_exclude_abstract_forms() {
        let classes = EntityCatalog::new().get_all_entity_classes();
        assert!(classes.contains(&ModelClass::of::<user::UserSettingsModel>()));
        assert!(classes.contains(&ModelClass::of::<exploration::ExplorationModel>()));
        for class in &classes {
            assert!(!ABSTRACT_MODEL_NAMES.contains(&class.name()), "{class}");
        }
    }
}
