//! `plinth groups`

use anyhow::Result;
use plinth_composition::EntityCatalog;
use plinth_storage::ModelClass;
use std::collections::BTreeSet;

/// List concrete models for the named groups, or for every group
pub fn run(names: &[String], json: bool) -> Result<()> {
    let catalog = EntityCatalog::new();
    let classes: BTreeSet<ModelClass> = if names.is_empty() {
        catalog.get_all_entity_classes()
    } else {
        catalog.get_entity_classes_for_groups(names)?
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&classes)?);
    } else {
        for class in &classes {
            println!("{class}");
        }
    }
    Ok(())
}
