//! `plinth resolve`

use anyhow::Result;
use plinth_composition::Registry;
use plinth_core::Capability;

/// Resolve one capability and print the loaded backend
pub fn run(registry: &Registry, capability: &str) -> Result<()> {
    let capability: Capability = capability.parse()?;
    let handle = registry.resolve(capability)?;
    println!("{capability}: {}", handle.backend());
    Ok(())
}
