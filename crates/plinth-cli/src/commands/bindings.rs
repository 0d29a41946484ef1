//! `plinth bindings`

use anyhow::Result;
use plinth_composition::Registry;
use plinth_core::Capability;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct BindingRow {
    capability: &'static str,
    backend: Option<&'static str>,
    error: Option<String>,
}

/// Print the backend selected for every capability
///
/// Selection errors are reported per row; nothing is loaded.
pub fn run(registry: &Registry, json: bool) -> Result<()> {
    let rows: Vec<BindingRow> = Capability::all()
        .into_iter()
        .map(|capability| match registry.binding(capability) {
            Ok(backend) => BindingRow {
                capability: capability.name(),
                backend: Some(backend.name()),
                error: None,
            },
            Err(err) => BindingRow {
                capability: capability.name(),
                backend: None,
                error: Some(err.to_string()),
            },
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    for row in &rows {
        match (&row.backend, &row.error) {
            (Some(backend), _) => println!("{:<14} {backend}", row.capability),
            (None, Some(error)) => println!("{:<14} error: {error}", row.capability),
            (None, None) => println!("{:<14} -", row.capability),
        }
    }
    Ok(())
}
