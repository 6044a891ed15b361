use serde::Serialize;

use crate::composition::{CompositionStore, LoadStatus};
use crate::data::catalog::Catalog;
use crate::script::{parse_step, ScriptError};
use crate::simulation::SimulationRequest;

pub fn health_payload() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&serde_json::json!({
        "status": "ok",
        "service": "teamcomp-api",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[derive(Debug, Serialize)]
struct CatalogSummary<'a> {
    status: &'a LoadStatus,
    champion_count: usize,
    trait_count: usize,
    item_count: usize,
    augment_count: usize,
    #[serde(flatten)]
    catalog: &'a Catalog,
}

pub fn catalog_payload(store: &CompositionStore) -> Result<String, serde_json::Error> {
    let snapshot = store.snapshot();
    let catalog = snapshot.catalog();
    serde_json::to_string_pretty(&CatalogSummary {
        status: snapshot.status(),
        champion_count: catalog.champions.len(),
        trait_count: catalog.traits.len(),
        item_count: catalog.items.len(),
        augment_count: catalog.augments.len(),
        catalog,
    })
}

pub fn composition_payload(store: &CompositionStore) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&store.snapshot().view())
}

#[derive(Debug, thiserror::Error)]
pub enum StepError {
    #[error(transparent)]
    Script(#[from] ScriptError),
    #[error("unable to encode composition: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Parse one step (JSON or YAML), resolve it against the loaded catalog and
/// apply it. Returns the resulting composition.
pub fn step_payload(store: &CompositionStore, body: &str) -> Result<String, StepError> {
    let step = parse_step(body)?;
    let command = step.resolve(store.snapshot().catalog())?;
    let snapshot = store.dispatch(command);
    Ok(serde_json::to_string_pretty(&snapshot.view())?)
}

pub fn simulation_request_payload(store: &CompositionStore) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&SimulationRequest::from_state(&store.snapshot()))
}
