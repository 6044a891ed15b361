//! Load the set data document and resolve it for one mutator.
//! The document carries every set; champions/traits live under the matching
//! `setData` entry, items and augments in one flat top-level list that is
//! split by the set's reference lists.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tokio::task::JoinHandle;

use crate::composition::{Command, CompositionStore};
use crate::data::catalog::{Catalog, CatalogEntry};
use crate::data::model::{ChampionDef, ItemDef, TraitDef, MAX_CHAMPION_COST, MIN_CHAMPION_COST};

pub const DEFAULT_CATALOG_PATH: &str = "data/catalog.json";
pub const DEFAULT_MUTATOR: &str = "TFTSet14";

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("unable to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("unable to parse catalog json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("no data with mutator '{mutator}' found (available: {})", available.join(", "))]
    MutatorNotFound {
        mutator: String,
        available: Vec<String>,
    },
}

#[derive(Debug, Deserialize)]
struct RawDocument {
    #[serde(default)]
    items: Vec<serde_json::Value>,
    #[serde(default, rename = "setData")]
    set_data: Vec<RawSet>,
}

#[derive(Debug, Deserialize)]
struct RawSet {
    mutator: String,
    #[serde(default)]
    number: u32,
    #[serde(default)]
    champions: Vec<RawChampion>,
    #[serde(default)]
    traits: Vec<serde_json::Value>,
    #[serde(default)]
    items: Vec<String>,
    #[serde(default)]
    augments: Vec<String>,
}

/// Champion entries are loose in the source: summons and props carry null
/// names, no cost or no traits.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawChampion {
    #[serde(default)]
    api_name: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    cost: Option<u32>,
    #[serde(default)]
    traits: Vec<String>,
    #[serde(default)]
    icon: Option<String>,
}

/// Read and resolve the catalog at `path` for `mutator`.
pub fn load_catalog(path: impl AsRef<Path>, mutator: &str) -> Result<Catalog, CatalogError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_catalog(&raw, mutator)
}

pub fn parse_catalog(raw: &str, mutator: &str) -> Result<Catalog, CatalogError> {
    let document: RawDocument = serde_json::from_str(raw)?;

    let Some(set) = document.set_data.iter().find(|s| s.mutator == mutator) else {
        return Err(CatalogError::MutatorNotFound {
            mutator: mutator.to_string(),
            available: document.set_data.iter().map(|s| s.mutator.clone()).collect(),
        });
    };

    let prefix = set_prefix(set);
    let champions: Vec<ChampionDef> = set
        .champions
        .iter()
        .filter_map(|raw| playable_champion(raw, &prefix))
        .collect();

    let traits: Vec<TraitDef> = set
        .traits
        .iter()
        .filter_map(|value| serde_json::from_value(value.clone()).ok())
        .collect();

    let entries = resolve_entries(&document.items, &set.items, &set.augments);
    let catalog = Catalog::from_entries(champions, traits, entries);

    tracing::info!(
        mutator,
        champions = catalog.champions.len(),
        traits = catalog.traits.len(),
        items = catalog.items.len(),
        augments = catalog.augments.len(),
        "catalog resolved"
    );
    Ok(catalog)
}

/// Champion api names are prefixed with the set number, e.g. `TFT14_`.
fn set_prefix(set: &RawSet) -> String {
    let number = if set.number > 0 {
        set.number
    } else {
        set.mutator
            .trim_start_matches(|c: char| !c.is_ascii_digit())
            .chars()
            .take_while(char::is_ascii_digit)
            .collect::<String>()
            .parse()
            .unwrap_or(0)
    };
    format!("TFT{number}_")
}

fn playable_champion(raw: &RawChampion, prefix: &str) -> Option<ChampionDef> {
    let api_name = raw.api_name.as_deref()?;
    let cost = raw.cost?;
    if !api_name.starts_with(prefix)
        || !(MIN_CHAMPION_COST..=MAX_CHAMPION_COST).contains(&cost)
        || raw.traits.is_empty()
    {
        return None;
    }
    Some(ChampionDef {
        api_name: api_name.to_string(),
        name: raw.name.clone().unwrap_or_else(|| api_name.to_string()),
        cost,
        traits: raw.traits.clone(),
        icon: raw.icon.clone().unwrap_or_default(),
    })
}

/// Tag each referenced entry of the flat item list as item or augment.
/// Reference order is kept; missing references are logged and skipped.
fn resolve_entries(
    flat: &[serde_json::Value],
    item_refs: &[String],
    augment_refs: &[String],
) -> Vec<CatalogEntry> {
    let by_api_name: HashMap<String, ItemDef> = flat
        .iter()
        .filter_map(|value| serde_json::from_value::<ItemDef>(value.clone()).ok())
        .map(|def| (def.api_name.clone(), def))
        .collect();

    let mut entries = Vec::with_capacity(item_refs.len() + augment_refs.len());
    for api_name in item_refs {
        match by_api_name.get(api_name) {
            Some(def) => entries.push(CatalogEntry::Item(def.clone())),
            None => tracing::warn!(%api_name, "set item not found in item data"),
        }
    }
    for api_name in augment_refs {
        match by_api_name.get(api_name) {
            Some(def) => entries.push(CatalogEntry::Augment(def.clone())),
            None => tracing::warn!(%api_name, "set augment not found in item data"),
        }
    }
    entries
}

/// Map a load outcome to the terminal command the engine expects.
pub fn terminal_command(result: Result<Catalog, CatalogError>) -> Command {
    match result {
        Ok(catalog) => Command::LoadCatalog(catalog),
        Err(err) => {
            tracing::error!(error = %err, "catalog load failed");
            Command::LoadCatalogFailed(err.to_string())
        }
    }
}

/// Load on the blocking pool and report back to `store` with exactly one
/// terminal command. Must be called from inside a tokio runtime.
///
/// In-flight loads are not cancelled; if two overlap, whichever finishes last
/// overwrites the catalog.
pub fn spawn_catalog_load(
    store: CompositionStore,
    path: PathBuf,
    mutator: String,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tracing::info!(path = %path.display(), %mutator, "loading catalog");
        let outcome = tokio::task::spawn_blocking(move || load_catalog(&path, &mutator)).await;
        let command = match outcome {
            Ok(result) => terminal_command(result),
            Err(join_err) => {
                tracing::error!(error = %join_err, "catalog load task failed");
                Command::LoadCatalogFailed(join_err.to_string())
            }
        };
        store.dispatch(command);
    })
}
