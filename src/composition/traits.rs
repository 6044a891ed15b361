//! Trait aggregation. Counts are rebuilt from the board on every change; a
//! trait counts distinct champion api names, so two copies of the same
//! champion contribute once.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::composition::board::Board;
use crate::data::model::TraitDef;

/// Trait name -> number of distinct champions carrying it.
pub type TraitCounts = BTreeMap<String, u32>;

/// Every catalog trait at zero.
pub fn empty_trait_counts(traits: &[TraitDef]) -> TraitCounts {
    traits.iter().map(|t| (t.name.clone(), 0)).collect()
}

pub fn aggregate_traits(board: &Board, traits: &[TraitDef]) -> TraitCounts {
    let mut seen: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
    for unit in board.units() {
        for trait_name in &unit.champion.traits {
            seen.entry(trait_name.as_str())
                .or_default()
                .insert(unit.api_name());
        }
    }

    let mut counts = empty_trait_counts(traits);
    for (trait_name, champions) in seen {
        counts.insert(trait_name.to_string(), champions.len() as u32);
    }
    counts
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraitActivation {
    pub api_name: String,
    pub name: String,
    pub count: u32,
    /// Style of the highest tier reached, None while below the first threshold.
    pub active_style: Option<u32>,
    pub next_threshold: Option<u32>,
}

impl TraitActivation {
    pub fn is_active(&self) -> bool {
        self.active_style.is_some()
    }
}

/// Per catalog trait: current count and the tier it has reached.
/// Ordered active first, then by count, then by name.
pub fn trait_activations(counts: &TraitCounts, traits: &[TraitDef]) -> Vec<TraitActivation> {
    let mut activations: Vec<TraitActivation> = traits
        .iter()
        .map(|def| {
            let count = counts.get(&def.name).copied().unwrap_or(0);
            let active_style = def
                .tiers
                .iter()
                .filter(|tier| tier.min_units <= count)
                .max_by_key(|tier| tier.min_units)
                .map(|tier| tier.style);
            let next_threshold = def
                .tiers
                .iter()
                .map(|tier| tier.min_units)
                .filter(|&min| min > count)
                .min();
            TraitActivation {
                api_name: def.api_name.clone(),
                name: def.name.clone(),
                count,
                active_style,
                next_threshold,
            }
        })
        .collect();

    activations.sort_by(|a, b| {
        b.is_active()
            .cmp(&a.is_active())
            .then(b.count.cmp(&a.count))
            .then_with(|| a.name.cmp(&b.name))
    });
    activations
}
