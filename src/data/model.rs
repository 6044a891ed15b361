//! Catalog entities as they appear in the set data document.
//! Loaded once per catalog load and treated as read-only afterwards.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

pub const MIN_CHAMPION_COST: u32 = 1;
pub const MAX_CHAMPION_COST: u32 = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChampionDef {
    pub api_name: String,
    pub name: String,
    pub cost: u32,
    #[serde(default)]
    pub traits: Vec<String>,
    #[serde(default)]
    pub icon: String,
}

impl ChampionDef {
    pub fn new(api_name: impl Into<String>, name: impl Into<String>, cost: u32) -> Self {
        Self {
            api_name: api_name.into(),
            name: name.into(),
            cost,
            traits: Vec::new(),
            icon: String::new(),
        }
    }

    pub fn with_traits<I, S>(mut self, traits: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.traits = traits.into_iter().map(Into::into).collect();
        self
    }

    pub fn has_playable_cost(&self) -> bool {
        (MIN_CHAMPION_COST..=MAX_CHAMPION_COST).contains(&self.cost)
    }
}

/// Item definition. `description` keeps the raw `@Variable@` template text;
/// formatting it is left to whoever renders tooltips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDef {
    pub api_name: String,
    pub name: String,
    #[serde(default, rename = "desc")]
    pub description: String,
    #[serde(default, deserialize_with = "numeric_map")]
    pub effects: BTreeMap<String, f64>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub icon: String,
    /// Component api names for completed items; empty for components.
    #[serde(default)]
    pub composition: Vec<String>,
    #[serde(default)]
    pub unique: bool,
}

impl ItemDef {
    pub fn new(api_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            api_name: api_name.into(),
            name: name.into(),
            description: String::new(),
            effects: BTreeMap::new(),
            tags: Vec::new(),
            icon: String::new(),
            composition: Vec::new(),
            unique: false,
        }
    }

    pub fn is_component(&self) -> bool {
        self.composition.is_empty()
    }
}

/// Augments share the item schema in the source document; only the mutator
/// reference list they were resolved from tells them apart.
pub type AugmentDef = ItemDef;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraitDef {
    pub api_name: String,
    pub name: String,
    #[serde(default, rename = "desc")]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default, rename = "effects")]
    pub tiers: Vec<TraitTier>,
}

impl TraitDef {
    pub fn new(api_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            api_name: api_name.into(),
            name: name.into(),
            description: String::new(),
            icon: String::new(),
            tiers: Vec::new(),
        }
    }

    pub fn with_thresholds(mut self, thresholds: &[(u32, u32)]) -> Self {
        self.tiers = thresholds
            .iter()
            .enumerate()
            .map(|(i, &(min_units, max_units))| TraitTier {
                min_units,
                max_units,
                style: i as u32 + 1,
                variables: BTreeMap::new(),
            })
            .collect();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraitTier {
    pub min_units: u32,
    pub max_units: u32,
    #[serde(default)]
    pub style: u32,
    #[serde(default, deserialize_with = "numeric_map")]
    pub variables: BTreeMap<String, f64>,
}

/// Keep only numeric values; the data document carries `null` for unresolved
/// variables and the odd string.
fn numeric_map<'de, D>(deserializer: D) -> Result<BTreeMap<String, f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<BTreeMap<String, serde_json::Value>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(key, value)| value.as_f64().map(|v| (key, v)))
        .collect())
}
