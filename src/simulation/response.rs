//! Simulation service response. Kept for display only; nothing here is fed
//! back into the composition.

use serde::{Deserialize, Serialize};

use crate::simulation::request::SimulationRequest;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResponse {
    #[serde(default)]
    pub results: Vec<UnitResult>,
    /// The service spells this key `archieveEvents`.
    #[serde(default, rename = "archieveEvents", alias = "archivedEvents")]
    pub events: Vec<ArchivedEvent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitResult {
    pub champion_api_name: String,
    #[serde(default)]
    pub champion_entity_id: u64,
    #[serde(default)]
    pub damage_stats: DamageStats,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DamageStats {
    #[serde(default)]
    pub total_damage: f64,
    #[serde(default, rename = "dps")]
    pub damage_per_second: f64,
    #[serde(default, rename = "totalADDamage")]
    pub total_ad_damage: f64,
    #[serde(default, rename = "totalAPDamage")]
    pub total_ap_damage: f64,
    #[serde(default)]
    pub total_true_damage: f64,
    #[serde(default)]
    pub total_auto_attack_counts: u32,
    #[serde(default)]
    pub total_spell_cast_counts: u32,
    #[serde(default)]
    pub auto_attack_damage: f64,
    #[serde(default)]
    pub spell_damage: f64,
}

/// One entry of the time-ordered event log. The event payload differs per
/// event type and is kept as raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchivedEvent {
    pub event_item: serde_json::Value,
    pub event_type: String,
}

impl ArchivedEvent {
    pub fn timestamp(&self) -> Option<f64> {
        self.event_item
            .get("Timestamp")
            .or_else(|| self.event_item.get("timestamp"))
            .and_then(serde_json::Value::as_f64)
    }
}

/// A completed run as callers store it.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationRun {
    pub run_id: uuid::Uuid,
    pub received_at: String,
    pub request: SimulationRequest,
    pub response: SimulationResponse,
}

impl SimulationRun {
    pub fn new(request: SimulationRequest, response: SimulationResponse) -> Self {
        Self {
            run_id: uuid::Uuid::new_v4(),
            received_at: chrono::Utc::now().to_rfc3339(),
            request,
            response,
        }
    }
}

impl SimulationResponse {
    /// Results ordered by total damage, highest first.
    pub fn damage_ranking(&self) -> Vec<&UnitResult> {
        let mut ranked: Vec<&UnitResult> = self.results.iter().collect();
        ranked.sort_by(|a, b| {
            b.damage_stats
                .total_damage
                .total_cmp(&a.damage_stats.total_damage)
        });
        ranked
    }

    pub fn total_damage(&self) -> f64 {
        self.results
            .iter()
            .map(|r| r.damage_stats.total_damage)
            .sum()
    }

    /// Count of log entries per event type.
    pub fn event_counts(&self) -> std::collections::BTreeMap<&str, usize> {
        let mut counts = std::collections::BTreeMap::new();
        for event in &self.events {
            *counts.entry(event.event_type.as_str()).or_insert(0) += 1;
        }
        counts
    }
}
