use serde::{Deserialize, Serialize};

use crate::composition::{BoardPosition, CompositionState, PlacedUnit};

/// Body of a simulation run: one entry per placed unit, in board order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationRequest {
    pub board_champions: Vec<SimulatedUnit>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulatedUnit {
    pub api_name: String,
    pub stars: u8,
    pub items: Vec<ItemRef>,
    pub position: BoardPosition,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRef {
    pub api_name: String,
}

impl From<&PlacedUnit> for SimulatedUnit {
    fn from(unit: &PlacedUnit) -> Self {
        Self {
            api_name: unit.champion.api_name.clone(),
            stars: unit.star_level.get(),
            items: unit
                .items
                .iter()
                .map(|item| ItemRef {
                    api_name: item.api_name.clone(),
                })
                .collect(),
            position: unit.position,
        }
    }
}

impl SimulationRequest {
    pub fn from_state(state: &CompositionState) -> Self {
        Self {
            board_champions: state.board().units().map(SimulatedUnit::from).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.board_champions.is_empty()
    }
}
