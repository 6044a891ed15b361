use serde::Serialize;

use crate::composition::board::Board;

pub const BASE_LEVEL: u32 = 2;
pub const MAX_LEVEL: u32 = 9;

/// Gold and level implied by the board. Never set independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Economy {
    pub gold: u32,
    pub level: u32,
}

impl Default for Economy {
    fn default() -> Self {
        Self {
            gold: 0,
            level: BASE_LEVEL,
        }
    }
}

pub fn compute_economy(board: &Board) -> Economy {
    let gold = board
        .units()
        .map(|unit| unit.champion.cost * unit.star_level.cost_multiplier())
        .sum();
    let level = (BASE_LEVEL + board.len() as u32).clamp(BASE_LEVEL, MAX_LEVEL);
    Economy { gold, level }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composition::board::{BoardPosition, StarLevel};
    use crate::data::model::ChampionDef;

    #[test]
    fn empty_board_is_baseline() {
        assert_eq!(compute_economy(&Board::new()), Economy::default());
    }

    #[test]
    fn level_caps_at_nine() {
        let mut board = Board::new();
        for (i, position) in BoardPosition::all().take(10).enumerate() {
            board.place(ChampionDef::new(format!("U{i}"), "U", 1), position);
        }
        assert_eq!(compute_economy(&board).level, MAX_LEVEL);
    }

    #[test]
    fn star_levels_scale_gold() {
        let mut board = Board::new();
        let position = BoardPosition::new(0, 0);
        board.place(ChampionDef::new("TFT14_Jinx", "Jinx", 4), position);
        if let Some(unit) = board.get_mut(position) {
            unit.star_level = StarLevel::Three;
        }
        assert_eq!(compute_economy(&board).gold, 36);
    }
}
