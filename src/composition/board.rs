//! Board geometry and placed units. The board is a sparse map keyed by
//! position, so one unit per cell holds by construction.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize, Serializer};

use crate::data::model::{ChampionDef, ItemDef};

pub const BOARD_ROWS: u8 = 4;
pub const BOARD_COLS: u8 = 7;
pub const MAX_ITEMS_PER_UNIT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BoardPosition {
    pub row: u8,
    pub col: u8,
}

impl BoardPosition {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    pub const fn in_bounds(self) -> bool {
        self.row < BOARD_ROWS && self.col < BOARD_COLS
    }

    /// Every in-bounds cell in row-major order.
    pub fn all() -> impl Iterator<Item = BoardPosition> {
        (0..BOARD_ROWS).flat_map(|row| (0..BOARD_COLS).map(move |col| Self::new(row, col)))
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("star level must be 1, 2 or 3 (got {0})")]
pub struct InvalidStarLevel(pub u8);

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum StarLevel {
    #[default]
    One,
    Two,
    Three,
}

impl StarLevel {
    pub const ALL: [StarLevel; 3] = [StarLevel::One, StarLevel::Two, StarLevel::Three];

    pub const fn get(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
        }
    }

    /// Gold weight of one unit at this tier: each tier is three copies of the
    /// previous one.
    pub const fn cost_multiplier(self) -> u32 {
        match self {
            Self::One => 1,
            Self::Two => 3,
            Self::Three => 9,
        }
    }

    pub const fn next(self) -> Option<Self> {
        match self {
            Self::One => Some(Self::Two),
            Self::Two => Some(Self::Three),
            Self::Three => None,
        }
    }
}

impl TryFrom<u8> for StarLevel {
    type Error = InvalidStarLevel;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            other => Err(InvalidStarLevel(other)),
        }
    }
}

impl From<StarLevel> for u8 {
    fn from(level: StarLevel) -> Self {
        level.get()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedUnit {
    pub champion: ChampionDef,
    pub position: BoardPosition,
    pub star_level: StarLevel,
    pub items: Vec<ItemDef>,
}

impl PlacedUnit {
    pub fn new(champion: ChampionDef, position: BoardPosition) -> Self {
        Self {
            champion,
            position,
            star_level: StarLevel::One,
            items: Vec::new(),
        }
    }

    pub fn api_name(&self) -> &str {
        &self.champion.api_name
    }

    pub fn has_full_items(&self) -> bool {
        self.items.len() >= MAX_ITEMS_PER_UNIT
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Board {
    units: BTreeMap<BoardPosition, PlacedUnit>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, position: BoardPosition) -> Option<&PlacedUnit> {
        self.units.get(&position)
    }

    pub(crate) fn get_mut(&mut self, position: BoardPosition) -> Option<&mut PlacedUnit> {
        self.units.get_mut(&position)
    }

    pub fn is_occupied(&self, position: BoardPosition) -> bool {
        self.units.contains_key(&position)
    }

    /// Units in row-major position order.
    pub fn units(&self) -> impl Iterator<Item = &PlacedUnit> {
        self.units.values()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Insert a fresh unit. Refuses occupied or out-of-bounds cells.
    pub(crate) fn place(&mut self, champion: ChampionDef, position: BoardPosition) -> bool {
        if !position.in_bounds() || self.is_occupied(position) {
            return false;
        }
        self.units.insert(position, PlacedUnit::new(champion, position));
        true
    }

    pub(crate) fn remove(&mut self, position: BoardPosition) -> Option<PlacedUnit> {
        self.units.remove(&position)
    }

    /// Relocate the unit at `from`, swapping with whatever stands on `to`.
    /// Star levels and items stay with their unit.
    pub(crate) fn move_unit(&mut self, from: BoardPosition, to: BoardPosition) -> bool {
        if from == to || !to.in_bounds() {
            return false;
        }
        let Some(mut moving) = self.units.remove(&from) else {
            return false;
        };
        if let Some(mut displaced) = self.units.remove(&to) {
            displaced.position = from;
            self.units.insert(from, displaced);
        }
        moving.position = to;
        self.units.insert(to, moving);
        true
    }

    pub(crate) fn clear(&mut self) {
        self.units.clear();
    }
}

impl Serialize for Board {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.units.values())
    }
}
