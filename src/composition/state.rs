//! Composition snapshot and the command reducer.
//!
//! `CompositionState::apply` takes one command and returns the next complete
//! snapshot. It never fails: a command whose precondition does not hold leaves
//! the snapshot unchanged and is reported at debug level. Trait counts and the
//! economy are private and only ever written by a full recomputation from the
//! board.

use serde::Serialize;

use crate::composition::augments::{AugmentSlots, SlotPlacement, AUGMENT_SLOT_CAPACITY};
use crate::composition::board::{Board, BoardPosition, StarLevel};
use crate::composition::command::Command;
use crate::composition::economy::{compute_economy, Economy};
use crate::composition::selection::Selection;
use crate::composition::traits::{aggregate_traits, trait_activations, TraitActivation, TraitCounts};
use crate::data::catalog::Catalog;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", content = "message", rename_all = "snake_case")]
pub enum LoadStatus {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompositionState {
    catalog: Catalog,
    board: Board,
    trait_counts: TraitCounts,
    economy: Economy,
    selection: Selection,
    augments: AugmentSlots,
    status: LoadStatus,
}

/// What a command did, deciding which derived fields need rebuilding.
enum Outcome {
    Ignored(&'static str),
    Changed,
    BoardChanged,
    StarsChanged,
}

impl CompositionState {
    /// Empty board, empty catalog, waiting for the catalog load.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn trait_counts(&self) -> &TraitCounts {
        &self.trait_counts
    }

    pub fn trait_count(&self, trait_name: &str) -> u32 {
        self.trait_counts.get(trait_name).copied().unwrap_or(0)
    }

    pub fn trait_activations(&self) -> Vec<TraitActivation> {
        trait_activations(&self.trait_counts, &self.catalog.traits)
    }

    pub fn economy(&self) -> Economy {
        self.economy
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn augments(&self) -> &AugmentSlots {
        &self.augments
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            LoadStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Return the snapshot that follows `command`.
    pub fn apply(&self, command: Command) -> CompositionState {
        let mut next = self.clone();
        next.execute(command);
        next
    }

    fn execute(&mut self, command: Command) {
        let name = command.name();
        let outcome = match command {
            Command::PlaceChampion { champion, position } => {
                if !position.in_bounds() {
                    Outcome::Ignored("position out of bounds")
                } else if !champion.has_playable_cost() {
                    Outcome::Ignored("champion cost out of range")
                } else if self.board.place(champion, position) {
                    Outcome::BoardChanged
                } else {
                    Outcome::Ignored("position occupied")
                }
            }
            Command::RemoveChampion { position } => match self.board.remove(position) {
                Some(_) => Outcome::BoardChanged,
                None => Outcome::Ignored("no unit at position"),
            },
            Command::MoveChampion { from, to } => self.move_champion(from, to),
            Command::AttachItem { item, position } => match self.board.get_mut(position) {
                None => Outcome::Ignored("no unit at position"),
                Some(unit) if unit.has_full_items() => Outcome::Ignored("unit holds three items"),
                Some(unit) => {
                    unit.items.push(item);
                    self.selection.clear_item();
                    Outcome::Changed
                }
            },
            Command::DetachItem {
                position,
                item_api_name,
            } => self.detach_item(position, &item_api_name),
            Command::SetStarLevel { position, level } => self.set_star_level(position, |_| Some(level)),
            Command::StarUp { position } => self.set_star_level(position, StarLevel::next),
            Command::SelectChampion(champion) => {
                self.selection.select_champion(champion);
                Outcome::Changed
            }
            Command::SelectItem(item) => {
                self.selection.select_item(item);
                Outcome::Changed
            }
            Command::SetAugmentSlot { augment, index } => {
                if let SlotPlacement::Appended(at) = self.augments.set(augment, index) {
                    if at != index || at >= AUGMENT_SLOT_CAPACITY {
                        tracing::warn!(
                            requested = index,
                            placed = at,
                            capacity = AUGMENT_SLOT_CAPACITY,
                            "augment slot index out of range, appended instead"
                        );
                    }
                }
                Outcome::Changed
            }
            Command::ClearAugments => {
                self.augments.clear();
                Outcome::Changed
            }
            Command::ClearBoard => {
                self.board.clear();
                Outcome::BoardChanged
            }
            Command::LoadCatalog(catalog) => {
                self.load_catalog(catalog);
                Outcome::BoardChanged
            }
            Command::LoadCatalogFailed(message) => {
                tracing::error!(%message, "catalog unavailable");
                self.status = LoadStatus::Failed(message);
                Outcome::Changed
            }
        };

        match outcome {
            Outcome::Ignored(reason) => {
                tracing::debug!(command = name, reason, "command ignored");
            }
            Outcome::Changed => {}
            Outcome::BoardChanged => self.recompute(),
            Outcome::StarsChanged => self.economy = compute_economy(&self.board),
        }
    }

    fn move_champion(&mut self, from: BoardPosition, to: BoardPosition) -> Outcome {
        if !self.board.is_occupied(from) {
            return Outcome::Ignored("no unit at source position");
        }
        if !to.in_bounds() {
            return Outcome::Ignored("destination out of bounds");
        }
        if self.board.move_unit(from, to) {
            Outcome::BoardChanged
        } else {
            Outcome::Ignored("source and destination are the same cell")
        }
    }

    fn detach_item(&mut self, position: BoardPosition, item_api_name: &str) -> Outcome {
        let Some(unit) = self.board.get_mut(position) else {
            return Outcome::Ignored("no unit at position");
        };
        match unit.items.iter().position(|i| i.api_name == item_api_name) {
            Some(index) => {
                unit.items.remove(index);
                Outcome::Changed
            }
            None => Outcome::Ignored("unit does not hold item"),
        }
    }

    fn set_star_level(
        &mut self,
        position: BoardPosition,
        next: impl FnOnce(StarLevel) -> Option<StarLevel>,
    ) -> Outcome {
        let Some(unit) = self.board.get_mut(position) else {
            return Outcome::Ignored("no unit at position");
        };
        match next(unit.star_level) {
            Some(level) => {
                unit.star_level = level;
                Outcome::StarsChanged
            }
            None => Outcome::Ignored("unit already at max star level"),
        }
    }

    fn load_catalog(&mut self, catalog: Catalog) {
        if !self.board.is_empty() {
            let stale = self
                .board
                .units()
                .filter(|unit| catalog.champion(unit.api_name()).is_none())
                .count();
            tracing::warn!(
                units = self.board.len(),
                stale,
                "catalog reloaded with units on the board; placements kept"
            );
        }
        self.catalog = catalog;
        self.status = LoadStatus::Ready;
    }

    fn recompute(&mut self) {
        self.trait_counts = aggregate_traits(&self.board, &self.catalog.traits);
        self.economy = compute_economy(&self.board);
    }

    /// Serializable view without the catalog.
    pub fn view(&self) -> CompositionView<'_> {
        CompositionView {
            status: &self.status,
            board: &self.board,
            trait_counts: &self.trait_counts,
            traits: self.trait_activations(),
            economy: self.economy,
            selection: &self.selection,
            augments: &self.augments,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CompositionView<'a> {
    pub status: &'a LoadStatus,
    pub board: &'a Board,
    pub trait_counts: &'a TraitCounts,
    pub traits: Vec<TraitActivation>,
    pub economy: Economy,
    pub selection: &'a Selection,
    pub augments: &'a AugmentSlots,
}
