pub mod augments;
pub mod board;
pub mod command;
pub mod economy;
pub mod selection;
pub mod state;
pub mod store;
pub mod traits;

pub use augments::{AugmentSlots, SlotPlacement, AUGMENT_SLOT_CAPACITY};
pub use board::{
    Board, BoardPosition, InvalidStarLevel, PlacedUnit, StarLevel, BOARD_COLS, BOARD_ROWS,
    MAX_ITEMS_PER_UNIT,
};
pub use command::Command;
pub use economy::{compute_economy, Economy, BASE_LEVEL, MAX_LEVEL};
pub use selection::Selection;
pub use state::{CompositionState, CompositionView, LoadStatus};
pub use store::{CompositionStore, Snapshot};
pub use traits::{aggregate_traits, trait_activations, TraitActivation, TraitCounts};
