use crate::composition::board::{BoardPosition, StarLevel};
use crate::data::catalog::Catalog;
use crate::data::model::{AugmentDef, ChampionDef, ItemDef};

/// One discrete request to the composition engine.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    PlaceChampion {
        champion: ChampionDef,
        position: BoardPosition,
    },
    RemoveChampion {
        position: BoardPosition,
    },
    MoveChampion {
        from: BoardPosition,
        to: BoardPosition,
    },
    AttachItem {
        item: ItemDef,
        position: BoardPosition,
    },
    DetachItem {
        position: BoardPosition,
        item_api_name: String,
    },
    SetStarLevel {
        position: BoardPosition,
        level: StarLevel,
    },
    /// Raise the star level by one, stopping at three.
    StarUp {
        position: BoardPosition,
    },
    SelectChampion(Option<ChampionDef>),
    SelectItem(Option<ItemDef>),
    SetAugmentSlot {
        augment: AugmentDef,
        index: usize,
    },
    ClearAugments,
    ClearBoard,
    LoadCatalog(Catalog),
    LoadCatalogFailed(String),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Self::PlaceChampion { .. } => "place_champion",
            Self::RemoveChampion { .. } => "remove_champion",
            Self::MoveChampion { .. } => "move_champion",
            Self::AttachItem { .. } => "attach_item",
            Self::DetachItem { .. } => "detach_item",
            Self::SetStarLevel { .. } => "set_star_level",
            Self::StarUp { .. } => "star_up",
            Self::SelectChampion(_) => "select_champion",
            Self::SelectItem(_) => "select_item",
            Self::SetAugmentSlot { .. } => "set_augment_slot",
            Self::ClearAugments => "clear_augments",
            Self::ClearBoard => "clear_board",
            Self::LoadCatalog(_) => "load_catalog",
            Self::LoadCatalogFailed(_) => "load_catalog_failed",
        }
    }
}
