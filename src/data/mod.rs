pub mod catalog;
pub mod loader;
pub mod model;

pub use catalog::{Catalog, CatalogEntry};
pub use loader::{
    load_catalog, parse_catalog, spawn_catalog_load, terminal_command, CatalogError,
    DEFAULT_CATALOG_PATH, DEFAULT_MUTATOR,
};
pub use model::{
    AugmentDef, ChampionDef, ItemDef, TraitDef, TraitTier, MAX_CHAMPION_COST, MIN_CHAMPION_COST,
};
