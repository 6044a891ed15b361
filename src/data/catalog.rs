//! Resolved catalog for one mutator: champion, trait, item and augment lists.

use serde::Serialize;

use crate::data::model::{AugmentDef, ChampionDef, ItemDef, TraitDef};

/// An entry of the flat item collection after it has been resolved against a
/// mutator's reference lists.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "def", rename_all = "snake_case")]
pub enum CatalogEntry {
    Item(ItemDef),
    Augment(AugmentDef),
}

impl CatalogEntry {
    pub fn api_name(&self) -> &str {
        match self {
            Self::Item(def) | Self::Augment(def) => &def.api_name,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Catalog {
    pub champions: Vec<ChampionDef>,
    pub traits: Vec<TraitDef>,
    pub items: Vec<ItemDef>,
    pub augments: Vec<AugmentDef>,
}

impl Catalog {
    pub fn new(
        champions: Vec<ChampionDef>,
        traits: Vec<TraitDef>,
        items: Vec<ItemDef>,
        augments: Vec<AugmentDef>,
    ) -> Self {
        Self {
            champions,
            traits,
            items,
            augments,
        }
    }

    /// Split resolved entries into the item and augment lists.
    pub fn from_entries(
        champions: Vec<ChampionDef>,
        traits: Vec<TraitDef>,
        entries: Vec<CatalogEntry>,
    ) -> Self {
        let mut items = Vec::new();
        let mut augments = Vec::new();
        for entry in entries {
            match entry {
                CatalogEntry::Item(def) => items.push(def),
                CatalogEntry::Augment(def) => augments.push(def),
            }
        }
        Self::new(champions, traits, items, augments)
    }

    pub fn is_empty(&self) -> bool {
        self.champions.is_empty()
            && self.traits.is_empty()
            && self.items.is_empty()
            && self.augments.is_empty()
    }

    pub fn champion(&self, api_name: &str) -> Option<&ChampionDef> {
        self.champions.iter().find(|c| c.api_name == api_name)
    }

    pub fn item(&self, api_name: &str) -> Option<&ItemDef> {
        self.items.iter().find(|i| i.api_name == api_name)
    }

    pub fn augment(&self, api_name: &str) -> Option<&AugmentDef> {
        self.augments.iter().find(|a| a.api_name == api_name)
    }

    pub fn trait_def(&self, name: &str) -> Option<&TraitDef> {
        self.traits.iter().find(|t| t.name == name)
    }

    /// Look an api name up among items first, then augments.
    pub fn entry(&self, api_name: &str) -> Option<CatalogEntry> {
        self.item(api_name)
            .cloned()
            .map(CatalogEntry::Item)
            .or_else(|| self.augment(api_name).cloned().map(CatalogEntry::Augment))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_entries_splits_by_kind() {
        let catalog = Catalog::from_entries(
            Vec::new(),
            Vec::new(),
            vec![
                CatalogEntry::Item(ItemDef::new("TFT_Item_BFSword", "B.F. Sword")),
                CatalogEntry::Augment(ItemDef::new("TFT14_Augment_Pair", "Pair")),
                CatalogEntry::Item(ItemDef::new("TFT_Item_RecurveBow", "Recurve Bow")),
            ],
        );
        assert_eq!(catalog.items.len(), 2);
        assert_eq!(catalog.augments.len(), 1);
        assert!(matches!(
            catalog.entry("TFT14_Augment_Pair"),
            Some(CatalogEntry::Augment(_))
        ));
        assert_eq!(
            catalog.entry("TFT_Item_BFSword").map(|e| e.api_name().to_string()),
            Some("TFT_Item_BFSword".to_string())
        );
        assert!(catalog.entry("missing").is_none());
    }
}
