use serde::Serialize;

use crate::data::model::{ChampionDef, ItemDef};

/// The single armed placement tool. Holding a champion means a board click
/// places; holding an item means it attaches.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Selection {
    champion: Option<ChampionDef>,
    item: Option<ItemDef>,
}

impl Selection {
    pub fn champion(&self) -> Option<&ChampionDef> {
        self.champion.as_ref()
    }

    pub fn item(&self) -> Option<&ItemDef> {
        self.item.as_ref()
    }

    pub fn select_champion(&mut self, champion: Option<ChampionDef>) {
        self.champion = champion;
        self.item = None;
    }

    pub fn select_item(&mut self, item: Option<ItemDef>) {
        self.item = item;
        self.champion = None;
    }

    pub(crate) fn clear_item(&mut self) {
        self.item = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selecting_one_clears_the_other() {
        let mut selection = Selection::default();
        selection.select_champion(Some(ChampionDef::new("TFT14_Zac", "Zac", 4)));
        selection.select_item(Some(ItemDef::new("TFT_Item_BFSword", "B.F. Sword")));
        assert!(selection.champion().is_none());
        assert!(selection.item().is_some());

        selection.select_champion(Some(ChampionDef::new("TFT14_Zac", "Zac", 4)));
        assert!(selection.item().is_none());
        assert!(selection.champion().is_some());
    }

    #[test]
    fn deselecting_clears_both() {
        let mut selection = Selection::default();
        selection.select_item(Some(ItemDef::new("TFT_Item_BFSword", "B.F. Sword")));
        selection.select_champion(None);
        assert_eq!(selection, Selection::default());
    }
}
