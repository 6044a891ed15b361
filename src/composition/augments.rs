use serde::Serialize;

use crate::data::model::AugmentDef;

/// Slots the board view lays out. Not enforced by `AugmentSlots::set`.
pub const AUGMENT_SLOT_CAPACITY: usize = 3;

/// Where a `set` call actually put the augment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotPlacement {
    Replaced(usize),
    Appended(usize),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AugmentSlots {
    slots: Vec<Option<AugmentDef>>,
}

impl AugmentSlots {
    pub fn slots(&self) -> &[Option<AugmentDef>] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&AugmentDef> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Replace slot `index` when it exists, otherwise append. An index past
    /// the end always lands in the next free position, not at `index`.
    pub fn set(&mut self, augment: AugmentDef, index: usize) -> SlotPlacement {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = Some(augment);
            SlotPlacement::Replaced(index)
        } else {
            self.slots.push(Some(augment));
            SlotPlacement::Appended(self.slots.len() - 1)
        }
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn augment(api_name: &str) -> AugmentDef {
        AugmentDef::new(api_name, api_name)
    }

    #[test]
    fn in_range_index_replaces() {
        let mut slots = AugmentSlots::default();
        slots.set(augment("A"), 0);
        assert_eq!(slots.set(augment("B"), 0), SlotPlacement::Replaced(0));
        assert_eq!(slots.len(), 1);
        assert_eq!(slots.get(0).map(|a| a.api_name.as_str()), Some("B"));
    }

    #[test]
    fn far_out_of_range_index_appends_at_next_position() {
        let mut slots = AugmentSlots::default();
        assert_eq!(slots.set(augment("A"), 7), SlotPlacement::Appended(0));
        assert_eq!(slots.set(augment("B"), 2), SlotPlacement::Appended(1));
        assert_eq!(slots.len(), 2);
        assert!(slots.get(2).is_none());
    }
}
