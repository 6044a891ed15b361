//! Owner of the current composition snapshot.
//!
//! Commands are applied one at a time under the channel's write lock, and the
//! resulting snapshot is published whole, so readers never see a half-applied
//! command. Subscribers are only woken when a command actually changed
//! something.

use std::sync::Arc;

use tokio::sync::watch;

use crate::composition::command::Command;
use crate::composition::state::CompositionState;

pub type Snapshot = Arc<CompositionState>;

#[derive(Debug, Clone)]
pub struct CompositionStore {
    sender: Arc<watch::Sender<Snapshot>>,
}

impl Default for CompositionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CompositionStore {
    pub fn new() -> Self {
        Self::with_state(CompositionState::new())
    }

    pub fn with_state(state: CompositionState) -> Self {
        let (sender, _) = watch::channel(Arc::new(state));
        Self {
            sender: Arc::new(sender),
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Arc::clone(&self.sender.borrow())
    }

    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.sender.subscribe()
    }

    /// Apply `command` and return the snapshot it produced.
    pub fn dispatch(&self, command: Command) -> Snapshot {
        let name = command.name();
        let mut produced = None;
        let changed = self.sender.send_if_modified(|current| {
            let next = current.apply(command);
            if next == **current {
                produced = Some(Arc::clone(current));
                return false;
            }
            let next = Arc::new(next);
            produced = Some(Arc::clone(&next));
            *current = next;
            true
        });
        tracing::trace!(command = name, changed, "command applied");
        produced.unwrap_or_else(|| self.snapshot())
    }

    pub fn dispatch_all<I>(&self, commands: I) -> Snapshot
    where
        I: IntoIterator<Item = Command>,
    {
        let mut last = self.snapshot();
        for command in commands {
            last = self.dispatch(command);
        }
        last
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composition::board::BoardPosition;
    use crate::data::model::ChampionDef;

    fn place_x() -> Command {
        Command::PlaceChampion {
            champion: ChampionDef::new("X", "X", 5),
            position: BoardPosition::new(0, 0),
        }
    }

    #[test]
    fn dispatch_publishes_to_subscribers() {
        let store = CompositionStore::new();
        let mut receiver = store.subscribe();
        assert!(!receiver.has_changed().unwrap_or(true));

        let snapshot = store.dispatch(place_x());
        assert_eq!(snapshot.board().len(), 1);
        assert!(receiver.has_changed().unwrap_or(false));
        assert_eq!(receiver.borrow_and_update().board().len(), 1);
    }

    #[test]
    fn ignored_command_does_not_wake_subscribers() {
        let store = CompositionStore::new();
        store.dispatch(place_x());
        let mut receiver = store.subscribe();
        receiver.borrow_and_update();

        let before = store.snapshot();
        let after = store.dispatch(place_x());
        assert!(Arc::ptr_eq(&before, &after));
        assert!(!receiver.has_changed().unwrap_or(true));
    }

    #[test]
    fn clones_share_the_same_state() {
        let store = CompositionStore::new();
        let other = store.clone();
        other.dispatch(place_x());
        assert_eq!(store.snapshot().economy().gold, 5);
    }
}
