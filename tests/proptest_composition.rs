//! Property-based tests for the composition engine.
//!
//! Random command sequences are replayed from an empty state and the board,
//! trait and economy invariants are checked after every step.

use std::collections::{BTreeMap, BTreeSet};

use proptest::prelude::*;
use teamcomp::composition::{
    compute_economy, BoardPosition, Command, CompositionState, StarLevel, BOARD_COLS, BOARD_ROWS,
    MAX_ITEMS_PER_UNIT, MAX_LEVEL,
};
use teamcomp::data::{ChampionDef, ItemDef};

// ===========================================================================
// Generators
// ===========================================================================

fn roster() -> Vec<ChampionDef> {
    vec![
        ChampionDef::new("TFT14_Poppy", "Poppy", 1).with_traits(["Yordle", "Bruiser"]),
        ChampionDef::new("TFT14_Kennen", "Kennen", 1).with_traits(["Yordle"]),
        ChampionDef::new("TFT14_Zac", "Zac", 4).with_traits(["Bruiser"]),
        ChampionDef::new("TFT14_Jinx", "Jinx", 5).with_traits(["Marksman"]),
    ]
}

/// Positions slightly past the board edge are included so bounds checks run.
fn arb_position() -> impl Strategy<Value = BoardPosition> {
    (0..=BOARD_ROWS, 0..=BOARD_COLS).prop_map(|(row, col)| BoardPosition::new(row, col))
}

fn arb_command() -> impl Strategy<Value = Command> {
    let champions = roster();
    let champion_count = champions.len();
    prop_oneof![
        4 => (0..champion_count, arb_position()).prop_map(move |(index, position)| {
            Command::PlaceChampion {
                champion: champions[index].clone(),
                position,
            }
        }),
        1 => arb_position().prop_map(|position| Command::RemoveChampion { position }),
        2 => (arb_position(), arb_position()).prop_map(|(from, to)| Command::MoveChampion { from, to }),
        2 => arb_position().prop_map(|position| Command::AttachItem {
            item: ItemDef::new("TFT_Item_BFSword", "B.F. Sword"),
            position,
        }),
        1 => arb_position().prop_map(|position| Command::DetachItem {
            position,
            item_api_name: "TFT_Item_BFSword".to_string(),
        }),
        1 => (arb_position(), 0..3usize).prop_map(|(position, level)| Command::SetStarLevel {
            position,
            level: StarLevel::ALL[level],
        }),
        1 => arb_position().prop_map(|position| Command::StarUp { position }),
        1 => Just(Command::ClearBoard),
    ]
}

fn arb_commands(max_ops: usize) -> impl Strategy<Value = Vec<Command>> {
    proptest::collection::vec(arb_command(), 1..=max_ops)
}

fn expected_trait_counts(state: &CompositionState) -> BTreeMap<String, u32> {
    let mut seen: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for unit in state.board().units() {
        for trait_name in &unit.champion.traits {
            seen.entry(trait_name.clone())
                .or_default()
                .insert(unit.api_name().to_string());
        }
    }
    seen.into_iter()
        .map(|(name, champions)| (name, champions.len() as u32))
        .collect()
}

// ===========================================================================
// Properties
// ===========================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn invariants_hold_after_every_command(commands in arb_commands(60)) {
        let mut state = CompositionState::new();
        for command in commands {
            state = state.apply(command);

            for unit in state.board().units() {
                prop_assert!(unit.position.in_bounds());
                prop_assert!(unit.items.len() <= MAX_ITEMS_PER_UNIT);
                prop_assert_eq!(state.board().get(unit.position), Some(unit));
            }

            let expected = expected_trait_counts(&state);
            for (name, count) in state.trait_counts() {
                prop_assert_eq!(*count, expected.get(name).copied().unwrap_or(0));
            }
            for name in expected.keys() {
                prop_assert!(state.trait_counts().contains_key(name));
            }

            prop_assert_eq!(state.economy(), compute_economy(state.board()));
            prop_assert!(state.economy().level <= MAX_LEVEL);
        }
    }

    #[test]
    fn repeating_a_command_is_idempotent_for_placement_and_removal(
        index in 0..4usize,
        position in arb_position(),
    ) {
        let place = Command::PlaceChampion {
            champion: roster()[index].clone(),
            position,
        };
        let once = CompositionState::new().apply(place.clone());
        prop_assert_eq!(once.apply(place), once.clone());

        let remove = Command::RemoveChampion { position };
        let removed = once.apply(remove.clone());
        prop_assert_eq!(removed.apply(remove), removed.clone());
    }

    #[test]
    fn placing_never_lowers_gold_or_level(commands in arb_commands(30), index in 0..4usize) {
        let mut state = CompositionState::new();
        for command in commands {
            state = state.apply(command);
        }
        let before = state.economy();
        let free = BoardPosition::all().find(|p| !state.board().is_occupied(*p));
        if let Some(position) = free {
            let after = state
                .apply(Command::PlaceChampion {
                    champion: roster()[index].clone(),
                    position,
                })
                .economy();
            prop_assert!(after.gold > before.gold);
            prop_assert!(after.level >= before.level);
        }
    }

    #[test]
    fn raising_star_level_never_lowers_gold(
        commands in arb_commands(30),
        position in arb_position(),
        target in 0..3usize,
    ) {
        let mut state = CompositionState::new();
        for command in commands {
            state = state.apply(command);
        }
        let before = state.economy().gold;

        let starred_up = state.apply(Command::StarUp { position });
        prop_assert!(starred_up.economy().gold >= before);

        let current = state.board().get(position).map(|unit| unit.star_level);
        let level = StarLevel::ALL[target];
        if current.map_or(true, |current| level >= current) {
            let raised = state.apply(Command::SetStarLevel { position, level });
            prop_assert!(raised.economy().gold >= before);
        }
    }
}
