//! Property tests for board generation and the target selectors.

use proptest::prelude::*;

use gold_rush::search::Strategy as SearchStrategy;
use gold_rush::{Board, GameConfig, GameRng, NearestGold, Position, RichestGold, TargetSelector};

/// A board with gold at arbitrary cells, plus an arbitrary start cell.
fn board_and_start() -> impl Strategy<Value = (Board, Position)> {
    (2usize..16).prop_flat_map(|size| {
        let coord = 0..size as i32;
        (
            prop::collection::vec((coord.clone(), coord.clone(), 1u32..=50), 0..24),
            (coord.clone(), coord),
        )
            .prop_map(move |(gold, (sx, sy))| {
                let mut board = Board::empty(size);
                for (x, y, amount) in gold {
                    board.place_gold(Position::new(x, y), amount).unwrap();
                }
                (board, Position::new(sx, sy))
            })
    })
}

proptest! {
    #[test]
    fn generated_board_has_exact_gold_count(
        size in 1usize..40,
        fraction in 0.0f64..=1.0,
        seed in any::<u64>(),
    ) {
        let config = GameConfig::default()
            .with_board_size(size)
            .with_gold_fraction(fraction);
        let target = config.gold_cell_target();

        let mut rng = GameRng::new(seed);
        let board = Board::generate(size, target, 10..=50, &mut rng).unwrap();

        prop_assert_eq!(board.gold_cell_count(), target);
        for cell in board.cells().filter(|c| c.has_gold) {
            prop_assert!((10..=50).contains(&cell.gold));
        }
    }

    #[test]
    fn default_fraction_seeds_a_fifth_of_the_cells(size in 1usize..40, seed in any::<u64>()) {
        let config = GameConfig::default().with_board_size(size);
        prop_assert_eq!(config.gold_cell_target(), size * size / 5);

        let mut rng = GameRng::new(seed);
        let board = Board::generate(size, config.gold_cell_target(), 10..=50, &mut rng).unwrap();
        prop_assert_eq!(board.gold_cell_count(), size * size / 5);
    }

    #[test]
    fn nearest_gold_is_never_beaten((board, start) in board_and_start()) {
        let gold: Vec<_> = board.cells().filter(|c| c.has_gold).map(|c| c.position).collect();

        match NearestGold::search(&board, start) {
            None => prop_assert!(gold.is_empty()),
            Some((found, distance)) => {
                prop_assert!(board.cell_at(found).unwrap().has_gold);
                prop_assert_eq!(distance, start.manhattan(found));
                for other in gold {
                    prop_assert!(distance <= start.manhattan(other));
                }
            }
        }
    }

    #[test]
    fn richest_gold_holds_the_maximum((board, start) in board_and_start()) {
        let best = board.cells().filter_map(|c| c.available_gold()).max();

        match RichestGold.select(&board, start) {
            None => prop_assert!(best.is_none()),
            Some(found) => {
                let cell = board.cell_at(found).unwrap();
                prop_assert!(cell.has_gold);
                prop_assert_eq!(Some(cell.gold), best);

                // Nothing earlier in scan order holds as much.
                for earlier in board.cells().take_while(|c| c.position != found) {
                    prop_assert!(earlier.available_gold().map_or(true, |g| g < cell.gold));
                }
            }
        }
    }

    #[test]
    fn strategies_only_return_gold_cells((board, start) in board_and_start()) {
        for strategy in [SearchStrategy::NearestGold, SearchStrategy::RichestGold] {
            if let Some(found) = strategy.select(&board, start) {
                prop_assert!(board.is_in_bounds(found));
                prop_assert!(board.cell_at(found).unwrap().available_gold().is_some());
            }
        }
    }
}
