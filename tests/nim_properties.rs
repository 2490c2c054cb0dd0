//! Property-based tests for the Nim board and the minimax search.

use nim_minimax::board::{Board, Player};
use nim_minimax::boards::nim::{NimBoard, NimMove};
use nim_minimax::error::NimError;
use nim_minimax::minimax::MinimaxSearch;
use nim_minimax::random::CustomNumberGenerator;
use proptest::prelude::*;

// =============================================================================
// Strategies for generating test inputs
// =============================================================================

/// Piles cheap to apply moves to
fn arb_piles() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(0u32..8, 1..5)
}

/// Piles small enough to search exhaustively in a test
fn arb_searchable_piles() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(0u32..4, 1..4).prop_filter("tree too large", |piles| {
        piles.iter().sum::<u32>() <= 7
    })
}

/// A board reached by playing `choices` from `piles`, with each choice picking a legal move by index
fn play_out(piles: Vec<u32>, choices: &[usize]) -> (NimBoard, usize) {
    let mut board = NimBoard::new(piles);
    let mut played = 0;
    for &choice in choices {
        let moves = board.get_available_moves();
        if moves.is_empty() {
            break;
        }
        board = board.apply_move(&moves[choice % moves.len()]).unwrap();
        played += 1;
    }
    (board, played)
}

fn seeded_search(seed: i64) -> MinimaxSearch<CustomNumberGenerator> {
    MinimaxSearch::builder()
        .with_random_generator(CustomNumberGenerator::new(seed))
        .build()
}

// =============================================================================
// Board properties
// =============================================================================

proptest! {
    /// A move only changes its own row and never mutates the original board
    #[test]
    fn prop_apply_move_changes_one_row(piles in arb_piles(), choice in any::<usize>()) {
        let board = NimBoard::new(piles);
        let moves = board.get_available_moves();
        prop_assume!(!moves.is_empty());
        let before = board.clone();
        let b_move = moves[choice % moves.len()];

        let next = board.apply_move(&b_move).unwrap();

        prop_assert_eq!(&board, &before);
        prop_assert_eq!(next.turn(), board.turn().opponent());
        for (row, (&old, &new)) in board.piles().iter().zip(next.piles()).enumerate() {
            if row == b_move.row {
                prop_assert_eq!(new, old - b_move.amount);
            } else {
                prop_assert_eq!(new, old);
            }
        }
        prop_assert_eq!(next.history().last().unwrap().as_slice(), next.piles());
    }

    /// Undoing every played move gives back the starting board
    #[test]
    fn prop_undo_inverts_apply(
        piles in arb_piles(),
        choices in prop::collection::vec(any::<usize>(), 0..12)
    ) {
        let start = NimBoard::new(piles);
        let (board, played) = play_out(start.piles().to_vec(), &choices);

        let back = board.undo_moves(played).unwrap();

        prop_assert_eq!(back.piles(), start.piles());
        prop_assert_eq!(back.turn(), Player::First);
        prop_assert_eq!(&back, &start);
        prop_assert_eq!(board.history().len(), played + 1);
        prop_assert_eq!(
            board.undo_moves(played + 1).unwrap_err(),
            NimError::InvalidUndo { requested: played + 1, available: played }
        );
    }

    /// Moves come in ascending row, descending amount order, one per stick
    #[test]
    fn prop_possible_moves_enumeration(piles in arb_piles()) {
        let board = NimBoard::new(piles);
        let moves = board.get_available_moves();

        prop_assert_eq!(moves.len() as u64, board.total_sticks());
        prop_assert_eq!(board.is_terminal(), board.total_sticks() == 0);
        for b_move in &moves {
            prop_assert!(board.apply_move(b_move).is_ok());
        }
        for pair in moves.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            prop_assert!(a.row < b.row || (a.row == b.row && a.amount > b.amount));
        }
    }

    /// Amounts beyond the pile are rejected without producing a board
    #[test]
    fn prop_oversized_moves_are_rejected(piles in arb_piles(), row in 0usize..6, extra in 1u32..4) {
        let board = NimBoard::new(piles);
        let amount = board.piles().get(row).copied().unwrap_or(0) + extra;

        let result = board.apply_move(&NimMove::new(row, amount));

        let is_invalid_move = matches!(result, Err(NimError::InvalidMove { .. }));
        prop_assert!(is_invalid_move);
    }
}

// =============================================================================
// Search properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// The search finds exactly the moves that hand the opponent a zero nim-sum
    #[test]
    fn prop_winning_moves_match_nim_sum(piles in arb_searchable_piles(), seed in any::<i32>()) {
        let board = NimBoard::new(piles);
        let mut search = seeded_search(i64::from(seed));

        let winning = search.winning_moves(&board).unwrap();
        let chosen = search.best_move(&board).unwrap();

        let expected: Vec<NimMove> = board
            .get_available_moves()
            .into_iter()
            .filter(|b_move| board.apply_move(b_move).unwrap().nim_sum() == 0)
            .collect();
        prop_assert_eq!(&winning, &expected);
        prop_assert_eq!(winning.is_empty(), board.nim_sum() == 0);

        match chosen {
            None => prop_assert!(board.is_terminal()),
            Some(b_move) if board.nim_sum() != 0 => {
                prop_assert!(winning.contains(&b_move));
                prop_assert_eq!(board.apply_move(&b_move).unwrap().nim_sum(), 0);
            }
            Some(b_move) => prop_assert!(board.get_available_moves().contains(&b_move)),
        }
    }

    /// The mover is favoured exactly when the nim-sum is non-zero
    #[test]
    fn prop_minimax_agrees_with_nim_sum(piles in arb_searchable_piles()) {
        let board = NimBoard::new(piles);
        let search = seeded_search(1);

        let evaluation = search.minimax(&board).unwrap();

        prop_assert_eq!(evaluation.favorable, board.nim_sum() != 0);
        prop_assert_eq!(evaluation.best_move.is_none(), board.is_terminal());
    }
}
