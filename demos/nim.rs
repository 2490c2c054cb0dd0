extern crate nim_minimax;

use nim_minimax::board::Board;
use nim_minimax::boards::nim::NimBoard;
use nim_minimax::error::NimError;
use nim_minimax::minimax::MinimaxSearch;
use nim_minimax::random::StandardRandomGenerator;

fn main() -> Result<(), NimError> {
    env_logger::init();

    // Small enough for the exhaustive search to answer instantly
    let mut board = NimBoard::new(vec![1, 3, 5]);

    let mut search = MinimaxSearch::builder()
        .with_random_generator(StandardRandomGenerator)
        .build();

    // Print the outcome of perfect play from the start
    let evaluation = search.minimax(&board)?;
    println!(
        "{:?} to move, expected outcome: {:?}",
        board.get_current_player(),
        evaluation.outcome()
    );
    println!("{}\n", board);

    // Let the search play both sides
    while let Some(best_move) = search.best_move(&board)? {
        let mover = board.get_current_player();
        board = board.apply_move(&best_move)?;
        println!(
            "{:?} takes {} from row {}",
            mover,
            best_move.amount,
            best_move.row + 1
        );
        println!("{}\n", board);
    }

    let winner = board.get_current_player().opponent();
    let moves_played = board.history().len() - 1;
    println!("{:?} took the last stick and wins after {} moves", winner, moves_played);

    // Take every move back
    let start = board.undo_moves(moves_played)?;
    println!("Starting position was:\n{}", start);

    Ok(())
}
