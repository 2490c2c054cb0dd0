use crate::board::{Board, GameOutcome, Player};

/// Represents a single node in a recorded minimax search tree.
///
/// Each node stores the state of the game, the move that led to it and, once the tree has been
/// scored, the minimax value of the state.
#[derive(Debug, Clone)]
pub struct MinimaxNode<T: Board> {
    /// The number of plies between the root and this node.
    pub depth: u32,
    /// The game state that this node represents.
    pub board: T,
    /// The move that led to this node's state from its parent. `None` for the root node.
    pub prev_move: Option<T::Move>,
    /// The player whose turn it is in this node's game state.
    pub current_player: Player,
    /// The best reply found for `current_player`. `None` for leaves.
    pub best_move: Option<T::Move>,
    /// The minimax score of this node.
    pub score: i64,
    /// Whether `score` favours `current_player`.
    pub favorable: bool,
}

impl<T: Board> MinimaxNode<T> {
    /// Creates an unscored node.
    pub fn new(board: T, depth: u32, prev_move: Option<T::Move>) -> Self {
        let current_player = board.get_current_player();
        MinimaxNode {
            depth,
            board,
            prev_move,
            current_player,
            best_move: None,
            score: 0,
            favorable: false,
        }
    }

    /// Stores the minimax score of the node.
    pub fn set_score(&mut self, best_move: Option<T::Move>, score: i64) {
        self.best_move = best_move;
        self.score = score;
        self.favorable = score * self.current_player.sign() > 0;
    }

    /// The outcome of optimal play for `current_player`.
    pub fn outcome(&self) -> GameOutcome {
        outcome_of(self.score, self.favorable)
    }
}

pub(crate) fn outcome_of(score: i64, favorable: bool) -> GameOutcome {
    match (favorable, score) {
        (true, _) => GameOutcome::Win,
        (false, 0) => GameOutcome::Draw,
        (false, _) => GameOutcome::Lose,
    }
}
