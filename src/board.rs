use std::fmt::Debug;

/// The central trait of the library, defining the interface for a game state.
///
/// To search a custom game with [`MinimaxSearch`](crate::minimax::MinimaxSearch), this trait must
/// be implemented. Boards are treated as immutable values: applying or undoing moves always
/// produces a new board and leaves `self` untouched.
pub trait Board: Clone {
    /// The type representing a move in the game. This could be a simple `u8` for a board position
    /// or a more complex struct for games with intricate actions.
    type Move: Clone + Debug;

    /// The error returned when a move or an undo request is rejected by the board.
    type Error: std::error::Error;

    /// Returns the player whose turn it is to make a move.
    fn get_current_player(&self) -> Player;

    /// Returns a list of all legal moves available from the current state.
    ///
    /// The order must be deterministic, the search relies on it when collecting equally good moves.
    fn get_available_moves(&self) -> Vec<Self::Move>;

    /// Returns a new board with the given move applied.
    fn apply_move(&self, b_move: &Self::Move) -> Result<Self, Self::Error>;

    /// Returns a new board with the last `count` moves taken back.
    fn undo_moves(&self, count: usize) -> Result<Self, Self::Error>;

    /// Returns `true` once the game has ended and no moves remain.
    fn is_terminal(&self) -> bool;

    /// Scores the board after `depth` plies of search.
    ///
    /// Positive scores favour [`Player::First`], negative ones favour [`Player::Second`].
    fn evaluate(&self, depth: u32) -> i64;
}

/// Represents the two players of the game.
///
/// The discriminants double as the sign used by the minimax search.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum Player {
    /// The player who moves first. Maximises the score.
    First = 1,
    /// The player who moves second. Minimises the score.
    Second = -1,
}

impl Player {
    /// Returns `+1` for [`Player::First`] and `-1` for [`Player::Second`].
    pub const fn sign(self) -> i64 {
        self as i64
    }

    /// Returns the other player.
    pub const fn opponent(self) -> Player {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }
}

/// Represents the outcome of optimal play, seen from the player to move.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum GameOutcome {
    /// The player to move wins.
    Win = 1,
    /// The player to move loses.
    Lose = 2,
    /// Neither player can force a win.
    Draw = 3,
}
