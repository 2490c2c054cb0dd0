use thiserror::Error;

/// Errors returned by [`NimBoard`](crate::boards::nim::NimBoard) when a request would break the
/// rules of the game.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum NimError {
    #[error("Invalid move: cannot take {amount} from row {row}: {reason}")]
    InvalidMove {
        row: usize,
        amount: u32,
        reason: MoveRejection,
    },

    #[error("Invalid undo: requested {requested} moves but only {available} can be undone")]
    InvalidUndo { requested: usize, available: usize },
}

/// Why a move was rejected.
#[derive(Error, Debug, PartialEq, Eq, Copy, Clone)]
pub enum MoveRejection {
    #[error("the game is already over")]
    GameOver,

    #[error("the board only has {rows} rows")]
    RowOutOfRange { rows: usize },

    #[error("at least one stick must be taken")]
    ZeroAmount,

    #[error("only {available} sticks are left in that row")]
    NotEnoughSticks { available: u32 },
}

/// Convenience Result type for Nim operations
pub type Result<T> = std::result::Result<T, NimError>;
