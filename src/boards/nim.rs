use crate::board::{Board, Player};
use crate::error::{MoveRejection, NimError, Result};
use std::fmt::{Display, Formatter};

/// Marker printed for every stick left in a row.
const STICK_MARKER: &str = " |";

/// A single Nim move: take `amount` sticks from row `row`.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub struct NimMove {
    /// Zero-based index of the row to take from.
    pub row: usize,
    /// How many sticks to take. Must be positive.
    pub amount: u32,
}

impl NimMove {
    pub const fn new(row: usize, amount: u32) -> Self {
        Self { row, amount }
    }
}

/// An implementation of the `Board` trait for the game of Nim.
///
/// Each row holds a pile of sticks. On their turn a player removes any positive number of sticks
/// from a single row, and whoever takes the last stick wins. Every configuration the board has
/// been through is kept in `history`, whose last element is always the current `piles`.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct NimBoard {
    piles: Vec<u32>,
    history: Vec<Vec<u32>>,
    turn: Player,
}

impl NimBoard {
    /// Creates a fresh board with [`Player::First`] to move.
    pub fn new(piles: Vec<u32>) -> Self {
        Self {
            history: vec![piles.clone()],
            piles,
            turn: Player::First,
        }
    }

    /// The number of sticks in every row.
    pub fn piles(&self) -> &[u32] {
        &self.piles
    }

    /// Every configuration since the start of the game, earliest first.
    pub fn history(&self) -> &[Vec<u32>] {
        &self.history
    }

    /// The player to act.
    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn rows(&self) -> usize {
        self.piles.len()
    }

    pub fn total_sticks(&self) -> u64 {
        self.piles.iter().map(|&pile| u64::from(pile)).sum()
    }

    /// The XOR of all pile sizes. The player to move loses against perfect play iff it is zero.
    pub fn nim_sum(&self) -> u32 {
        self.piles.iter().fold(0, |acc, &pile| acc ^ pile)
    }

    fn check_move(&self, b_move: &NimMove) -> std::result::Result<(), MoveRejection> {
        if self.is_terminal() {
            return Err(MoveRejection::GameOver);
        }

        let Some(&available) = self.piles.get(b_move.row) else {
            return Err(MoveRejection::RowOutOfRange { rows: self.rows() });
        };

        if b_move.amount == 0 {
            return Err(MoveRejection::ZeroAmount);
        }

        if b_move.amount > available {
            return Err(MoveRejection::NotEnoughSticks { available });
        }

        Ok(())
    }
}

impl Default for NimBoard {
    /// Creates the classic three-row board `[3, 4, 5]`.
    fn default() -> Self {
        NimBoard::new(vec![3, 4, 5])
    }
}

impl Board for NimBoard {
    type Move = NimMove;
    type Error = NimError;

    fn get_current_player(&self) -> Player {
        self.turn
    }

    fn get_available_moves(&self) -> Vec<Self::Move> {
        self.piles
            .iter()
            .enumerate()
            .flat_map(|(row, &pile)| (1..=pile).rev().map(move |amount| NimMove::new(row, amount)))
            .collect()
    }

    fn apply_move(&self, b_move: &Self::Move) -> Result<Self> {
        self.check_move(b_move)
            .map_err(|reason| NimError::InvalidMove {
                row: b_move.row,
                amount: b_move.amount,
                reason,
            })?;

        let mut piles = self.piles.clone();
        piles[b_move.row] -= b_move.amount;

        let mut history = Vec::with_capacity(self.history.len() + 1);
        history.extend_from_slice(&self.history);
        history.push(piles.clone());

        Ok(Self {
            piles,
            history,
            turn: self.turn.opponent(),
        })
    }

    fn undo_moves(&self, count: usize) -> Result<Self> {
        let available = self.history.len();
        if count >= available {
            return Err(NimError::InvalidUndo {
                requested: count,
                available: available - 1,
            });
        }

        let history = self.history[..available - count].to_vec();
        let piles = history[history.len() - 1].clone();
        let turn = match count % 2 {
            0 => self.turn,
            _ => self.turn.opponent(),
        };

        Ok(Self {
            piles,
            history,
            turn,
        })
    }

    fn is_terminal(&self) -> bool {
        self.piles.iter().all(|&pile| pile == 0)
    }

    fn evaluate(&self, depth: u32) -> i64 {
        -self.turn.sign() * (i64::from(depth) + 1)
    }
}

impl Display for NimBoard {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (row, &pile) in self.piles.iter().enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            write!(f, "{}:", row + 1)?;
            for _ in 0..pile {
                f.write_str(STICK_MARKER)?;
            }
        }
        Ok(())
    }
}
