//! The game of Nim with an exhaustive minimax search.
//!
//! This library provides a generic minimax search over any two-player game implementing the
//! [`Board`](board::Board) trait, together with a Nim implementation of that trait. The search walks
//! the complete game tree, so it always finds a winning move when one exists.
//!
//! # Example
//!
//! ```rust
//! use nim_minimax::board::Board;
//! use nim_minimax::boards::nim::NimBoard;
//! use nim_minimax::minimax::MinimaxSearch;
//! use nim_minimax::random::CustomNumberGenerator;
//!
//! // Create a new Nim board with three rows
//! let board = NimBoard::new(vec![1, 2, 4]);
//!
//! // Create and configure a new search instance using the builder
//! let mut search = MinimaxSearch::builder()
//!     .with_random_generator(CustomNumberGenerator::default())
//!     .build();
//!
//! // Pick a move for the first player
//! let best_move = search.best_move(&board).unwrap().unwrap();
//! let next = board.apply_move(&best_move).unwrap();
//!
//! assert_eq!(next.nim_sum(), 0);
//! println!("{}", next);
//! ```

/// Contains the `Board` trait and related enums that define the interface for a game.
pub mod board;
/// Contains pre-made implementations of the `Board` trait.
pub mod boards;
/// Contains the errors returned by the Nim board.
pub mod error;
/// The core module of the library, containing the `MinimaxSearch` implementation.
pub mod minimax;
/// Contains the `MinimaxNode` struct, which represents a node in a recorded search tree.
pub mod minimax_node;
/// Contains traits and implementations for random number generation.
pub mod random;
