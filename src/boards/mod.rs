//! Contains pre-made implementations of the `Board` trait.

/// A `Board` implementation for the game of Nim.
pub mod nim;
