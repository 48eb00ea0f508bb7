//! Game rules for N×N tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are separated from
//! board storage so contracts and invariants can reuse them.

pub mod draw;
pub mod win;

pub use draw::{has_empty_cell, is_draw, is_full};
pub use win::{check_win, winner};
