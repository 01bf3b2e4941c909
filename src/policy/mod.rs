//! Hit/stand policy tables.
//!
//! A [`PolicyTable`] maps (player total, dealer upcard) to an action. It is
//! the chromosome the optimizer evolves and the [`Decide`](crate::game::Decide)
//! implementation the simulator plays.

mod table;

pub use table::{
    PolicyTable, COLS, FORCED_HIT_ROWS, FORCED_STAND_ROW, FREE_ROWS, MIN_TOTAL, MIN_UPCARD, ROWS,
};
