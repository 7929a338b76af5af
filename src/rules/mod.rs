//! Pure rule functions for quantum tic-tac-toe.
//!
//! Rules are separated from board storage so they can be evaluated and
//! tested without a match controller: win scanning over resolved marks,
//! entanglement-cycle detection and collapse, and end-of-match detection.

pub mod collapse;
pub mod end;
pub mod win;

pub use collapse::{closes_cycle, collapse};
pub use end::move_available;
pub use win::check_winner;
