//! Pure transformations for catalog browsing.
//!
//! No I/O and no shared state: filtering, slicing, chain walking, and
//! display formatting.

mod display;
mod evolution;
mod search;
mod slice;

pub use display::{display_move_name, display_name};
pub use evolution::walk_first_branch;
pub use search::{filter_by_term, normalize_term};
pub use slice::slice_window;
