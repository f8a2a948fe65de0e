//! Pure transformations for JSON fetching.
//!
//! Nothing in here touches the network or the clock.

mod retry;
mod validation;

pub use retry::retry_delay;
pub use validation::validate_url;
