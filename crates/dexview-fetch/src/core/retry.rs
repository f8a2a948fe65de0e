use std::time::Duration;

/// Calculate the delay after a failed attempt using linear backoff.
///
/// The delay formula is: `base * attempt`
///
/// # Arguments
///
/// * `attempt` - The attempt that just failed (1-indexed: 1 = first attempt)
/// * `base` - The base delay duration
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use dexview_fetch::core::retry_delay;
///
/// // First attempt failed: wait base
/// assert_eq!(retry_delay(1, Duration::from_millis(1000)), Duration::from_millis(1000));
///
/// // Second attempt failed: wait base * 2
/// assert_eq!(retry_delay(2, Duration::from_millis(1000)), Duration::from_millis(2000));
/// ```
pub fn retry_delay(attempt: u32, base: Duration) -> Duration {
    base.saturating_mul(attempt)
}
