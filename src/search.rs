use crate::error::Error;
use crate::sequence::last_term;

// Additions allowed per decimal place before the search is declared stalled.
// The shipped tables never take more than a handful of steps per place; only a
// capacity that is unreachable within the probe budget can climb this far.
const RETRY_LIMIT: u32 = 1 << 20;

/// Finds the smallest ratio, at `precision` decimal places, whose probe-growth
/// sequence of `probe_budget` terms reaches `capacity`.
///
/// The search walks decimal places from `0.1` down to `10^-precision`. At each
/// place it keeps adding the place's increment while the candidate's final
/// term (see [`last_term`](crate::last_term)) still falls short of the
/// capacity, then freezes that digit and refines the next one. Because
/// `last_term` is non-decreasing in the ratio, an increment that overshoots at
/// a coarse place can never be compensated at a finer one, so the greedy walk
/// never needs to backtrack. The running ratio always sits strictly below the
/// reachability threshold; accepting the last place's single pending increment
/// lands on the smallest representable value at or above it.
///
/// The running ratio starts at 1.0, or at 0.0 for capacities of at most 1,
/// which any positive ratio already "reaches". `precision` must be at least 1;
/// results are rounded to `precision` decimal places.
///
/// # Errors
///
/// Returns [`Error::Stalled`] when a decimal place fails to converge: either
/// the increment underflows against the running ratio, or the place exhausts
/// its retry bound. Both mean the capacity is not reachable within the
/// bounded search effort, for example under a probe budget of zero.
///
/// # Examples
///
/// ```
/// use probe_ratios::{find_min_ratio, last_term};
///
/// let ratio = find_min_ratio(128.0, 6, 126).unwrap();
/// assert!(last_term(ratio, 126) >= 128.0);
/// assert!(last_term(ratio - 0.000001, 126) < 128.0);
/// ```
pub fn find_min_ratio(capacity: f64, precision: u32, probe_budget: u32) -> Result<f64, Error> {
    debug_assert!(precision >= 1);

    let mut ratio = if capacity <= 1.0 { 0.0 } else { 1.0 };
    let mut place = 0.1;

    for digit in 0..precision {
        let mut retries = 0;
        loop {
            let next = ratio + place;
            if last_term(next, probe_budget) >= capacity {
                break;
            }
            if next == ratio || retries == RETRY_LIMIT {
                return Err(Error::Stalled { capacity, place });
            }
            ratio = next;
            retries += 1;
        }

        if digit + 1 == precision {
            // The pending increment at the least significant place is the
            // smallest step that reaches the capacity.
            ratio += place;
        } else {
            place /= 10.0;
        }
    }

    Ok(round_to(ratio, precision))
}

// Clears the float noise accumulated by the digit walk; the result is within
// ~1e-15 of an exact decimal, never near a rounding boundary.
fn round_to(ratio: f64, precision: u32) -> f64 {
    let scale = 10f64.powi(precision as i32);
    (ratio * scale).round() / scale
}
