/// Errors returned when building a [`RatioTable`](crate::RatioTable) or
/// running the ratio search.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The requested decimal precision is zero or beyond what `f64` decimal
    /// grids can distinguish.
    #[error("precision must be between 1 and {max} decimal places, got {0}", max = crate::MAX_PRECISION)]
    InvalidPrecision(u32),

    /// A probe budget of zero leaves every capacity above one unreachable.
    #[error("probe budget must be at least 1")]
    ZeroProbeBudget,

    /// A requested capacity exponent falls outside the supported range.
    #[error("capacity exponent {0} is out of range (max {max})", max = crate::MAX_EXPONENT)]
    ExponentOutOfRange(u32),

    /// The floor substituted for degenerate ratios must itself be a usable
    /// growth ratio.
    #[error("floor ratio must be finite and greater than 1.0, got {0}")]
    InvalidFloor(f64),

    /// A decimal place of the search failed to converge, either because the
    /// increment underflowed or because the retry bound was exhausted. The
    /// capacity is not reachable within the bounded search effort.
    #[error("search stalled at place {place} for capacity {capacity}")]
    Stalled {
        /// Capacity the search was trying to reach.
        capacity: f64,
        /// Decimal place being refined when progress stopped.
        place: f64,
    },
}
