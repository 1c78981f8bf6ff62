/// Returns the final value of the probe-growth sequence for `ratio` after
/// `steps` ceiling-multiplications.
///
/// The sequence starts at 1 and each step replaces the running term with
/// `ceil(term * ratio)`; for any ratio above 1 the ceiling forces the term to
/// advance by at least one per step, which is what lets small tables get away
/// with ratios barely above 1.
///
/// The accumulator is an `f64` on purpose: consuming hash tables generate
/// their probe offsets with the same double-precision ceiling chain, so the
/// search oracle has to answer "does this ratio reach the capacity?" in the
/// consumer's arithmetic.
///
/// The result is non-decreasing in `ratio` for a fixed `steps`, and
/// non-decreasing in `steps` for any `ratio >= 1`. The digit-by-digit search
/// in this crate is only correct because of the former. `last_term(r, 0)` is
/// `1.0` for every ratio.
pub fn last_term(ratio: f64, steps: u32) -> f64 {
    let mut term = 1.0;
    for _ in 0..steps {
        term = (term * ratio).ceil();
    }
    term
}

/// An iterator over the probe offsets generated by a growth ratio.
///
/// Yields `1, ceil(1*r), ceil(ceil(1*r)*r), ...`, the offsets a consuming
/// table adds to a key's home bucket on successive collisions. Offsets are
/// clamped to `u64::MAX` if the sequence outgrows 64 bits.
///
/// # Examples
///
/// ```
/// use probe_ratios::Sequence;
///
/// let offsets: Vec<u64> = Sequence::new(1.5, 8).collect();
/// assert_eq!(offsets, [1, 2, 3, 5, 8, 12, 18, 27]);
/// ```
#[derive(Debug, Clone)]
pub struct Sequence {
    // The current term, carried in the consumer's arithmetic.
    term: f64,
    ratio: f64,
    remaining: u32,
}

impl Sequence {
    /// Creates a sequence of `len` offsets for `ratio`, starting at offset 1.
    pub fn new(ratio: f64, len: u32) -> Sequence {
        Sequence {
            term: 1.0,
            ratio,
            remaining: len,
        }
    }
}

impl Iterator for Sequence {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        // saturates at u64::MAX
        let offset = self.term as u64;
        self.term = (self.term * self.ratio).ceil();
        Some(offset)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.remaining as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Sequence {}

#[cfg(test)]
mod tests {
    use super::{last_term, Sequence};

    #[test]
    fn zero_steps() {
        for ratio in [0.1, 1.0, 1.007937, 2.5] {
            assert_eq!(last_term(ratio, 0), 1.0);
        }
    }

    #[test]
    fn ceiling_advances_every_step() {
        // Any ratio above 1 gains at least one per step.
        assert_eq!(last_term(1.000001, 126), 127.0);
        assert_eq!(last_term(1.0000001, 126), 127.0);
    }

    #[test]
    fn sub_one_ratio_never_grows() {
        assert_eq!(last_term(0.5, 126), 1.0);
        assert_eq!(last_term(1.0, 126), 1.0);
    }

    #[test]
    fn monotone_in_ratio() {
        let mut prev = 0.0;
        for i in 0..500 {
            let ratio = 1.0 + f64::from(i) * 0.001;
            let term = last_term(ratio, 126);
            assert!(term >= prev, "ratio {ratio} regressed: {term} < {prev}");
            prev = term;
        }
    }

    #[test]
    fn monotone_in_steps() {
        let mut prev = 0.0;
        for steps in 0..=200 {
            let term = last_term(1.1, steps);
            assert!(term >= prev);
            prev = term;
        }
    }

    #[test]
    fn offsets_match_last_term() {
        let last = Sequence::new(1.1, 126).last().unwrap();
        assert_eq!(last as f64, last_term(1.1, 125));
    }

    #[test]
    fn offsets_saturate() {
        // 4^60 is far past u64::MAX.
        let last = Sequence::new(4.0, 61).last().unwrap();
        assert_eq!(last, u64::MAX);
    }

    #[test]
    fn length_is_exact() {
        let sequence = Sequence::new(1.2, 126);
        assert_eq!(sequence.len(), 126);
        assert_eq!(sequence.count(), 126);
    }
}
