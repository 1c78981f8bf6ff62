use std::fmt;
use std::ops::{Range, RangeInclusive};

use crate::error::Error;
use crate::format::{CArray, PlainList};
use crate::search::find_min_ratio;

/// The largest supported capacity exponent.
///
/// Capacities are carried as `f64`, which represents every power of two far
/// beyond `2^64` exactly, but the tables exist to parameterize hash tables
/// whose capacity is addressed with 64 bits.
pub const MAX_EXPONENT: u32 = 64;

/// The largest supported decimal precision.
///
/// At 15 decimal places the increment for the final place sits just above the
/// spacing of `f64` values around 1.0, so every place of the search can still
/// make progress. Past that the increment underflows and the search stalls.
pub const MAX_PRECISION: u32 = 15;

/// A builder for a [`RatioTable`].
///
/// # Examples
///
/// ```rust
/// let table = probe_ratios::RatioTable::builder()
///     .precision(7)
///     .probe_budget(126)
///     .exponents(0..=64)
///     .floor(1.01)
///     .build()
///     .unwrap();
///
/// assert_eq!(table.len(), 65);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RatioTableBuilder {
    precision: u32,
    probe_budget: u32,
    exponents: RangeInclusive<u32>,
    floor: Option<f64>,
}

impl RatioTableBuilder {
    /// Sets the number of decimal places each ratio is refined to.
    ///
    /// More places produce tighter ratios and longer probe sequences before
    /// the capacity is reached. Must be between 1 and [`MAX_PRECISION`];
    /// [`build`](RatioTableBuilder::build) fails otherwise. Defaults to 6.
    pub fn precision(self, precision: u32) -> RatioTableBuilder {
        RatioTableBuilder { precision, ..self }
    }

    /// Sets the number of terms a probe sequence may use to reach the
    /// capacity.
    ///
    /// This is the consumer's probe limit, net of any slots it reserves for
    /// bookkeeping. Must be at least 1; [`build`](RatioTableBuilder::build)
    /// fails otherwise. Defaults to 126.
    pub fn probe_budget(self, probe_budget: u32) -> RatioTableBuilder {
        RatioTableBuilder { probe_budget, ..self }
    }

    /// Sets the range of capacity exponents the table covers.
    ///
    /// The table holds one ratio per exponent `e` in the range, for capacity
    /// `2^e`. The end of the range must not exceed [`MAX_EXPONENT`];
    /// [`build`](RatioTableBuilder::build) fails otherwise. Defaults to
    /// `7..=64`.
    pub fn exponents(self, exponents: RangeInclusive<u32>) -> RatioTableBuilder {
        RatioTableBuilder { exponents, ..self }
    }

    /// Substitutes `floor` for any searched ratio of at most 1.0.
    ///
    /// Capacities of one or less are reached before the first probe, so the
    /// search returns a degenerate ratio that would leave a consumer's table
    /// unable to grow. The floor must be finite and greater than 1.0;
    /// [`build`](RatioTableBuilder::build) fails otherwise. No floor is
    /// applied by default.
    pub fn floor(self, floor: f64) -> RatioTableBuilder {
        RatioTableBuilder {
            floor: Some(floor),
            ..self
        }
    }

    /// Runs the search for every exponent in the configured range and
    /// returns the finished table.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidPrecision`], [`Error::ZeroProbeBudget`],
    /// [`Error::ExponentOutOfRange`], or [`Error::InvalidFloor`] when the
    /// configuration is unusable, and propagates [`Error::Stalled`] from the
    /// search.
    pub fn build(self) -> Result<RatioTable, Error> {
        if self.precision < 1 || self.precision > MAX_PRECISION {
            return Err(Error::InvalidPrecision(self.precision));
        }

        if self.probe_budget == 0 {
            return Err(Error::ZeroProbeBudget);
        }

        if *self.exponents.end() > MAX_EXPONENT {
            return Err(Error::ExponentOutOfRange(*self.exponents.end()));
        }

        if let Some(floor) = self.floor {
            if !floor.is_finite() || floor <= 1.0 {
                return Err(Error::InvalidFloor(floor));
            }
        }

        let ratios = self.search_all()?;

        Ok(RatioTable {
            ratios,
            first_exponent: *self.exponents.start(),
            precision: self.precision,
            probe_budget: self.probe_budget,
        })
    }

    #[cfg(not(feature = "rayon"))]
    fn search_all(&self) -> Result<Vec<f64>, Error> {
        self.exponents
            .clone()
            .map(|exponent| self.entry(exponent))
            .collect()
    }

    // The searches are independent, so they parallelize trivially; collecting
    // into `Result<Vec<_>, _>` keeps the exponent order.
    #[cfg(feature = "rayon")]
    fn search_all(&self) -> Result<Vec<f64>, Error> {
        use rayon::prelude::*;

        self.exponents
            .clone()
            .into_par_iter()
            .map(|exponent| self.entry(exponent))
            .collect()
    }

    fn entry(&self, exponent: u32) -> Result<f64, Error> {
        let capacity = f64::from(exponent).exp2();
        let ratio = find_min_ratio(capacity, self.precision, self.probe_budget)?;

        Ok(match self.floor {
            Some(floor) if ratio <= 1.0 => floor,
            _ => ratio,
        })
    }
}

impl Default for RatioTableBuilder {
    fn default() -> RatioTableBuilder {
        RatioTableBuilder {
            precision: 6,
            probe_budget: 126,
            exponents: 7..=MAX_EXPONENT,
            floor: None,
        }
    }
}

/// A table of minimal growth ratios, one per power-of-two capacity.
///
/// For every capacity exponent `e` in its configured range, the table stores
/// the smallest ratio with the configured number of decimal places whose
/// probe-growth sequence reaches `2^e` within the configured probe budget.
/// See [`find_min_ratio`](crate::find_min_ratio) for the search itself and
/// [`Sequence`](crate::Sequence) for the sequence the ratios parameterize.
///
/// Tables are built offline and rendered with [`c_array`](RatioTable::c_array)
/// or [`plain_list`](RatioTable::plain_list) for consumers to embed.
///
/// # Examples
///
/// ```rust
/// use probe_ratios::{last_term, RatioTable};
///
/// let table = RatioTable::builder().build().unwrap();
///
/// for (exponent, ratio) in table.iter() {
///     assert!(last_term(ratio, 126) >= f64::from(exponent).exp2());
/// }
/// ```
#[derive(Clone, PartialEq)]
pub struct RatioTable {
    ratios: Vec<f64>,
    first_exponent: u32,
    precision: u32,
    probe_budget: u32,
}

impl RatioTable {
    /// Returns a builder holding the default configuration: 6 decimal
    /// places, a probe budget of 126, exponents `7..=64`, and no floor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let table = probe_ratios::RatioTable::builder().build().unwrap();
    /// assert_eq!(table.get(7), Some(1.007937));
    /// ```
    pub fn builder() -> RatioTableBuilder {
        RatioTableBuilder::default()
    }

    /// Returns the ratio for capacity `2^exponent`, or `None` if the
    /// exponent is outside the table's range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let table = probe_ratios::RatioTable::builder().build().unwrap();
    ///
    /// assert_eq!(table.get(64), Some(1.412408));
    /// assert_eq!(table.get(0), None);
    /// ```
    pub fn get(&self, exponent: u32) -> Option<f64> {
        let index = exponent.checked_sub(self.first_exponent)?;
        self.ratios.get(index as usize).copied()
    }

    /// Returns the ratios in exponent order.
    pub fn ratios(&self) -> &[f64] {
        &self.ratios
    }

    /// Returns the range of capacity exponents the table covers.
    pub fn exponents(&self) -> Range<u32> {
        self.first_exponent..self.first_exponent + self.ratios.len() as u32
    }

    /// Returns the number of decimal places the ratios were refined to.
    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Returns the probe budget the ratios were searched under.
    pub fn probe_budget(&self) -> u32 {
        self.probe_budget
    }

    /// Returns the number of entries in the table.
    pub fn len(&self) -> usize {
        self.ratios.len()
    }

    /// Returns `true` if the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.ratios.is_empty()
    }

    /// Returns an iterator over `(exponent, ratio)` pairs in exponent order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let table = probe_ratios::RatioTable::builder().build().unwrap();
    ///
    /// let (exponent, ratio) = table.iter().next().unwrap();
    /// assert_eq!((exponent, ratio), (7, 1.007937));
    /// ```
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            exponent: self.first_exponent,
            ratios: self.ratios.iter(),
        }
    }

    /// Renders the table as a C source fragment: a `#define` for the entry
    /// count and a `const float` array literal, eight values per line.
    ///
    /// The adapter implements [`Display`](std::fmt::Display), so it can be
    /// printed directly or rendered with `to_string`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let table = probe_ratios::RatioTable::builder()
    ///     .exponents(7..=8)
    ///     .build()
    ///     .unwrap();
    ///
    /// let rendered = table.c_array().to_string();
    /// assert!(rendered.starts_with("#define NUM_COMMON_RATIOS"));
    /// ```
    pub fn c_array(&self) -> CArray<'_> {
        CArray::new(self)
    }

    /// Renders the table as a bracketed literal sequence of its ratios, with
    /// no padding or wrapping.
    ///
    /// Parsing the rendered values back recovers the table's ratios exactly.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let table = probe_ratios::RatioTable::builder()
    ///     .exponents(7..=7)
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(table.plain_list().to_string(), "[1.007937]\n");
    /// ```
    pub fn plain_list(&self) -> PlainList<'_> {
        PlainList::new(self)
    }
}

impl fmt::Debug for RatioTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// An iterator over a table's `(exponent, ratio)` pairs.
///
/// See [`RatioTable::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'t> {
    exponent: u32,
    ratios: std::slice::Iter<'t, f64>,
}

impl Iterator for Iter<'_> {
    type Item = (u32, f64);

    fn next(&mut self) -> Option<(u32, f64)> {
        let ratio = *self.ratios.next()?;
        let exponent = self.exponent;
        self.exponent += 1;
        Some((exponent, ratio))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ratios.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}
