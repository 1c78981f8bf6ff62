use std::fmt;

use crate::table::RatioTable;

/// Renders a [`RatioTable`] as a C source fragment.
///
/// The output is a `#define` for the entry count followed by a `const float`
/// array literal, ready to paste into a consumer. Values are right-padded
/// with spaces to a column width of `precision + 2` and wrapped after every
/// eighth entry onto a tab-indented continuation line.
///
/// Returned by [`RatioTable::c_array`]; implements [`Display`](fmt::Display).
pub struct CArray<'t> {
    table: &'t RatioTable,
}

impl<'t> CArray<'t> {
    pub(crate) fn new(table: &'t RatioTable) -> CArray<'t> {
        CArray { table }
    }
}

impl fmt::Display for CArray<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.table.precision() + 2) as usize;
        let count = self.table.len();

        writeln!(f, "#define NUM_COMMON_RATIOS   {count}")?;
        write!(f, "const float common_ratios[NUM_COMMON_RATIOS] = {{\n\t")?;

        for (i, &ratio) in self.table.ratios().iter().enumerate() {
            let value = decimal(ratio);

            // Entries that close a row of eight keep their comma, even in
            // last position; a last entry mid-row drops it.
            if (i + 1) % 8 == 0 {
                write!(f, "{value:<width$},\n\t")?;
            } else if i + 1 == count {
                writeln!(f, "{value:<width$}")?;
            } else {
                write!(f, "{value:<width$}, ")?;
            }
        }

        writeln!(f, "}};")
    }
}

/// Renders a [`RatioTable`] as a bracketed literal sequence.
///
/// Values are comma-separated in exponent order with no padding or wrapping,
/// and round-trip exactly through parsing.
///
/// Returned by [`RatioTable::plain_list`]; implements
/// [`Display`](fmt::Display).
pub struct PlainList<'t> {
    table: &'t RatioTable,
}

impl<'t> PlainList<'t> {
    pub(crate) fn new(table: &'t RatioTable) -> PlainList<'t> {
        PlainList { table }
    }
}

impl fmt::Display for PlainList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;

        for (i, &ratio) in self.table.ratios().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }

            f.write_str(&decimal(ratio))?;
        }

        writeln!(f, "]")
    }
}

// Shortest decimal form, with a forced fractional part so whole-number
// ratios render as float literals.
fn decimal(ratio: f64) -> String {
    let mut value = ratio.to_string();

    if !value.contains('.') {
        value.push_str(".0");
    }

    value
}
