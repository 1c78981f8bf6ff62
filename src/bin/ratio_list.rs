//! Emits the wide-range ratio table as a plain literal list: 7 decimal
//! places, capacities from `2^0` through `2^64`, degenerate ratios floored
//! at 1.01.

use anyhow::Result;

use probe_ratios::RatioTable;

fn main() -> Result<()> {
    let table = RatioTable::builder()
        .precision(7)
        .exponents(0..=64)
        .floor(1.01)
        .build()?;

    print!("{}", table.plain_list());

    Ok(())
}
