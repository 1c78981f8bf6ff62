//! Emits the default ratio table as a C array for pasting into a consumer:
//! 6 decimal places, a probe budget of 126, and capacities from `2^7` up.

use anyhow::Result;

use probe_ratios::RatioTable;

fn main() -> Result<()> {
    let table = RatioTable::builder().build()?;
    print!("{}", table.c_array());

    Ok(())
}
