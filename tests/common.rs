#![allow(dead_code)]

use probe_ratios::{RatioTable, RatioTableBuilder};

// Run the test on different table configurations.
pub fn with_builders(mut test: impl FnMut(&dyn Fn() -> RatioTableBuilder)) {
    // The historical consumer configuration: 6 digits, capacities from 128 up.
    if !cfg!(probe_ratios_stress) {
        test(&RatioTable::builder);
    }

    // The wide-range variant: 7 digits, every capacity down to a single
    // bucket, with degenerate ratios floored.
    test(
        &(|| {
            RatioTable::builder()
                .precision(7)
                .exponents(0..=64)
                .floor(1.01)
        }),
    );

    // Coarse precision, where a single increment of the last place is a
    // large step relative to the ratio.
    test(
        &(|| {
            RatioTable::builder()
                .precision(3)
                .exponents(0..=32)
                .floor(1.001)
        }),
    );
}

// Prints a log message if `RUST_LOG=debug` is set.
#[macro_export]
macro_rules! debug {
    ($($x:tt)*) => {
        if std::env::var("RUST_LOG").as_deref() == Ok("debug") {
            println!($($x)*);
        }
    };
}

// Returns the number of threads to use for stress testing.
pub fn threads() -> usize {
    if cfg!(miri) {
        2
    } else {
        num_cpus::get_physical().next_power_of_two()
    }
}
