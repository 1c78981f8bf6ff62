#![no_main]

use libfuzzer_sys::fuzz_target;

use arbitrary::Arbitrary;
use probe_ratios::{find_min_ratio, last_term, Error, RatioTable};

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    precision: u32,
    probe_budget: u32,
    exponent: u32,
    floor: Option<u8>,
}

fn fuzz_search(input: FuzzInput) {
    let precision = input.precision % 9 + 1;
    let probe_budget = input.probe_budget % 512 + 1;
    let exponent = input.exponent % 65;
    let capacity = f64::from(exponent).exp2();
    let unit = 10f64.powi(-(precision as i32));

    let raw = match find_min_ratio(capacity, precision, probe_budget) {
        Ok(raw) => raw,
        // A stall means the capacity is out of reach for this budget; any
        // other error is a bug, the configuration is valid by construction.
        Err(Error::Stalled { .. }) => return,
        Err(err) => panic!("unexpected search error: {err}"),
    };

    // The search is a pure function of its configuration.
    assert_eq!(find_min_ratio(capacity, precision, probe_budget), Ok(raw));
    assert!(raw.is_finite() && raw > 0.0);

    // The result brackets the reachability threshold: two increments above
    // always reach the capacity, three below never do.
    assert!(last_term(raw + 2.0 * unit, probe_budget) >= capacity);
    assert!(last_term(raw - 3.0 * unit, probe_budget) < capacity);

    let mut builder = RatioTable::builder()
        .precision(precision)
        .probe_budget(probe_budget)
        .exponents(exponent..=exponent);

    let floor = input.floor.map(|f| 1.0 + (f64::from(f) + 1.0) / 256.0);
    if let Some(floor) = floor {
        builder = builder.floor(floor);
    }

    let table = builder.build().unwrap();
    let entry = table.get(exponent).unwrap();

    // The floor replaces exactly the degenerate results.
    match floor {
        Some(floor) if raw <= 1.0 => assert_eq!(entry, floor),
        _ => assert_eq!(entry, raw),
    }

    // Both renderings are projections of the same table.
    let rendered = table.plain_list().to_string();
    let inner = &rendered.trim_end()[1..rendered.trim_end().len() - 1];
    let parsed: f64 = inner.parse().unwrap();
    assert_eq!(parsed, entry);

    let c_array = table.c_array().to_string();
    assert!(c_array.starts_with("#define NUM_COMMON_RATIOS   1\n"));
    assert!(c_array.ends_with("};\n"));
}

fuzz_target!(|data: FuzzInput| {
    fuzz_search(data);
});
