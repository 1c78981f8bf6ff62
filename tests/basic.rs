use probe_ratios::{last_term, Error, RatioTable};

mod common;
use common::with_builders;

#[test]
fn every_ratio_reaches_its_capacity() {
    with_builders(|builder| {
        let table = builder().build().unwrap();

        for (exponent, ratio) in table.iter() {
            let capacity = f64::from(exponent).exp2();
            assert!(
                last_term(ratio, table.probe_budget()) >= capacity,
                "ratio {ratio} misses 2^{exponent}"
            );
        }
    });
}

#[test]
fn one_unit_less_misses_the_capacity() {
    with_builders(|builder| {
        let table = builder().build().unwrap();
        let scale = 10f64.powi(table.precision() as i32);

        for (exponent, ratio) in table.iter() {
            // Capacity 1 is reached before the first probe; its entry is
            // the configured floor, not a minimal search result.
            if exponent == 0 {
                continue;
            }

            // Step down through the scaled integer grid: subtracting the
            // unit directly lands a couple of ulp above the canonical
            // decimal, and the threshold for 2^35 sits that close to 1.2.
            let lower = ((ratio * scale).round() - 1.0) / scale;

            let capacity = f64::from(exponent).exp2();
            assert!(
                last_term(lower, table.probe_budget()) < capacity,
                "ratio {ratio} is not minimal for 2^{exponent}"
            );
        }
    });
}

#[test]
fn ratios_never_decrease() {
    with_builders(|builder| {
        let table = builder().build().unwrap();
        let mut prev: Option<f64> = None;

        for (exponent, ratio) in table.iter() {
            if exponent == 0 {
                continue;
            }

            if let Some(prev) = prev {
                assert!(ratio >= prev, "ratio for 2^{exponent} decreased");
            }

            prev = Some(ratio);
        }
    });
}

#[test]
fn accessors_agree() {
    with_builders(|builder| {
        let table = builder().build().unwrap();

        assert_eq!(table.len(), table.ratios().len());
        assert_eq!(table.len(), table.exponents().len());
        assert_eq!(table.iter().count(), table.len());

        for (i, (exponent, ratio)) in table.iter().enumerate() {
            assert_eq!(table.exponents().nth(i), Some(exponent));
            assert_eq!(table.get(exponent), Some(ratio));
            assert_eq!(table.ratios()[i], ratio);
        }
    });
}

#[test]
fn builds_are_deterministic() {
    with_builders(|builder| {
        assert_eq!(builder().build().unwrap(), builder().build().unwrap());
    });
}

#[test]
fn finer_precision_never_raises_a_ratio() {
    let narrow = RatioTable::builder().build().unwrap();
    let wide = RatioTable::builder()
        .precision(7)
        .exponents(7..=64)
        .build()
        .unwrap();

    for ((exponent, fine), (_, coarse)) in wide.iter().zip(narrow.iter()) {
        assert!(fine <= coarse, "7-digit ratio for 2^{exponent} exceeds 6-digit");
    }
}

#[test]
fn unreachable_capacity_reports_a_stall() {
    let err = RatioTable::builder()
        .probe_budget(1)
        .exponents(40..=40)
        .build()
        .unwrap_err();

    assert!(matches!(err, Error::Stalled { .. }));
}
