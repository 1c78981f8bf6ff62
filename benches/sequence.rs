use criterion::{black_box, criterion_group, criterion_main, Criterion};

use probe_ratios::{last_term, Sequence};

fn evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("last_term");

    for &(name, ratio) in &[("near_one", 1.000001), ("mid", 1.1), ("steep", 1.412408)] {
        group.bench_function(name, |b| {
            b.iter(|| black_box(last_term(black_box(ratio), 126)))
        });
    }

    group.finish();
}

fn offsets(c: &mut Criterion) {
    c.bench_function("sequence_sum", |b| {
        b.iter(|| black_box(Sequence::new(black_box(1.1), 126).sum::<u64>()))
    });
}

criterion_group!(benches, evaluate, offsets);
criterion_main!(benches);
