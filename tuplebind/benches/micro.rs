use criterion::{black_box, criterion_group, criterion_main, BenchmarkGroup, Criterion};
use criterion::measurement::WallTime;
use tuplebind::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum Source {
    Tuple,
    Array,
    Borrowed,
}

fn bind_three(source: Source, values: &(u64, u64, u64), slots: &mut [u64; 3]) {
    let [a, b, c] = slots;
    let mut binder = Binder::new((a, b, c));
    match source {
        Source::Tuple => {
            binder.set(black_box(*values));
        }
        Source::Array => {
            binder.set(black_box([values.0, values.1, values.2]));
        }
        Source::Borrowed => {
            binder.set(black_box(values));
        }
    }
}

fn native_three(values: &(u64, u64, u64), slots: &mut [u64; 3]) {
    let (a, b, c) = black_box(*values);
    slots[0] = a;
    slots[1] = b;
    slots[2] = c;
}

fn bench_source(g: &mut BenchmarkGroup<WallTime>, name: &str, source: Source) {
    let values = (1, 2, 3);
    let mut slots = [0; 3];
    g.bench_function(name, |b| {
        b.iter(|| {
            bind_three(source, &values, &mut slots);
            black_box(&slots);
        })
    });
}

fn bench_three(c: &mut Criterion) {
    use Source::*;
    let mut g = c.benchmark_group("three");
    bench_source(&mut g, "tuple", Tuple);
    bench_source(&mut g, "array", Array);
    bench_source(&mut g, "borrowed", Borrowed);

    let values = (1, 2, 3);
    let mut slots = [0; 3];
    g.bench_function("native", |b| {
        b.iter(|| {
            native_three(&values, &mut slots);
            black_box(&slots);
        })
    });
    g.finish();
}

fn bench_strings(c: &mut Criterion) {
    let mut g = c.benchmark_group("strings");
    let source = (String::from("left"), String::from("right"));
    let (mut left, mut right) = (String::new(), String::new());
    g.bench_function("cloned", |b| {
        b.iter(|| {
            bind!(left, right).set(black_box(&source));
        })
    });
    g.bench_function("converted", |b| {
        b.iter(|| {
            bind!(left, right).set_into(black_box(("left", "right")));
        })
    });
    g.finish();
}

criterion_group!(benches, bench_three, bench_strings);
criterion_main!(benches);
