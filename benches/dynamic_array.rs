use criterion::{Criterion, black_box, criterion_group, criterion_main};
use dynamic_array::{ArrayOptions, DynamicArray};

fn bench_append(c: &mut Criterion) {
    let n = 1024;
    let mut group = c.benchmark_group("Vec vs DynamicArray (Append 1024)");
    group.bench_function("std::vec::Vec", |b| {
        b.iter(|| {
            let mut v = Vec::with_capacity(1);
            for i in 0..n {
                v.push(black_box(i as i64));
            }
            v
        })
    });

    group.bench_function("DynamicArray<i64>", |b| {
        b.iter(|| {
            let mut v: DynamicArray<i64> =
                DynamicArray::with_capacity(1, ArrayOptions::new()).unwrap();
            for i in 0..n {
                v.append(black_box(i as i64)).unwrap();
            }
            v
        })
    });
    group.finish();
}

fn bench_sorted(c: &mut Criterion) {
    let n = 1024i64;
    let mut group = c.benchmark_group("Sorted Insert (1024, scattered keys)");
    group.bench_function("insert_sorted", |b| {
        b.iter(|| {
            let mut v: DynamicArray<i64> =
                DynamicArray::with_capacity(1, ArrayOptions::new().sorted()).unwrap();
            for i in 0..n {
                v.insert_sorted(black_box((i * 7919) % n)).unwrap();
            }
            v
        })
    });

    group.bench_function("insert_sorted_unique", |b| {
        b.iter(|| {
            let mut v: DynamicArray<i64> =
                DynamicArray::with_capacity(1, ArrayOptions::new().sorted()).unwrap();
            for i in 0..n {
                v.insert_sorted_unique(black_box((i * 31) % 256)).unwrap();
            }
            v
        })
    });

    let probe: DynamicArray<i64> =
        DynamicArray::from_values(&(0..n).collect::<Vec<_>>(), None, ArrayOptions::new().sorted())
            .unwrap();
    group.bench_function("location_of", |b| {
        b.iter(|| {
            for i in 0..n {
                black_box(probe.location_of(black_box(&i)).unwrap());
            }
        })
    });
    group.finish();
}

fn bench_shrink(c: &mut Criterion) {
    let mut group = c.benchmark_group("Drain With Shrink (1024)");
    group.bench_function("pop_front", |b| {
        b.iter(|| {
            let mut v: DynamicArray<i64> = (0..1024).collect();
            while let Some(x) = v.pop_front() {
                black_box(x);
            }
            v
        })
    });
    group.bench_function("pop", |b| {
        b.iter(|| {
            let mut v: DynamicArray<i64> = (0..1024).collect();
            while let Some(x) = v.pop() {
                black_box(x);
            }
            v
        })
    });
    group.finish();
}

criterion_group!(benches, bench_append, bench_sorted, bench_shrink);
criterion_main!(benches);
