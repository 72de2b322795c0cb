use criterion::{Criterion, criterion_group, criterion_main};
use scaledui_serialization::{Read, VarUint, Write};
use std::hint::black_box;

type ScheduledPayload = (u64, (VarUint, VarUint), Option<String>);

fn bench(value: &[u8]) {
    let _ = ScheduledPayload::unpack(value).unwrap();
}

fn criterion_benchmark(c: &mut Criterion) {
    let value: ScheduledPayload = (
        1_700_000_000,
        (VarUint(1_000_000_000), VarUint(3_000_000_000)),
        Some("stock split 3:1".to_string()),
    );
    let value = value.pack().unwrap();
    c.bench_function("unpack scheduled payload", |b| {
        b.iter(|| bench(black_box(&value)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
