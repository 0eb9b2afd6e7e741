// std imports
use std::{
    hint::black_box,
    io::{Cursor, Read},
    time::Duration,
};

// third-party imports
use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, criterion_group};

// workspace imports
use teeio::{Discard, Silent, Tee};

// local imports
use super::ND;

criterion_group!(benches, bench);

const GROUP: &str = "tee";

fn bench(c: &mut Criterion) {
    let mut group = c.benchmark_group(GROUP);
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(5));

    for (size, chunk) in [(4096, 1), (65536, 512), (1 << 20, 8192)] {
        let data: Vec<u8> = (0..size).map(|i| i as u8).collect();
        let param = format!("{size}{ND}{chunk}");
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_function(BenchmarkId::new("plain", &param), |b| {
            let mut buf = vec![0; chunk];
            b.iter_batched_ref(
                || Cursor::new(data.as_slice()),
                |source| drain(source, &mut buf),
                BatchSize::SmallInput,
            );
        });

        group.bench_function(BenchmarkId::new("discard", &param), |b| {
            let mut buf = vec![0; chunk];
            b.iter_batched_ref(
                || data.as_slice().tee(Discard),
                |tee| drain(tee, &mut buf),
                BatchSize::SmallInput,
            );
        });

        group.bench_function(BenchmarkId::new("silent-vec", &param), |b| {
            let mut buf = vec![0; chunk];
            b.iter_batched_ref(
                || data.as_slice().tee(Silent::new(Vec::with_capacity(size))),
                |tee| drain(tee, &mut buf),
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn drain<R: Read>(reader: &mut R, buf: &mut [u8]) -> usize {
    let mut total = 0;
    loop {
        let n = reader.read(buf).unwrap();
        if n == 0 {
            return black_box(total);
        }
        total += n;
    }
}
