use criterion::{criterion_group, criterion_main, Criterion};
use digest::{FixedOutput, Update};
use rand::Rng;
use streebog::{Streebog256, Streebog512};

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut rnd = rand::thread_rng();
    let mut buf = [0; 600];
    for i in buf.iter_mut() {
        *i = rnd.gen();
    }

    c.bench_function("hash 600 bytes (512)", |b| {
        b.iter(|| {
            let mut cw = Streebog512::default();
            cw.update(&buf);
            cw.finalize_fixed();
        })
    });

    c.bench_function("hash 600 bytes (256)", |b| {
        b.iter(|| {
            let mut cw = Streebog256::default();
            cw.update(&buf);
            cw.finalize_fixed();
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
