use criterion::{black_box, criterion_group, criterion_main, Criterion};

use saes_core::{decrypt_block, encrypt_block, expand_key, Saes, SaesKey};

fn bench_key_schedule(c: &mut Criterion) {
    let mut group = c.benchmark_group("key_schedule");
    group.bench_function("expand_key", |b| {
        b.iter(|| expand_key(black_box(&SaesKey(0x4af5))));
    });
    group.finish();
}

fn bench_blocks(c: &mut Criterion) {
    let round_keys = expand_key(&SaesKey(0x4af5));
    let cipher = Saes::new(SaesKey(0x4af5));

    let mut group = c.benchmark_group("blocks");
    group.bench_function("encrypt_block", |b| {
        b.iter(|| encrypt_block(black_box(0xd728), &round_keys));
    });
    group.bench_function("decrypt_block", |b| {
        b.iter(|| decrypt_block(black_box(0x24ec), &round_keys));
    });
    group.bench_function("encrypt_all_blocks", |b| {
        b.iter(|| {
            let mut acc = 0u16;
            for block in 0..=u16::MAX {
                acc ^= cipher.encrypt(block);
            }
            acc
        });
    });
    group.finish();
}

criterion_group!(benches, bench_key_schedule, bench_blocks);
criterion_main!(benches);
