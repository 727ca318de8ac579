use criterion::{criterion_group, criterion_main, Criterion};
use infocode::{arithmetic, huffman, metrics, shannon_fano, IntervalTable, SymbolModel};

fn bench_code_tables(c: &mut Criterion) {
    let mut group = c.benchmark_group("code_tables");
    // 4096 symbols over a 64-symbol alphabet, mildly skewed.
    let input = (0..4096u32).map(|i| ((i * i) % 64) as u8).collect::<Vec<_>>();
    let model = SymbolModel::from_symbols(input.iter().copied()).unwrap();

    group.bench_function("model", |b| {
        b.iter(|| SymbolModel::from_symbols(input.iter().copied()).unwrap())
    });

    group.bench_function("shannon_fano", |b| b.iter(|| shannon_fano::encode(&model)));

    group.bench_function("huffman", |b| b.iter(|| huffman::encode(&model)));

    let table = huffman::encode(&model);
    group.bench_function("metrics", |b| b.iter(|| metrics::evaluate(&model, &table)));

    group.finish();
}

fn bench_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("arithmetic");
    // Short message: f64 precision bounds usable message length.
    let terminator = 0xFFu8;
    let message = (0..24u32)
        .map(|i| (i % 3) as u8)
        .chain([terminator])
        .collect::<Vec<_>>();
    let model = SymbolModel::from_symbols(message.iter().copied()).unwrap();
    let table = IntervalTable::new(&model);

    group.bench_function("encode", |b| {
        b.iter(|| arithmetic::encode(&message, &table).unwrap())
    });

    let (value, _) = arithmetic::encode(&message, &table).unwrap();
    group.bench_function("decode", |b| {
        b.iter(|| {
            arithmetic::decode(value, &table, terminator, arithmetic::DEFAULT_MAX_STEPS).unwrap()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_code_tables, bench_arithmetic);
criterion_main!(benches);
