use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use bitstream::{Reader, Writer, FRAME_PREFIX_LEN};

fn sample_message() -> Writer {
    let mut writer = Writer::new();
    writer.put_byte(7);
    writer.put_int32(95959);
    writer.put_float32(1.5);
    writer.put_float32(-2.25);
    writer.put_float32(0.0001);
    writer.put_bool(true);
    writer.put_string("PETER PIPER PICKED A PECK of pickled peppers!");
    writer
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("bitstream");
    let size = sample_message().len() as u64;

    group.throughput(Throughput::Bytes(size));
    group.bench_function("encode_mixed", |b| {
        b.iter(|| {
            black_box(sample_message().finish());
        });
    });

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("bitstream");
    let message = sample_message().finish();
    let payload = &message[FRAME_PREFIX_LEN..];

    group.throughput(Throughput::Bytes(payload.len() as u64));
    group.bench_function("decode_mixed", |b| {
        b.iter(|| {
            let mut reader = Reader::from_payload(black_box(payload)).unwrap();
            black_box(reader.get_byte().unwrap());
            black_box(reader.get_int32().unwrap());
            black_box(reader.get_float32().unwrap());
            black_box(reader.get_float32().unwrap());
            black_box(reader.get_float32().unwrap());
            black_box(reader.get_bool().unwrap());
            black_box(reader.get_string_bytes().unwrap());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
