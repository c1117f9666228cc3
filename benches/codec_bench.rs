//! Benchmarks for the PJLink codec

use criterion::{criterion_group, criterion_main, Criterion};

use pjlink::protocol::vocab::CommandCode;
use pjlink::protocol::{decode_command, decode_response, encode_command, Command};

fn codec_benchmarks(c: &mut Criterion) {
    let command = Command::new(CommandCode::Power, "1", 1).unwrap();
    let encoded = encode_command(&command);
    let reply: &[u8] = b"%1ERST=20020\r";

    c.bench_function("encode_command", |b| {
        b.iter(|| encode_command(std::hint::black_box(&command)))
    });

    c.bench_function("decode_command", |b| {
        b.iter(|| decode_command(std::hint::black_box(&encoded)).unwrap())
    });

    c.bench_function("decode_response", |b| {
        b.iter(|| decode_response(std::hint::black_box(reply)).unwrap())
    });
}

criterion_group!(benches, codec_benchmarks);
criterion_main!(benches);
