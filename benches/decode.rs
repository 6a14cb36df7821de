use cancraft::{
    bits::ByteOrder,
    codec::CanCodec,
    frame::Frame,
    message::{Message, Schema},
    signal::Signal,
};
use criterion::{Criterion, criterion_group, criterion_main};

fn gen_codec(signal_count: usize) -> CanCodec {
    let mut signals = Vec::with_capacity(signal_count);

    for i in 0..signal_count {
        let order = if i % 2 == 0 {
            ByteOrder::LittleEndian
        } else {
            ByteOrder::BigEndian
        };
        let mut signal = Signal::new(&format!("s{}", i), i * 8, 8, order);
        signal.factor = 0.25;
        signal.offset = -40.0;
        signals.push(signal);
    }

    let mut codec = CanCodec::new();
    codec.attach_schema(Schema::new(vec![Message::new(
        "BenchMessage",
        0x100,
        signal_count,
        signals,
    )]));

    codec
}

fn gen_payload(len: usize) -> Vec<u8> {
    // Deterministic but non-trivial pattern
    (0..len).map(|i| (i * 31 % 256) as u8).collect()
}

fn bench_decode(c: &mut Criterion) {
    for &signal_count in &[1usize, 8, 32, 64] {
        let codec = gen_codec(signal_count);
        let payload = gen_payload(signal_count);

        c.bench_function(&format!("decode_{}_signals", signal_count), |b| {
            b.iter(|| {
                let frame = Frame::new(0x100, payload.clone(), false).unwrap();
                let _ = codec.decode(frame).unwrap().unwrap();
            })
        });
    }
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
