use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use emotion_dispatch::config::ClientConfig;
use emotion_dispatch::dispatcher::Dispatcher;
use emotion_dispatch::target::build_target;
use emotion_dispatch::transport::{Transport, TransportReply};
use emotion_dispatch::ui::{DisplaySink, InMemoryField, InMemoryPanel};

/// Transport that completes immediately; isolates dispatch overhead.
struct NoopTransport;

impl Transport for NoopTransport {
    fn fetch(&self, _target: &str) -> anyhow::Result<TransportReply> {
        Ok(TransportReply {
            status: 200,
            body: "joy".to_string(),
        })
    }
}

fn bench_build_target(c: &mut Criterion) {
    let raw = ClientConfig::default();
    let encoded = ClientConfig {
        encode_input: true,
        ..ClientConfig::default()
    };
    let text = "I am really glad this happened to us today";

    c.bench_function("build_target_raw", |b| {
        b.iter(|| build_target(black_box(&raw), black_box(text)))
    });
    c.bench_function("build_target_encoded", |b| {
        b.iter(|| build_target(black_box(&encoded), black_box(text)))
    });
}

fn bench_dispatch_round_trip(c: &mut Criterion) {
    may::config().set_stack_size(0x8000);
    let display = Arc::new(InMemoryPanel::new());
    let dispatcher = Dispatcher::new(
        Arc::new(NoopTransport),
        Arc::clone(&display) as Arc<dyn DisplaySink>,
        ClientConfig::default(),
    );
    let field = InMemoryField::new("I am glad");

    c.bench_function("dispatch_round_trip", |b| {
        b.iter(|| {
            let handle = dispatcher.dispatch(black_box(&field));
            handle.wait().unwrap()
        })
    });
}

criterion_group!(benches, bench_build_target, bench_dispatch_round_trip);
criterion_main!(benches);
