use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use tout::style::{Attribute, Fidelity, StyleState};
use tout::termco::{AnsiColor, Rgb};
use tout::Output;

pub fn run_benchmarks(c: &mut Criterion) {
    let mut state = StyleState::new(Fidelity::TwentyFourBit);
    state.set_foreground(Rgb::new(215, 40, 39));
    state.set_background(AnsiColor::BRIGHT_WHITE);
    state.add_style(Attribute::Bold + Attribute::Underlined + Attribute::Italic);

    let mut group = c.benchmark_group("render");

    group.bench_function("parameters", |b| b.iter(|| black_box(&state).render_parameters()));

    group.bench_function("payload", |b| {
        b.iter(|| black_box(&state).render(black_box(b"Wow!")).len())
    });

    group.bench_function("plain", |b| {
        let plain = StyleState::new(Fidelity::Plain);
        b.iter(|| black_box(&plain).render(black_box(b"Wow!")).len())
    });

    group.bench_function("println", |b| {
        let mut output = Output::with_fidelity(Vec::with_capacity(1 << 16), Fidelity::TwentyFourBit);
        output.set_foreground(Rgb::new(215, 40, 39));
        output.add_style(Attribute::Bold);
        b.iter(|| {
            output.writer_mut().clear();
            output.println(black_box("Wow!"))
        })
    });

    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
