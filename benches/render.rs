use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use std::time::{Duration, Instant};
use tilde::buffer::Document;
use tilde::input::Key;
use tilde::ui::{compose, Viewport};
use tilde::Editor;

fn large_document() -> Document {
    let lines = (0..10_000)
        .map(|i| format!("{}\tfn item_{}() {{ let value = {}; }}\t// trailing", i, i, i * 7));
    Document::from_lines(lines, 4)
}

/// フレーム合成のパフォーマンステスト
fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("compositor");
    group.measurement_time(Duration::from_secs(5));

    let mut editor = Editor::new(large_document(), Viewport::new(48, 160));
    editor.set_status_message("HELP: Ctrl-Q = quit");
    editor.scroll();

    group.bench_function("compose_full_frame", |b| {
        b.iter(|| compose(black_box(&editor), Instant::now()).unwrap())
    });

    group.finish();
}

/// ページ送りとスクロール
fn bench_navigation(c: &mut Criterion) {
    let mut group = c.benchmark_group("navigation");

    group.bench_function("page_down_through_document", |b| {
        b.iter_batched(
            || Editor::new(large_document(), Viewport::new(48, 160)),
            |mut editor| {
                for _ in 0..200 {
                    editor.process_key(black_box(Key::PageDown));
                    editor.scroll();
                }
                editor
            },
            BatchSize::LargeInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_compose, bench_navigation);
criterion_main!(benches);
