use criterion::{criterion_group, criterion_main, Criterion, black_box};
use kestrel::{AlphaBeta, Board, Color};

fn bench_search(c: &mut Criterion) {
    c.bench_function("search_depth_4_startpos", |ben| {
        ben.iter(|| {
            let mut b = Board::startpos();
            let mut s = AlphaBeta::default();
            let r = s.search(black_box(&mut b), Color::White, 4);
            black_box(r.nodes)
        })
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
