use criterion::{criterion_group, criterion_main, Criterion, black_box};
use kestrel::eval::MasterEvaluator;
use kestrel::search::{QuiescenceSearch, INFINITY};
use kestrel::Position;
use std::sync::Arc;

fn bench_qsearch(c: &mut Criterion) {
    let pos = Position::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w - - 0 1").unwrap();
    let mut qs = QuiescenceSearch::new(Arc::new(MasterEvaluator::default()));
    c.bench_function("qsearch_kiwipete", |ben| {
        ben.iter(|| {
            let mut board = pos.board().clone();
            let v = qs.search_captures(black_box(&mut board), pos.side_to_move(), -INFINITY, INFINITY);
            black_box(v)
        })
    });
}

criterion_group!(benches, bench_qsearch);
criterion_main!(benches);
