use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use countup_core::{AnimationRequest, Board, Config, Inputs};

fn running_board(counters: usize) -> Board {
    let mut board = Board::manual(Config::default()).unwrap();
    let mut inputs = Inputs::default();
    for i in 0..counters {
        let req = AnimationRequest::to(1000.0 + i as f64)
            .with_duration(60_000.0)
            .with_decimals((i % 3) as u32)
            .with_suffix("+");
        let id = board.mount(&req).unwrap();
        inputs = inputs.with_ratio(id, 1.0);
    }
    board.update(inputs);
    board
}

fn bench_frame(c: &mut Criterion) {
    for n in [4usize, 64, 1024] {
        c.bench_function(&format!("board_frame_{n}"), |b| {
            b.iter_batched(
                || running_board(n),
                |mut board| {
                    board.clock().advance(16.0);
                    black_box(board.update(Inputs::default()).changes.len());
                },
                BatchSize::SmallInput,
            )
        });
    }
}

criterion_group!(benches, bench_frame);
criterion_main!(benches);
