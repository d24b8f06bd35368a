use criterion::{criterion_group, criterion_main, Criterion};
use rewind_2048_core::{Board, Direction, Game, Grid, Transition};
use std::hint::black_box;

/// A spread of board densities reached by playing a seeded game.
fn corpus() -> Vec<Grid> {
    let mut game = Game::new(42);
    let seq = [Direction::Left, Direction::Up, Direction::Right, Direction::Down];
    let mut grids = vec![*game.grid()];
    for i in 0..40 {
        if game.shift(seq[i % seq.len()]).moved {
            grids.push(*game.grid());
        }
    }
    grids
}

fn bench_shift(c: &mut Criterion) {
    let grids = corpus();
    for dir in Direction::all() {
        c.bench_function(&format!("shift/{:?}", dir).to_lowercase(), |bch| {
            bch.iter(|| {
                let mut acc = 0u32;
                for &grid in &grids {
                    let mut board = Board::with_grid(grid, 0, 0);
                    acc ^= board.shift(dir) as u32 ^ board.score();
                }
                black_box(acc)
            })
        });
    }
}

fn bench_undo(c: &mut Criterion) {
    c.bench_function("game/move_then_undo", |bch| {
        let mut game = Game::new(7);
        bch.iter(|| {
            for dir in Direction::all() {
                if game.shift(dir).moved {
                    game.undo();
                }
            }
            black_box(game.score())
        })
    });
}

fn bench_transition(c: &mut Criterion) {
    let grids = corpus();
    c.bench_function("transition/plan_left", |bch| {
        bch.iter(|| {
            let mut n = 0usize;
            for grid in &grids {
                n += Transition::new(grid, Direction::Left, 6).motions().len();
            }
            black_box(n)
        })
    });
}

criterion_group!(benches, bench_shift, bench_undo, bench_transition);
criterion_main!(benches);
