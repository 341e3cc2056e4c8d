use criterion::{black_box, criterion_group, criterion_main, Criterion};
use maze::{load_maze, Maze, Solver, Strategy};

fn load_base_map_scaled(factor: usize) -> Maze {
    let mut maze = load_maze("data/maze2.txt").unwrap();
    maze.scale_up(factor);
    maze
}

fn bench_map_scaled(c: &mut Criterion, factor: usize) {
    let maze = load_base_map_scaled(factor);

    for strategy in [Strategy::Queue, Strategy::Stack] {
        c.bench_function(&format!("maze2_scaled_{}_{}", factor, strategy), |b| {
            b.iter(|| {
                let mut solver = Solver::new(black_box(&maze), strategy);
                assert!(solver.solve().is_ok());
            })
        });
    }
}

pub fn map_small(c: &mut Criterion) {
    bench_map_scaled(c, 1);
}

pub fn map_medium(c: &mut Criterion) {
    bench_map_scaled(c, 2);
}

pub fn map_large(c: &mut Criterion) {
    bench_map_scaled(c, 4);
}

criterion_group!(benches, map_small, map_medium, map_large);
criterion_main!(benches);
