use criterion::{criterion_group, criterion_main, Criterion};
use gridmaze::{
    gameboard::{
        algorithms::{random_from_seed, MazeGenerator, RndKruskals},
        CellState, Model,
    },
    solvers::{AStarSolver, BfsSolver, MazeSolver},
};

const SIZE: usize = 101;

fn maze() -> Model {
    let mut model = Model::new(SIZE);
    RndKruskals.create(SIZE, &mut model, &mut random_from_seed(Some(7)));
    model.update_model(1, 1, CellState::Begin);
    model.update_model(SIZE as i32 - 2, SIZE as i32 - 2, CellState::End);
    model
}

pub fn bfs(c: &mut Criterion) {
    let mut model = maze();
    c.bench_function("bfs", |b| b.iter(|| BfsSolver::new(&mut model).solve(1, 1)));
}

pub fn astar(c: &mut Criterion) {
    let mut model = maze();
    c.bench_function("astar", |b| b.iter(|| AStarSolver::new(&mut model).solve(1, 1)));
}

criterion_group! {name = benches; config = Criterion::default().sample_size(10); targets = bfs, astar}
criterion_main!(benches);
