use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use gridpath_core::Grid;
use gridpath_paths::{Algorithm, Pathfinder};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn maze(side: usize, diagonals: bool) -> Grid {
    let mut grid = Grid::new(side, side).expect("valid dimensions");
    grid.generate_random_maze_with(&mut StdRng::seed_from_u64(0x5eed));
    grid.set_allow_diagonals(diagonals);
    grid
}

fn bench_solve(c: &mut Criterion) {
    for diagonals in [false, true] {
        let name = if diagonals { "solve/8-way" } else { "solve/4-way" };
        let mut group = c.benchmark_group(name);
        for &side in &[32usize, 64, 128] {
            let grid = maze(side, diagonals);
            let mut pf = Pathfinder::for_grid(&grid);
            for alg in Algorithm::ALL {
                group.bench_with_input(BenchmarkId::new(alg.name(), side), &side, |b, &_side| {
                    b.iter(|| black_box(alg.solve_with(&mut pf, &grid).total_cost))
                });
            }
        }
        group.finish();
    }
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);
