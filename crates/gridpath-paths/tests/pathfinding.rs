use gridpath_core::{CellKind, Grid, GridError, ParseError, Point};
use gridpath_paths::{
    Algorithm, Pathfinder, Pather, PathResult, WeightedPather, astar, bfs, dijkstra, heuristic,
    path_cost,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

/// 5x5, source (0,0), destination (4,4), wall across row 2 except column 2.
fn gap_wall() -> Grid {
    let mut g = Grid::new(5, 5).unwrap();
    g.set_source(Point::new(0, 0)).unwrap();
    g.set_destination(Point::new(4, 4)).unwrap();
    for c in 0..5 {
        if c != 2 {
            g.set_obstacle(Point::new(2, c)).unwrap();
        }
    }
    g
}

/// Unit-cost view of a grid, used to count steps independently of BFS.
struct Steps<'a>(&'a Grid);

impl Pather for Steps<'_> {
    fn size(&self) -> (usize, usize) {
        self.0.size()
    }

    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        self.0.neighbors(p, buf);
    }
}

impl WeightedPather for Steps<'_> {
    fn cost(&self, _from: Point, _to: Point) -> u64 {
        1
    }
}

fn assert_valid_path(grid: &Grid, r: &PathResult) {
    if !r.is_found() {
        assert_eq!(r.total_cost, 0);
        return;
    }
    assert_eq!(r.path.first(), Some(&grid.source()));
    assert_eq!(r.path.last(), Some(&grid.destination()));
    for &p in &r.path {
        assert_ne!(grid.kind(p), Ok(CellKind::Obstacle), "{p} is an obstacle");
    }
    for w in r.path.windows(2) {
        let ok = w[0].is_orthogonal_to(w[1])
            || (grid.allow_diagonals() && w[0].is_diagonal_to(w[1]));
        assert!(ok, "{} -> {} is not a legal move", w[0], w[1]);
    }
    assert_eq!(r.total_cost, path_cost(grid, &r.path));
}

#[test]
fn gap_wall_scenario() {
    let g = gap_wall();
    for alg in Algorithm::ALL {
        let r = alg.solve(&g);
        assert_valid_path(&g, &r);
        assert_eq!(r.path.len(), 9, "{alg}");
        assert_eq!(r.steps(), 8, "{alg}");
        assert_eq!(r.total_cost, 80, "{alg}");
        assert!(r.path.contains(&Point::new(2, 2)), "{alg}");
    }
}

#[test]
fn zero_weight_load_is_rejected_without_side_effects() {
    let mut g = gap_wall();
    let before = g.clone();
    let text = concat!(
        "5,5,0,0,4,4|S.......................D|",
        "1 1 1 1 1 1 1 1 1 1 1 1 0 1 1 1 1 1 1 1 1 1 1 1 1"
    );
    let err = g.load(text).unwrap_err();
    assert!(matches!(
        err,
        GridError::Parse(ParseError::InvalidWeightToken { ref token, .. }) if token == "0"
    ));
    assert_eq!(g, before);
    assert_eq!(astar(&g).total_cost, 80);
}

#[test]
fn diagonal_neighbours_without_diagonals() {
    let mut g = Grid::new(6, 6).unwrap();
    g.set_source(Point::new(2, 2)).unwrap();
    g.set_destination(Point::new(3, 3)).unwrap();
    let r = astar(&g);
    assert_eq!(r.steps(), 2);
    assert_eq!(r.total_cost, 20);
    assert_valid_path(&g, &r);
}

#[test]
fn unreachable_destination_is_a_normal_result() {
    let mut g = Grid::new(6, 6).unwrap();
    // Box the destination at (4,4) in.
    for p in Point::new(4, 4).neighbors_4() {
        g.set_obstacle(p).unwrap();
    }
    g.set_allow_diagonals(false);
    for alg in Algorithm::ALL {
        let r = alg.solve(&g);
        assert!(!r.is_found(), "{alg}");
        assert_eq!(r.total_cost, 0);
        assert!(!r.visited.is_empty());
        assert!(!r.visited.contains(&g.destination()));
    }
}

#[test]
fn diagonals_pass_between_obstacle_corners() {
    // S #
    // # D
    let g: Grid = "2,2,0,0,1,1|S##D|1 1 1 1".parse().unwrap();
    assert!(!bfs(&g).is_found());
    let mut g = g;
    g.set_allow_diagonals(true);
    let r = dijkstra(&g);
    assert_eq!(r.path, vec![Point::new(0, 0), Point::new(1, 1)]);
    assert_eq!(r.total_cost, 14);
}

#[test]
fn weights_change_dijkstra_but_not_bfs() {
    let mut g = Grid::new(5, 5).unwrap();
    g.set_source(Point::new(0, 0)).unwrap();
    g.set_destination(Point::new(0, 4)).unwrap();
    for c in 1..4 {
        g.set_weight(Point::new(0, c), 20).unwrap();
    }
    let b = bfs(&g);
    let d = dijkstra(&g);
    let a = astar(&g);
    assert_eq!(b.steps(), 4);
    assert_eq!(b.total_cost, 3 * 200 + 10);
    assert_eq!(d.steps(), 6);
    assert_eq!(d.total_cost, 60);
    assert_eq!(a.total_cost, d.total_cost);
    assert!(b.total_cost > d.total_cost);
}

#[test]
fn marking_a_result_and_clearing_it() {
    let mut g = gap_wall();
    let r = dijkstra(&g);
    r.mark(&mut g);
    assert_eq!(g.mark(Point::new(2, 2)), Ok(gridpath_core::Mark::Path));
    g.clear_path();
    assert_eq!(g.mark(Point::new(2, 2)), Ok(gridpath_core::Mark::None));
    assert_eq!(dijkstra(&g).path, r.path);
}

#[test]
fn independent_grids_solve_in_parallel() {
    let a = gap_wall();
    let mut b = Grid::new(30, 30).unwrap();
    b.generate_random_maze_with(&mut StdRng::seed_from_u64(3));
    let (ra, rb) = std::thread::scope(|s| {
        let ha = s.spawn(|| astar(&a));
        let hb = s.spawn(|| astar(&b));
        (ha.join().unwrap(), hb.join().unwrap())
    });
    assert_eq!(ra.total_cost, 80);
    assert_eq!(rb.total_cost, dijkstra(&b).total_cost);
}

// ---------------------------------------------------------------------------
// Properties over random grids
// ---------------------------------------------------------------------------

fn random_grid(rows: usize, cols: usize, seed: u64, diagonals: bool, weighted: bool) -> Grid {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut g = Grid::new(rows, cols).unwrap();
    let src = Point::new(
        rng.random_range(0..rows as i32),
        rng.random_range(0..cols as i32),
    );
    let dst = Point::new(
        rng.random_range(0..rows as i32),
        rng.random_range(0..cols as i32),
    );
    // Either placement may collide with the other marker; the grid then
    // simply keeps its previous valid layout.
    let _ = g.set_source(src);
    let _ = g.set_destination(dst);
    g.generate_random_maze_with(&mut rng);
    if weighted {
        for p in g.points().collect::<Vec<_>>() {
            if g.kind(p) != Ok(CellKind::Obstacle) && rng.random_bool(0.4) {
                g.set_weight(p, rng.random_range(1..=9)).unwrap();
            }
        }
    }
    g.set_allow_diagonals(diagonals);
    g
}

proptest! {
    #[test]
    fn serialize_load_round_trip(
        rows in 2usize..12, cols in 2usize..12, seed in any::<u64>(),
        diagonals in any::<bool>(), weighted in any::<bool>(),
    ) {
        let g = random_grid(rows, cols, seed, diagonals, weighted);
        let mut back = Grid::new(2, 2).unwrap();
        back.load(&g.serialize()).unwrap();
        prop_assert!(back.same_layout(&g));
        prop_assert_eq!(back.serialize(), g.serialize());
    }

    #[test]
    fn exactly_one_source_and_destination(
        rows in 2usize..8, cols in 2usize..8,
        ops in proptest::collection::vec((0u8..5, 0i32..8, 0i32..8, 0u32..4), 0..60),
    ) {
        let mut g = Grid::new(rows, cols).unwrap();
        for (op, r, c, w) in ops {
            let p = Point::new(r, c);
            let _ = match op {
                0 => g.set_obstacle(p),
                1 => g.set_empty(p),
                2 => g.set_weight(p, w),
                3 => g.set_source(p),
                _ => g.set_destination(p),
            };
            prop_assert_eq!(g.count(CellKind::Source), 1);
            prop_assert_eq!(g.count(CellKind::Destination), 1);
            prop_assert_ne!(g.source(), g.destination());
            prop_assert_eq!(g.kind(g.source()), Ok(CellKind::Source));
            prop_assert_eq!(g.kind(g.destination()), Ok(CellKind::Destination));
        }
    }

    #[test]
    fn bfs_finds_fewest_steps(
        rows in 2usize..12, cols in 2usize..12, seed in any::<u64>(), diagonals in any::<bool>(),
    ) {
        let g = random_grid(rows, cols, seed, diagonals, false);
        let r = bfs(&g);
        let reference = Pathfinder::for_grid(&g)
            .dijkstra(&Steps(&g), g.source(), g.destination());
        prop_assert_eq!(r.is_found(), reference.is_found());
        prop_assert_eq!(r.steps() as u64, reference.total_cost);
        assert_valid_path(&g, &r);
    }

    #[test]
    fn dijkstra_and_astar_agree(
        rows in 2usize..14, cols in 2usize..14, seed in any::<u64>(),
        diagonals in any::<bool>(), weighted in any::<bool>(),
    ) {
        let g = random_grid(rows, cols, seed, diagonals, weighted);
        let d = dijkstra(&g);
        let a = astar(&g);
        prop_assert_eq!(d.is_found(), a.is_found());
        prop_assert_eq!(d.total_cost, a.total_cost);
        prop_assert!(a.visited.len() <= d.visited.len() || !d.is_found());
        assert_valid_path(&g, &d);
        assert_valid_path(&g, &a);
        prop_assert!(bfs(&g).total_cost >= d.total_cost);
    }

    #[test]
    fn heuristic_never_overestimates(
        rows in 2usize..9, cols in 2usize..9, seed in any::<u64>(),
        diagonals in any::<bool>(), weighted in any::<bool>(),
    ) {
        let g = random_grid(rows, cols, seed, diagonals, weighted);
        let goal = g.destination();
        let mut pf = Pathfinder::for_grid(&g);
        for p in g.points() {
            if g.kind(p) == Ok(CellKind::Obstacle) {
                continue;
            }
            let r = pf.dijkstra(&g, p, goal);
            if r.is_found() {
                prop_assert!(heuristic(p, goal, diagonals) <= r.total_cost);
            }
        }
    }
}
