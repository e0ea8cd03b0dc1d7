use stepstar_core::heuristics::{chebyshev, manhattan};
use stepstar_core::search::find_path;
use stepstar_core::{Engine, Grid, GridPos, MovementMode, Outcome, SearchOptions};

fn p(x: i32, y: i32) -> GridPos {
    GridPos::new(x, y)
}

/// 5x5, wall at x = 1 for y = 0..=3, single block at (3,4).
fn walled_grid() -> Grid {
    let mut grid = Grid::new(5, 5).unwrap();
    for y in 0..=3 {
        grid.block(p(1, y)).unwrap();
    }
    grid.block(p(3, 4)).unwrap();
    grid
}

#[test]
fn walks_around_the_wall_step_by_step() {
    let grid = walled_grid();
    let mut engine = Engine::new(chebyshev);
    let mut requested = Vec::new();
    let mut out = engine.begin(p(0, 0), p(4, 4)).unwrap();
    while let Outcome::Request(at) = out {
        assert!(grid.is_walkable(at));
        requested.push(at);
        out = engine.advance(grid.neighbors(at)).unwrap();
    }
    let path = out.into_path().expect("route exists");
    assert_eq!(
        path.steps(),
        &[p(0, 0), p(0, 1), p(0, 2), p(0, 3), p(1, 4), p(2, 3), p(3, 3), p(4, 4)]
    );
    assert_eq!(
        requested,
        vec![p(0, 0), p(0, 1), p(0, 2), p(0, 3), p(1, 4), p(2, 3), p(2, 4), p(3, 3)]
    );
    assert_eq!(engine.stats().expanded, 8);
}

#[test]
fn heuristic_never_increases_along_route() {
    let grid = walled_grid();
    let goal = p(4, 4);
    let mut engine = Engine::new(chebyshev);
    let res = find_path(&mut engine, &grid, p(0, 0), goal, &SearchOptions::default()).unwrap();
    let route = res.path.expect("route exists");
    let h: Vec<f64> = route.iter().map(|c| chebyshev(c, &goal)).collect();
    assert!(h.windows(2).all(|w| w[1] <= w[0]), "heuristic along route: {h:?}");
    assert_eq!(h.last().copied(), Some(0.0));
}

#[test]
fn driver_matches_manual_protocol() {
    let grid = walled_grid();
    let mut engine = Engine::new(chebyshev);
    let res = find_path(&mut engine, &grid, p(0, 0), p(4, 4), &SearchOptions::default()).unwrap();
    assert_eq!(res.path.as_ref().map(|r| r.len()), Some(8));
    assert_eq!(res.cost, 7);
    assert_eq!(res.expanded, 8);
    for w in res.path.unwrap().windows(2) {
        let (dx, dy) = ((w[0].x - w[1].x).abs(), (w[0].y - w[1].y).abs());
        assert!(dx <= 1 && dy <= 1 && dx + dy > 0, "{} -> {} is not one step", w[0], w[1]);
        assert!(grid.is_walkable(w[1]));
    }
}

#[test]
fn cardinal_maze_finds_shortest_route() {
    let grid = Grid::from_ascii(
        "\
.....
.###.
...#.
.#...
",
    )
    .unwrap()
    .with_movement(MovementMode::Cardinal);
    let mut engine = Engine::new(manhattan);
    let res = find_path(&mut engine, &grid, p(0, 0), p(4, 3), &SearchOptions::default()).unwrap();
    let route = res.path.expect("route exists");
    assert_eq!(res.cost, 7);
    assert_eq!(route.first(), Some(&p(0, 0)));
    assert_eq!(route.last(), Some(&p(4, 3)));
    for w in route.windows(2) {
        assert_eq!((w[0].x - w[1].x).abs() + (w[0].y - w[1].y).abs(), 1);
    }
}

#[test]
fn start_equal_to_goal_on_grid() {
    let grid = walled_grid();
    let mut engine = Engine::new(chebyshev);
    engine.begin(p(2, 2), p(2, 2)).unwrap();
    let path = engine.advance([p(2, 2)]).unwrap().into_path().unwrap();
    assert_eq!(path.steps(), &[p(2, 2), p(2, 2)]);
    // a grid never lists a cell as its own neighbor; the goal is met again
    // one step out, giving a round trip
    let res = find_path(&mut engine, &grid, p(2, 2), p(2, 2), &SearchOptions::default()).unwrap();
    assert_eq!(res.path, Some(vec![p(2, 2), p(2, 1), p(2, 2)]));
    assert_eq!(res.cost, 2);
}
