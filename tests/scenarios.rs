use sparse_life::{
    advance, candidates, cell, neighbors, pattern, Cell, HashedWorld, SortedWorld, World,
};

fn world<W: World>(cells: &[(i64, i64)]) -> W {
    cells.iter().copied().map(Cell::from).collect()
}

fn advance_n<W: World>(world: &W, generations: usize) -> W {
    let mut current = world.clone();
    for _ in 0..generations {
        current = advance(&current);
    }
    current
}

/// Seeds covering still lifes, oscillators, spaceships, dying and growing
/// patterns.
fn seeds() -> Vec<HashedWorld> {
    vec![
        world(&[]),
        world(&[(0, 0)]),
        world(&[(0, 0), (1, 0)]),
        world(&[(0, 0), (0, 1), (1, 0), (1, 1)]),
        world(&[(0, -1), (0, 0), (0, 1)]),
        pattern::glider(),
        world(&[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)]),
        world(&[(0, 0), (2, 0), (4, 0), (1, 3), (3, 3), (-5, 7), (-4, 7), (-3, 7)]),
        pattern::deserialize(".O.\n..O\nOOO\n\n....OO\n....OO\n"),
    ]
}

#[test]
fn empty_world_is_absorbing() {
    let empty = HashedWorld::new();
    assert_eq!(advance(&empty), empty);
    assert_eq!(advance_n(&empty, 10), empty);
    assert!(candidates(&empty).is_empty());
}

#[test]
fn isolated_cell_dies() {
    let single: HashedWorld = world(&[(0, 0)]);
    assert_eq!(advance(&single), HashedWorld::new());
}

#[test]
fn block_is_stable() {
    let block: HashedWorld = world(&[(0, 0), (0, 1), (1, 0), (1, 1)]);
    assert_eq!(advance(&block), block);
    assert_eq!(advance_n(&block, 5), block);
}

#[test]
fn blinker_oscillates() {
    let line: HashedWorld = world(&[(0, -1), (0, 0), (0, 1)]);
    let column: HashedWorld = world(&[(-1, 0), (0, 0), (1, 0)]);
    assert_eq!(advance(&line), column);
    assert_eq!(advance(&column), line);
    assert_eq!(advance_n(&line, 2), line);
}

#[test]
fn blinker_oscillates_on_sorted_world() {
    let line: SortedWorld = world(&[(0, -1), (0, 0), (0, 1)]);
    let column: SortedWorld = world(&[(-1, 0), (0, 0), (1, 0)]);
    assert_eq!(advance(&line), column);
    assert_eq!(advance(&column), line);
}

#[test]
fn translation_invariance() {
    let offsets = [(0, 0), (1, 0), (0, -1), (-7, 13), (1_000_003, -999_983), (i64::MAX / 2, 42)];
    for seed in seeds() {
        for (dx, dy) in offsets {
            let moved_then_advanced = advance(&seed.shifted(dx, dy));
            let advanced_then_moved = advance(&seed).shifted(dx, dy);
            assert_eq!(moved_then_advanced, advanced_then_moved, "offset ({dx}, {dy})");
        }
    }
}

#[test]
fn translation_invariance_across_the_wrap() {
    let seed: HashedWorld = pattern::glider();
    let at_edge = seed.shifted(i64::MAX - 1, i64::MIN);
    assert_eq!(advance_n(&at_edge, 4), advance_n(&seed, 4).shifted(i64::MAX - 1, i64::MIN));
}

#[test]
fn frontier_is_sound() {
    for seed in seeds() {
        let mut current = seed;
        for _ in 0..6 {
            let frontier = candidates(&current);
            let next = advance(&current);
            for alive in next.actives() {
                assert!(frontier.contains(alive), "{alive} born outside the frontier");
            }
            current = next;
        }
    }
}

#[test]
fn neighbor_relation_is_symmetric() {
    let probes = [
        cell!(0, 0),
        cell!(-3, 8),
        cell!(i64::MAX, 0),
        cell!(i64::MIN, i64::MAX),
    ];
    for a in probes {
        for b in neighbors(a) {
            assert!(neighbors(b).contains(&a), "{a} is not a neighbor of {b}");
        }
    }
}

#[test]
fn rule_is_total_far_from_the_world() {
    let block: HashedWorld = world(&[(0, 0), (0, 1), (1, 0), (1, 1)]);
    for far in [cell!(i64::MAX, i64::MAX), cell!(i64::MIN, 0), cell!(50, -50)] {
        assert!(!sparse_life::must_live(far, &block));
        assert_eq!(sparse_life::live_neighbor_count(far, &block), 0);
    }
}

#[test]
fn glider_travels() {
    let glider: HashedWorld = pattern::glider();
    assert_eq!(advance_n(&glider, 40), glider.shifted(10, 10));
}

#[test]
fn bundled_patterns_load() {
    let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("patterns");
    let glider: HashedWorld = pattern::load(&dir.join("glider.txt")).unwrap();
    assert_eq!(glider, pattern::glider::<HashedWorld>());

    let r_pentomino: SortedWorld = pattern::load(&dir.join("r-pentomino.txt")).unwrap();
    assert_eq!(r_pentomino, world(&[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)]));
}

#[test]
fn glider_gun_keeps_firing() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("patterns")
        .join("gosper-glider-gun.txt");
    let gun: HashedWorld = pattern::load(&path).unwrap();
    assert_eq!(gun.len(), 36);

    let (min, max) = gun.bounds().unwrap();
    let within_gun = |world: &HashedWorld| -> HashedWorld {
        world
            .actives()
            .filter(|c| (min.x..=max.x).contains(&c.x) && (min.y..=max.y).contains(&c.y))
            .collect()
    };

    // one period later the gun is back and one glider has left it
    let period = advance_n(&gun, 30);
    assert_eq!(within_gun(&period), gun);
    assert_eq!(period.len(), 41);

    assert_eq!(advance_n(&gun, 120).len(), 56);
}
