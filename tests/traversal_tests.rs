//! Traversal engine tests across modes, dimensions, and configurations
use c_table::config::{Direction, GridConfig, Rotation, StartCorner, TraversalConfig};
use c_table::grid::{simple, spiral, Grid, START_CELL_COLOR};

const CORNERS: [StartCorner; 4] = [
    StartCorner::TopLeft,
    StartCorner::TopRight,
    StartCorner::BottomLeft,
    StartCorner::BottomRight,
];
const CENTERS: [StartCorner; 4] = [
    StartCorner::CenterLeft,
    StartCorner::CenterRight,
    StartCorner::CenterTop,
    StartCorner::CenterBottom,
];
const DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];
const ROTATIONS: [Rotation; 2] = [Rotation::Clockwise, Rotation::CounterClockwise];

fn numbers(table: &Grid) -> Vec<Vec<u32>> {
    table
        .iter()
        .map(|row| row.iter().map(|cell| cell.number).collect())
        .collect()
}

/// Every number 1..=total exactly once
fn assert_permutation(table: &Grid) {
    let total = table.len() * table[0].len();
    let mut seen = vec![false; total + 1];
    for cell in table.iter().flatten() {
        let n = cell.number as usize;
        assert!(n >= 1 && n <= total, "number {} out of range 1..={}", n, total);
        assert!(!seen[n], "number {} assigned twice", n);
        seen[n] = true;
    }
}

/// Numbered cells form the prefix 1..=k with no duplicates or gaps
fn assert_prefix_numbering(table: &Grid) {
    let total = table.len() * table[0].len();
    let mut seen = vec![false; total + 1];
    let mut count = 0;
    for cell in table.iter().flatten() {
        let n = cell.number as usize;
        assert!(n <= total, "number {} exceeds total {}", n, total);
        if n > 0 {
            assert!(!seen[n], "number {} assigned twice", n);
            seen[n] = true;
            count += 1;
        }
    }
    for n in 1..=count {
        assert!(seen[n], "numbering has a gap at {}", n);
    }
}

/// The general-mode contract: a mark is set iff the neighbor holds a number
/// exactly one away, except cell #1 whose marks are forced clear.
fn assert_path_adjacency(table: &Grid) {
    let rows = table.len();
    let cols = table[0].len();
    for r in 0..rows {
        for c in 0..cols {
            let cell = &table[r][c];
            let n = cell.number;
            if n == 1 {
                assert!(
                    !cell.up && !cell.down && !cell.left && !cell.right,
                    "cell #1 must carry no marks"
                );
                continue;
            }
            let sequential = |r2: usize, c2: usize| {
                let m = table[r2][c2].number;
                m + 1 == n || n + 1 == m
            };
            assert_eq!(cell.up, r > 0 && sequential(r - 1, c));
            assert_eq!(cell.down, r + 1 < rows && sequential(r + 1, c));
            assert_eq!(cell.left, c > 0 && sequential(r, c - 1));
            assert_eq!(cell.right, c + 1 < cols && sequential(r, c + 1));
        }
    }
}

fn start_cell(table: &Grid) -> &c_table::Cell {
    table
        .iter()
        .flatten()
        .find(|cell| cell.number == 1)
        .expect("no cell #1")
}

#[test]
fn simple_mode_is_a_permutation_everywhere() {
    for rows in 1..=10 {
        for cols in 1..=10 {
            let table = simple::generate(&GridConfig::new(rows, cols));
            assert_permutation(&table);
        }
    }
}

#[test]
fn boundary_spiral_is_a_permutation_for_every_config() {
    for rows in 1..=10 {
        for cols in 1..=10 {
            let config = GridConfig::new(rows, cols);
            for corner in CORNERS {
                for direction in DIRECTIONS {
                    for rotation in ROTATIONS {
                        let traversal = TraversalConfig::new(corner, direction, rotation);
                        let table = spiral::generate(&config, &traversal);
                        assert_permutation(&table);
                        assert_path_adjacency(&table);
                    }
                }
            }
        }
    }
}

#[test]
fn center_spiral_never_duplicates_and_never_gaps() {
    for rows in 1..=10 {
        for cols in 1..=10 {
            let config = GridConfig::new(rows, cols);
            for corner in CENTERS {
                for direction in DIRECTIONS {
                    for rotation in ROTATIONS {
                        let traversal = TraversalConfig::new(corner, direction, rotation);
                        let table = spiral::generate(&config, &traversal);
                        assert_prefix_numbering(&table);
                        assert_path_adjacency(&table);
                    }
                }
            }
        }
    }
}

#[test]
fn cell_one_is_always_the_start_cell() {
    let samples = [
        (GridConfig::new(1, 1), None),
        (GridConfig::new(4, 7), None),
        (
            GridConfig::new(3, 3),
            Some(TraversalConfig::default()),
        ),
        (
            GridConfig::new(5, 5),
            Some(TraversalConfig::new(
                StartCorner::CenterBottom,
                Direction::Up,
                Rotation::CounterClockwise,
            )),
        ),
    ];
    for (config, traversal) in samples {
        let table = c_table::generate(&config, traversal.as_ref());
        let cell = start_cell(&table);
        assert_eq!(cell.color, START_CELL_COLOR);
        assert!(!cell.up && !cell.down && !cell.left && !cell.right);
    }
}

#[test]
fn scenario_single_cell() {
    let table = c_table::generate(&GridConfig::new(1, 1), None);
    assert_eq!(table.len(), 1);
    assert_eq!(table[0].len(), 1);
    let cell = &table[0][0];
    assert_eq!(cell.number, 1);
    assert!(!cell.up && !cell.down && !cell.left && !cell.right);
    assert_eq!(cell.color, START_CELL_COLOR);
}

#[test]
fn scenario_simple_two_by_two() {
    let table = simple::generate(&GridConfig::new(2, 2));
    assert_eq!(numbers(&table), vec![vec![1, 2], vec![3, 4]]);

    let one = &table[0][0];
    assert!(!one.up && !one.down && !one.left && !one.right);
    assert_eq!(table[1][1].color, c_table::grid::COMPLETION_CELL_COLOR);

    // Marks follow the grid boundary, not the path
    let two = &table[0][1];
    assert!(!two.up);
    assert!(two.down);
    assert!(two.left);
    assert!(!two.right);
}

#[test]
fn scenario_inward_spiral_three_by_three() {
    let traversal = TraversalConfig::new(
        StartCorner::BottomRight,
        Direction::Left,
        Rotation::Clockwise,
    );
    let table = spiral::generate(&GridConfig::new(3, 3), &traversal);
    assert_eq!(
        numbers(&table),
        vec![vec![5, 6, 7], vec![4, 9, 8], vec![3, 2, 1]]
    );
    // Ends at the center
    assert_eq!(table[1][1].number, 9);
    assert_permutation(&table);
    assert_path_adjacency(&table);
}

#[test]
fn scenario_outward_spiral_five_by_five_legs() {
    let traversal = TraversalConfig::new(
        StartCorner::CenterLeft,
        Direction::Left,
        Rotation::Clockwise,
    );
    let table = spiral::generate(&GridConfig::new(5, 5), &traversal);
    assert_eq!(table[2][2].number, 1);
    assert_permutation(&table);

    // Walk the path and collect run lengths between turns; the outward
    // spiral walks legs of 1,1,2,2,3,3,... cells (the final leg may stop
    // short at the last number).
    let mut position = vec![(0usize, 0usize); 26];
    for (r, row) in table.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            position[cell.number as usize] = (r, c);
        }
    }
    let mut runs = Vec::new();
    let mut run_len = 0usize;
    let mut last_step = (0isize, 0isize);
    for n in 2..=25 {
        let (pr, pc) = position[n - 1];
        let (r, c) = position[n];
        let step = (r as isize - pr as isize, c as isize - pc as isize);
        if step == last_step {
            run_len += 1;
        } else {
            if run_len > 0 {
                runs.push(run_len);
            }
            last_step = step;
            run_len = 1;
        }
    }
    runs.push(run_len);
    assert_eq!(runs, vec![1, 1, 2, 2, 3, 3, 4, 4, 4]);
}

#[test]
fn center_underfill_leaves_sentinel_cells() {
    let traversal = TraversalConfig::new(
        StartCorner::CenterLeft,
        Direction::Left,
        Rotation::Clockwise,
    );
    let table = spiral::generate(&GridConfig::new(4, 2), &traversal);
    assert_eq!(
        numbers(&table),
        vec![vec![0, 0], vec![3, 4], vec![2, 1], vec![0, 0]]
    );
    assert_prefix_numbering(&table);
}

#[test]
fn unknown_selectors_degrade_to_defaults() {
    let config = GridConfig::new(4, 6);
    let fallback = TraversalConfig::from_params(
        Some("middle"),
        Some("diagonal"),
        Some("widdershins"),
    );
    assert_eq!(fallback, TraversalConfig::default());

    let expected = spiral::generate(&config, &TraversalConfig::default());
    let actual = spiral::generate(&config, &fallback);
    assert_eq!(numbers(&actual), numbers(&expected));
}

#[test]
fn missing_selectors_are_the_defaults() {
    assert_eq!(
        TraversalConfig::from_params(None, None, None),
        TraversalConfig::new(
            StartCorner::BottomRight,
            Direction::Left,
            Rotation::Clockwise
        )
    );
}
