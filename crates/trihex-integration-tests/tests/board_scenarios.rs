//! End-to-end board scenarios across topology, synthesis and placement.

use trihex_board::{generate_layout, Board, LayoutConfig, Placement};
use trihex_combo::{unit_tally, Combo, ColorId};
use trihex_topology::{compute_junctions, opposite, HexGrid, NeighborTable, EDGES_PER_TILE};

fn mono_config(radius: u32) -> LayoutConfig {
    LayoutConfig {
        radius,
        type_percentages: [100.0, 0.0, 0.0],
        color_percentages: [100.0, 0.0, 0.0, 0.0],
        seed: 7,
        ..LayoutConfig::default()
    }
}

#[test]
fn pure_mono_board_fills_in_any_order() {
    let layout = generate_layout(&mono_config(1)).unwrap();

    assert_eq!(layout.quota.total(), 7);
    assert_eq!(layout.unit_quota, [21, 0, 0, 0]);
    for placement in &layout.placements {
        assert_eq!(placement.combo, Combo::mono(ColorId(0)));
        assert_eq!(placement.edges, [ColorId(0); 6]);
    }

    // Ring order, reversed ring order and raw index order all commit the
    // full board: uniform edges match trivially.
    let orders: Vec<Vec<&Placement>> = vec![
        layout.placements.iter().collect(),
        layout.placements.iter().rev().collect(),
        {
            let mut by_tile: Vec<&Placement> = layout.placements.iter().collect();
            by_tile.sort_by_key(|p| p.tile);
            by_tile
        },
    ];

    for order in orders {
        let mut board = Board::new(layout.neighbors.clone());
        for placement in order {
            assert!(board.can_place(placement.tile, &placement.edges));
            board.commit(placement.clone()).unwrap();
        }
        assert_eq!(board.occupied_count(), 7);
    }
}

#[test]
fn single_tile_board_bootstrap() {
    let layout = generate_layout(&mono_config(0)).unwrap();
    assert_eq!(layout.placements.len(), 1);

    let mut board = Board::new(layout.neighbors.clone());
    let placement = layout.placements[0].clone();
    assert!(board.can_place(placement.tile, &placement.edges));
    board.commit(placement).unwrap();
    assert_eq!(board.occupied_count(), 1);
}

#[test]
fn radius_one_junction_ring() {
    let grid = HexGrid::generate(1);
    let junctions = compute_junctions(&grid, 10.0);

    assert_eq!(junctions.len(), 6);
    for junction in &junctions {
        assert_eq!(junction.tiles.len(), 3);
    }
}

#[test]
fn junctions_become_ready_as_the_mono_board_fills() {
    let layout = generate_layout(&mono_config(1)).unwrap();
    let mut board = Board::new(layout.neighbors.clone());

    for placement in &layout.placements {
        board.commit(placement.clone()).unwrap();
    }
    for junction in &layout.junctions {
        assert!(board.junction_ready(junction));
    }
}

#[test]
fn gated_replay_keeps_edges_consistent() {
    // Mixed types; replay in ring order trying each rotation, skipping
    // tiles that never fit. Whatever lands must satisfy the invariant.
    let config = LayoutConfig {
        radius: 3,
        type_percentages: [60.0, 25.0, 15.0],
        color_percentages: [40.0, 25.0, 20.0, 15.0],
        seed: 99,
        ..LayoutConfig::default()
    };
    let layout = generate_layout(&config).unwrap();

    let mut board = Board::new(layout.neighbors.clone());
    for assigned in &layout.placements {
        for &step in assigned.combo.rotation_steps() {
            let candidate = Placement::new(assigned.tile, assigned.combo, step);
            if board.can_place(candidate.tile, &candidate.edges) {
                board.commit(candidate).unwrap();
                break;
            }
        }
    }

    assert!(board.occupied_count() > 0);
    for placement in board.placements() {
        for direction in 0..EDGES_PER_TILE {
            if let Some(neighbor) = board.neighbors().neighbor(placement.tile, direction) {
                if let Some(other) = board.placement(neighbor) {
                    assert_eq!(
                        placement.edges[direction],
                        other.edges[opposite(direction)],
                        "tiles {} and {} disagree across direction {}",
                        placement.tile,
                        neighbor,
                        direction
                    );
                }
            }
        }
    }
}

#[test]
fn full_pipeline_conserves_units() {
    let config = LayoutConfig {
        radius: 4,
        type_percentages: [45.0, 35.0, 20.0],
        color_percentages: [30.0, 30.0, 25.0, 15.0],
        seed: 2024,
        ..LayoutConfig::default()
    };
    let layout = generate_layout(&config).unwrap();

    let combos: Vec<Combo> = layout.placements.iter().map(|p| p.combo).collect();
    assert_eq!(unit_tally(&combos, 4), layout.unit_quota.to_vec());
    assert_eq!(
        layout.unit_quota.iter().sum::<u32>(),
        3 * layout.grid.len() as u32
    );
}

#[test]
fn layouts_are_reproducible_across_runs() {
    let config = LayoutConfig {
        radius: 3,
        seed: 31337,
        ..LayoutConfig::default()
    };
    let a = generate_layout(&config).unwrap();
    let b = generate_layout(&config).unwrap();

    assert_eq!(a.placements, b.placements);
    assert_eq!(a.quota, b.quota);
    assert_eq!(a.unit_quota, b.unit_quota);
}

#[test]
fn removal_reopens_interactive_placement() {
    let layout = generate_layout(&mono_config(1)).unwrap();
    let mut board = Board::new(layout.neighbors.clone());
    for placement in &layout.placements {
        board.commit(placement.clone()).unwrap();
    }

    let tile = layout.placements[3].tile;
    let removed = board.remove(tile).unwrap();
    assert_eq!(removed.tile, tile);

    // The freed tile still matches its mono neighbors and goes back in.
    assert!(board.can_place(tile, &removed.edges));
    board.commit(removed).unwrap();
    assert_eq!(board.occupied_count(), layout.placements.len());
}

#[test]
fn neighbor_table_matches_grid_geometry() {
    let grid = HexGrid::generate(2);
    let table = NeighborTable::build(&grid);

    for tile in 0..grid.len() {
        for direction in 0..EDGES_PER_TILE {
            match table.neighbor(tile, direction) {
                Some(n) => {
                    assert_eq!(grid.coord(tile).distance(&grid.coord(n)), 1);
                }
                None => {
                    let coord = grid.coord(tile).neighbor(direction);
                    assert_eq!(grid.index_of(&coord), None);
                }
            }
        }
    }
}
