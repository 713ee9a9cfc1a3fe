use std::collections::HashSet;

use minas::{CellState, Coordinate, Generator, Minefield};
use proptest::prelude::*;

fn coordinate() -> impl Strategy<Value = Coordinate> {
    (0u8..26, 1u32..=99).prop_map(|(col, row)| Coordinate::new(char::from(b'A' + col), row).unwrap())
}

fn field_and_safe() -> impl Strategy<Value = (char, u32, Coordinate)> {
    (0u8..12, 1u32..=12).prop_flat_map(|(col, rows)| {
        let last = char::from(b'A' + col);
        (Just(last), Just(rows), (0..=col, 1..=rows))
            .prop_map(|(last, rows, (c, r))| (last, rows, Coordinate::new(char::from(b'A' + c), r).unwrap()))
    })
}

proptest! {
    #[test]
    fn range_draws_stay_in_bounds(bits in prop::sample::select(vec![32u32, 64]), seed in 1i128..=u32::MAX as i128, n in 1u64..10_000) {
        let mut g = Generator::new(bits, seed).unwrap();
        for _ in 0..16 {
            let v = g.next_in_range(n).unwrap();
            prop_assert!((1..=n).contains(&v));
        }
    }

    #[test]
    fn replay_is_deterministic(seed in 1i128..=u32::MAX as i128) {
        let mut a = Generator::new(64, seed).unwrap();
        let mut b = Generator::new(64, seed).unwrap();
        for _ in 0..16 {
            prop_assert_eq!(a.next_in_range(97).unwrap(), b.next_in_range(97).unwrap());
        }
    }

    #[test]
    fn text_round_trip(coord in coordinate()) {
        let text = coord.to_string();
        prop_assert_eq!(text.len(), 3);
        prop_assert_eq!(text.parse::<Coordinate>().unwrap(), coord);
        prop_assert_eq!(Coordinate::new(coord.column(), coord.row() as u32).unwrap(), coord);
    }

    #[test]
    fn interior_coordinates_have_eight_neighbors(col in 1u8..25, row in 2u32..99) {
        let coord = Coordinate::new(char::from(b'A' + col), row).unwrap();
        prop_assert_eq!(coord.neighbors().len(), 8);
    }

    #[test]
    fn field_corners_have_three_neighbors_in_field(col in 1u8..26, rows in 2u32..=99) {
        let last = char::from(b'A' + col);
        let field = Minefield::new(last, rows).unwrap();
        for (cc, r) in [('A', 1), (last, 1), ('A', rows), (last, rows)] {
            let corner = Coordinate::new(cc, r).unwrap();
            let inside = corner.neighbors().iter().filter(|n| field.in_bounds(n)).count();
            prop_assert_eq!(inside, 3, "corner {}", corner);
        }
    }

    #[test]
    fn mines_avoid_safe_zone_and_are_counted_exactly(
        (last, rows, safe) in field_and_safe(),
        seed in 1i128..100_000,
        fill in 0.0f64..1.0,
    ) {
        let mut field = Minefield::new(last, rows).unwrap();
        let zone: HashSet<Coordinate> = safe.neighbors().into_iter().chain([safe]).filter(|c| field.in_bounds(c)).collect();
        let room = field.len() - zone.len();
        let count = (room as f64 * fill) as usize;
        let mut g = Generator::new(32, seed).unwrap();
        field.plant_mines(&safe, &mut g, count).unwrap();

        let mined = field.cells_by_state(CellState::Mined);
        prop_assert_eq!(mined.len(), count);
        prop_assert!(mined.iter().all(|m| !zone.contains(m)));

        prop_assert_eq!(field.count_mined_neighbors(&safe).unwrap(), 0);
        field.reveal_flood(&safe).unwrap();
        prop_assert!(field.cells_by_state(CellState::Revealed).iter().all(|r| !field.cell(r).unwrap().is_mined()));
    }

    #[test]
    fn win_means_every_safe_cell_revealed(
        (last, rows, safe) in field_and_safe(),
        seed in 1i128..100_000,
        flag_mines in any::<bool>(),
    ) {
        let mut field = Minefield::new(last, rows).unwrap();
        let mut g = Generator::new(32, seed).unwrap();
        let zone = safe.neighbors().into_iter().chain([safe]).filter(|c| field.in_bounds(c)).count();
        field.plant_mines(&safe, &mut g, (field.len() - zone) / 3).unwrap();

        let safe_cells: Vec<Coordinate> = field.coordinates().filter(|c| !field.cell(c).unwrap().is_mined()).collect();
        if flag_mines {
            for m in field.cells_by_state(CellState::Mined) {
                field.toggle_flag(&m).unwrap();
            }
        }
        prop_assert!(!field.is_won());
        for c in &safe_cells {
            if field.cell(c).unwrap().is_hidden() {
                field.reveal_flood(c).unwrap();
            }
            let all_clear = safe_cells.iter().all(|s| field.cell(s).unwrap().is_revealed());
            prop_assert_eq!(field.is_won(), all_clear);
        }
        prop_assert!(field.is_won());
    }
}
