//! Unit tests for evac-trail.

#[cfg(test)]
mod field {
    use evac_core::Cell;

    use crate::{TRAIL_CEILING, TRAIL_FLOOR, TrailField};

    #[test]
    fn starts_at_floor() {
        let t = TrailField::new(4, 0.1);
        assert_eq!(t.get(Cell::new(2, 3)), TRAIL_FLOOR);
        assert!((t.average_value() - TRAIL_FLOOR).abs() < 1e-12);
        assert_eq!(t.max_value(), TRAIL_FLOOR);
    }

    #[test]
    fn out_of_bounds_reads_zero_and_ignores_writes() {
        let mut t = TrailField::new(4, 0.1);
        assert_eq!(t.get(Cell::new(4, 0)), 0.0);
        assert_eq!(t.get(Cell::new(-1, 0)), 0.0);
        t.deposit(Cell::new(9, 9), 5.0);
        assert_eq!(t.max_value(), TRAIL_FLOOR);
    }

    #[test]
    fn deposit_is_additive_and_capped() {
        let mut t = TrailField::new(4, 0.1);
        let c = Cell::new(1, 1);
        t.deposit(c, 2.0);
        assert!((t.get(c) - 2.01).abs() < 1e-12);
        t.deposit(c, 50.0);
        assert_eq!(t.get(c), TRAIL_CEILING);
    }

    #[test]
    fn deposit_path_hits_every_cell_including_repeats() {
        let mut t = TrailField::new(4, 0.1);
        let path = [Cell::new(0, 0), Cell::new(1, 0), Cell::new(0, 0)];
        t.deposit_path(&path, 1.0);
        assert!((t.get(Cell::new(0, 0)) - 2.01).abs() < 1e-12);
        assert!((t.get(Cell::new(1, 0)) - 1.01).abs() < 1e-12);
        assert_eq!(t.get(Cell::new(2, 0)), TRAIL_FLOOR);
    }

    #[test]
    fn evaporate_decays_multiplicatively() {
        let mut t = TrailField::new(3, 0.5);
        let c = Cell::new(1, 1);
        t.deposit(c, 3.99);
        t.evaporate();
        assert!((t.get(c) - 2.0).abs() < 1e-12);
        assert_eq!(t.get(Cell::new(0, 0)), TRAIL_FLOOR);
    }

    #[test]
    fn deposit_then_evaporate_changes_values() {
        let mut t = TrailField::new(3, 0.1);
        let path = [Cell::new(0, 0), Cell::new(0, 1)];
        t.deposit_path(&path, 1.0);
        let before = t.get(Cell::new(0, 0));
        t.evaporate();
        assert!(t.get(Cell::new(0, 0)) < before);
    }

    #[test]
    fn repeated_evaporation_converges_monotonically_to_floor() {
        let mut t = TrailField::new(3, 0.1);
        t.deposit(Cell::new(2, 2), TRAIL_CEILING);
        let mut prev = t.get(Cell::new(2, 2));
        for _ in 0..200 {
            t.evaporate();
            let v = t.get(Cell::new(2, 2));
            assert!(v <= prev);
            assert!(v >= TRAIL_FLOOR);
            prev = v;
        }
        assert_eq!(prev, TRAIL_FLOOR);
    }

    #[test]
    fn evaporation_rate_clamped() {
        assert_eq!(TrailField::new(2, 3.0).evaporation_rate(), 1.0);
        let mut t = TrailField::new(2, 3.0);
        t.deposit(Cell::new(0, 0), 5.0);
        t.evaporate();
        assert_eq!(t.get(Cell::new(0, 0)), TRAIL_FLOOR);
    }

    #[test]
    fn average_and_max() {
        let mut t = TrailField::new(2, 0.1);
        t.deposit(Cell::new(0, 0), 3.99);
        assert!((t.max_value() - 4.0).abs() < 1e-12);
        assert!((t.average_value() - (4.0 + 3.0 * TRAIL_FLOOR) / 4.0).abs() < 1e-12);
    }
}

#[cfg(test)]
mod properties {
    use proptest::prelude::*;

    use evac_core::Cell;

    use crate::{TRAIL_CEILING, TRAIL_FLOOR, TrailField};

    #[derive(Debug, Clone)]
    enum Op {
        Deposit(i32, i32, f64),
        Evaporate,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0i32..8, 0i32..8, 0.0f64..20.0).prop_map(|(x, y, a)| Op::Deposit(x, y, a)),
            Just(Op::Evaporate),
        ]
    }

    proptest! {
        #[test]
        fn values_stay_within_bounds(
            rate in 0.0f64..=1.0,
            ops in proptest::collection::vec(op(), 0..80),
        ) {
            let mut t = TrailField::new(6, rate);
            for op in ops {
                match op {
                    Op::Deposit(x, y, a) => t.deposit(Cell::new(x, y), a),
                    Op::Evaporate => t.evaporate(),
                }
            }
            for &v in t.values() {
                prop_assert!(v >= TRAIL_FLOOR);
                prop_assert!(v <= TRAIL_CEILING);
            }
        }
    }
}
