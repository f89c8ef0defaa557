//! Unit tests for evac-hazard.

#[cfg(test)]
mod instance {
    use evac_core::{Cell, HazardId};

    use crate::HazardInstance;

    #[test]
    fn starts_at_intensity_one() {
        let h = HazardInstance::new(HazardId(0), Cell::new(1, 1));
        assert_eq!(h.intensity, 1);
        assert_eq!(h.age, 0);
    }

    #[test]
    fn grows_every_period() {
        let mut h = HazardInstance::new(HazardId(0), Cell::new(1, 1));
        for _ in 0..9 {
            h.update(10, 3);
        }
        assert_eq!(h.intensity, 1);
        h.update(10, 3);
        assert_eq!(h.intensity, 2);
        for _ in 0..10 {
            h.update(10, 3);
        }
        assert_eq!(h.intensity, 3);
    }

    #[test]
    fn intensity_never_exceeds_cap() {
        let mut h = HazardInstance::new(HazardId(0), Cell::new(1, 1));
        for _ in 0..500 {
            h.update(1, 3);
            assert!(h.intensity <= 3);
        }
        assert_eq!(h.intensity, 3);
        assert_eq!(h.age, 500);
    }

    #[test]
    fn spread_probability_scales_with_intensity() {
        let mut h = HazardInstance::new(HazardId(0), Cell::new(1, 1));
        assert!((h.spread_probability(0.15) - 0.15).abs() < 1e-12);
        h.intensity = 3;
        assert!((h.spread_probability(0.15) - 0.45).abs() < 1e-12);
    }
}

#[cfg(test)]
mod model {
    use evac_core::{Cell, HazardConfig, SimRng, Tick};
    use evac_grid::SpatialGrid;

    use crate::HazardModel;

    fn open_grid(size: usize, exit: Cell) -> SpatialGrid {
        let mut g = SpatialGrid::new(size);
        assert!(g.add_exit(exit));
        g
    }

    fn model(config: HazardConfig, sources: usize) -> HazardModel {
        HazardModel::new(config, sources, SimRng::new(7))
    }

    #[test]
    fn nothing_burns_before_delay() {
        let mut g = open_grid(30, Cell::new(0, 0));
        let mut m = model(HazardConfig::default(), 3);
        for t in 0..15 {
            m.update(Tick(t), &mut g);
        }
        assert!(!m.is_ignited());
        assert_eq!(g.hazard_count(), 0);
        m.update(Tick(15), &mut g);
        assert!(m.is_ignited());
        assert!(g.hazard_count() >= 1);
    }

    #[test]
    fn sources_respect_exit_clearance() {
        let mut g = open_grid(40, Cell::new(0, 0));
        let config = HazardConfig { ignition_delay: 0, spread_rate: 0.0, ..HazardConfig::default() };
        let mut m = model(config, 5);
        m.update(Tick(0), &mut g);
        assert_eq!(m.count(), 5);
        for h in m.instances() {
            assert!(h.cell.manhattan(Cell::new(0, 0)) > 10);
            assert!(!g.is_exit(h.cell));
        }
    }

    #[test]
    fn ignition_happens_once() {
        let mut g = open_grid(40, Cell::new(0, 0));
        let config = HazardConfig { ignition_delay: 0, spread_rate: 0.0, ..HazardConfig::default() };
        let mut m = model(config, 2);
        m.update(Tick(0), &mut g);
        m.update(Tick(1), &mut g);
        m.update(Tick(2), &mut g);
        assert_eq!(m.count(), 2);
    }

    #[test]
    fn unsatisfiable_clearance_skips_source() {
        // Every cell of a 5×5 grid is within 8 of (0,0).
        let mut g = open_grid(5, Cell::new(0, 0));
        let config = HazardConfig { ignition_delay: 0, ..HazardConfig::default() };
        let mut m = model(config, 3);
        m.update(Tick(0), &mut g);
        assert!(m.is_ignited());
        assert_eq!(m.count(), 0);
        assert_eq!(g.hazard_count(), 0);
    }

    #[test]
    fn no_exits_treats_clearance_as_met() {
        let mut g = SpatialGrid::new(5);
        let config = HazardConfig { ignition_delay: 0, spread_rate: 0.0, ..HazardConfig::default() };
        let mut m = model(config, 1);
        m.update(Tick(0), &mut g);
        assert_eq!(m.count(), 1);
    }

    #[test]
    fn ignite_at_rejects_walls_exits_and_duplicates() {
        let mut g = open_grid(10, Cell::new(9, 9));
        g.toggle_wall(Cell::new(3, 3));
        let mut m = model(HazardConfig::default(), 0);
        assert!(!m.ignite_at(Cell::new(9, 9), &mut g));
        assert!(!m.ignite_at(Cell::new(3, 3), &mut g));
        assert!(!m.ignite_at(Cell::new(-1, 3), &mut g));
        assert!(m.ignite_at(Cell::new(4, 4), &mut g));
        assert!(!m.ignite_at(Cell::new(4, 4), &mut g));
        assert_eq!(m.count(), 1);
        assert_eq!(g.hazard_count(), 1);
    }

    #[test]
    fn spread_next_to_exit_grows_hazard_set() {
        let mut g = open_grid(10, Cell::new(9, 9));
        let config = HazardConfig { ignition_delay: 1_000, spread_rate: 1.0, ..HazardConfig::default() };
        let mut m = model(config, 0);
        assert!(m.ignite_at(Cell::new(8, 9), &mut g));
        let before = g.hazard_count();
        m.update(Tick(0), &mut g);
        assert!(g.hazard_count() > before);
        // (7,9) and (8,8) ignite; the exit never does.
        assert!(g.has_hazard(Cell::new(7, 9)));
        assert!(g.has_hazard(Cell::new(8, 8)));
        assert!(!g.has_hazard(Cell::new(9, 9)));
        assert_eq!(g.hazard_count(), 3);
    }

    #[test]
    fn spread_is_one_hop_per_tick() {
        let mut g = SpatialGrid::new(11);
        let config = HazardConfig { ignition_delay: 1_000, spread_rate: 1.0, ..HazardConfig::default() };
        let mut m = model(config, 0);
        m.ignite_at(Cell::new(5, 5), &mut g);
        m.update(Tick(0), &mut g);
        assert_eq!(g.hazard_count(), 5);
        for &h in g.hazard_cells() {
            assert!(h.manhattan(Cell::new(5, 5)) <= 1);
        }
    }

    #[test]
    fn zero_rate_never_spreads() {
        let mut g = SpatialGrid::new(9);
        let config = HazardConfig { ignition_delay: 1_000, spread_rate: 0.0, ..HazardConfig::default() };
        let mut m = model(config, 0);
        m.ignite_at(Cell::new(4, 4), &mut g);
        for t in 0..50 {
            m.update(Tick(t), &mut g);
        }
        assert_eq!(g.hazard_count(), 1);
    }

    #[test]
    fn probability_above_one_always_ignites() {
        // Growth on the first update lifts intensity to 2: p = 0.6 * 2 = 1.2.
        let mut g = SpatialGrid::new(9);
        let config = HazardConfig {
            ignition_delay: 1_000,
            spread_rate:    0.6,
            growth_period:  1,
            ..HazardConfig::default()
        };
        let mut m = model(config, 0);
        m.ignite_at(Cell::new(4, 4), &mut g);
        m.update(Tick(0), &mut g);
        assert_eq!(m.instances()[0].intensity, 2);
        assert_eq!(g.hazard_count(), 5);
    }

    #[test]
    fn spread_does_not_enter_walls() {
        let mut g = SpatialGrid::new(5);
        for c in [Cell::new(1, 2), Cell::new(3, 2), Cell::new(2, 1), Cell::new(2, 3)] {
            g.toggle_wall(c);
        }
        let config = HazardConfig { ignition_delay: 1_000, spread_rate: 1.0, ..HazardConfig::default() };
        let mut m = model(config, 0);
        m.ignite_at(Cell::new(2, 2), &mut g);
        for t in 0..5 {
            m.update(Tick(t), &mut g);
        }
        assert_eq!(g.hazard_count(), 1);
    }

    #[test]
    fn hazard_set_is_monotone_and_capped() {
        let mut g = open_grid(20, Cell::new(0, 0));
        let config = HazardConfig { ignition_delay: 3, growth_period: 2, ..HazardConfig::default() };
        let mut m = model(config, 2);
        let mut seen: Vec<Cell> = Vec::new();
        for t in 0..60 {
            m.update(Tick(t), &mut g);
            for c in &seen {
                assert!(g.has_hazard(*c), "{c} stopped burning at tick {t}");
            }
            seen = g.hazard_cells().to_vec();
            assert_eq!(seen.len(), m.count());
            assert!(m.instances().iter().all(|h| h.intensity <= 3));
        }
    }

    #[test]
    fn same_seed_same_fire() {
        let run = || {
            let mut g = open_grid(25, Cell::new(0, 0));
            let config = HazardConfig { ignition_delay: 0, ..HazardConfig::default() };
            let mut m = model(config, 2);
            for t in 0..30 {
                m.update(Tick(t), &mut g);
            }
            g.hazard_cells().to_vec()
        };
        assert_eq!(run(), run());
    }
}
