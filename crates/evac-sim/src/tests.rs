//! Integration tests for evac-sim.

use evac_core::{
    Cell, ColonyConfig, EvacuationConfig, GridConfig, HazardConfig, ObstacleLayout, RunParams,
    SearchWeights, SimConfig,
};

use crate::{Phase, RoundRecord, SimBuilder, SimObserver, Simulation, Statistics, TickRecord};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn small_config() -> SimConfig {
    SimConfig {
        grid:       GridConfig { size: 20, layout: ObstacleLayout::Open },
        colony:     ColonyConfig { explorer_count: 20, rounds: 3, ..ColonyConfig::default() },
        evacuation: EvacuationConfig { max_ticks: 300, ..EvacuationConfig::default() },
        seed:       7,
        ..SimConfig::default()
    }
}

fn params(population: usize, exits: usize, hazards: usize) -> RunParams {
    RunParams { population, exit_count: exits, hazard_sources: hazards }
}

fn sim(config: SimConfig) -> Simulation {
    SimBuilder::new(config).build().unwrap()
}

#[derive(Default)]
struct Recorder {
    phases:   Vec<(Phase, Phase)>,
    rounds:   Vec<RoundRecord>,
    ticks:    Vec<TickRecord>,
    finished: Vec<Statistics>,
}

impl SimObserver for Recorder {
    fn on_phase_change(&mut self, from: Phase, to: Phase) {
        self.phases.push((from, to));
    }
    fn on_round_end(&mut self, record: &RoundRecord) {
        self.rounds.push(record.clone());
    }
    fn on_tick_end(&mut self, record: &TickRecord) {
        self.ticks.push(record.clone());
    }
    fn on_finished(&mut self, stats: &Statistics) {
        self.finished.push(stats.clone());
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;
    use crate::SimError;
    use evac_core::EvacError;

    #[test]
    fn builds_uninitialized_idle_controller() {
        let s = sim(SimConfig::default());
        assert_eq!(s.current_phase(), Phase::Idle);
        assert!(!s.is_initialized());
        assert!(!s.is_running());
        assert!(s.evacuees().is_empty());
        assert_eq!(s.grid().size(), 50);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = SimConfig { grid: GridConfig { size: 0, ..GridConfig::default() }, ..SimConfig::default() };
        let err = SimBuilder::new(config).build().err().unwrap();
        assert!(matches!(err, SimError::Core(EvacError::Config(_))));
    }
}

// ── Phase machine ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod phase_tests {
    use super::*;

    #[test]
    fn start_before_initialize_is_ignored() {
        let mut s = sim(small_config());
        s.start();
        assert_eq!(s.current_phase(), Phase::Idle);
        assert!(!s.is_running());
        assert!(!s.step());
    }

    #[test]
    fn initialize_prepares_idle_run() {
        let mut s = sim(small_config());
        s.initialize(params(30, 4, 1));
        assert!(s.is_initialized());
        assert!(!s.is_running());
        assert_eq!(s.current_phase(), Phase::Idle);
        assert_eq!(s.evacuees().len(), 30);
        assert_eq!(s.grid().exits().len(), 4);
        assert!(!s.step());

        let stats = s.current_statistics();
        assert_eq!(stats.total, 30);
        assert_eq!(stats.remaining, 30);
        assert_eq!(stats.evacuated, 0);
        assert_eq!(stats.progress_pct, 0.0);
    }

    #[test]
    fn exploration_then_evacuation_then_finished() {
        let mut s = sim(small_config());
        s.initialize(params(10, 2, 0));
        let mut rec = Recorder::default();
        s.start_with(&mut rec);
        assert_eq!(s.current_phase(), Phase::Exploration);
        assert!(s.is_running());

        for round in 1..=3 {
            assert!(s.step_with(&mut rec));
            assert_eq!(s.round(), round);
        }
        assert_eq!(s.current_phase(), Phase::Evacuation);
        assert_eq!(s.tick().0, 0);
        assert_eq!(s.exploration_log().len(), 3);

        s.run_to_completion(&mut rec);
        assert_eq!(s.current_phase(), Phase::Finished);
        assert!(!s.is_running());
        assert!(!s.step());

        assert_eq!(rec.phases, vec![
            (Phase::Idle, Phase::Exploration),
            (Phase::Exploration, Phase::Evacuation),
            (Phase::Evacuation, Phase::Finished),
        ]);
        assert_eq!(rec.rounds.len(), 3);
        assert_eq!(rec.ticks.len(), s.evacuation_log().len());
        assert_eq!(rec.finished.len(), 1);
        assert_eq!(rec.finished[0], s.current_statistics());
    }

    #[test]
    fn zero_rounds_skips_exploration() {
        let config = SimConfig {
            colony: ColonyConfig { rounds: 0, ..small_config().colony },
            ..small_config()
        };
        let mut s = sim(config);
        s.initialize(params(5, 2, 0));
        s.start();
        assert_eq!(s.current_phase(), Phase::Evacuation);
        assert!(s.step());
        assert_eq!(s.tick().0, 1);
        assert!(s.exploration_log().is_empty());
    }

    #[test]
    fn stop_pauses_and_start_resumes() {
        let mut s = sim(small_config());
        s.initialize(params(10, 2, 0));
        s.start();
        s.step();
        s.stop();
        assert_eq!(s.current_phase(), Phase::Exploration);
        assert!(!s.is_running());
        assert!(!s.step());
        assert_eq!(s.round(), 1);

        s.start();
        assert!(s.is_running());
        s.step();
        assert_eq!(s.round(), 2);
    }

    #[test]
    fn start_after_finish_is_ignored() {
        let mut s = sim(small_config());
        s.initialize(params(3, 2, 0));
        s.start();
        s.run_to_completion(&mut crate::NoopObserver);
        assert_eq!(s.current_phase(), Phase::Finished);
        s.start();
        assert_eq!(s.current_phase(), Phase::Finished);
        assert!(!s.is_running());
    }

    #[test]
    fn max_ticks_bounds_the_run() {
        let config = SimConfig {
            evacuation: EvacuationConfig { max_ticks: 4, ..EvacuationConfig::default() },
            ..small_config()
        };
        let mut s = sim(config);
        s.initialize(params(150, 1, 0));
        s.start();
        s.run_to_completion(&mut crate::NoopObserver);
        assert_eq!(s.current_phase(), Phase::Finished);
        assert_eq!(s.tick().0, 4);
        assert_eq!(s.evacuation_log().len(), 4);
        assert!(s.current_statistics().remaining > 0);
    }

    #[test]
    fn reset_clears_everything() {
        let mut s = sim(small_config());
        s.initialize(params(10, 2, 1));
        s.start();
        s.run_to_completion(&mut crate::NoopObserver);
        s.reset();
        assert_eq!(s.current_phase(), Phase::Idle);
        assert!(!s.is_initialized());
        assert!(!s.is_running());
        assert!(s.evacuees().is_empty());
        assert!(s.exploration_log().is_empty());
        assert!(s.evacuation_log().is_empty());
        assert!(s.hazards().is_empty());
        assert!(s.grid().exits().is_empty());
        assert_eq!(s.grid().hazard_count(), 0);
        assert_eq!(s.round(), 0);
        assert_eq!(s.tick().0, 0);
    }

    #[test]
    fn reinitialize_clears_logs() {
        let mut s = sim(small_config());
        s.initialize(params(10, 2, 0));
        s.start();
        s.step();
        s.initialize(params(10, 2, 0));
        assert!(s.exploration_log().is_empty());
        assert_eq!(s.current_phase(), Phase::Idle);
        assert!(!s.is_running());
    }
}

// ── Manual edits ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod edit_tests {
    use super::*;

    #[test]
    fn edits_rejected_before_initialize() {
        let mut s = sim(small_config());
        assert!(!s.toggle_wall(Cell::new(5, 5)));
        assert!(!s.add_hazard(Cell::new(5, 5)));
        assert!(!s.add_exit(Cell::new(0, 5)));
        assert_eq!(s.grid().wall_count(), 0);
    }

    #[test]
    fn edits_allowed_while_initialized_and_stopped() {
        let mut s = sim(small_config());
        s.initialize(params(5, 1, 0));
        assert!(s.toggle_wall(Cell::new(5, 5)));
        assert!(s.grid().is_wall(Cell::new(5, 5)));
        assert!(s.add_exit(Cell::new(0, 5)));
        assert!(s.grid().is_exit(Cell::new(0, 5)));
        assert!(s.add_hazard(Cell::new(10, 10)));
        assert_eq!(s.hazards().len(), 1);
        assert!(s.grid().has_hazard(Cell::new(10, 10)));
    }

    #[test]
    fn edits_rejected_while_running() {
        let mut s = sim(small_config());
        s.initialize(params(5, 1, 0));
        s.start();
        assert!(!s.toggle_wall(Cell::new(5, 5)));
        assert!(!s.add_hazard(Cell::new(10, 10)));
        assert!(!s.add_exit(Cell::new(0, 5)));
        s.stop();
        assert!(s.toggle_wall(Cell::new(5, 5)));
    }

    #[test]
    fn invalid_placements_are_no_ops() {
        let mut s = sim(small_config());
        s.initialize(params(5, 1, 0));
        let exit = s.grid().exits()[0];
        assert!(!s.add_hazard(exit));
        assert!(!s.add_hazard(Cell::new(-1, 3)));
        assert!(!s.add_exit(Cell::new(20, 20)));
        assert!(s.hazards().is_empty());
    }
}

// ── Evacuation behaviour ──────────────────────────────────────────────────────

#[cfg(test)]
mod evacuation_tests {
    use super::*;
    use crate::ExplorerSpawn;

    #[test]
    fn statistics_partition_population_every_tick() {
        let config = SimConfig {
            hazard: HazardConfig { ignition_delay: 2, spread_rate: 0.4, min_exit_clearance: 3, ..HazardConfig::default() },
            ..small_config()
        };
        let mut s = sim(config);
        s.initialize(params(60, 2, 3));
        s.start();
        while s.current_phase() == Phase::Exploration {
            s.step();
        }
        while s.step() {
            let st = s.current_statistics();
            assert_eq!(st.evacuated + st.remaining + st.casualties, st.total);
            let last = s.evacuation_log().last().unwrap();
            assert_eq!(last.evacuated, st.evacuated);
            assert_eq!(last.remaining, st.remaining);
            assert_eq!(last.hazard_cells, s.grid().hazard_count());
        }
    }

    #[test]
    fn hazard_cells_never_decrease() {
        let config = SimConfig {
            hazard: HazardConfig { ignition_delay: 1, min_exit_clearance: 3, ..HazardConfig::default() },
            colony: ColonyConfig { rounds: 0, ..small_config().colony },
            ..small_config()
        };
        let mut s = sim(config);
        s.initialize(params(80, 1, 2));
        s.start();
        s.run_to_completion(&mut crate::NoopObserver);
        let counts: Vec<usize> = s.evacuation_log().iter().map(|r| r.hazard_cells).collect();
        assert!(counts.windows(2).all(|w| w[0] <= w[1]));
        assert!(s.hazards().iter().all(|h| h.intensity <= 3));
    }

    #[test]
    fn trail_evaporates_on_interval_ticks() {
        let mut s = SimBuilder::new(small_config())
            .explorer_spawn(ExplorerSpawn::At(vec![Cell::new(1, 1)]))
            .build()
            .unwrap();
        s.initialize(params(100, 4, 0));
        s.start();
        while s.current_phase() == Phase::Exploration {
            s.step();
        }
        assert!(s.trail().max_value() > evac_trail::TRAIL_FLOOR);

        for _ in 0..4 {
            s.step();
        }
        let before = s.trail().max_value();
        s.step();
        assert_eq!(s.tick().0, 5);
        assert!(s.trail().max_value() < before);
    }

    #[test]
    fn five_evacuees_all_get_out() {
        let config = SimConfig {
            grid:       GridConfig { size: 10, layout: ObstacleLayout::Open },
            weights:    SearchWeights { alpha: 1.0, beta: 8.0 },
            colony:     ColonyConfig { rounds: 10, ..ColonyConfig::default() },
            evacuation: EvacuationConfig { max_ticks: 200, ..EvacuationConfig::default() },
            seed:       3,
            ..SimConfig::default()
        };
        let mut s = sim(config);
        s.initialize(params(5, 1, 0));
        s.start();
        s.run_to_completion(&mut crate::NoopObserver);
        let st = s.current_statistics();
        assert_eq!(s.current_phase(), Phase::Finished);
        assert_eq!((st.evacuated, st.remaining, st.casualties), (5, 0, 0));
    }

    #[test]
    fn five_evacuees_get_out_under_default_weights() {
        let mut cleared = 0;
        for seed in 0..30 {
            let config = SimConfig {
                grid:       GridConfig { size: 10, layout: ObstacleLayout::Open },
                colony:     ColonyConfig { rounds: 10, ..ColonyConfig::default() },
                evacuation: EvacuationConfig { max_ticks: 200, ..EvacuationConfig::default() },
                seed,
                ..SimConfig::default()
            };
            let mut s = sim(config);
            s.initialize(params(5, 1, 0));
            s.start();
            s.run_to_completion(&mut crate::NoopObserver);
            let st = s.current_statistics();
            assert_eq!(s.current_phase(), Phase::Finished);
            assert_eq!(st.casualties, 0, "seed {seed}");
            if st.remaining == 0 {
                cleared += 1;
            }
        }
        assert!(cleared >= 27, "cleared {cleared}/30");
    }

    #[test]
    fn same_seed_same_trajectory() {
        let run = || {
            let config = SimConfig {
                colony:     ColonyConfig { explorer_count: 30, rounds: 5, ..ColonyConfig::default() },
                evacuation: EvacuationConfig { max_ticks: 150, ..EvacuationConfig::default() },
                ..SimConfig::default()
            };
            let mut s = sim(config);
            s.initialize(RunParams::default());
            s.start();
            s.run_to_completion(&mut crate::NoopObserver);
            (s.exploration_log().to_vec(), s.evacuation_log().to_vec(), s.current_statistics())
        };
        assert_eq!(run(), run());
    }
}
