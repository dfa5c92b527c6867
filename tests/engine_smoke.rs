use std::cell::Cell;
use std::rc::Rc;

use particle_life_engine::{
    ConfigError, EngineEvent, MemoryStore, SimulationConfig, SimulationEngine,
};

#[test]
fn default_engine_runs_and_stays_in_bounds() {
    let mut engine = SimulationEngine::new(512.0, 512.0, 4096, 0).unwrap();
    assert_eq!(engine.particle_count(), 1024);
    assert_eq!(engine.color_count(), 3);

    for _ in 0..10 {
        engine.step();
    }
    assert_eq!(engine.frame(), 10);
    assert!(engine
        .particles()
        .iter()
        .all(|(c, x, y)| (c as usize) < 3 && engine.torus().contains(x, y)));
}

#[test]
fn settings_survive_a_store_round_trip() {
    let mut engine = SimulationEngine::new(512.0, 512.0, 2048, 11).unwrap();
    engine.set_max_dist(64.0).unwrap();
    engine.set_particle_count(300).unwrap();
    engine.randomize_forces();

    let mut store = MemoryStore::new();
    engine.save_settings(&mut store).unwrap();

    let mut other = SimulationEngine::new(512.0, 512.0, 2048, 12).unwrap();
    assert!(other.restore_settings(&store).unwrap());
    assert_eq!(other.config(), engine.config());
    assert_eq!(other.particle_count(), 300);
}

#[test]
fn rejected_updates_change_nothing() {
    let mut engine = SimulationEngine::new(512.0, 512.0, 128, 1).unwrap();
    let before = engine.config().clone();

    let err = engine.set_particle_count(129).unwrap_err();
    assert_eq!(
        err,
        ConfigError::CapacityExceeded {
            requested: 129,
            capacity: 128
        }
    );

    let err = engine
        .configure(SimulationConfig {
            min_dist: 10.0,
            max_dist: 5.0,
            ..before.clone()
        })
        .unwrap_err();
    assert!(err.to_string().contains("minDist"));
    assert_eq!(engine.config(), &before);
}

#[test]
fn listeners_count_steps() {
    let mut engine = SimulationEngine::new(256.0, 256.0, 64, 3).unwrap();
    let steps = Rc::new(Cell::new(0u64));
    let seen = Rc::clone(&steps);
    engine.subscribe(Box::new(move |event: &EngineEvent<'_>| {
        if let EngineEvent::Stepped { frame } = event {
            seen.set(*frame);
        }
    }));

    for _ in 0..5 {
        engine.step();
    }
    assert_eq!(steps.get(), 5);
}
