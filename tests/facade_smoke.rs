use particle_life_engine::{attraction, palette_json, version, ParticleLife};

#[test]
fn facade_steps_and_exposes_arrays() {
    let mut sim = ParticleLife::new(512.0, 512.0, 2048, 42).unwrap();
    assert_eq!(sim.particle_count(), 1024);

    sim.enable_perf_metrics(true);
    sim.step();
    assert_eq!(sim.frame(), 1);

    let stats = sim.get_perf_stats();
    assert_eq!(stats.particle_count(), 1024);
    assert!(stats.step_ms() >= 0.0);

    assert!(!sim.pos_x_ptr().is_null());
    assert!(!sim.colors_ptr().is_null());
    assert_eq!(sim.palette_abgr().len(), 3);
}

#[test]
fn facade_accepts_json_settings() {
    let mut sim = ParticleLife::new(512.0, 512.0, 2048, 1).unwrap();
    sim.configure(r#"{"particleCount":200,"minDist":4,"maxDist":48}"#)
        .unwrap();

    assert_eq!(sim.particle_count(), 200);
    assert_eq!(sim.min_dist(), 4.0);
    assert_eq!(sim.max_dist(), 48.0);
    assert!(sim.config_json().contains("\"particleCount\":200"));

    assert_eq!(sim.add_color(), Some(3));
    assert_eq!(sim.color_count(), 4);
    assert!(sim.colors_json().contains("#FBC531"));
}

#[test]
fn facade_persists_to_its_store() {
    let mut sim = ParticleLife::new(512.0, 512.0, 2048, 1).unwrap();
    assert!(!sim.load_settings().unwrap());

    sim.set_min_dist(12.0).unwrap();
    sim.save_settings().unwrap();
    sim.set_min_dist(2.0).unwrap();

    assert!(sim.load_settings().unwrap());
    assert_eq!(sim.min_dist(), 12.0);

    sim.clear_saved_settings();
    assert!(!sim.load_settings().unwrap());
}

#[test]
fn frame_covers_the_world() {
    let mut sim = ParticleLife::new(128.0, 96.0, 64, 9).unwrap();
    assert_eq!(sim.frame_len(), 128 * 96);
    let ptr = sim.render_frame();
    assert!(!ptr.is_null());
    assert_eq!(sim.engine().particle_count(), 64);
}

#[test]
fn free_functions() {
    assert_eq!(attraction(100.0, 1.0, 8.0, 64.0), 0.0);
    assert_eq!(attraction(36.0, 0.5, 8.0, 64.0), 0.5);
    assert!(palette_json().starts_with("[\"#EB3B5A\""));
    assert!(!version().is_empty());
}
