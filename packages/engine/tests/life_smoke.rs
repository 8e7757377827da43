use verdant_life_engine::{CellGrid, DrawCommand, Life, LifeConfig, LifeCore, Surface};

#[derive(Default)]
struct CountingSurface {
    clears: usize,
    rects: usize,
    color_changes: usize,
}

impl Surface for CountingSurface {
    fn width(&self) -> f64 { 0.0 }
    fn height(&self) -> f64 { 0.0 }
    fn clear(&mut self, _x: f64, _y: f64, _w: f64, _h: f64) {
        self.clears += 1;
    }
    fn set_fill_color(&mut self, _color: &str) {
        self.color_changes += 1;
    }
    fn fill_rounded_rect(&mut self, _x: f64, _y: f64, _w: f64, _h: f64, _r: f64) -> Result<(), String> {
        self.rects += 1;
        Ok(())
    }
}

#[test]
fn facade_runs_a_few_seconds_of_frames() {
    let mut life = Life::with_seed(640.0, 480.0, 7);
    assert_eq!((life.rows(), life.cols()), (48, 64));
    life.enable_perf_metrics(true);

    // 3 seconds of 60Hz callbacks: ticks at frames 30, 60, ..., 180
    let mut ticks = 0;
    for frame in 1..=180 {
        if life.frame(frame as f64 * 16.667) {
            ticks += 1;
        }
    }
    assert_eq!(ticks, 6);
    assert_eq!(life.generation(), 6);
    assert_eq!(life.instances_len(), life.live_cells() as usize * 4);
    assert_eq!(life.command_count(), life.live_cells() as usize + 1);

    let stats = life.get_perf_stats();
    assert_eq!(stats.generation(), 6);
    assert_eq!(stats.grid_cells(), 48 * 64);
}

#[test]
fn config_json_roundtrips_through_facade() {
    let life = Life::with_config_json(100.0, 100.0, r#"{"cell_size": 5, "seed": 3}"#.to_string())
        .unwrap_or_else(|_| panic!("config should parse"));
    assert_eq!((life.rows(), life.cols()), (20, 20));

    let config = LifeConfig::from_json(&life.config_json()).unwrap();
    assert_eq!(config.cell_size, 5);
    assert_eq!(config.seed, Some(3));
}

#[test]
fn glider_crosses_the_torus_edge() {
    let mut core = LifeCore::new(60.0, 60.0);
    let mut glider = CellGrid::new(6, 6);
    for (r, c) in [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)] {
        glider.set(r, c, true);
    }
    *core.store_mut().current_mut() = glider.clone();

    // A glider moves one cell diagonally every 4 generations; 24 brings it
    // all the way around a 6x6 torus.
    for _ in 0..24 {
        core.advance();
    }
    assert_eq!(core.store().current(), &glider);
    assert_eq!(core.live_cells(), 5);
}

#[test]
fn replay_onto_custom_surface() {
    let mut core = LifeCore::with_config(
        LifeConfig {
            seed: Some(11),
            ..LifeConfig::default()
        },
        200.0,
        200.0,
    );
    core.step();

    let mut surface = CountingSurface::default();
    core.paint_to(&mut surface).unwrap();
    assert_eq!(surface.clears, 1);
    assert_eq!(surface.rects, core.live_cells());
    assert!(surface.color_changes <= surface.rects);

    let fills = core
        .draw_list()
        .commands()
        .iter()
        .filter(|c| matches!(c, DrawCommand::FillRoundedRect { .. }))
        .count();
    assert_eq!(fills, surface.rects);
}

#[test]
fn resize_to_zero_keeps_running() {
    let mut life = Life::with_seed(300.0, 300.0, 1);
    life.resize(0.0, 0.0);
    life.step();
    life.step();
    assert_eq!(life.live_cells(), 0);
    assert_eq!(life.command_count(), 1);

    life.resize(300.0, 300.0);
    assert_eq!((life.rows(), life.cols()), (30, 30));
}
