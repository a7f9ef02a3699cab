//! First-person raycaster with a minimap.
//!
//! Controls  ↑/W = forward ↓/S = back ←/A = turn left →/D = turn right Esc = quit
//!
//! ```bash
//! cargo run --release -- --layout reference --fov 60
//! RUST_LOG=debug cargo run --release
//! ```

use std::time::{Duration, Instant};

use clap::Parser;
use glam::Vec2;

use yarc_rs::{
    App, Config, Tick,
    platform::{intents_from_window, open_window},
    renderer::Software,
    sim::TicRunner,
    world::Layout,
};

/// CLI options handled via `clap` derive. Anything omitted keeps its default.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Opts {
    /// Map to load: `reference` or `empty`
    #[arg(long, default_value = "reference")]
    layout: Layout,

    #[arg(long, value_name = "PX")]
    width: Option<usize>,

    #[arg(long, value_name = "PX")]
    height: Option<usize>,

    /// Horizontal field of view, degrees
    #[arg(long, value_name = "DEG")]
    fov: Option<f32>,

    /// Screen columns between two cast rays
    #[arg(long, value_name = "PX")]
    ray_resolution: Option<usize>,

    /// Ray march step, world units
    #[arg(long)]
    ray_step: Option<f32>,

    #[arg(long)]
    wall_height: Option<f32>,

    /// World units per tick
    #[arg(long)]
    speed: Option<f32>,

    /// Degrees per tick
    #[arg(long)]
    turn_rate: Option<f32>,

    /// Collision footprint edge length, world units
    #[arg(long)]
    player_size: Option<f32>,

    #[arg(long, value_name = "PX")]
    minimap_size: Option<usize>,

    /// Ticks per second
    #[arg(long)]
    tick_rate: Option<u32>,
}

impl Opts {
    fn config(&self) -> Config {
        let d = Config::default();
        Config {
            screen_w: self.width.unwrap_or(d.screen_w),
            screen_h: self.height.unwrap_or(d.screen_h),
            fov_deg: self.fov.unwrap_or(d.fov_deg),
            ray_resolution: self.ray_resolution.unwrap_or(d.ray_resolution),
            ray_step: self.ray_step.unwrap_or(d.ray_step),
            wall_height: self.wall_height.unwrap_or(d.wall_height),
            player_speed: self.speed.unwrap_or(d.player_speed),
            turn_rate_deg: self.turn_rate.unwrap_or(d.turn_rate_deg),
            player_size: self.player_size.map(Vec2::splat).unwrap_or(d.player_size),
            minimap_size: self.minimap_size.unwrap_or(d.minimap_size),
            tick_rate: self.tick_rate.unwrap_or(d.tick_rate),
            ..d
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // ─────────── parse CLI ────────────
    let opts = Opts::parse();
    let config = opts.config();
    let world = opts.layout.build()?;
    let mut app = App::new(config, world, Software::default())?;

    // ─────────── show window ────────────
    let mut win = open_window("yarc", config.screen_w, config.screen_h)?;
    let mut runner = TicRunner::new(config.tick_rate);

    // ────────────────── benchmarking state ──────────────────────────────
    let mut acc_time = Duration::ZERO; // cumulated frame time
    let mut acc_frames = 0usize; // frames in the current window
    let mut last_print = Instant::now(); // when we printed last

    loop {
        let t0 = Instant::now();
        let intents = intents_from_window(&win);

        let mut presented = Ok(());
        let tick = app.tick(intents, |fb, w, h| {
            presented = win.update_with_buffer(fb, w, h);
        });
        presented?;

        if tick == Tick::Quit {
            log::info!("quit after {} frames", app.frame_count());
            break;
        }

        acc_time += t0.elapsed();
        acc_frames += 1;
        if last_print.elapsed() >= Duration::from_secs(3) {
            let avg_ms = acc_time.as_secs_f64() * 1000.0 / acc_frames as f64;
            let pose = app.pose();
            log::info!(
                "avg frame: {:.2} ms  ({:.1} FPS)  at ({:.0}, {:.0}) facing {:.0}°",
                avg_ms,
                1000.0 / avg_ms,
                pose.pos.x,
                pose.pos.y,
                pose.heading
            );
            acc_time = Duration::ZERO;
            acc_frames = 0;
            last_print = Instant::now();
        }

        runner.wait();
    }
    Ok(())
}
