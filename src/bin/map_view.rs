//! Top-down map viewer: the minimap blown up to fill the window.
//!
//! Same controls as the main view; handy for checking collision footprints.
//!
//! ```bash
//! cargo run --release --bin map_view -- --layout empty --size 720
//! ```

use clap::Parser;

use yarc_rs::{
    Config,
    platform::{intents_from_window, open_window},
    renderer::Minimap,
    sim::{InputIntents, Player, TicRunner},
    world::Layout,
};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Opts {
    /// Map to load: `reference` or `empty`
    #[arg(long, default_value = "reference")]
    layout: Layout,

    /// Window edge length in pixels
    #[arg(
        long,
        value_name = "PX",
        default_value_t = 480,
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    size: u16,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let opts = Opts::parse();
    let size = usize::from(opts.size);
    let world = opts.layout.build()?;
    let config = Config::default();
    let mut player = Player::spawn(&world, &config);
    let mut map = Minimap::new(size);

    log::info!(
        "{:?} layout: {} obstacles, {}x{} world units",
        opts.layout,
        world.obstacles().len(),
        world.width(),
        world.height()
    );

    let mut win = open_window("yarc map", size, size)?;
    let mut runner = TicRunner::new(config.tick_rate);

    loop {
        let intents = intents_from_window(&win);
        if intents.contains(InputIntents::QUIT) {
            break;
        }
        let moved = player.update(&world, intents);
        let img = map.draw(&world, &moved.pose);
        win.update_with_buffer(img.pixels(), img.width(), img.height())?;
        runner.wait();
    }
    Ok(())
}

/*──────────────────────────────── Tests ───────────────────────────────*/
