use crate::{
    config::{Config, ConfigError},
    engine::{Fan, ProjectedColumn, Projection, RayCaster, RaySample},
    renderer::{Minimap, Renderer, RendererExt, Rgba},
    sim::{InputIntents, MoveResult, Player, PlayerPose},
    world::World,
};

/// Result of one [`App::tick`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tick {
    /// A frame was produced; `moved` reports what the controller did.
    Frame(MoveResult),
    /// Quit was requested; nothing was simulated or drawn.
    Quit,
}

/// Owns the world, the player and the renderer, and drives one frame per tick:
/// movement → ray sweep → projection → minimap → present.
pub struct App<R: Renderer> {
    config: Config,
    world: World,
    player: Player,
    fan: Fan,
    projection: Projection,
    minimap: Minimap,
    renderer: R,

    /* per-frame scratch, reused across ticks */
    samples: Vec<RaySample>,
    columns: Vec<ProjectedColumn>,
    frame: u64,
}

impl<R: Renderer> App<R> {
    /// Spawn the player at the world centre, facing east.
    pub fn new(config: Config, world: World, renderer: R) -> Result<Self, ConfigError> {
        let player = Player::spawn(&world, &config);
        Self::with_player(config, world, player, renderer)
    }

    pub fn with_player(
        config: Config,
        world: World,
        player: Player,
        renderer: R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        log::info!(
            "{}x{} view, {}° FOV, {} rays/frame, {} obstacles in a {}x{} world",
            config.screen_w,
            config.screen_h,
            config.fov_deg,
            config.sample_count(),
            world.obstacles().len(),
            world.width(),
            world.height()
        );

        Ok(Self {
            fan: Fan {
                fov_deg: config.fov_deg,
                screen_w: config.screen_w,
                ray_resolution: config.ray_resolution,
            },
            projection: Projection::new(&config),
            minimap: Minimap::new(config.minimap_size),
            samples: Vec::with_capacity(config.sample_count()),
            columns: Vec::with_capacity(config.screen_w),
            config,
            world,
            player,
            renderer,
            frame: 0,
        })
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[inline]
    pub fn world(&self) -> &World {
        &self.world
    }

    #[inline]
    pub fn pose(&self) -> PlayerPose {
        self.player.pose()
    }

    #[inline]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Ray fan of the last frame, left to right.
    #[inline]
    pub fn samples(&self) -> &[RaySample] {
        &self.samples
    }

    /// Frames produced so far.
    #[inline]
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    /// Run one fixed tick and hand the finished frame to `submit`.
    pub fn tick<F>(&mut self, intents: InputIntents, submit: F) -> Tick
    where
        F: FnOnce(&[Rgba], usize, usize),
    {
        if intents.contains(InputIntents::QUIT) {
            return Tick::Quit;
        }

        let moved = self.player.update(&self.world, intents);
        self.render(submit);
        Tick::Frame(moved)
    }

    /// Draw the current state without simulating.
    pub fn render<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize),
    {
        // copy: the sweep must see one pose for the whole fan
        let pose = self.player.pose();

        RayCaster::new(&self.world, self.config.ray_step).sweep_into(
            pose,
            &self.fan,
            &mut self.samples,
        );
        self.projection
            .project_into(&self.samples, &mut self.columns);

        let overlay = self.minimap.draw(&self.world, &pose);
        let (mx, my) = self.config.minimap_origin();

        self.renderer.draw_frame(
            self.config.screen_w,
            self.config.screen_h,
            &self.columns,
            Some((overlay, mx, my)),
            submit,
        );
        self.frame += 1;
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::{
        renderer::{BLACK, Software, grey, minimap},
        world::{BAR_SIZE, Layout, REFERENCE_SIZE},
    };

    fn boxed_app() -> App<Software> {
        let world = World::enclosure(REFERENCE_SIZE, BAR_SIZE).unwrap();
        App::new(Config::default(), world, Software::default()).unwrap()
    }

    #[test]
    fn centre_ray_hits_right_wall() {
        let mut app = boxed_app();
        assert_eq!(app.pose().pos, Vec2::new(240.0, 180.0));
        assert_eq!(app.pose().heading, 0.0);

        let mut submitted = false;
        let t = app.tick(InputIntents::empty(), |_, w, h| {
            submitted = true;
            assert_eq!((w, h), (480, 360));
        });
        assert!(submitted);
        assert!(matches!(t, Tick::Frame(m) if !m.blocked));

        let samples = app.samples();
        assert_eq!(samples.len(), 96);
        let centre = &samples[48];
        assert!(centre.angle.abs() < 1e-4);
        assert_eq!(centre.corrected_distance, centre.raw_distance);
        let expected = REFERENCE_SIZE.x - BAR_SIZE - 240.0;
        assert!((centre.corrected_distance - expected).abs() <= 1.0);
        // the fan is swept left to right: angles decrease
        assert!(samples.windows(2).all(|p| p[0].angle > p[1].angle));
    }

    #[test]
    fn frame_has_wall_band_and_minimap() {
        let mut app = boxed_app();
        app.tick(InputIntents::empty(), |_, _, _| {});
        let fb = app.renderer().frame();

        // centre column: wall straddles the horizon, sky and floor stay black
        let col = 240;
        let d = app.samples()[48].corrected_distance;
        let intensity = crate::engine::fog_intensity(d);
        assert_eq!(fb.get(col, 180), Some(grey(intensity)));
        assert_eq!(fb.get(col, 0), Some(BLACK));
        assert_eq!(fb.get(col, 359), Some(BLACK));

        // minimap in the top-right corner, player dot in its middle
        assert_eq!(fb.get(370 + 50, 10 + 50), Some(minimap::PLAYER_COLOUR));
        assert_eq!(fb.get(370, 10), Some(minimap::OBSTACLE_COLOUR));
    }

    #[test]
    fn quit_stops_before_simulating() {
        let mut app = boxed_app();
        let t = app.tick(InputIntents::QUIT | InputIntents::FORWARD, |_, _, _| {
            panic!("no frame expected on quit");
        });
        assert_eq!(t, Tick::Quit);
        assert_eq!(app.pose().pos, Vec2::new(240.0, 180.0));
        assert_eq!(app.frame_count(), 0);
    }

    #[test]
    fn walking_into_a_wall_stops_but_turning_continues() {
        let mut app = boxed_app();
        let mut last = app.pose();
        for _ in 0..200 {
            match app.tick(InputIntents::FORWARD, |_, _, _| {}) {
                Tick::Frame(m) => last = m.pose,
                Tick::Quit => unreachable!(),
            }
        }
        // footprint half-width 8 against the bar at x = 470
        assert!(last.pos.x <= 462.0);
        assert!(last.pos.x > 458.0);

        let t = app.tick(InputIntents::FORWARD | InputIntents::TURN_LEFT, |_, _, _| {});
        let Tick::Frame(m) = t else {
            panic!("expected a frame")
        };
        assert!(m.blocked);
        assert_eq!(m.pose.pos, last.pos);
        assert!((m.pose.heading - 3.0).abs() < 1e-4);
        assert_eq!(app.frame_count(), 201);
    }

    #[test]
    fn reference_map_renders_every_column() {
        let world = Layout::Reference.build().unwrap();
        let mut app = App::new(Config::default(), world, Software::default()).unwrap();
        for _ in 0..30 {
            app.tick(InputIntents::TURN_LEFT, |fb, w, h| {
                assert_eq!(fb.len(), w * h);
            });
        }
        let fb = app.renderer().frame();
        // every column has a lit pixel on the horizon
        assert!((0..480).all(|x| fb.get(x, 180) != Some(BLACK)));
    }

    #[test]
    fn bad_config_is_rejected() {
        let world = Layout::Empty.build().unwrap();
        let cfg = Config {
            ray_resolution: 0,
            ..Config::default()
        };
        assert_eq!(
            App::new(cfg, world, Software::default()).err(),
            Some(ConfigError::ZeroRayResolution)
        );
    }
}
