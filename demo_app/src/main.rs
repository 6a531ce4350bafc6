//! Bouncing ball demo
//!
//! Runs a few balls around the canvas on the headless host and prints the last frame as
//! ASCII. Key taps given with `--keys` are injected before the first tick.
//!
//! Keys: arrows nudge the first ball, Space adds a ball, BackSpace removes the newest one,
//! `h` hides/shows every ball, Escape or `q` quits.

use anyhow::Context;
use canvas_engine::foundation::logging;
use canvas_engine::host::Clock;
use canvas_engine::prelude::*;
use clap::Parser;
use rand::Rng;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Bouncing balls on a headless canvas")]
struct Args {
    /// Application config (.toml or .ron)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Stop after this many ticks
    #[arg(short, long, default_value_t = 150)]
    ticks: u64,

    /// Initial number of balls
    #[arg(short, long, default_value_t = 3)]
    balls: usize,

    /// Sleep between ticks instead of simulating time
    #[arg(long)]
    realtime: bool,

    /// Comma separated key names to tap before the first tick, e.g. "space,Left,h"
    #[arg(short, long, value_delimiter = ',')]
    keys: Vec<String>,

    /// Width of the ASCII snapshot in characters
    #[arg(long, default_value_t = 80)]
    columns: usize,
}

/// A sprite that moves by its velocity every tick and bounces off the canvas edges
struct Ball {
    sprite: Sprite,
    velocity: Vec2,
    bounces: u32,
}

impl Ball {
    fn spawn(scene: &mut Scene, x: f32, y: f32, velocity: Vec2) -> Result<Self, AppError> {
        let image = ImageData::solid_color(8, 8, [230, 80, 40, 255]);
        Ok(Self {
            sprite: scene.create_sprite(image, x, y)?,
            velocity,
            bounces: 0,
        })
    }
}

impl Element for Ball {
    fn state(&self) -> &ElementState {
        self.sprite.state()
    }

    fn state_mut(&mut self) -> &mut ElementState {
        self.sprite.state_mut()
    }

    fn update(&mut self, frame: &Frame) {
        let mut next = self.state().position() + self.velocity;
        if next.x < frame.bounds.min.x || next.x > frame.bounds.max.x {
            self.velocity.x = -self.velocity.x;
            next.x = next.x.clamp(frame.bounds.min.x, frame.bounds.max.x);
            self.bounces += 1;
        }
        if next.y < frame.bounds.min.y || next.y > frame.bounds.max.y {
            self.velocity.y = -self.velocity.y;
            next.y = next.y.clamp(frame.bounds.min.y, frame.bounds.max.y);
            self.bounces += 1;
        }
        self.state_mut().set_position(next.x, next.y);
    }
}

struct Bouncer {
    initial_balls: usize,
    max_ticks: u64,
    balls: Vec<ElementId>,
    score: Option<ElementId>,
    hidden: bool,
}

impl Bouncer {
    fn new(initial_balls: usize, max_ticks: u64) -> Self {
        Self {
            initial_balls,
            max_ticks,
            balls: Vec::new(),
            score: None,
            hidden: false,
        }
    }

    fn add_ball(&mut self, scene: &mut Scene) -> Result<(), AppError> {
        // Zero-sized canvases spawn at the origin.
        let (width, height) = scene.surface().size();
        let mut rng = rand::thread_rng();
        let x = rng.gen_range(0.0..width.max(1) as f32);
        let y = rng.gen_range(0.0..height.max(1) as f32);
        let velocity = Vec2::new(rng.gen_range(-12.0..12.0), rng.gen_range(-12.0..12.0));
        let ball = Ball::spawn(scene, x, y, velocity)?;
        let id = scene.add_element(ball)?;
        if self.hidden {
            scene.hide(id);
        }
        self.balls.push(id);
        log::debug!("Ball {} added at ({:.0}, {:.0})", self.balls.len(), x, y);
        Ok(())
    }

    fn nudge(&self, scene: &mut Scene, dx: f32, dy: f32) {
        if let Some(ball) = self.balls.first().and_then(|id| scene.element_mut::<Ball>(*id)) {
            ball.velocity += Vec2::new(dx, dy);
        }
    }
}

impl Game for Bouncer {
    fn init_game(&mut self, scene: &mut Scene) -> Result<(), AppError> {
        let (width, _) = scene.surface().size();
        let score = scene.create_text("Bounces: 0", width as f32 / 2.0, 10.0)?;
        self.score = Some(scene.add_element(score)?);
        for _ in 0..self.initial_balls {
            self.add_ball(scene)?;
        }
        Ok(())
    }

    fn post_update(&mut self, scene: &mut Scene, frame: &Frame) -> Result<(), AppError> {
        let bounces: u32 = self
            .balls
            .iter()
            .filter_map(|id| scene.element::<Ball>(*id))
            .map(|ball| ball.bounces)
            .sum();

        if let Some(score) = self.score {
            scene.with_element(score, |label: &mut Text, surface| {
                let text = format!("Bounces: {bounces}");
                if label.text() != text {
                    label.set_text(surface, text);
                }
            });
        }

        if frame.tick >= self.max_ticks {
            log::info!("Reached {} ticks", frame.tick);
            scene.request_stop();
        }
        Ok(())
    }

    fn on_key_pressed(&mut self, scene: &mut Scene, event: &KeyEvent) -> Result<(), AppError> {
        let step = if event.modifiers.contains(Modifiers::SHIFT) { 5.0 } else { 1.0 };
        match event.key {
            KeyCode::Left => self.nudge(scene, -step, 0.0),
            KeyCode::Right => self.nudge(scene, step, 0.0),
            KeyCode::Up => self.nudge(scene, 0.0, -step),
            KeyCode::Down => self.nudge(scene, 0.0, step),
            KeyCode::Space => self.add_ball(scene)?,
            KeyCode::Backspace => {
                if let Some(id) = self.balls.pop() {
                    scene.remove_element(id);
                }
            }
            KeyCode::Char('h') => {
                self.hidden = !self.hidden;
                for id in &self.balls {
                    if self.hidden {
                        scene.hide(*id);
                    } else {
                        scene.show(*id);
                    }
                }
            }
            KeyCode::Escape | KeyCode::Char('q') => scene.request_stop(),
            _ => log::debug!("Unbound key {:?}", event.key),
        }
        Ok(())
    }
}

fn play<C: Clock>(mut host: EventLoop<C>, config: AppConfig, args: &Args) -> anyhow::Result<()> {
    let sender = host.sender();
    for name in &args.keys {
        let key = KeyCode::from_name(name.trim())
            .with_context(|| format!("unknown key name {name:?}"))?;
        sender.tap(key);
    }

    let game = Bouncer::new(args.balls, args.ticks);
    let mut app = Application::new(&mut host, config, game)?;
    app.run(&mut host)?;

    log::info!(
        "Finished after {} ticks, average tick {:?}, {} over budget",
        app.ticks(),
        app.timer().average(),
        app.timer().overruns()
    );

    if let Some(surface) = app.scene().surface().as_any().downcast_ref::<MemorySurface>() {
        let rows = (args.columns * config.canvas_height as usize / config.canvas_width.max(1) as usize / 2).max(1);
        println!("{}", surface.render_ascii(args.columns, rows));
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    logging::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => AppConfig::load_from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => AppConfig::default(),
    };
    log::info!("Starting bouncer demo");

    if args.realtime {
        play(EventLoop::new(), config, &args)
    } else {
        play(EventLoop::with_clock(ManualClock::new()), config, &args)
    }
}
