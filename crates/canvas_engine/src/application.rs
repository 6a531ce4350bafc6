//! Application trait and lifecycle management
//!
//! [`Application`] owns the scene and drives the animation loop; the game logic lives in a
//! [`Game`] implementation whose hooks all default to doing nothing.
//!
//! Loop states:
//!
//! ```text
//! Idle --start()--> Running --stop() / close / hook error / host dry--> Stopped
//! ```
//!
//! Every tick runs `pre_update`, then `update` + `render` on each element in insertion order,
//! then `post_update`, and finally asks the host for the next tick. A stopped application
//! ignores ticks that were already queued and never schedules another.

use crate::assets::AssetError;
use crate::config::{AppConfig, ConfigError};
use crate::element::{Element, Frame};
use crate::foundation::math::Rect;
use crate::foundation::time::TickTimer;
use crate::host::{Host, HostEvent};
use crate::input::KeyEvent;
use crate::scene::{ElementId, Scene};
use crate::surface::SurfaceError;
use thiserror::Error;

/// Game hooks
///
/// Implement this trait to create your game on top of the engine.
pub trait Game {
    /// Populate the initial elements
    ///
    /// Called once from [`Application::new`], after the surface exists.
    fn init_game(&mut self, _scene: &mut Scene) -> Result<(), AppError> {
        Ok(())
    }

    /// Called at the start of every tick, before any element updates
    fn pre_update(&mut self, _scene: &mut Scene, _frame: &Frame) -> Result<(), AppError> {
        Ok(())
    }

    /// Called at the end of every tick, after every element rendered
    fn post_update(&mut self, _scene: &mut Scene, _frame: &Frame) -> Result<(), AppError> {
        Ok(())
    }

    /// Key was pressed
    fn on_key_pressed(&mut self, _scene: &mut Scene, _event: &KeyEvent) -> Result<(), AppError> {
        Ok(())
    }

    /// Key was released
    fn on_key_released(&mut self, _scene: &mut Scene, _event: &KeyEvent) -> Result<(), AppError> {
        Ok(())
    }
}

/// Bare scaffold with no game logic
impl Game for () {}

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Surface could not create a primitive
    #[error("Surface error: {0}")]
    Surface(#[from] SurfaceError),

    /// Asset loading error
    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Game logic error
    #[error("Game logic error: {0}")]
    GameLogic(String),
}

/// Animation loop state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Constructed, not started
    Idle,
    /// Ticking
    Running,
    /// Will never tick again
    Stopped,
}

/// Owns the surface, the element list and the game, and runs the tick loop
pub struct Application<G: Game> {
    config: AppConfig,
    scene: Scene,
    game: G,
    state: LoopState,
    timer: TickTimer,
    ticks: u64,
}

impl<G: Game> Application<G> {
    /// Create the surface, then let the game populate it
    ///
    /// The configuration is fixed from here on.
    pub fn new(host: &mut dyn Host, config: AppConfig, mut game: G) -> Result<Self, AppError> {
        log::info!(
            "Creating application: {}x{} canvas, {:?} tick",
            config.canvas_width, config.canvas_height, config.update_delay()
        );
        let surface = host.create_surface(config.canvas_width, config.canvas_height);
        let mut scene = Scene::new(surface);
        game.init_game(&mut scene)?;
        log::debug!("Game initialized with {} elements", scene.len());

        Ok(Self {
            config,
            scene,
            game,
            state: LoopState::Idle,
            timer: TickTimer::new(config.update_delay()),
            ticks: 0,
        })
    }

    /// The configuration given at construction
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Current loop state
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Number of ticks processed
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Tick timing statistics
    pub fn timer(&self) -> &TickTimer {
        &self.timer
    }

    /// The scene
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Mutable scene
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// The game
    pub fn game(&self) -> &G {
        &self.game
    }

    /// Mutable game
    pub fn game_mut(&mut self) -> &mut G {
        &mut self.game
    }

    /// Append an element; see [`Scene::add_element`]
    pub fn add_element<E: Element>(&mut self, element: E) -> Result<ElementId, SurfaceError> {
        self.scene.add_element(element)
    }

    /// Remove an element; see [`Scene::remove_element`]
    pub fn remove_element(&mut self, id: ElementId) -> bool {
        self.scene.remove_element(id)
    }

    /// Typed element access; see [`Scene::element`]
    pub fn element<T: Element>(&self, id: ElementId) -> Option<&T> {
        self.scene.element(id)
    }

    /// Typed mutable element access; see [`Scene::element_mut`]
    pub fn element_mut<T: Element>(&mut self, id: ElementId) -> Option<&mut T> {
        self.scene.element_mut(id)
    }

    /// Schedule the first tick with no delay
    ///
    /// Only an idle application starts; calling this again is logged and ignored.
    pub fn start(&mut self, host: &mut dyn Host) {
        match self.state {
            LoopState::Idle => {
                log::info!("Starting animation loop");
                self.state = LoopState::Running;
                host.schedule_tick(std::time::Duration::ZERO);
            }
            LoopState::Running => log::warn!("start() called on a running application; ignored"),
            LoopState::Stopped => log::warn!("start() called on a stopped application; ignored"),
        }
    }

    /// Stop ticking; queued ticks are ignored
    pub fn stop(&mut self) {
        if self.state != LoopState::Stopped {
            log::info!("Animation loop stopped after {} ticks", self.ticks);
            self.state = LoopState::Stopped;
        }
    }

    /// Run one tick and schedule the next
    ///
    /// A hook error stops the loop and is returned.
    pub fn animate(&mut self, host: &mut dyn Host) -> Result<(), AppError> {
        if self.state != LoopState::Running {
            log::trace!("Tick ignored in state {:?}", self.state);
            return Ok(());
        }

        self.timer.begin();
        self.ticks += 1;
        let frame = Frame {
            tick: self.ticks,
            bounds: Rect::from_size(self.config.canvas_width as f32, self.config.canvas_height as f32),
            delay: self.config.update_delay(),
        };

        let result = self.tick(&frame);
        self.timer.end();

        if let Err(e) = result {
            log::error!("Tick {} failed: {}", frame.tick, e);
            self.stop();
            return Err(e);
        }

        if self.scene.take_stop_request() {
            self.stop();
        }

        if self.state == LoopState::Running {
            host.schedule_tick(frame.delay);
        }
        Ok(())
    }

    fn tick(&mut self, frame: &Frame) -> Result<(), AppError> {
        self.game.pre_update(&mut self.scene, frame)?;
        self.scene.update_and_render(frame);
        self.game.post_update(&mut self.scene, frame)
    }

    /// Dispatch one host event
    pub fn handle_event(&mut self, host: &mut dyn Host, event: HostEvent) -> Result<(), AppError> {
        let result = match event {
            HostEvent::Tick => return self.animate(host),
            HostEvent::KeyPressed(key) => {
                log::trace!("Key pressed: {:?}", key);
                self.game.on_key_pressed(&mut self.scene, &key)
            }
            HostEvent::KeyReleased(key) => {
                log::trace!("Key released: {:?}", key);
                self.game.on_key_released(&mut self.scene, &key)
            }
            HostEvent::CloseRequested => {
                log::info!("Close requested");
                self.stop();
                Ok(())
            }
        };

        if result.is_err() {
            self.stop();
        } else if self.scene.take_stop_request() {
            self.stop();
        }
        result
    }

    /// Start the loop and process host events until the application stops
    ///
    /// A host that runs out of events also ends the loop.
    pub fn run(&mut self, host: &mut dyn Host) -> Result<(), AppError> {
        self.start(host);
        while self.state == LoopState::Running {
            match host.next_event() {
                Some(event) => self.handle_event(host, event)?,
                None => {
                    log::info!("Host has no more events");
                    self.stop();
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{ElementState, Text};
    use crate::host::{EventLoop, ManualClock};
    use crate::input::KeyCode;
    use crate::surface::Surface;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    type Log = Rc<RefCell<Vec<String>>>;

    struct Tracer {
        label: Text,
        name: &'static str,
        log: Log,
    }

    impl Element for Tracer {
        fn state(&self) -> &ElementState {
            self.label.state()
        }

        fn state_mut(&mut self) -> &mut ElementState {
            self.label.state_mut()
        }

        fn update(&mut self, _frame: &Frame) {
            self.log.borrow_mut().push(format!("update {}", self.name));
            let x = self.state().x() + 1.0;
            self.state_mut().set_position(x, 0.0);
        }

        fn render(&self, surface: &mut dyn Surface) {
            self.log.borrow_mut().push(format!("render {}", self.name));
            surface.set_position(self.state().handle(), self.state().position());
        }
    }

    #[derive(Default)]
    struct Recording {
        log: Log,
        stop_after: Option<u64>,
        fail_on_key: bool,
        score: Option<ElementId>,
    }

    impl Game for Recording {
        fn init_game(&mut self, scene: &mut Scene) -> Result<(), AppError> {
            for name in ["A", "B", "C"] {
                let tracer = Tracer {
                    label: scene.create_text(name, 0.0, 0.0)?,
                    name,
                    log: Rc::clone(&self.log),
                };
                scene.add_element(tracer)?;
            }
            let score = scene.create_text("Score: 0", 400.0, 20.0)?;
            self.score = Some(scene.add_element(score)?);
            Ok(())
        }

        fn pre_update(&mut self, _scene: &mut Scene, frame: &Frame) -> Result<(), AppError> {
            self.log.borrow_mut().push(format!("pre {}", frame.tick));
            Ok(())
        }

        fn post_update(&mut self, scene: &mut Scene, frame: &Frame) -> Result<(), AppError> {
            self.log.borrow_mut().push(format!("post {}", frame.tick));
            if self.stop_after == Some(frame.tick) {
                scene.request_stop();
            }
            Ok(())
        }

        fn on_key_pressed(&mut self, scene: &mut Scene, event: &KeyEvent) -> Result<(), AppError> {
            if self.fail_on_key {
                return Err(AppError::GameLogic("bad key".to_string()));
            }
            self.log.borrow_mut().push(format!("press {:?}", event.key));
            if let Some(score) = self.score {
                scene.with_element(score, |label: &mut Text, surface| {
                    label.set_text(surface, format!("Key: {:?}", event.key));
                });
            }
            Ok(())
        }

        fn on_key_released(&mut self, _scene: &mut Scene, event: &KeyEvent) -> Result<(), AppError> {
            self.log.borrow_mut().push(format!("release {:?}", event.key));
            Ok(())
        }
    }

    fn host() -> EventLoop<ManualClock> {
        EventLoop::with_clock(ManualClock::new())
    }

    fn drain(log: &Log) -> Vec<String> {
        log.borrow_mut().drain(..).collect()
    }

    #[test]
    fn test_construction_sizes_surface_and_runs_init_game() {
        let mut host = host();
        let config = AppConfig::new(320, 240, Duration::from_millis(20));
        let app = Application::new(&mut host, config, Recording::default()).unwrap();

        assert_eq!(app.state(), LoopState::Idle);
        assert_eq!(app.scene().surface().size(), (320, 240));
        assert_eq!(app.scene().len(), 4);
        assert_eq!(app.scene().surface().item_count(), 4);
        assert_eq!(host.pending_ticks(), 0);
    }

    #[test]
    fn test_tick_order() {
        let mut host = host();
        let game = Recording::default();
        let log = Rc::clone(&game.log);
        let mut app = Application::new(&mut host, AppConfig::default(), game).unwrap();

        app.start(&mut host);
        assert_eq!(host.next_event(), Some(HostEvent::Tick));
        app.animate(&mut host).unwrap();

        assert_eq!(
            drain(&log),
            vec![
                "pre 1", "update A", "render A", "update B", "render B",
                "update C", "render C", "post 1",
            ]
        );
        assert_eq!(host.pending_ticks(), 1);
    }

    #[test]
    fn test_ticks_are_spaced_by_update_delay() {
        let mut host = host();
        let game = Recording { stop_after: Some(5), ..Recording::default() };
        let config = AppConfig::new(800, 500, Duration::from_millis(33));
        let mut app = Application::new(&mut host, config, game).unwrap();

        app.run(&mut host).unwrap();

        assert_eq!(app.ticks(), 5);
        assert_eq!(app.state(), LoopState::Stopped);
        // First tick at zero, four more at 33ms intervals
        assert_eq!(host.clock().elapsed(), Duration::from_millis(132));
        assert_eq!(host.pending_ticks(), 0);
    }

    #[test]
    fn test_start_twice_schedules_once() {
        let mut host = host();
        let mut app = Application::new(&mut host, AppConfig::default(), ()).unwrap();
        app.start(&mut host);
        app.start(&mut host);
        assert_eq!(app.state(), LoopState::Running);
        assert_eq!(host.pending_ticks(), 1);
    }

    #[test]
    fn test_stop_prevents_reschedule() {
        let mut host = host();
        let mut app = Application::new(&mut host, AppConfig::default(), ()).unwrap();
        app.start(&mut host);
        app.stop();

        // The already queued tick is delivered but ignored.
        assert_eq!(host.next_event(), Some(HostEvent::Tick));
        app.animate(&mut host).unwrap();
        assert_eq!(app.ticks(), 0);
        assert_eq!(host.pending_ticks(), 0);

        app.start(&mut host);
        assert_eq!(app.state(), LoopState::Stopped);
        assert_eq!(host.pending_ticks(), 0);
    }

    #[test]
    fn test_animate_before_start_is_ignored() {
        let mut host = host();
        let mut app = Application::new(&mut host, AppConfig::default(), ()).unwrap();
        app.animate(&mut host).unwrap();
        assert_eq!(app.ticks(), 0);
        assert_eq!(host.pending_ticks(), 0);
    }

    #[test]
    fn test_key_events_reach_hooks() {
        let mut host = host();
        let game = Recording::default();
        let log = Rc::clone(&game.log);
        let mut app = Application::new(&mut host, AppConfig::default(), game).unwrap();

        let sender = host.sender();
        sender.tap(KeyCode::Left);
        sender.close();
        app.run(&mut host).unwrap();

        assert_eq!(drain(&log), vec!["press Left", "release Left"]);
        assert_eq!(app.ticks(), 0);
        let score = app.game().score.unwrap();
        assert_eq!(app.element::<Text>(score).unwrap().text(), "Key: Left");
    }

    #[test]
    fn test_hook_error_stops_loop() {
        let mut host = host();
        let game = Recording { fail_on_key: true, ..Recording::default() };
        let mut app = Application::new(&mut host, AppConfig::default(), game).unwrap();

        host.sender().press(KeyCode::Space);
        let result = app.run(&mut host);
        assert!(matches!(result, Err(AppError::GameLogic(_))));
        assert_eq!(app.state(), LoopState::Stopped);
    }

    #[test]
    fn test_init_game_error_fails_construction() {
        struct Broken;
        impl Game for Broken {
            fn init_game(&mut self, _scene: &mut Scene) -> Result<(), AppError> {
                Err(AppError::GameLogic("no level".to_string()))
            }
        }

        let mut host = host();
        let result = Application::new(&mut host, AppConfig::default(), Broken);
        assert!(matches!(result, Err(AppError::GameLogic(_))));
    }

    #[test]
    fn test_remove_element_through_application() {
        let mut host = host();
        let mut app = Application::new(&mut host, AppConfig::default(), ()).unwrap();
        let text = app.scene_mut().create_text("x", 0.0, 0.0).unwrap();
        let id = app.add_element(text).unwrap();

        assert!(app.remove_element(id));
        assert!(!app.remove_element(id));
        assert_eq!(app.scene().surface().item_count(), 0);
    }

    #[test]
    fn test_elements_move_each_tick() {
        let mut host = host();
        let game = Recording { stop_after: Some(3), ..Recording::default() };
        let mut app = Application::new(&mut host, AppConfig::default(), game).unwrap();
        app.run(&mut host).unwrap();

        let first = app.scene().ids()[0];
        let handle = app.scene().get(first).unwrap().state().handle();
        assert_eq!(app.scene().surface().coords(handle).map(|p| p.x), Some(3.0));
    }
}
