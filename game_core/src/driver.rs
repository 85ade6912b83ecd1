//! Frame loop driver
//!
//! The host decides when frames happen. `GameLoop::frame` runs one tick and
//! asks the scheduler for the next frame, so the loop keeps itself alive until
//! `stop` is called. Tests use `ManualScheduler` or `GameLoop::step` to drive
//! an exact number of ticks.

use std::convert::Infallible;

use tracing::{info, trace};

use crate::{Config, ConfigError, Playfield, Renderer, Simulation, Surface};

/// Host primitive that invokes the frame callback once, at the next refresh
pub trait FrameScheduler {
    type Error;

    fn request_frame(&mut self) -> Result<(), Self::Error>;
}

pub struct GameLoop<S: Surface> {
    sim: Simulation,
    renderer: Renderer<S>,
    running: bool,
    frame: u64,
}

impl<S: Surface> GameLoop<S> {
    pub fn new(sim: Simulation, renderer: Renderer<S>) -> Self {
        Self {
            sim,
            renderer,
            running: false,
            frame: 0,
        }
    }

    /// Build a simulation sized to the surface
    pub fn with_surface(config: Config, surface: S) -> Result<Self, ConfigError> {
        let playfield = Playfield::new(surface.width(), surface.height());
        let renderer = Renderer::new(surface, config.ball_color);
        let sim = Simulation::new(config, playfield)?;
        Ok(Self::new(sim, renderer))
    }

    pub fn sim(&self) -> &Simulation {
        &self.sim
    }

    pub fn sim_mut(&mut self) -> &mut Simulation {
        &mut self.sim
    }

    pub fn renderer(&self) -> &Renderer<S> {
        &self.renderer
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Ticks run so far
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    pub fn key_down(&mut self, key: &str) {
        self.sim.key_down(key);
    }

    pub fn key_up(&mut self, key: &str) {
        self.sim.key_up(key);
    }

    /// Update paddles, update ball, render
    pub fn tick(&mut self) {
        self.sim.update();
        if let Some(scene) = self.sim.scene() {
            self.renderer.render(&scene.ball, &scene.left, &scene.right);
        }
        self.frame += 1;
        trace!(frame = self.frame, "tick");
    }

    /// Run exactly `n` ticks regardless of scheduling
    pub fn step(&mut self, n: u32) {
        for _ in 0..n {
            self.tick();
        }
    }

    pub fn start<F: FrameScheduler>(&mut self, scheduler: &mut F) -> Result<(), F::Error> {
        if self.running {
            return Ok(());
        }
        self.running = true;
        info!(frame = self.frame, "game loop started");
        scheduler.request_frame()
    }

    /// Frame callback: tick and re-request while running. Returns whether a tick ran.
    pub fn frame<F: FrameScheduler>(&mut self, scheduler: &mut F) -> Result<bool, F::Error> {
        if !self.running {
            return Ok(false);
        }
        self.tick();
        scheduler.request_frame()?;
        Ok(true)
    }

    /// The next delivered frame becomes a no-op and is not re-requested
    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            info!(frame = self.frame, "game loop stopped");
        }
    }
}

/// Scheduler that queues frame requests until they are pumped by hand
#[derive(Debug, Default)]
pub struct ManualScheduler {
    pending: usize,
    requested: usize,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> usize {
        self.pending
    }

    /// Total requests ever made
    pub fn requested(&self) -> usize {
        self.requested
    }

    /// Deliver up to `max` pending frames; returns how many ticked
    pub fn pump<S: Surface>(&mut self, game: &mut GameLoop<S>, max: usize) -> usize {
        let mut ticks = 0;
        for _ in 0..max {
            if self.pending == 0 {
                break;
            }
            self.pending -= 1;
            match game.frame(self) {
                Ok(true) => ticks += 1,
                Ok(false) => {}
                Err(never) => match never {},
            }
        }
        ticks
    }
}

impl FrameScheduler for ManualScheduler {
    type Error = Infallible;

    fn request_frame(&mut self) -> Result<(), Infallible> {
        self.pending += 1;
        self.requested += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CommandSurface, DrawCommand};

    fn new_loop() -> GameLoop<CommandSurface> {
        GameLoop::with_surface(Config::new(), CommandSurface::new(800.0, 600.0)).unwrap()
    }

    #[test]
    fn test_playfield_comes_from_surface() {
        let game =
            GameLoop::with_surface(Config::new(), CommandSurface::new(640.0, 480.0)).unwrap();
        assert_eq!(game.sim().playfield(), &Playfield::new(640.0, 480.0));
        assert_eq!(game.sim().right_paddle().unwrap().x, 610.0);
    }

    #[test]
    fn test_sim_mut_places_ball_before_tick() {
        let mut game = new_loop();
        game.sim_mut().set_ball(glam::Vec2::new(29.0, 300.0), glam::Vec2::new(-3.0, 0.0));

        game.tick();

        assert!(game.sim().events().left_paddle_hit);
        assert_eq!(game.sim().ball().unwrap().vel.x, 3.5);
    }

    #[test]
    fn test_step_runs_exact_ticks_without_scheduler() {
        let mut game = new_loop();
        game.step(5);
        assert_eq!(game.frame_count(), 5);
        assert!(!game.is_running());
    }

    #[test]
    fn test_tick_renders_current_state() {
        let mut game = new_loop();
        game.tick();

        let frame = game.renderer().surface().last_frame();
        assert_eq!(frame.len(), 4);
        assert_eq!(
            frame[1],
            DrawCommand::Circle {
                x: 402.0,
                y: 302.0,
                radius: 10.0,
                color: crate::Color::Black
            }
        );
    }

    #[test]
    fn test_frame_reschedules_itself() {
        let mut game = new_loop();
        let mut scheduler = ManualScheduler::new();

        game.start(&mut scheduler).unwrap();
        assert_eq!(scheduler.pending(), 1);

        let ticks = scheduler.pump(&mut game, 10);

        assert_eq!(ticks, 10);
        assert_eq!(game.frame_count(), 10);
        assert_eq!(scheduler.pending(), 1, "Each frame requests exactly one more");
    }

    #[test]
    fn test_stop_ends_the_chain() {
        let mut game = new_loop();
        let mut scheduler = ManualScheduler::new();

        game.start(&mut scheduler).unwrap();
        scheduler.pump(&mut game, 3);
        game.stop();

        let ticks = scheduler.pump(&mut game, 10);

        assert_eq!(ticks, 0);
        assert_eq!(game.frame_count(), 3);
        assert_eq!(scheduler.pending(), 0, "Stopped loop does not re-request");
    }

    #[test]
    fn test_start_twice_requests_once() {
        let mut game = new_loop();
        let mut scheduler = ManualScheduler::new();

        game.start(&mut scheduler).unwrap();
        game.start(&mut scheduler).unwrap();

        assert_eq!(scheduler.requested(), 1);
    }

    #[test]
    fn test_frame_before_start_is_noop() {
        let mut game = new_loop();
        let mut scheduler = ManualScheduler::new();

        assert_eq!(game.frame(&mut scheduler), Ok(false));
        assert_eq!(game.frame_count(), 0);
        assert_eq!(scheduler.requested(), 0);
    }
}
