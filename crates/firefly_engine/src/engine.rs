//! Core engine implementation
//!
//! The engine owns frame timing, frame statistics, the event queue and the
//! running/active flags, and drives the [`Application`] lifecycle:
//! load, then a loop of event dispatch / update / render, then exit.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::application::{AppError, AppEvent, Application};
use crate::core::config::EngineConfig;
use crate::foundation::time::{FrameStats, Timer};
use thiserror::Error;

/// Explicitly constructed engine context
///
/// Passed by mutable reference to every lifecycle method; holds no global
/// state. A windowing collaborator integrates by pushing [`AppEvent`]s into
/// the queue; the engine itself never touches a windowing library.
pub struct Engine {
    timer: Timer,
    stats: FrameStats,
    events: VecDeque<AppEvent>,
    config: EngineConfig,
    running: bool,
    active: bool,
}

impl Engine {
    /// Create a new engine instance
    pub fn new(config: EngineConfig) -> Self {
        log::info!("initializing engine for '{}'", config.app.title);
        Self {
            timer: Timer::new(),
            stats: FrameStats::new(),
            events: VecDeque::new(),
            config,
            running: true,
            active: true,
        }
    }

    /// Run the engine main loop with the given application
    pub fn run<T: Application>(config: EngineConfig, app: &mut T) -> Result<(), EngineError> {
        let mut engine = Self::new(config);

        app.load(&mut engine)
            .map_err(|e| EngineError::Application(format!("load: {e}")))?;

        log::info!("entering main loop");
        while engine.running {
            let frame_start = Instant::now();

            engine.timer.update();
            let dt = engine.timer.delta_time();
            let elapsed = engine.timer.total_time();

            engine.dispatch_events(app)?;

            // When auto-pause is on and focus is lost, the loop keeps
            // draining events but skips the frame itself.
            if engine.running && (engine.active || !engine.config.app.auto_pause) {
                app.update(&mut engine, dt, elapsed)
                    .map_err(|e| EngineError::Application(format!("update: {e}")))?;
                app.render(&mut engine, dt, elapsed)
                    .map_err(|e| EngineError::Application(format!("render: {e}")))?;
            }

            if engine.stats.update(dt) {
                log::debug!(
                    "frame stats: {:.1} fps (min {:.1}, max {:.1}), {:.3} ms/frame (min {:.3}, max {:.3})",
                    engine.stats.fps(),
                    engine.stats.fps_min(),
                    engine.stats.fps_max(),
                    engine.stats.ms_per_frame(),
                    engine.stats.ms_per_frame_min(),
                    engine.stats.ms_per_frame_max(),
                );
            }

            if let Some(budget) = engine.frame_budget() {
                let spent = frame_start.elapsed();
                if spent < budget {
                    std::thread::sleep(budget - spent);
                }
            }
        }

        app.exit(&mut engine);
        log::info!("engine shutdown complete");
        Ok(())
    }

    fn dispatch_events<T: Application>(&mut self, app: &mut T) -> Result<(), EngineError> {
        while let Some(event) = self.events.pop_front() {
            match event {
                AppEvent::CloseRequested => self.quit(),
                AppEvent::Resized { width, height } => app.resize(self, width, height),
                AppEvent::FocusChanged(active) => self.active = active,
                other => app
                    .handle_event(self, &other)
                    .map_err(|e| EngineError::Application(format!("event: {e}")))?,
            }
        }
        Ok(())
    }

    fn frame_budget(&self) -> Option<Duration> {
        let target = self.config.app.target_fps;
        (target > 0).then(|| Duration::from_secs_f64(1.0 / f64::from(target)))
    }

    /// Queue an event for dispatch at the start of the next frame
    pub fn push_event(&mut self, event: AppEvent) {
        self.events.push_back(event);
    }

    /// Stop the main loop after the current frame
    pub fn quit(&mut self) {
        log::info!("quit requested");
        self.running = false;
    }

    /// Whether the main loop will run another frame
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether the application currently has focus
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Time spent on the last frame, seconds
    pub fn frame_time(&self) -> f32 {
        self.timer.delta_time()
    }

    /// Total run time, seconds
    pub fn run_time(&self) -> f32 {
        self.timer.total_time()
    }

    /// Frames completed so far
    pub fn frame_count(&self) -> u64 {
        self.timer.frame_count()
    }

    /// Frame statistics (fps and ms-per-frame aggregates)
    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }
}

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// An application lifecycle method failed
    #[error("application error: {0}")]
    Application(String),

    /// Configuration could not be loaded
    #[error("configuration error: {0}")]
    Config(#[from] crate::core::config::ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct ScriptedApp {
        loads: u32,
        updates: u32,
        renders: u32,
        exits: u32,
        resizes: Vec<(u32, u32)>,
        keys: Vec<u32>,
        quit_after: u32,
    }

    impl Application for ScriptedApp {
        fn load(&mut self, engine: &mut Engine) -> Result<(), AppError> {
            self.loads += 1;
            engine.push_event(AppEvent::Resized {
                width: 640,
                height: 480,
            });
            engine.push_event(AppEvent::Key {
                code: 42,
                pressed: true,
                shift: false,
            });
            Ok(())
        }

        fn update(&mut self, engine: &mut Engine, _dt: f32, _elapsed: f32) -> Result<(), AppError> {
            self.updates += 1;
            if self.updates == self.quit_after {
                engine.quit();
            }
            Ok(())
        }

        fn render(&mut self, _engine: &mut Engine, _dt: f32, _elapsed: f32) -> Result<(), AppError> {
            self.renders += 1;
            Ok(())
        }

        fn resize(&mut self, _engine: &mut Engine, width: u32, height: u32) {
            self.resizes.push((width, height));
        }

        fn handle_event(&mut self, _engine: &mut Engine, event: &AppEvent) -> Result<(), AppError> {
            if let AppEvent::Key { code, .. } = event {
                self.keys.push(*code);
            }
            Ok(())
        }

        fn exit(&mut self, _engine: &mut Engine) {
            self.exits += 1;
        }
    }

    #[test]
    fn test_lifecycle_runs_in_order() {
        let mut app = ScriptedApp {
            quit_after: 3,
            ..Default::default()
        };
        Engine::run(EngineConfig::default(), &mut app).unwrap();

        assert_eq!(app.loads, 1);
        assert_eq!(app.updates, 3);
        // The quitting frame still renders; the loop exits afterwards.
        assert_eq!(app.renders, 3);
        assert_eq!(app.exits, 1);
    }

    #[test]
    fn test_events_are_dispatched_before_first_update() {
        let mut app = ScriptedApp {
            quit_after: 1,
            ..Default::default()
        };
        Engine::run(EngineConfig::default(), &mut app).unwrap();

        assert_eq!(app.resizes, vec![(640, 480)]);
        assert_eq!(app.keys, vec![42]);
    }

    #[test]
    fn test_close_request_stops_the_loop() {
        struct CloseApp {
            updates: u32,
        }
        impl Application for CloseApp {
            fn load(&mut self, engine: &mut Engine) -> Result<(), AppError> {
                engine.push_event(AppEvent::CloseRequested);
                Ok(())
            }
            fn update(&mut self, _: &mut Engine, _: f32, _: f32) -> Result<(), AppError> {
                self.updates += 1;
                Ok(())
            }
            fn render(&mut self, _: &mut Engine, _: f32, _: f32) -> Result<(), AppError> {
                Ok(())
            }
        }

        let mut app = CloseApp { updates: 0 };
        Engine::run(EngineConfig::default(), &mut app).unwrap();
        // The close request is consumed before update ever runs.
        assert_eq!(app.updates, 0);
    }

    #[test]
    fn test_auto_pause_skips_frames_while_inactive() {
        struct PausableApp {
            updates: u32,
        }
        impl Application for PausableApp {
            fn load(&mut self, engine: &mut Engine) -> Result<(), AppError> {
                engine.push_event(AppEvent::FocusChanged(false));
                engine.push_event(AppEvent::CloseRequested);
                Ok(())
            }
            fn update(&mut self, _: &mut Engine, _: f32, _: f32) -> Result<(), AppError> {
                self.updates += 1;
                Ok(())
            }
            fn render(&mut self, _: &mut Engine, _: f32, _: f32) -> Result<(), AppError> {
                Ok(())
            }
        }

        let mut config = EngineConfig::default();
        config.app.auto_pause = true;
        let mut app = PausableApp { updates: 0 };
        Engine::run(config, &mut app).unwrap();
        assert_eq!(app.updates, 0);
    }

    #[test]
    fn test_load_failure_propagates() {
        struct FailingApp;
        impl Application for FailingApp {
            fn load(&mut self, _: &mut Engine) -> Result<(), AppError> {
                Err(AppError::Custom("missing scene".into()))
            }
            fn update(&mut self, _: &mut Engine, _: f32, _: f32) -> Result<(), AppError> {
                Ok(())
            }
            fn render(&mut self, _: &mut Engine, _: f32, _: f32) -> Result<(), AppError> {
                Ok(())
            }
        }

        let result = Engine::run(EngineConfig::default(), &mut FailingApp);
        assert!(matches!(result, Err(EngineError::Application(_))));
    }
}
