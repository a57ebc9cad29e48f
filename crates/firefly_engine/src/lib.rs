//! # Firefly Engine
//!
//! A small application framework built around a camera/orthonormal-frame and
//! matrix-stack transform pipeline.
//!
//! The core is three cooperating types: [`render::Frame`] (a camera or
//! object pose as an orthonormal basis plus origin), [`render::MatrixStack`]
//! (a bounded stack of 4x4 matrices for hierarchical composition), and
//! [`render::Transform`] (read-back of combined model-view-projection and
//! normal matrices for a shading stage). Around them the engine provides an
//! explicit [`Application`] lifecycle, frame timing and statistics, an event
//! queue for a windowing collaborator, configuration, and logging. Window
//! and context management, resource loading, and any specific rendering
//! backend are deliberately left to external collaborators: the framework
//! only produces matrices.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use firefly_engine::prelude::*;
//!
//! struct MyApp {
//!     camera: Frame,
//! }
//!
//! impl Application for MyApp {
//!     fn load(&mut self, _engine: &mut Engine) -> Result<(), AppError> {
//!         self.camera.set_origin(Vec3::new(0.0, 1.0, 5.0));
//!         Ok(())
//!     }
//!
//!     fn update(&mut self, engine: &mut Engine, dt: f32, elapsed: f32) -> Result<(), AppError> {
//!         self.camera.rotate_local_y(dt * 20.0);
//!         if elapsed > 10.0 {
//!             engine.quit();
//!         }
//!         Ok(())
//!     }
//!
//!     fn render(&mut self, _engine: &mut Engine, _dt: f32, _elapsed: f32) -> Result<(), AppError> {
//!         let view = self.camera.camera_matrix(false);
//!         // hand `view` to a rendering backend here
//!         let _ = view;
//!         Ok(())
//!     }
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = EngineConfig::default();
//!     firefly_engine::foundation::logging::init(&config.logging.filter);
//!     let mut app = MyApp { camera: Frame::new() };
//!     Engine::run(config, &mut app)?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod core;
pub mod foundation;
pub mod render;

mod application;
mod engine;

pub use application::{AppError, AppEvent, Application};
pub use engine::{Engine, EngineError};

/// Common imports for framework users
pub mod prelude {
    pub use crate::{
        application::{AppError, AppEvent, Application},
        core::config::{AppSettings, ConfigError, EngineConfig, LogSettings},
        engine::{Engine, EngineError},
        foundation::{
            math::{Mat3, Mat4, Vec3, Vec4},
            time::{FrameStats, Timer},
        },
        render::{Frame, MatrixStack, Transform, MAX_STACK_DEPTH},
    };
}
