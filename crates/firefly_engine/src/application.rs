//! Application trait and lifecycle management

use crate::engine::{Engine, EngineError};
use thiserror::Error;

/// Application lifecycle trait
///
/// Implement this trait to create a program driven by the engine's main
/// loop. The engine is passed explicitly to every method; there is no
/// global application object.
pub trait Application {
    /// Initialize the application
    ///
    /// Called once before the main loop starts. Use this to set up initial
    /// state, load configuration-derived resources, and seed the scene.
    fn load(&mut self, engine: &mut Engine) -> Result<(), AppError>;

    /// Update the application
    ///
    /// Called every frame before `render`.
    ///
    /// # Arguments
    /// * `engine` - Mutable reference to the engine
    /// * `dt` - Time since last frame in seconds
    /// * `elapsed` - Total run time in seconds
    fn update(&mut self, engine: &mut Engine, dt: f32, elapsed: f32) -> Result<(), AppError>;

    /// Render the application
    ///
    /// Called every frame after `update`. Walk the scene here, composing
    /// matrices and handing them to whatever rendering backend the
    /// application integrates with.
    fn render(&mut self, engine: &mut Engine, dt: f32, elapsed: f32) -> Result<(), AppError>;

    /// Handle a viewport resize
    ///
    /// Dispatched from [`AppEvent::Resized`] before the frame's update.
    fn resize(&mut self, _engine: &mut Engine, _width: u32, _height: u32) {}

    /// Handle an input event
    ///
    /// Receives every queued event the engine does not consume itself
    /// (close requests, resizes and focus changes are handled first).
    fn handle_event(&mut self, _engine: &mut Engine, _event: &AppEvent) -> Result<(), AppError> {
        Ok(())
    }

    /// Shutdown hook
    ///
    /// Called once after the main loop exits. Use this to save state and
    /// release anything the engine does not own.
    fn exit(&mut self, _engine: &mut Engine) {}
}

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Engine error propagated to application level
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),

    /// Configuration error
    #[error("config error: {0}")]
    Config(String),

    /// Custom application error
    #[error("application error: {0}")]
    Custom(String),
}

/// Application events
///
/// The windowing collaborator pushes these into the engine's queue via
/// [`Engine::push_event`]; the engine drains the queue once per frame.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// The window asked to close; the engine quits the main loop
    CloseRequested,

    /// The viewport was resized
    Resized {
        /// New width in pixels
        width: u32,
        /// New height in pixels
        height: u32,
    },

    /// The window gained or lost focus; drives auto-pause
    FocusChanged(bool),

    /// A key was pressed or released
    Key {
        /// Platform key code
        code: u32,
        /// True on press, false on release
        pressed: bool,
        /// Whether a shift modifier was held
        shift: bool,
    },

    /// A character was typed
    Text {
        /// The typed character
        ch: char,
    },

    /// The pointer moved
    MouseMoved {
        /// X position in window coordinates
        x: f64,
        /// Y position in window coordinates
        y: f64,
    },

    /// A mouse button was pressed or released
    MouseButton {
        /// Button index
        button: u8,
        /// True on press, false on release
        pressed: bool,
        /// X position in window coordinates
        x: f64,
        /// Y position in window coordinates
        y: f64,
    },

    /// The scroll wheel moved
    MouseWheel {
        /// Scroll delta
        delta: f32,
    },
}
