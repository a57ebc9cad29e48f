//! Camera frame, matrix stack, and transform pipeline
//!
//! The three pieces cooperate the way a classic fixed-function traversal
//! would: a [`Frame`] produces the camera (view) matrix and per-object
//! placement matrices, a [`MatrixStack`] composes them hierarchically while
//! the caller walks its scene, and a [`Transform`] reads back the combined
//! model-view-projection and normal matrices for the shading stage.

pub mod frame;
pub mod matrix_stack;
pub mod transform;

pub use frame::Frame;
pub use matrix_stack::{MatrixStack, MAX_STACK_DEPTH};
pub use transform::Transform;
