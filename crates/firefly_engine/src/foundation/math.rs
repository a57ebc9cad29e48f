//! Math utilities and types
//!
//! Provides the fundamental math types for the transform pipeline, plus the
//! flat-array accessors used to hand matrices to a shader uniform upload path.

pub use nalgebra::{Matrix3, Matrix4, Rotation3, Unit, Vector2, Vector3, Vector4};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// 3x3 matrix type
pub type Mat3 = Matrix3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;

    /// Radians to degrees conversion factor
    pub const RAD_TO_DEG: f32 = 180.0 / PI;
}

/// Math utility functions
pub mod utils {
    use super::constants;

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// Convert radians to degrees
    pub fn rad_to_deg(radians: f32) -> f32 {
        radians * constants::RAD_TO_DEG
    }
}

/// Axes shorter than this are treated as degenerate by the rotation helpers.
const MIN_AXIS_NORM_SQUARED: f32 = 1e-12;

/// Build a 3x3 rotation matrix from an angle in degrees and an arbitrary axis.
///
/// Returns `None` when the axis is too short to normalize; callers decide how
/// to report the degenerate input.
pub fn rotation3_from_axis_deg(degrees: f32, axis: Vec3) -> Option<Mat3> {
    if axis.norm_squared() < MIN_AXIS_NORM_SQUARED {
        return None;
    }
    let angle = utils::deg_to_rad(degrees);
    Some(Rotation3::from_axis_angle(&Unit::new_normalize(axis), angle).into_inner())
}

/// Build a homogeneous 4x4 rotation matrix from an angle in degrees and an
/// arbitrary axis. Same degenerate-axis contract as [`rotation3_from_axis_deg`].
pub fn rotation4_from_axis_deg(degrees: f32, axis: Vec3) -> Option<Mat4> {
    rotation3_from_axis_deg(degrees, axis).map(|r| r.to_homogeneous())
}

/// Copy a 4x4 matrix into 16 column-major floats, ready for uniform upload.
pub fn mat4_to_array(m: &Mat4) -> [f32; 16] {
    let mut out = [0.0_f32; 16];
    out.copy_from_slice(m.as_slice());
    out
}

/// Copy a 3x3 matrix into 9 column-major floats, ready for uniform upload.
pub fn mat3_to_array(m: &Mat3) -> [f32; 9] {
    let mut out = [0.0_f32; 9];
    out.copy_from_slice(m.as_slice());
    out
}
