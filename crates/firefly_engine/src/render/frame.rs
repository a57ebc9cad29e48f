//! Orthonormal frame representing a camera or object pose
//!
//! A [`Frame`] stores an origin plus a forward and an up vector; the right
//! axis is always derived, never stored. It produces either a placement
//! matrix (to position an object at the frame's pose) or a camera matrix
//! (to look at the world from the frame's pose), and supports movement
//! along its own axes and rotation around local or world axes.

use crate::foundation::math::{rotation3_from_axis_deg, Mat3, Mat4, Vec3};

/// A positioned, oriented basis in 3D space.
///
/// The basis is only soft-orthonormal: rotation operations never
/// renormalize, so repeated incremental rotations accumulate floating-point
/// drift. Callers performing many rotations should call [`Frame::normalize`]
/// periodically; this is an accepted characteristic, not an error condition.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    origin: Vec3,
    forward: Vec3,
    up: Vec3,
}

impl Default for Frame {
    /// Origin at zero, looking down -Z with +Y up.
    fn default() -> Self {
        Self {
            origin: Vec3::zeros(),
            forward: Vec3::new(0.0, 0.0, -1.0),
            up: Vec3::new(0.0, 1.0, 0.0),
        }
    }
}

impl Frame {
    /// Create the default frame (origin at zero, forward -Z, up +Y)
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Accessors =====

    /// Frame origin in world space
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// X component of the origin
    pub fn origin_x(&self) -> f32 {
        self.origin.x
    }

    /// Y component of the origin
    pub fn origin_y(&self) -> f32 {
        self.origin.y
    }

    /// Z component of the origin
    pub fn origin_z(&self) -> f32 {
        self.origin.z
    }

    /// Set the origin
    pub fn set_origin(&mut self, origin: Vec3) {
        self.origin = origin;
    }

    /// Forward basis vector
    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    /// Set the forward vector. The caller is responsible for keeping it
    /// unit-length and perpendicular to `up` (or calling [`Frame::normalize`]).
    pub fn set_forward(&mut self, forward: Vec3) {
        self.forward = forward;
    }

    /// Up basis vector
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Set the up vector. Same orthonormality caveat as [`Frame::set_forward`].
    pub fn set_up(&mut self, up: Vec3) {
        self.up = up;
    }

    /// Derived right axis. Never stored; recomputed from the current basis
    /// so that the default frame's right is exactly +X.
    pub fn right(&self) -> Vec3 {
        self.forward.cross(&self.up)
    }

    // ===== Movement (origin only) =====

    /// Move along the forward axis
    pub fn move_forward(&mut self, delta: f32) {
        self.origin += self.forward * delta;
    }

    /// Move along the up axis
    pub fn move_up(&mut self, delta: f32) {
        self.origin += self.up * delta;
    }

    /// Move along the derived right axis
    pub fn move_right(&mut self, delta: f32) {
        self.origin += self.right() * delta;
    }

    /// Translate in world coordinates
    pub fn translate_world(&mut self, x: f32, y: f32, z: f32) {
        self.origin += Vec3::new(x, y, z);
    }

    /// Translate in the frame's own coordinates: forward by `z`, up by `y`,
    /// right by `x`, in that order.
    pub fn translate_local(&mut self, x: f32, y: f32, z: f32) {
        self.move_forward(z);
        self.move_up(y);
        self.move_right(x);
    }

    // ===== Matrix construction =====

    /// Build the placement matrix for this frame.
    ///
    /// Basis columns are right, up, forward; the translation column is the
    /// origin when `include_translation` is set, zero otherwise.
    pub fn matrix(&self, include_translation: bool) -> Mat4 {
        let r = self.right();
        let t = if include_translation {
            self.origin
        } else {
            Vec3::zeros()
        };
        Mat4::new(
            r.x, self.up.x, self.forward.x, t.x,
            r.y, self.up.y, self.forward.y, t.y,
            r.z, self.up.z, self.forward.z, t.z,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Build the camera (view) matrix for looking from this frame.
    ///
    /// The output is the inverse of `matrix(true)`: the rotation part is
    /// inverted by writing the basis vectors into matrix rows instead of
    /// columns, which is valid while the basis is orthonormal and avoids a
    /// full matrix inversion. Unless `rotation_only` is set (useful for
    /// skyboxes and reflections), the result is post-multiplied by a
    /// translation of `-origin` to move the world into camera space.
    ///
    /// If the basis has drifted since the last [`Frame::normalize`], the
    /// inverse relationship degrades gracefully; no error is raised.
    pub fn camera_matrix(&self, rotation_only: bool) -> Mat4 {
        let r = self.right();
        let m = Mat4::new(
            r.x, r.y, r.z, 0.0,
            self.up.x, self.up.y, self.up.z, 0.0,
            self.forward.x, self.forward.y, self.forward.z, 0.0,
            0.0, 0.0, 0.0, 1.0,
        );
        if rotation_only {
            m
        } else {
            m * Mat4::new_translation(&-self.origin)
        }
    }

    // ===== Rotation =====

    /// Rotate around the local right axis (pitch); updates up and forward.
    pub fn rotate_local_x(&mut self, degrees: f32) {
        let axis = self.right();
        self.rotate_basis(degrees, axis, true, true);
    }

    /// Rotate around the local up axis (yaw); updates forward only.
    pub fn rotate_local_y(&mut self, degrees: f32) {
        let axis = self.up;
        self.rotate_basis(degrees, axis, false, true);
    }

    /// Rotate around the local forward axis (roll); updates up only.
    pub fn rotate_local_z(&mut self, degrees: f32) {
        let axis = self.forward;
        self.rotate_basis(degrees, axis, true, false);
    }

    /// Rotate around an arbitrary world-space axis; updates both basis vectors.
    pub fn rotate_world(&mut self, degrees: f32, x: f32, y: f32, z: f32) {
        self.rotate_basis(degrees, Vec3::new(x, y, z), true, true);
    }

    /// Rotate around an axis given in the frame's local space: the axis is
    /// mapped to world space through the current basis, then rotated around.
    pub fn rotate_local(&mut self, degrees: f32, x: f32, y: f32, z: f32) {
        let world = self.rotate_vector(Vec3::new(x, y, z));
        self.rotate_world(degrees, world.x, world.y, world.z);
    }

    fn rotate_basis(&mut self, degrees: f32, axis: Vec3, rotate_up: bool, rotate_forward: bool) {
        let Some(rotation) = rotation3_from_axis_deg(degrees, axis) else {
            log::warn!("Frame rotation skipped: degenerate axis {axis:?}");
            return;
        };
        if rotate_up {
            self.up = rotation * self.up;
        }
        if rotate_forward {
            self.forward = rotation * self.forward;
        }
    }

    /// Re-orthogonalize the basis.
    ///
    /// Recomputes forward perpendicular to up through the derived right axis,
    /// then renormalizes both stored vectors. Consumers performing many
    /// incremental rotations must call this periodically; nothing else does.
    pub fn normalize(&mut self) {
        let right = self.right();
        self.forward = self.up.cross(&right).normalize();
        self.up = self.up.normalize();
    }

    // ===== Coordinate conversions =====

    /// Transform a point from the frame's local space into world space.
    pub fn local_to_world(&self, local: Vec3) -> Vec3 {
        self.rotate_vector(local) + self.origin
    }

    /// Transform a point from world space into the frame's local space.
    pub fn world_to_local(&self, world: Vec3) -> Vec3 {
        let rotation = self.rotation_mat3();
        let inverse = rotation
            .try_inverse()
            .unwrap_or_else(|| rotation.transpose());
        inverse * (world - self.origin)
    }

    /// Apply the full placement transform (rotation plus translation) to a point.
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.local_to_world(point)
    }

    /// Apply only the rotation part of the placement transform to a vector.
    pub fn rotate_vector(&self, vector: Vec3) -> Vec3 {
        self.rotation_mat3() * vector
    }

    fn rotation_mat3(&self) -> Mat3 {
        let r = self.right();
        Mat3::new(
            r.x, self.up.x, self.forward.x,
            r.y, self.up.y, self.forward.y,
            r.z, self.up.z, self.forward.z,
        )
    }
}
