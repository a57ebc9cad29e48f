//! Bounded stack of 4x4 matrices for hierarchical transform composition
//!
//! Mirrors the classic fixed-function matrix stack: push/pop around each
//! scene node, multiply placement matrices in, read the top back out for
//! uniform upload. The stack is never empty and never deeper than
//! [`MAX_STACK_DEPTH`]; violating either bound is reported and ignored
//! rather than treated as a hard error, since an imbalance is a caller bug
//! that must not abort the traversal.

use crate::foundation::math::{rotation4_from_axis_deg, Mat3, Mat4, Vec3, Vec4};

/// Maximum stack depth, counting the base matrix.
///
/// Exists purely to catch runaway push/pop imbalance; no real traversal
/// nests this deep.
pub const MAX_STACK_DEPTH: usize = 64;

/// A bounded LIFO of 4x4 matrices.
///
/// Construction leaves a single identity matrix on the stack; that base
/// matrix can be overwritten but never popped.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixStack {
    base: Mat4,
    rest: Vec<Mat4>,
}

impl Default for MatrixStack {
    fn default() -> Self {
        Self::new()
    }
}

impl MatrixStack {
    /// Create a stack holding a single identity matrix
    pub fn new() -> Self {
        Self {
            base: Mat4::identity(),
            rest: Vec::new(),
        }
    }

    /// Current depth, counting the base matrix (always >= 1)
    pub fn depth(&self) -> usize {
        self.rest.len() + 1
    }

    /// Read-only access to the current top matrix
    pub fn top(&self) -> &Mat4 {
        self.rest.last().unwrap_or(&self.base)
    }

    fn top_mut(&mut self) -> &mut Mat4 {
        self.rest.last_mut().unwrap_or(&mut self.base)
    }

    /// Overwrite the top matrix with the identity (no push)
    pub fn load_identity(&mut self) {
        *self.top_mut() = Mat4::identity();
    }

    /// Overwrite the top matrix in place (no push)
    pub fn load_matrix(&mut self, m: &Mat4) {
        *self.top_mut() = *m;
    }

    /// Multiply the top matrix: `top = top * m`.
    ///
    /// Post-multiplication applies `m` in the local frame of whatever the
    /// stack currently holds, matching fixed-function composition order.
    pub fn mult_matrix(&mut self, m: &Mat4) {
        let top = self.top_mut();
        *top *= *m;
    }

    /// Duplicate the current top and push the duplicate.
    ///
    /// At [`MAX_STACK_DEPTH`] the overflow is reported and the stack is left
    /// unchanged.
    pub fn push(&mut self) {
        let top = *self.top();
        self.push_matrix(&top);
    }

    /// Push `m` directly, without combining it with the current top.
    ///
    /// Same depth guard as [`MatrixStack::push`].
    pub fn push_matrix(&mut self, m: &Mat4) {
        if self.depth() < MAX_STACK_DEPTH {
            self.rest.push(*m);
        } else {
            log::error!("MatrixStack: stack overflow, push ignored");
        }
    }

    /// Remove the top matrix.
    ///
    /// The base matrix is never removed: popping at depth 1 reports an
    /// underflow and leaves the stack unchanged.
    pub fn pop(&mut self) {
        if self.rest.pop().is_none() {
            log::error!("MatrixStack: stack underflow, pop ignored");
        }
    }

    // ===== Convenience transforms, all routed through mult_matrix =====

    /// Apply a translation to the top matrix
    pub fn translate(&mut self, x: f32, y: f32, z: f32) {
        self.translate_vec(&Vec3::new(x, y, z));
    }

    /// Apply a translation given as a vector
    pub fn translate_vec(&mut self, v: &Vec3) {
        self.mult_matrix(&Mat4::new_translation(v));
    }

    /// Apply a rotation of `degrees` around the given axis to the top matrix.
    ///
    /// A degenerate (near-zero) axis is reported and ignored.
    pub fn rotate(&mut self, degrees: f32, x: f32, y: f32, z: f32) {
        self.rotate_vec(degrees, &Vec3::new(x, y, z));
    }

    /// Apply a rotation given an axis vector
    pub fn rotate_vec(&mut self, degrees: f32, axis: &Vec3) {
        match rotation4_from_axis_deg(degrees, *axis) {
            Some(rotation) => self.mult_matrix(&rotation),
            None => log::warn!("MatrixStack: rotation skipped, degenerate axis {axis:?}"),
        }
    }

    /// Apply a scale to the top matrix
    pub fn scale(&mut self, x: f32, y: f32, z: f32) {
        self.scale_vec(&Vec3::new(x, y, z));
    }

    /// Apply a scale given as a vector
    pub fn scale_vec(&mut self, v: &Vec3) {
        self.mult_matrix(&Mat4::new_nonuniform_scaling(v));
    }

    // ===== Read-back =====

    /// Apply the top matrix to a 4-component vector without mutating the
    /// stack (e.g. to move a light position into the current space).
    pub fn transform(&self, v: &Vec4) -> Vec4 {
        self.top() * v
    }

    /// Upper-left 3x3 submatrix of the top (rotation/scale only)
    pub fn mat3(&self) -> Mat3 {
        self.top().fixed_view::<3, 3>(0, 0).into_owned()
    }

    /// The top matrix as 16 column-major floats, ready for uniform upload
    pub fn as_slice(&self) -> &[f32] {
        self.top().as_slice()
    }
}
