//! Composite matrix read-back for the shading stage
//!
//! A [`Transform`] borrows a model-view stack and a projection stack and
//! computes the combined model-view-projection matrix and the normal matrix
//! on demand. It reads the *current top* of each stack, so results are only
//! meaningful immediately before use; it adds no invariants of its own.

use super::matrix_stack::MatrixStack;
use crate::foundation::math::{mat3_to_array, mat4_to_array, Mat3, Mat4};

/// Read-back view over a model-view stack and a projection stack.
///
/// Computation is cheap enough that nothing is cached: every accessor reads
/// the stack tops fresh at the point of use.
pub struct Transform<'a> {
    model_view: &'a MatrixStack,
    projection: &'a MatrixStack,
}

impl<'a> Transform<'a> {
    /// Borrow the two stacks for read-back
    pub fn new(model_view: &'a MatrixStack, projection: &'a MatrixStack) -> Self {
        Self {
            model_view,
            projection,
        }
    }

    /// Current top of the model-view stack
    pub fn model_view(&self) -> &Mat4 {
        self.model_view.top()
    }

    /// Current top of the projection stack
    pub fn projection(&self) -> &Mat4 {
        self.projection.top()
    }

    /// Combined model-view-projection matrix: `projection * model_view`,
    /// recomputed fresh on each call.
    pub fn mvp(&self) -> Mat4 {
        self.projection.top() * self.model_view.top()
    }

    /// Normal matrix: transpose of the inverse of the model-view top's
    /// upper-left 3x3, the standard technique for transforming normals
    /// correctly under non-uniform scale.
    ///
    /// With `normalize_rows` set, each row of the result is renormalized to
    /// unit length afterwards, a cheap approximation for near-uniform scale.
    /// A singular model-view top is reported and yields the identity.
    pub fn normal_matrix(&self, normalize_rows: bool) -> Mat3 {
        let mv = self.model_view.mat3();
        let Some(inverse) = mv.try_inverse() else {
            log::warn!("Transform: singular model-view matrix, normal matrix falls back to identity");
            return Mat3::identity();
        };
        let mut normal = inverse.transpose();
        if normalize_rows {
            for i in 0..3 {
                let row = normal.row(i).normalize();
                normal.set_row(i, &row);
            }
        }
        normal
    }

    /// MVP as 16 column-major floats, ready for uniform upload
    pub fn mvp_array(&self) -> [f32; 16] {
        mat4_to_array(&self.mvp())
    }

    /// Model-view top as 16 column-major floats
    pub fn model_view_array(&self) -> [f32; 16] {
        mat4_to_array(self.model_view.top())
    }

    /// Projection top as 16 column-major floats
    pub fn projection_array(&self) -> [f32; 16] {
        mat4_to_array(self.projection.top())
    }

    /// Normal matrix as 9 column-major floats
    pub fn normal_matrix_array(&self, normalize_rows: bool) -> [f32; 9] {
        mat3_to_array(&self.normal_matrix(normalize_rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::{rotation3_from_axis_deg, Vec3, Vec4};
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-5;

    fn assert_mat3_eq(a: &Mat3, b: &Mat3, epsilon: f32) {
        for (x, y) in a.iter().zip(b.iter()) {
            assert_relative_eq!(x, y, epsilon = epsilon);
        }
    }

    #[test]
    fn test_mvp_composes_projection_and_model_view() {
        let mut model_view = MatrixStack::new();
        model_view.translate(0.0, 0.0, -5.0);
        let mut projection = MatrixStack::new();
        projection.load_matrix(&Mat4::new_perspective(16.0 / 9.0, 1.0, 0.1, 100.0));

        let transform = Transform::new(&model_view, &projection);
        let expected = projection.top() * model_view.top();
        assert_eq!(transform.mvp(), expected);

        // A point in front of the camera projects inside the frustum.
        let clip = transform.mvp() * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert!(clip.w > 0.0);
    }

    #[test]
    fn test_mvp_reads_current_tops() {
        let mut model_view = MatrixStack::new();
        let projection = MatrixStack::new();

        model_view.push();
        model_view.translate(1.0, 0.0, 0.0);
        {
            let transform = Transform::new(&model_view, &projection);
            assert_relative_eq!(
                transform.mvp() * Vec4::new(0.0, 0.0, 0.0, 1.0),
                Vec4::new(1.0, 0.0, 0.0, 1.0),
                epsilon = EPSILON
            );
        }
        model_view.pop();
        let transform = Transform::new(&model_view, &projection);
        assert_eq!(transform.mvp(), Mat4::identity());
    }

    #[test]
    fn test_normal_matrix_of_pure_rotation_is_the_rotation() {
        let rotation = rotation3_from_axis_deg(37.0, Vec3::new(0.3, 1.0, -0.2)).unwrap();
        let mut model_view = MatrixStack::new();
        model_view.load_matrix(&rotation.to_homogeneous());
        let projection = MatrixStack::new();

        let transform = Transform::new(&model_view, &projection);
        assert_mat3_eq(&transform.normal_matrix(false), &rotation, EPSILON);
    }

    #[test]
    fn test_normal_matrix_under_uniform_scale() {
        let rotation = rotation3_from_axis_deg(51.0, Vec3::new(0.0, 1.0, 0.4)).unwrap();
        let mut model_view = MatrixStack::new();
        model_view.load_matrix(&rotation.to_homogeneous());
        model_view.scale(3.0, 3.0, 3.0);
        let projection = MatrixStack::new();

        let transform = Transform::new(&model_view, &projection);
        // Plain transpose-inverse scales the rows by 1/s but keeps direction;
        // row normalization recovers the rotation exactly.
        let scaled = transform.normal_matrix(false);
        assert_mat3_eq(&scaled, &(rotation / 3.0), EPSILON);
        let normalized = transform.normal_matrix(true);
        assert_mat3_eq(&normalized, &rotation, EPSILON);
    }

    #[test]
    fn test_normal_matrix_singular_fallback() {
        let mut model_view = MatrixStack::new();
        model_view.scale(1.0, 1.0, 0.0);
        let projection = MatrixStack::new();

        let transform = Transform::new(&model_view, &projection);
        assert_eq!(transform.normal_matrix(false), Mat3::identity());
    }

    #[test]
    fn test_array_read_back_is_column_major() {
        let mut model_view = MatrixStack::new();
        model_view.translate(1.0, 2.0, 3.0);
        let projection = MatrixStack::new();

        let transform = Transform::new(&model_view, &projection);
        let mvp = transform.mvp_array();
        assert_eq!(&mvp[12..15], &[1.0, 2.0, 3.0]);
        assert_eq!(transform.normal_matrix_array(false).len(), 9);
    }
}
