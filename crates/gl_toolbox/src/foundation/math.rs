//! Math utilities and types
//!
//! Thin aliases over nalgebra plus the projection math the fixed-function
//! pipeline expects from GLU.

pub use nalgebra::{Matrix4, Vector4};

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// RGBA color, each component nominally in `0.0..=1.0`
pub type Rgba = [f32; 4];

/// Homogeneous 4-component vector as passed to `glLightfv`
pub type Vec4Array = [f32; 4];

/// Convert degrees to radians
pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees.to_radians()
}

/// Build the matrix `gluPerspective` multiplies onto the current matrix.
///
/// Returns `None` for the same degenerate inputs GLU silently ignores: a zero
/// aspect ratio, coincident clip planes, or a field of view whose half-angle
/// sine is zero.
pub fn perspective_matrix(fov_y_degrees: f32, aspect: f32, near: f32, far: f32) -> Option<Mat4> {
    let half_angle = deg_to_rad(fov_y_degrees) / 2.0;
    let delta_z = far - near;
    let sine = half_angle.sin();

    if delta_z == 0.0 || sine == 0.0 || aspect == 0.0 {
        return None;
    }

    let cotangent = half_angle.cos() / sine;

    let mut m = Mat4::identity();
    m[(0, 0)] = cotangent / aspect;
    m[(1, 1)] = cotangent;
    m[(2, 2)] = -(far + near) / delta_z;
    m[(3, 2)] = -1.0;
    m[(2, 3)] = -2.0 * near * far / delta_z;
    m[(3, 3)] = 0.0;
    Some(m)
}

/// Column-major copy of a matrix, the layout `glLoadMatrixf`/`glMultMatrixf` read
pub fn to_column_major(matrix: &Mat4) -> [f32; 16] {
    let mut out = [0.0; 16];
    out.copy_from_slice(matrix.as_slice());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_perspective_matches_nalgebra() {
        let ours = perspective_matrix(60.0, 800.0 / 600.0, 10.0, 10000.0).unwrap();
        let reference =
            nalgebra::Perspective3::new(800.0 / 600.0, deg_to_rad(60.0), 10.0, 10000.0).to_homogeneous();
        assert_relative_eq!(ours, reference, epsilon = EPSILON);
    }

    #[test]
    fn test_degenerate_perspective_is_skipped() {
        assert!(perspective_matrix(60.0, 0.0, 10.0, 100.0).is_none());
        assert!(perspective_matrix(60.0, 1.0, 10.0, 10.0).is_none());
        assert!(perspective_matrix(0.0, 1.0, 10.0, 100.0).is_none());
    }

    #[test]
    fn test_column_major_layout() {
        let m = perspective_matrix(90.0, 1.0, 1.0, 3.0).unwrap();
        let cols = to_column_major(&m);
        // Column 2 holds the -1 that moves -z into w
        assert_relative_eq!(cols[11], -1.0);
        assert_relative_eq!(cols[14], -3.0, epsilon = EPSILON);
        assert_relative_eq!(cols[15], 0.0);
    }
}
