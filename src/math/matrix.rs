use super::Vec3;

/// 4x4 matrix for transformations (column-major for WebGL)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    pub data: [f32; 16],
}

impl Mat4 {
    pub fn identity() -> Self {
        Self {
            data: [
                1.0, 0.0, 0.0, 0.0,
                0.0, 1.0, 0.0, 0.0,
                0.0, 0.0, 1.0, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    pub fn translation(x: f32, y: f32, z: f32) -> Self {
        let mut m = Self::identity();
        m.data[12] = x;
        m.data[13] = y;
        m.data[14] = z;
        m
    }

    /// Perspective projection matrix
    pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        let f = 1.0 / (fov_y / 2.0).tan();
        let nf = 1.0 / (near - far);

        Self {
            data: [
                f / aspect, 0.0, 0.0, 0.0,
                0.0, f, 0.0, 0.0,
                0.0, 0.0, (far + near) * nf, -1.0,
                0.0, 0.0, 2.0 * far * near * nf, 0.0,
            ],
        }
    }

    /// Camera-to-world transform for a camera at `eye` looking at `target`.
    ///
    /// The camera looks down its local -Z axis. Invert the result to get a
    /// view matrix.
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        let z = (eye - target).normalize();
        let x = up.cross(&z).normalize();
        let y = z.cross(&x);

        Self {
            data: [
                x.x, x.y, x.z, 0.0,
                y.x, y.y, y.z, 0.0,
                z.x, z.y, z.z, 0.0,
                eye.x, eye.y, eye.z, 1.0,
            ],
        }
    }

    /// General inverse via cofactor expansion. `None` for singular matrices.
    pub fn inverse(&self) -> Option<Self> {
        let a = &self.data;
        let (a00, a01, a02, a03) = (a[0], a[1], a[2], a[3]);
        let (a10, a11, a12, a13) = (a[4], a[5], a[6], a[7]);
        let (a20, a21, a22, a23) = (a[8], a[9], a[10], a[11]);
        let (a30, a31, a32, a33) = (a[12], a[13], a[14], a[15]);

        let b00 = a00 * a11 - a01 * a10;
        let b01 = a00 * a12 - a02 * a10;
        let b02 = a00 * a13 - a03 * a10;
        let b03 = a01 * a12 - a02 * a11;
        let b04 = a01 * a13 - a03 * a11;
        let b05 = a02 * a13 - a03 * a12;
        let b06 = a20 * a31 - a21 * a30;
        let b07 = a20 * a32 - a22 * a30;
        let b08 = a20 * a33 - a23 * a30;
        let b09 = a21 * a32 - a22 * a31;
        let b10 = a21 * a33 - a23 * a31;
        let b11 = a22 * a33 - a23 * a32;

        let det = b00 * b11 - b01 * b10 + b02 * b09 + b03 * b08 - b04 * b07 + b05 * b06;
        if det == 0.0 || !det.is_finite() {
            return None;
        }
        let inv = 1.0 / det;

        Some(Self {
            data: [
                (a11 * b11 - a12 * b10 + a13 * b09) * inv,
                (a02 * b10 - a01 * b11 - a03 * b09) * inv,
                (a31 * b05 - a32 * b04 + a33 * b03) * inv,
                (a22 * b04 - a21 * b05 - a23 * b03) * inv,
                (a12 * b08 - a10 * b11 - a13 * b07) * inv,
                (a00 * b11 - a02 * b08 + a03 * b07) * inv,
                (a32 * b02 - a30 * b05 - a33 * b01) * inv,
                (a20 * b05 - a22 * b02 + a23 * b01) * inv,
                (a10 * b10 - a11 * b08 + a13 * b06) * inv,
                (a01 * b08 - a00 * b10 - a03 * b06) * inv,
                (a30 * b04 - a31 * b02 + a33 * b00) * inv,
                (a21 * b02 - a20 * b04 - a23 * b00) * inv,
                (a11 * b07 - a10 * b09 - a12 * b06) * inv,
                (a00 * b09 - a01 * b07 + a02 * b06) * inv,
                (a31 * b01 - a30 * b03 - a32 * b00) * inv,
                (a20 * b03 - a21 * b01 + a22 * b00) * inv,
            ],
        })
    }

    /// Matrix multiplication (`self * other`: `other` is applied first)
    pub fn mul(&self, other: &Mat4) -> Self {
        let mut result = [0.0f32; 16];

        for row in 0..4 {
            for col in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += self.data[row + k * 4] * other.data[k + col * 4];
                }
                result[row + col * 4] = sum;
            }
        }

        Self { data: result }
    }

    /// Transform a point (applies translation, no perspective divide)
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        let [x, y, z, _] = self.transform_vec4([p.x, p.y, p.z, 1.0]);
        Vec3::new(x, y, z)
    }

    /// Transform a homogeneous vector
    pub fn transform_vec4(&self, v: [f32; 4]) -> [f32; 4] {
        let d = &self.data;
        let mut out = [0.0f32; 4];
        for (row, o) in out.iter_mut().enumerate() {
            *o = d[row] * v[0] + d[row + 4] * v[1] + d[row + 8] * v[2] + d[row + 12] * v[3];
        }
        out
    }

    /// Get as slice for WebGL
    pub fn as_slice(&self) -> &[f32; 16] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_mat_eq(a: &Mat4, b: &Mat4, eps: f32) {
        for i in 0..16 {
            assert!(
                (a.data[i] - b.data[i]).abs() < eps,
                "element {} differs: {} vs {}",
                i,
                a.data[i],
                b.data[i]
            );
        }
    }

    #[test]
    fn test_translation() {
        let m = Mat4::translation(1.0, 2.0, 3.0);
        let result = m.transform_point(Vec3::ZERO);
        assert!((result.x - 1.0).abs() < 0.0001);
        assert!((result.y - 2.0).abs() < 0.0001);
        assert!((result.z - 3.0).abs() < 0.0001);
    }

    #[test]
    fn test_matrix_mul_order() {
        let t = Mat4::translation(1.0, 0.0, 0.0);
        let s = Mat4 {
            data: [
                2.0, 0.0, 0.0, 0.0,
                0.0, 2.0, 0.0, 0.0,
                0.0, 0.0, 2.0, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ],
        };
        let result = t.mul(&s).transform_point(Vec3::new(1.0, 0.0, 0.0));
        assert!((result.x - 3.0).abs() < 0.0001);
    }

    #[test]
    fn test_look_at_places_camera_at_eye() {
        let eye = Vec3::new(0.0, 0.0, 2.0);
        let m = Mat4::look_at(eye, Vec3::ZERO, Vec3::UP);
        let origin = m.transform_point(Vec3::ZERO);
        assert!((origin - eye).length() < 1e-6);
        // Local -Z points at the target
        let ahead = m.transform_point(Vec3::new(0.0, 0.0, -2.0));
        assert!(ahead.length() < 1e-6);
    }

    #[test]
    fn test_inverse_round_trip() {
        let eye = Vec3::new(1.2, 0.3, 1.6);
        let m = Mat4::look_at(eye, Vec3::ZERO, Vec3::UP);
        let inv = m.inverse().expect("look_at is invertible");
        assert_mat_eq(&m.mul(&inv), &Mat4::identity(), 1e-5);
        assert_mat_eq(&inv.mul(&m), &Mat4::identity(), 1e-5);

        let p = Mat4::perspective(60f32.to_radians(), 1.5, 0.1, 10.0);
        let pinv = p.inverse().expect("perspective is invertible");
        assert_mat_eq(&p.mul(&pinv), &Mat4::identity(), 1e-3);
    }

    #[test]
    fn test_inverse_of_translation() {
        let inv = Mat4::translation(1.0, -2.0, 3.0).inverse().unwrap();
        assert_mat_eq(&inv, &Mat4::translation(-1.0, 2.0, -3.0), 1e-6);
    }

    #[test]
    fn test_singular_matrix_has_no_inverse() {
        let zero = Mat4 { data: [0.0; 16] };
        assert!(zero.inverse().is_none());
    }

    #[test]
    fn test_perspective_maps_near_and_far() {
        let near = 0.01;
        let far = 100.0;
        let p = Mat4::perspective(60f32.to_radians(), 1.0, near, far);
        let n = p.transform_vec4([0.0, 0.0, -near, 1.0]);
        let f = p.transform_vec4([0.0, 0.0, -far, 1.0]);
        assert!((n[2] / n[3] + 1.0).abs() < 1e-3);
        assert!((f[2] / f[3] - 1.0).abs() < 1e-3);
    }
}
