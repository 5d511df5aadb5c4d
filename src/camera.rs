use glam::{Mat4, Vec3};

/// A fixed look-at camera with a right-handed perspective projection.
///
/// The default camera sits at (0, 3, 4) looking at the origin with +Y up,
/// a 45° vertical field of view and a square aspect ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub fov: f32, // radians, vertical
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 3.0, 4.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov: std::f32::consts::FRAC_PI_4,
            aspect: 1.0,
            near: 1.0,
            far: 100.0,
        }
    }
}

impl Camera {
    pub fn new() -> Self {
        Self::default()
    }

    /// World to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// View to clip space, with depth mapped to [0, 1].
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    #[test]
    fn view_moves_eye_to_origin() {
        let camera = Camera::new();
        let eye = camera.view_matrix().transform_point3(camera.eye);
        assert!(eye.length() < 1e-5);
    }

    #[test]
    fn view_looks_down_negative_z() {
        let camera = Camera::new();
        let target = camera.view_matrix().transform_point3(camera.target);
        assert!(target.x.abs() < 1e-5);
        assert!(target.y.abs() < 1e-5);
        assert!((target.z + 5.0).abs() < 1e-5);
    }

    #[test]
    fn projection_maps_near_and_far_to_unit_depth() {
        let proj = Camera::new().projection_matrix();

        let near = proj * Vec4::new(0.0, 0.0, -1.0, 1.0);
        assert!((near.z / near.w).abs() < 1e-6);

        let far = proj * Vec4::new(0.0, 0.0, -100.0, 1.0);
        assert!((far.z / far.w - 1.0).abs() < 1e-5);
    }
}
