//! Per-frame world, view and projection matrices.
//!
//! The letter spins about the vertical axis once every [`ROTATION_PERIOD_MS`]
//! and tilts about the horizontal axis by an angle scaled with the drag
//! accumulator from [`DragRotation`](crate::DragRotation).
//!
//! All matrices use glam's column-vector convention, so the world matrix
//! `Ry(angle1) * Rx(angle2)` tilts a vertex first and spins it second. In a
//! row-vector API the same matrix reads `Rx(angle2) · Ry(angle1)`.

use std::f32::consts::PI;

use glam::Mat4;

use crate::camera::Camera;

/// Milliseconds per full revolution about the vertical axis.
pub const ROTATION_PERIOD_MS: u64 = 10_000;

/// Elapsed time folded into one rotation period.
pub fn period_phase(time_ms: u64) -> u32 {
    (time_ms % ROTATION_PERIOD_MS) as u32
}

/// Angle of the spin about the vertical axis, in `[0, 2π)`.
///
/// ```
/// use letter3d::spin_angle;
///
/// assert_eq!(spin_angle(0), 0.0);
/// assert!((spin_angle(5_000) - std::f32::consts::PI).abs() < 1e-6);
/// ```
pub fn spin_angle(time_ms: u64) -> f32 {
    period_phase(time_ms) as f32 * (2.0 * PI) / ROTATION_PERIOD_MS as f32
}

/// Angle of the tilt about the horizontal axis.
///
/// Takes the same phase sample as [`spin_angle`] rather than reading the clock
/// again, so both rotations stay locked to one instant per frame.
pub fn tilt_angle(phase: u32, drag: i32) -> f32 {
    phase as f32 * (drag as f32 * PI) / ROTATION_PERIOD_MS as f32
}

/// The three matrices applied to the letter for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameTransforms {
    pub world: Mat4,
    pub view: Mat4,
    pub projection: Mat4,
}

impl FrameTransforms {
    /// Computes the frame's matrices from the elapsed time and drag accumulator.
    pub fn compute(camera: &Camera, time_ms: u64, drag: i32) -> Self {
        let phase = period_phase(time_ms);
        let spin = spin_angle(time_ms);
        let tilt = tilt_angle(phase, drag);

        Self {
            world: world_matrix(spin, tilt),
            view: camera.view_matrix(),
            projection: camera.projection_matrix(),
        }
    }

    /// `projection * view * world`, mapping model space straight to clip space.
    pub fn model_view_projection(&self) -> Mat4 {
        self.projection * self.view * self.world
    }
}

fn world_matrix(spin: f32, tilt: f32) -> Mat4 {
    Mat4::from_rotation_y(spin) * Mat4::from_rotation_x(tilt)
}
