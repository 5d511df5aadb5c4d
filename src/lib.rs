//! # letter3d
//!
//! A lit 3D letter "T" that spins about the vertical axis once every ten
//! seconds and tilts by an amount set with a left-button mouse drag.
//!
//! ```no_run
//! fn main() {
//!     if let Err(e) = letter3d::run() {
//!         eprintln!("{}", e);
//!     }
//! }
//! ```
//!
//! The pieces are usable on their own:
//!
//! - [`FrameTransforms`] computes the world, view and projection matrices
//!   for a time sample and drag value.
//! - [`DragRotation`] turns winit mouse events into the drag value.
//! - [`LETTER_VERTICES`] is the mesh as a constant triangle list.

mod app;
mod camera;
mod gpu;
mod input;
mod letter_pass;
mod lighting;
mod mesh;
mod transform;

pub use app::{AppConfig, AppError, AppState, run};
pub use camera::Camera;
pub use gpu::{GpuContext, GpuError};
pub use input::{DragRotation, DragState};
pub use letter_pass::{CLEAR_COLOR, LetterPass, LetterUniforms};
pub use lighting::{DirectionalLight, Lighting, Material, rgb_from_hex};
pub use mesh::{LETTER_VERTICES, Mesh, TRIANGLE_COUNT, Vertex, buffer_size};
pub use transform::{FrameTransforms, ROTATION_PERIOD_MS, period_phase, spin_angle, tilt_angle};

// Re-export glam math types for convenience
pub use glam::{Mat4, Vec3};
