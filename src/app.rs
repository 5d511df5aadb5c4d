use std::sync::Arc;
use std::time::Instant;
use winit::application::ApplicationHandler;
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowAttributes, WindowId};

use crate::camera::Camera;
use crate::gpu::{GpuContext, GpuError};
use crate::input::DragRotation;
use crate::letter_pass::LetterPass;
use crate::lighting::Lighting;
use crate::mesh::Mesh;
use crate::transform::FrameTransforms;

/// Errors that stop the demo from starting.
#[derive(Debug)]
pub enum AppError {
    /// The event loop could not be created or failed while running.
    EventLoop(winit::error::EventLoopError),
    /// The window could not be created.
    Window(winit::error::OsError),
    /// GPU initialization failed.
    Gpu(GpuError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::EventLoop(e) => write!(f, "event loop error: {}", e),
            AppError::Window(e) => write!(f, "failed to create window: {}", e),
            AppError::Gpu(e) => write!(f, "GPU initialization failed: {}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::EventLoop(e) => Some(e),
            AppError::Window(e) => Some(e),
            AppError::Gpu(e) => Some(e),
        }
    }
}

impl From<winit::error::EventLoopError> for AppError {
    fn from(e: winit::error::EventLoopError) -> Self {
        AppError::EventLoop(e)
    }
}

impl From<winit::error::OsError> for AppError {
    fn from(e: winit::error::OsError) -> Self {
        AppError::Window(e)
    }
}

impl From<GpuError> for AppError {
    fn from(e: GpuError) -> Self {
        AppError::Gpu(e)
    }
}

/// Configuration for the demo window.
///
/// Sizes and positions are in physical pixels, the unit winit reports
/// cursor positions in, so drag distances are measured against the same
/// 512 × 512 grid the window occupies.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub title: String,
    /// Inner (client area) size.
    pub width: u32,
    pub height: u32,
    /// Initial top-left position.
    pub position: (i32, i32),
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Grafika Komputerowa: DirectX".to_string(),
            width: 512,
            height: 512,
            position: (100, 100),
        }
    }
}

impl AppConfig {
    fn window_attributes(&self) -> WindowAttributes {
        WindowAttributes::default()
            .with_title(&self.title)
            .with_inner_size(PhysicalSize::new(self.width, self.height))
            .with_position(PhysicalPosition::new(self.position.0, self.position.1))
            .with_visible(false)
    }
}

/// State shared by input handling and rendering.
///
/// Both run on the event loop thread: input borrows it mutably between
/// frames, rendering reads it once per frame.
#[derive(Clone, Debug)]
pub struct AppState {
    pub drag: DragRotation,
    pub camera: Camera,
    pub lighting: Lighting,
    start_time: Instant,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            drag: DragRotation::new(),
            camera: Camera::new(),
            lighting: Lighting::default(),
            start_time: Instant::now(),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Milliseconds since the state was created.
    pub fn elapsed_ms(&self) -> u64 {
        self.start_time.elapsed().as_millis() as u64
    }

    /// Transforms for a frame rendered at `time_ms`.
    pub fn transforms_at(&self, time_ms: u64) -> FrameTransforms {
        FrameTransforms::compute(&self.camera, time_ms, self.drag.accumulator())
    }

    /// Transforms for a frame rendered now.
    pub fn frame_transforms(&self) -> FrameTransforms {
        self.transforms_at(self.elapsed_ms())
    }
}

/// Run the demo.
///
/// Blocks until the window is closed. Returns an error if startup failed; in
/// that case the window is never shown.
pub fn run() -> Result<(), AppError> {
    let config = AppConfig::default();
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = LetterApp::Pending { config };
    event_loop.run_app(&mut app)?;

    match app {
        LetterApp::Failed(e) => Err(e),
        _ => Ok(()),
    }
}

// Field order is drop order: GPU objects go before the device, the window last.
struct Running {
    pass: LetterPass,
    mesh: Mesh,
    gpu: GpuContext,
    window: Arc<Window>,
    state: AppState,
}

impl Running {
    fn start(event_loop: &ActiveEventLoop, config: &AppConfig) -> Result<Self, AppError> {
        let window = Arc::new(event_loop.create_window(config.window_attributes())?);
        let gpu = GpuContext::new(window.clone())?;
        let mesh = Mesh::letter(&gpu);
        let pass = LetterPass::new(&gpu);

        eprintln!(
            "[letter3d] {} triangles ({} bytes) on {}",
            mesh.triangle_count(),
            mesh.size(),
            gpu.adapter_name
        );

        Ok(Self {
            pass,
            mesh,
            gpu,
            window,
            state: AppState::new(),
        })
    }

    fn redraw(&mut self) {
        self.pass.ensure_depth_size(&self.gpu);

        let transforms = self.state.frame_transforms();
        match self
            .pass
            .render(&self.gpu, &self.mesh, &transforms, &self.state.lighting)
        {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                eprintln!("[letter3d] surface lost, reconfiguring");
                self.gpu.reconfigure();
            }
            Err(wgpu::SurfaceError::Timeout) => {}
            Err(e) => eprintln!("[letter3d] skipped frame: {}", e),
        }
    }
}

enum LetterApp {
    Pending { config: AppConfig },
    Running(Box<Running>),
    Failed(AppError),
}

impl ApplicationHandler for LetterApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let LetterApp::Pending { config } = self else {
            return;
        };

        match Running::start(event_loop, config) {
            Ok(running) => {
                running.window.set_visible(true);
                running.window.request_redraw();
                *self = LetterApp::Running(Box::new(running));
            }
            Err(e) => {
                *self = LetterApp::Failed(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let LetterApp::Running(running) = self else {
            return;
        };

        running.state.drag.handle_event(&event);

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                running.gpu.resize(size.width, size.height);
            }
            WindowEvent::RedrawRequested => {
                running.redraw();
                running.window.request_redraw();
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::{Position, Size};

    #[test]
    fn default_config_is_square_window() {
        let config = AppConfig::default();
        assert_eq!((config.width, config.height), (512, 512));
        assert_eq!(config.position, (100, 100));
        assert_eq!(config.title, "Grafika Komputerowa: DirectX");
    }

    #[test]
    fn window_is_sized_in_cursor_pixels() {
        let attrs = AppConfig::default().window_attributes();
        assert_eq!(attrs.inner_size, Some(Size::Physical(PhysicalSize::new(512, 512))));
        assert_eq!(attrs.position, Some(Position::Physical(PhysicalPosition::new(100, 100))));
        assert!(!attrs.visible);
    }

    #[test]
    fn state_feeds_drag_into_transforms() {
        let mut state = AppState::new();
        let still = state.transforms_at(2_500);

        state.drag.press(100, 100);
        state.drag.pointer_moved(150, 80);
        state.drag.release();
        assert_eq!(state.drag.accumulator(), -1000);

        let tilted = state.transforms_at(2_500);
        assert_ne!(still.world, tilted.world);
        assert_eq!(tilted, FrameTransforms::compute(&Camera::new(), 2_500, -1000));
        assert_eq!(still.view, tilted.view);
    }

    #[test]
    fn app_error_exposes_source() {
        use std::error::Error;

        let err = AppError::from(GpuError::NoSurfaceFormat);
        assert!(err.source().is_some());
        assert!(err.to_string().contains("GPU"));
    }
}
