use anyhow::Result;
use winit::dpi::LogicalSize;

use fractal_engine::coords::ColorRgba;
use fractal_engine::device::GpuInit;
use fractal_engine::render::{FractalRenderer, FractalStyle};
use fractal_engine::window::{Runtime, RuntimeConfig};
use fractal_view::{Camera, ZoomController};

use crate::app::ExplorerApp;

/// Explorer builder.
///
/// ```rust,ignore
/// Explorer::new()
///     .title("Mandelbrot")
///     .size(1200.0, 900.0)
///     .iterations(2000)
///     .run()?;
/// ```
pub struct Explorer {
    runtime: RuntimeConfig,
    gpu:     GpuInit,
    style:   FractalStyle,
    home:    Camera,
}

impl Explorer {
    pub fn new() -> Self {
        Self {
            runtime: RuntimeConfig::default(),
            gpu:     GpuInit::default(),
            style:   FractalStyle::default(),
            home:    Camera::home(),
        }
    }

    /// Set the window title.
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.runtime.title = t.into();
        self
    }

    /// Set the initial window size in logical pixels.
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.runtime.initial_size = LogicalSize::new(width, height);
        self
    }

    pub fn resizable(mut self, resizable: bool) -> Self {
        self.runtime.resizable = resizable;
        self
    }

    /// Escape-time iteration cap used by the shader.
    pub fn iterations(mut self, n: u32) -> Self {
        self.style.max_iterations = n;
        self
    }

    pub fn selection_color(mut self, color: ColorRgba) -> Self {
        self.style.selection_color = color;
        self
    }

    /// Region shown at startup and restored by reset.
    pub fn home(mut self, camera: Camera) -> Self {
        self.home = camera;
        self
    }

    pub fn gpu(mut self, init: GpuInit) -> Self {
        self.gpu = init;
        self
    }

    /// Opens the window and blocks until it is closed.
    pub fn run(self) -> Result<()> {
        log::info!(
            "opening {:?} at {}x{} ({} iterations)",
            self.runtime.title,
            self.runtime.initial_size.width,
            self.runtime.initial_size.height,
            self.style.max_iterations
        );

        let app = ExplorerApp::new(
            self.runtime.title.clone(),
            ZoomController::new(self.home),
            FractalRenderer::new(self.style),
        );
        Runtime::run(self.runtime, self.gpu, app)
    }
}

impl Default for Explorer {
    fn default() -> Self {
        Self::new()
    }
}
