use fractal_engine::coords::ColorRgba;
use fractal_engine::core::{App as EngineApp, AppControl, FrameCtx, WindowCtx};
use fractal_engine::input::InputEvent;
use fractal_engine::render::{FractalParams, FractalRenderer};
use fractal_view::{Camera, ViewState, ZoomController};

use crate::bindings;

/// Engine-facing state: the zoom controller plus the renderer it feeds.
///
/// Input is applied to the controller as it arrives; each frame collects at
/// most one pending view and syncs it before drawing, so a drawn frame never
/// sees a half-applied update.
pub(crate) struct ExplorerApp {
    title: String,
    home: Camera,
    controller: ZoomController,
    renderer: FractalRenderer,
}

impl ExplorerApp {
    pub(crate) fn new(title: String, controller: ZoomController, renderer: FractalRenderer) -> Self {
        let home = controller.camera();
        Self { title, home, controller, renderer }
    }

    fn window_title(&self, view: &ViewState) -> String {
        let zoom = self.home.width / view.camera.width;
        if zoom > 1.0 {
            format!("{} | {zoom:.1}x", self.title)
        } else {
            self.title.clone()
        }
    }
}

impl EngineApp for ExplorerApp {
    fn on_input(&mut self, window: &WindowCtx<'_>, event: &InputEvent) -> AppControl {
        match bindings::action_for(event) {
            Some(action) => bindings::apply(&mut self.controller, action, window.logical_size()),
            None => AppControl::Continue,
        }
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let (w, h) = ctx.window.logical_size();
        self.controller.on_resize(w, h);

        if let Some(view) = self.controller.take_update() {
            if !view.selecting {
                ctx.window.set_title(&self.window_title(&view));
            }
            self.renderer.sync(&shader_params(&view));
        }

        let renderer = &mut self.renderer;
        ctx.render(ColorRgba::black(), |rctx, target| {
            renderer.render(rctx, target);
        })
    }
}

fn shader_params(view: &ViewState) -> FractalParams {
    FractalParams {
        corner: view.camera.corner,
        width: view.camera.width,
        aspect: view.aspect,
        selection: view.selecting.then(|| view.rect.to_array()),
    }
}
