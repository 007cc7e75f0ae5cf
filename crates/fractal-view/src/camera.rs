use crate::geom::Rectangle;

/// Visible fractal region in world units.
///
/// Only the width is stored; the height is `width * aspect`, with the aspect
/// owned by [`CameraState`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera {
    /// Bottom-left corner of the visible region.
    pub corner: [f32; 2],
    pub width: f32,
}

impl Camera {
    #[inline]
    pub const fn new(corner: [f32; 2], width: f32) -> Self {
        Self { corner, width }
    }

    /// Region the explorer opens on: the whole Mandelbrot set.
    #[inline]
    pub const fn home() -> Self {
        Self::new([-2.0, -1.5], 3.0)
    }

    #[inline]
    pub fn height(self, aspect: f32) -> f32 {
        self.width * aspect
    }

    /// Camera whose visible region is exactly `rect` as seen through `self`.
    ///
    /// Returns `None` for a zero-size rectangle.
    pub fn zoomed_to(self, rect: Rectangle, aspect: f32) -> Option<Camera> {
        if rect.is_degenerate() {
            return None;
        }

        let height = self.height(aspect);
        let corner = [
            self.corner[0] + (rect.left + 1.0) * 0.5 * self.width,
            self.corner[1] + (rect.bottom + 1.0) * 0.5 * height,
        ];
        let width = rect.width() * 0.5 * self.width;

        (width > 0.0).then_some(Camera::new(corner, width))
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::home()
    }
}

/// Committed camera plus the zoom history behind it.
#[derive(Debug, Clone)]
pub struct CameraState {
    home: Camera,
    current: Camera,
    history: Vec<Camera>,
    /// Framebuffer height / width.
    aspect: f32,
}

impl CameraState {
    pub fn new(home: Camera) -> Self {
        Self {
            home,
            current: home,
            history: Vec::new(),
            aspect: 1.0,
        }
    }

    #[inline]
    pub fn camera(&self) -> Camera {
        self.current
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Number of cameras that `zoom_out` can step back through.
    #[inline]
    pub fn depth(&self) -> usize {
        self.history.len()
    }

    /// Updates the aspect used to derive the world height.
    ///
    /// Non-finite or non-positive values are ignored. Returns whether the
    /// aspect changed.
    pub fn set_aspect(&mut self, aspect: f32) -> bool {
        if !aspect.is_finite() || aspect <= 0.0 || aspect == self.aspect {
            return false;
        }
        self.aspect = aspect;
        true
    }

    /// Replaces the camera with the region selected by `rect`.
    ///
    /// A zero-size selection leaves the camera unchanged.
    pub fn commit(&mut self, rect: Rectangle) -> Camera {
        match self.current.zoomed_to(rect, self.aspect) {
            Some(next) => {
                self.history.push(self.current);
                self.current = next;
                log::debug!(
                    "zoom commit: corner=({}, {}) width={} depth={}",
                    next.corner[0],
                    next.corner[1],
                    next.width,
                    self.history.len()
                );
            }
            None => log::trace!("zoom commit ignored: degenerate selection {rect:?}"),
        }
        self.current
    }

    /// Restores the camera that preceded the last commit.
    pub fn zoom_out(&mut self) -> bool {
        let Some(prev) = self.history.pop() else { return false };
        self.current = prev;
        log::debug!("zoom out: width={} depth={}", prev.width, self.history.len());
        true
    }

    /// Returns to the home camera and forgets the zoom history.
    pub fn reset(&mut self) -> bool {
        let changed = self.current != self.home || !self.history.is_empty();
        self.history.clear();
        self.current = self.home;
        changed
    }
}

impl Default for CameraState {
    fn default() -> Self {
        Self::new(Camera::home())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn approx(a: f32, b: f32) -> bool { (a - b).abs() < EPS }

    fn rect(left: f32, right: f32, bottom: f32, top: f32) -> Rectangle {
        Rectangle { left, right, bottom, top }
    }

    // ── zoomed_to ─────────────────────────────────────────────────────────

    #[test]
    fn full_screen_selection_is_identity() {
        let cam = Camera::home();
        let next = cam.zoomed_to(rect(-1.0, 1.0, -1.0, 1.0), 1.0).unwrap();
        assert!(approx(next.corner[0], cam.corner[0]));
        assert!(approx(next.corner[1], cam.corner[1]));
        assert!(approx(next.width, cam.width));
    }

    #[test]
    fn upper_right_quadrant_halves_width() {
        let cam = Camera::home();
        let next = cam.zoomed_to(rect(0.0, 1.0, 0.0, 1.0), 1.0).unwrap();
        assert!(approx(next.corner[0], -0.5));
        assert!(approx(next.corner[1], 0.0));
        assert!(approx(next.width, 1.5));
    }

    #[test]
    fn aspect_scales_vertical_offset() {
        let cam = Camera::new([0.0, 0.0], 4.0);
        // Height is 2.0 at aspect 0.5; the bottom edge sits halfway up.
        let next = cam.zoomed_to(rect(-1.0, -0.5, 0.0, 0.5), 0.5).unwrap();
        assert!(approx(next.corner[0], 0.0));
        assert!(approx(next.corner[1], 1.0));
        assert!(approx(next.width, 1.0));
    }

    #[test]
    fn degenerate_selection_yields_none() {
        assert!(Camera::home().zoomed_to(Rectangle::default(), 1.0).is_none());
    }

    // ── CameraState ───────────────────────────────────────────────────────

    #[test]
    fn degenerate_commit_keeps_camera_and_history() {
        let mut state = CameraState::default();
        let cam = state.commit(rect(0.2, 0.2, 0.3, 0.3));
        assert_eq!(cam, Camera::home());
        assert_eq!(state.depth(), 0);
    }

    #[test]
    fn commits_chain_relative_to_previous_camera() {
        let mut state = CameraState::default();
        state.commit(rect(0.0, 1.0, 0.0, 1.0));
        let cam = state.commit(rect(0.0, 1.0, 0.0, 1.0));
        assert!(approx(cam.corner[0], 0.25));
        assert!(approx(cam.corner[1], 0.75));
        assert!(approx(cam.width, 0.75));
        assert_eq!(state.depth(), 2);
    }

    #[test]
    fn zoom_out_restores_previous_camera() {
        let mut state = CameraState::default();
        state.commit(rect(-1.0, 0.0, -1.0, 0.0));
        assert!(state.zoom_out());
        assert_eq!(state.camera(), Camera::home());
        assert!(!state.zoom_out());
    }

    #[test]
    fn reset_returns_home_and_clears_history() {
        let mut state = CameraState::default();
        state.commit(rect(-0.5, 0.5, -0.5, 0.5));
        state.commit(rect(-0.5, 0.5, -0.5, 0.5));
        assert!(state.reset());
        assert_eq!(state.camera(), Camera::home());
        assert_eq!(state.depth(), 0);
        assert!(!state.reset());
    }

    #[test]
    fn set_aspect_rejects_invalid_values() {
        let mut state = CameraState::default();
        assert!(!state.set_aspect(0.0));
        assert!(!state.set_aspect(-2.0));
        assert!(!state.set_aspect(f32::NAN));
        assert!(!state.set_aspect(1.0));
        assert!(state.set_aspect(0.75));
        assert_eq!(state.aspect(), 0.75);
    }
}
