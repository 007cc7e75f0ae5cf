/// Drawable size in physical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Height over width, or `None` for an unusable size.
    #[inline]
    pub fn aspect(self) -> Option<f32> {
        self.is_valid().then(|| self.height / self.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_of_valid_viewport() {
        assert_eq!(Viewport::new(800.0, 600.0).aspect(), Some(0.75));
    }

    #[test]
    fn zero_or_non_finite_is_invalid() {
        assert_eq!(Viewport::new(0.0, 600.0).aspect(), None);
        assert_eq!(Viewport::new(f32::INFINITY, 600.0).aspect(), None);
    }
}
