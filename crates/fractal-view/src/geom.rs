/// Point in device space (`[-1, 1]` on both axes, +Y up).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Point2D {
    pub x: f32,
    pub y: f32,
}

impl Point2D {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

/// Axis-aligned selection box in device space.
///
/// Invariant: `left <= right` and `bottom <= top`. Built by
/// [`Rectangle::square_from_drag`]; never edited in place.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rectangle {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
}

impl Rectangle {
    /// Zero-size rectangle located at `p`.
    #[inline]
    pub const fn at(p: Point2D) -> Self {
        Self { left: p.x, right: p.x, bottom: p.y, top: p.y }
    }

    /// Derives the square selection spanned by a drag from `anchor` to `current`.
    ///
    /// The square stays pinned at `anchor` and grows toward `current`, sized by
    /// the shorter of the two drag deltas, so the selection never stretches.
    pub fn square_from_drag(anchor: Point2D, current: Point2D) -> Self {
        let w = current.x - anchor.x;
        let h = current.y - anchor.y;
        let size = w.abs().min(h.abs());

        let (left, right) = if w < 0.0 {
            (anchor.x - size, anchor.x)
        } else {
            (anchor.x, anchor.x + size)
        };

        let (bottom, top) = if h < 0.0 {
            (anchor.y - size, anchor.y)
        } else {
            (anchor.y, anchor.y + size)
        };

        Self { left, right, bottom, top }
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.top - self.bottom
    }

    /// True when the rectangle covers no area.
    #[inline]
    pub fn is_degenerate(self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    /// Edges packed as `[left, right, bottom, top]`.
    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.left, self.right, self.bottom, self.top]
    }
}
