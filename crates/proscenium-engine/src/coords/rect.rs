use super::Vec2;

/// Axis-aligned rectangle in surface pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Rectangle anchored at the origin covering a `width × height` surface.
    #[inline]
    pub fn from_surface_size(width: u32, height: u32) -> Self {
        Rect::new(0.0, 0.0, width as f32, height as f32)
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let mut r = self;
        if r.size.x < 0.0 {
            r.origin.x += r.size.x;
            r.size.x = -r.size.x;
        }
        if r.size.y < 0.0 {
            r.origin.y += r.size.y;
            r.size.y = -r.size.y;
        }
        r
    }

    #[inline]
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let a = self.normalized();
        let b = other.normalized();

        let x0 = a.origin.x.max(b.origin.x);
        let y0 = a.origin.y.max(b.origin.y);
        let x1 = a.max().x.min(b.max().x);
        let y1 = a.max().y.min(b.max().y);

        if x1 - x0 <= 0.0 || y1 - y0 <= 0.0 {
            None
        } else {
            Some(Rect::new(x0, y0, x1 - x0, y1 - y0))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── normalized ────────────────────────────────────────────────────────

    #[test]
    fn normalized_positive_is_identity() {
        let rect = r(1.0, 2.0, 10.0, 20.0);
        assert_eq!(rect.normalized(), rect);
    }

    #[test]
    fn normalized_flips_negative_extents() {
        let n = r(10.0, 10.0, -4.0, -3.0).normalized();
        assert_eq!(n, r(6.0, 7.0, 4.0, 3.0));
    }

    // ── intersect ─────────────────────────────────────────────────────────

    #[test]
    fn intersect_clips_to_surface_bounds() {
        let surface = Rect::from_surface_size(480, 360);
        let clear = r(-20.0, 300.0, 100.0, 100.0);
        assert_eq!(clear.intersect(surface), Some(r(0.0, 300.0, 80.0, 60.0)));
    }

    #[test]
    fn intersect_touching_edge_returns_none() {
        let a = r(0.0, 0.0, 10.0, 10.0);
        let b = r(10.0, 0.0, 10.0, 10.0);
        assert!(a.intersect(b).is_none());
    }

    #[test]
    fn intersect_disjoint_returns_none() {
        assert!(r(0.0, 0.0, 5.0, 5.0).intersect(r(20.0, 20.0, 5.0, 5.0)).is_none());
    }

    // ── is_empty ──────────────────────────────────────────────────────────

    #[test]
    fn is_empty_zero_size() {
        assert!(r(0.0, 0.0, 0.0, 5.0).is_empty());
        assert!(r(0.0, 0.0, 5.0, 0.0).is_empty());
        assert!(!Rect::from_surface_size(1, 1).is_empty());
    }
}
