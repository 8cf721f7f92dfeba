use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn left(self) -> f64 {
        self.origin.x
    }

    #[inline]
    pub fn right(self) -> f64 {
        self.origin.x + self.size.x
    }

    #[inline]
    pub fn top(self) -> f64 {
        self.origin.y
    }

    #[inline]
    pub fn bottom(self) -> f64 {
        self.origin.y + self.size.y
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x * 0.5, self.origin.y + self.size.y * 0.5)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Shrinks the rectangle by per-side insets (negative values grow it).
    #[inline]
    pub fn inset(self, left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Rect::new(
            self.origin.x + left,
            self.origin.y + top,
            self.size.x - left - right,
            self.size.y - top - bottom,
        )
    }

    /// Inclusive containment on all four edges.
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        p.x >= self.left() && p.x <= self.right() && p.y >= self.top() && p.y <= self.bottom()
    }

    /// Horizontal fraction of `x` across the rectangle, clamped to [0, 1].
    ///
    /// An empty rectangle maps everything to 0.
    #[inline]
    pub fn fraction_x(self, x: f64) -> f64 {
        if self.size.x <= 0.0 {
            return 0.0;
        }
        ((x - self.origin.x) / self.size.x).clamp(0.0, 1.0)
    }

    /// Inverse of [`fraction_x`](Self::fraction_x) for `t` in [0, 1].
    #[inline]
    pub fn x_at(self, t: f64) -> f64 {
        self.origin.x + t * self.size.x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f64, y: f64, w: f64, h: f64) -> Rect { Rect::new(x, y, w, h) }

    #[test]
    fn contains_is_edge_inclusive() {
        let rect = r(0.0, 0.0, 10.0, 10.0);
        assert!(rect.contains(Vec2::new(0.0, 0.0)));
        assert!(rect.contains(Vec2::new(10.0, 10.0)));
        assert!(rect.contains(Vec2::new(5.0, 5.0)));
        assert!(!rect.contains(Vec2::new(-0.1, 5.0)));
        assert!(!rect.contains(Vec2::new(5.0, 10.1)));
    }

    #[test]
    fn inset_matches_per_side_offsets() {
        let bar = r(0.0, 0.0, 400.0, 80.0).inset(20.0, 20.0, 20.0, 40.0);
        assert_eq!(bar, r(20.0, 20.0, 360.0, 20.0));
    }

    #[test]
    fn fraction_x_clamps_outside() {
        let rect = r(20.0, 0.0, 100.0, 10.0);
        assert_eq!(rect.fraction_x(70.0), 0.5);
        assert_eq!(rect.fraction_x(0.0), 0.0);
        assert_eq!(rect.fraction_x(500.0), 1.0);
        assert_eq!(rect.x_at(0.25), 45.0);
    }

    #[test]
    fn fraction_x_of_empty_rect_is_zero() {
        assert_eq!(r(0.0, 0.0, 0.0, 10.0).fraction_x(3.0), 0.0);
        assert!(r(0.0, 0.0, 0.0, 10.0).is_empty());
    }
}
