use serde::{Deserialize, Serialize};

/// Axis-aligned pixel rectangle, right/bottom exclusive.
///
/// A box produced by this crate always satisfies `left < right <= width` and
/// `top < bottom <= height` for the image it was computed from. "No foreground"
/// is expressed as `None` in an `Option<BoundingBox>`, never as a degenerate box.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct BoundingBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl BoundingBox {
    pub fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Box covering a whole `width` x `height` image.
    pub fn full(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Box covering a single pixel.
    pub fn pixel(x: u32, y: u32) -> Self {
        Self::new(x, y, x + 1, y + 1)
    }

    pub fn width(&self) -> u32 {
        self.right.saturating_sub(self.left)
    }

    pub fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top)
    }

    pub fn area(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Smallest box enclosing both `self` and `other`.
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }

    /// Grow by `padding` on every side, then clamp into `[0, width] x [0, height]`.
    pub fn pad_and_clip(&self, padding: u32, width: u32, height: u32) -> BoundingBox {
        BoundingBox {
            left: self.left.saturating_sub(padding).min(width),
            top: self.top.saturating_sub(padding).min(height),
            right: self.right.saturating_add(padding).min(width),
            bottom: self.bottom.saturating_add(padding).min(height),
        }
    }

    /// Clamp into `[0, width] x [0, height]`; `None` if nothing is left.
    pub fn clip_to(&self, width: u32, height: u32) -> Option<BoundingBox> {
        let clipped = self.pad_and_clip(0, width, height);
        if clipped.is_empty() { None } else { Some(clipped) }
    }

    /// `(x, y, width, height)`, the layout `image::imageops::crop_imm` expects.
    pub fn as_xywh(&self) -> (u32, u32, u32, u32) {
        (self.left, self.top, self.width(), self.height())
    }
}

impl std::fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.left, self.top, self.right, self.bottom
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_inside_bounds_is_symmetric() {
        let b = BoundingBox::pixel(50, 50).pad_and_clip(10, 100, 100);
        assert_eq!(b, BoundingBox::new(40, 40, 61, 61));
    }

    #[test]
    fn pad_clamps_to_both_edges() {
        let b = BoundingBox::pixel(0, 0).pad_and_clip(20, 10, 10);
        assert_eq!(b, BoundingBox::full(10, 10));
    }

    #[test]
    fn pad_survives_u32_extremes() {
        let b = BoundingBox::new(0, 0, u32::MAX - 1, 5).pad_and_clip(u32::MAX, u32::MAX, 8);
        assert_eq!(b, BoundingBox::new(0, 0, u32::MAX, 8));
    }

    #[test]
    fn clip_rejects_box_outside_image() {
        assert_eq!(BoundingBox::new(20, 20, 30, 30).clip_to(10, 10), None);
        assert_eq!(
            BoundingBox::new(5, 5, 30, 30).clip_to(10, 10),
            Some(BoundingBox::new(5, 5, 10, 10))
        );
    }

    #[test]
    fn union_and_geometry() {
        let a = BoundingBox::new(2, 3, 4, 5);
        let b = BoundingBox::new(1, 4, 3, 9);
        let u = a.union(&b);
        assert_eq!(u, BoundingBox::new(1, 3, 4, 9));
        assert_eq!(u.width(), 3);
        assert_eq!(u.height(), 6);
        assert_eq!(u.area(), 18);
        assert_eq!(u.to_string(), "(1, 3, 4, 9)");
    }
}
