use crate::line::{inner_product, square_distance};
use crate::scalar::Scalar;
use crate::{Point, Vector};

/// A rectangle with an arbitrary orientation, described by its four corners.
///
/// The corners are expected to be listed in order around the rectangle, so
/// that `corners[0] -> corners[1]` and `corners[1] -> corners[2]` are two
/// perpendicular sides.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct OrientedRect<S> {
    pub corners: [Point<S>; 4],
}

impl<S: Scalar> OrientedRect<S> {
    #[inline]
    pub fn new(corners: [Point<S>; 4]) -> Self {
        OrientedRect { corners }
    }

    /// The rectangle covered by a segment stroked with `normal` on each side.
    ///
    /// `normal` is expected to be perpendicular to `to - from` and scaled to
    /// half of the stroke width.
    pub fn from_segment(from: Point<S>, to: Point<S>, normal: Vector<S>) -> Self {
        OrientedRect {
            corners: [from + normal, to + normal, to - normal, from - normal],
        }
    }

    /// Returns true if the two rectangles overlap.
    ///
    /// Only the sides of the two rectangles are considered as separating axes,
    /// which is enough for rectangles. Rectangles that only touch along a side
    /// do not intersect.
    pub fn intersects(&self, other: &Self) -> bool {
        let a = &self.corners;
        let b = &other.corners;

        !(separates(a[0], a[1], b)
            || separates(a[1], a[2], b)
            || separates(b[0], b[1], a)
            || separates(b[1], b[2], a))
    }
}

/// Returns true if all corners project on the same side outside of the
/// `[from, to]` band, perpendicular to that side.
fn separates<S: Scalar>(from: Point<S>, to: Point<S>, corners: &[Point<S>; 4]) -> bool {
    let length = square_distance(from, to);
    let mut side = 0i8;
    for (i, corner) in corners.iter().enumerate() {
        let projection = inner_product(from, to, from, *corner);
        let corner_side = if projection <= S::ZERO {
            -1
        } else if projection >= length {
            1
        } else {
            return false;
        };

        if i == 0 {
            side = corner_side;
        } else if corner_side != side {
            return false;
        }
    }

    true
}

#[cfg(test)]
fn square(x: f32, y: f32, size: f32) -> OrientedRect<f32> {
    use crate::point;

    OrientedRect::new([
        point(x, y),
        point(x + size, y),
        point(x + size, y + size),
        point(x, y + size),
    ])
}

#[test]
fn overlapping_rectangles() {
    let a = square(0.0, 0.0, 2.0);
    let b = square(1.0, 1.0, 2.0);
    assert!(a.intersects(&b));
    assert!(b.intersects(&a));

    // Containment.
    let c = square(0.5, 0.5, 0.5);
    assert!(a.intersects(&c));
    assert!(c.intersects(&a));
}

#[test]
fn separated_rectangles() {
    let a = square(0.0, 0.0, 2.0);
    assert!(!a.intersects(&square(3.0, 0.0, 2.0)));
    assert!(!a.intersects(&square(0.0, -5.0, 2.0)));
    assert!(!a.intersects(&square(10.0, 10.0, 1.0)));

    // Sharing a side is not an intersection.
    assert!(!a.intersects(&square(2.0, 0.0, 2.0)));
}

#[test]
fn rotated_rectangles() {
    use crate::{point, vector};

    // A thin diagonal band crossing the square.
    let a = square(0.0, 0.0, 2.0);
    let band = OrientedRect::from_segment(point(-1.0, -1.0), point(3.0, 3.0), vector(-0.1, 0.1));
    assert!(a.intersects(&band));
    assert!(band.intersects(&a));

    // The same band moved away along its normal. Axis aligned bounding
    // boxes would still overlap here.
    let far = OrientedRect::from_segment(point(1.0, -3.0), point(5.0, 1.0), vector(-0.1, 0.1));
    assert!(!square(0.0, 0.0, 1.0).intersects(&far));
    assert!(!far.intersects(&square(0.0, 0.0, 1.0)));
}

#[test]
fn segment_rectangle_corners() {
    use crate::{point, vector};

    let r = OrientedRect::from_segment(point(0.0, 0.0), point(10.0, 0.0), vector(0.0, 1.0));
    assert_eq!(
        r.corners,
        [
            point(0.0, 1.0),
            point(10.0, 1.0),
            point(10.0, -1.0),
            point(0.0, -1.0)
        ]
    );
}
