use crate::scalar::Scalar;
use crate::Point;

/// Dot product of the vectors `p2 - p1` and `p4 - p3`.
///
/// With `p3`, `p4` spanning a direction and `p1`, `p2` a pair of candidate
/// points, the sign of the result tells whether `p2` lies ahead of `p1`
/// along that direction.
#[inline]
pub fn inner_product<S: Scalar>(p1: Point<S>, p2: Point<S>, p3: Point<S>, p4: Point<S>) -> S {
    (p2 - p1).dot(p4 - p3)
}

/// Squared length of `p2 - p1`.
#[inline]
pub fn square_distance<S: Scalar>(p1: Point<S>, p2: Point<S>) -> S {
    (p2 - p1).square_length()
}

/// Intersection of the infinite line through `p1` and `p2` with the infinite
/// line through `p3` and `p4`.
///
/// Returns `None` if the lines are parallel.
pub fn line_intersection<S: Scalar>(
    p1: Point<S>,
    p2: Point<S>,
    p3: Point<S>,
    p4: Point<S>,
) -> Option<Point<S>> {
    let v1 = p2 - p1;
    let v2 = p4 - p3;

    let denom = v2.x * v1.y - v1.x * v2.y;
    if denom == S::ZERO {
        // The lines are parallel
        return None;
    }

    let lambda = ((p2.x - p3.x) * v1.y - v1.x * (p2.y - p3.y)) / denom;

    Some(p3 + v2 * lambda)
}

/// The result of [`ray_intersection`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum RayIntersection<S> {
    /// The rays meet at a point that can be used directly as a join corner.
    ///
    /// Parallel rays produce a corner at the start of the first ray.
    Corner(Point<S>),
    /// The supporting lines meet past the end of one of the rays.
    Overlap(Point<S>),
}

impl<S: Copy> RayIntersection<S> {
    #[inline]
    pub fn point(&self) -> Point<S> {
        match *self {
            RayIntersection::Corner(p) | RayIntersection::Overlap(p) => p,
        }
    }

    #[inline]
    pub fn is_corner(&self) -> bool {
        matches!(self, RayIntersection::Corner(..))
    }
}

/// Intersection of the ray from `p1` through `p2` with the ray from `p3`
/// through `p4`.
///
/// The second ray is parametrized by `lambda` so that `p3` is at `0` and `p4`
/// at `1`. The intersection is reported as an [`RayIntersection::Overlap`]
/// when it lies past `p4` (`lambda > 1`) or past `p2` on the first ray.
pub fn ray_intersection<S: Scalar>(
    p1: Point<S>,
    p2: Point<S>,
    p3: Point<S>,
    p4: Point<S>,
) -> RayIntersection<S> {
    let v1 = p2 - p1;
    let v2 = p4 - p3;

    let denom = v2.x * v1.y - v1.x * v2.y;
    if denom == S::ZERO {
        return RayIntersection::Corner(p1);
    }

    let lambda = ((p2.x - p3.x) * v1.y - v1.x * (p2.y - p3.y)) / denom;
    let intersection = p3 + v2 * lambda;

    if lambda > S::ONE || inner_product(p2, intersection, p2, p1) < S::ZERO {
        return RayIntersection::Overlap(intersection);
    }

    RayIntersection::Corner(intersection)
}

#[cfg(test)]
fn fuzzy_eq_point(a: Point<f32>, b: Point<f32>) -> bool {
    (a - b).square_length() < 1e-8
}

#[test]
fn inner_product_sign() {
    use crate::point;

    let from = point(0.0, 0.0);
    let to = point(10.0, 0.0);

    assert!(inner_product(point(1.0, 5.0), point(3.0, -5.0), from, to) > 0.0);
    assert!(inner_product(point(3.0, 5.0), point(1.0, -5.0), from, to) < 0.0);
    assert_eq!(inner_product(point(2.0, 5.0), point(2.0, -5.0), from, to), 0.0);
    assert_eq!(square_distance(point(1.0, 1.0), point(4.0, 5.0)), 25.0);
}

#[test]
fn intersecting_lines() {
    use crate::point;

    let p = line_intersection(
        point(0.0, 0.0),
        point(1.0, 1.0),
        point(0.0, 4.0),
        point(1.0, 3.0),
    );
    assert!(fuzzy_eq_point(p.unwrap(), point(2.0, 2.0)));

    // The intersection does not need to be inside of either segment.
    let p = line_intersection(
        point(0.0, 0.0),
        point(1.0, 0.0),
        point(5.0, 1.0),
        point(5.0, 2.0),
    );
    assert!(fuzzy_eq_point(p.unwrap(), point(5.0, 0.0)));
}

#[test]
fn parallel_lines() {
    use crate::point;

    let p = line_intersection(
        point(0.0, 0.0),
        point(1.0, 0.0),
        point(0.0, 1.0),
        point(3.0, 1.0),
    );
    assert_eq!(p, None);
}

#[test]
fn ray_corner() {
    use crate::point;

    // Inner corner of a 90 degree turn at (10, 0) with a half width of 1.
    let result = ray_intersection(
        point(9.0, 0.0),
        point(9.0, 10.0),
        point(10.0, 1.0),
        point(0.0, 1.0),
    );
    assert!(result.is_corner());
    assert!(fuzzy_eq_point(result.point(), point(9.0, 1.0)));

    // Outer corner of the same turn: behind the start of the second ray is fine.
    let result = ray_intersection(
        point(10.0, -1.0),
        point(0.0, -1.0),
        point(11.0, 0.0),
        point(11.0, 10.0),
    );
    assert!(result.is_corner());
    assert!(fuzzy_eq_point(result.point(), point(11.0, -1.0)));
}

#[test]
fn parallel_rays() {
    use crate::point;

    let p1 = point(10.0, 1.0);
    let result = ray_intersection(p1, point(20.0, 1.0), point(10.0, 1.0), point(0.0, 1.0));
    assert_eq!(result, RayIntersection::Corner(p1));
}

#[test]
fn ray_overlap() {
    use crate::point;

    // The second ray reaches the first one well past its end.
    let result = ray_intersection(
        point(0.0, 1.0),
        point(10.0, 1.0),
        point(0.0, -1.0),
        point(10.0, -0.5),
    );
    assert!(!result.is_corner());
    assert!(fuzzy_eq_point(result.point(), point(40.0, 1.0)));

    // Past the end of the first ray.
    let result = ray_intersection(
        point(0.0, 0.0),
        point(1.0, 0.0),
        point(5.0, -1.0),
        point(5.0, 1.0),
    );
    assert_eq!(result, RayIntersection::Overlap(point(5.0, 0.0)));
}
