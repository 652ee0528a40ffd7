#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::many_single_char_names)]
#![no_std]

//! Simple 2D geometric primitives on top of euclid, used to stroke graphs.
//!
//! This crate is reexported in [graph_stroke](https://docs.rs/graph_stroke/).
//!
//! # Overview.
//!
//! This crate implements the maths needed to build and compare stroke outlines:
//!
//! - inner products and squared distances,
//! - intersections of infinite lines and of rays,
//! - oriented rectangles and a fast collision test between them.
//!
//! Everything is generic over the [`Scalar`] trait, which is implemented for
//! `f32` and `f64`.

#[cfg(any(test, feature = "std"))]
extern crate std;

// Reexport dependencies.
pub use euclid;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

mod line;
mod rect;

#[doc(inline)]
pub use crate::line::{
    inner_product, line_intersection, ray_intersection, square_distance, RayIntersection,
};
#[doc(inline)]
pub use crate::rect::OrientedRect;

pub use crate::scalar::Scalar;

mod scalar {
    pub(crate) use num_traits::{Float, NumCast};

    use core::fmt::{Debug, Display};
    use core::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

    pub trait Scalar:
        Float + NumCast + Sized + Display + Debug + AddAssign + SubAssign + MulAssign + DivAssign
    {
        const ZERO: Self;
        const ONE: Self;
    }

    impl Scalar for f32 {
        const ZERO: Self = 0.0;
        const ONE: Self = 1.0;
    }

    impl Scalar for f64 {
        const ZERO: Self = 0.0;
        const ONE: Self = 1.0;
    }
}

/// Alias for `euclid::default::Point2D`.
pub use euclid::default::Point2D as Point;

/// Alias for `euclid::default::Vector2D`.
pub use euclid::default::Vector2D as Vector;

/// Shorthand for `Vector::new(x, y)`.
#[inline]
pub fn vector<S>(x: S, y: S) -> Vector<S> {
    Vector::new(x, y)
}

/// Shorthand for `Point::new(x, y)`.
#[inline]
pub fn point<S>(x: S, y: S) -> Point<S> {
    Point::new(x, y)
}
