//! Offsets between points: edge directions, bisector normals, far-point
//! pushes.

use num_traits::Float;
use std::ops::{Add, Div, Mul, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 2D displacement, the difference of two [`Point2`](super::Point2)s.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y
    }

    /// Signed area of the parallelogram spanned by `self` and `other`;
    /// positive when `other` turns counter-clockwise from `self`.
    #[inline]
    pub fn cross(self, other: Self) -> F {
        self.x * other.y - self.y * other.x
    }

    #[inline]
    pub fn magnitude_squared(self) -> F {
        self.dot(self)
    }

    /// Unit vector in the same direction, or `None` when the length is at
    /// or below machine epsilon.
    #[inline]
    pub fn normalize(self) -> Option<Self> {
        let len = self.x.hypot(self.y);
        (len > F::epsilon()).then(|| self / len)
    }

    /// Rotated a quarter turn clockwise. Along a counter-clockwise boundary
    /// this is the outward side.
    #[inline]
    pub fn perpendicular_cw(self) -> Self {
        Self::new(self.y, -self.x)
    }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<F: Float> Mul<F> for Vec2<F> {
    type Output = Self;

    #[inline]
    fn mul(self, k: F) -> Self {
        Self::new(self.x * k, self.y * k)
    }
}

impl<F: Float> Div<F> for Vec2<F> {
    type Output = Self;

    #[inline]
    fn div(self, k: F) -> Self {
        Self::new(self.x / k, self.y / k)
    }
}

impl<F: Float> Neg for Vec2<F> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}
