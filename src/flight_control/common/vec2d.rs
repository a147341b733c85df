use num::{Float, Num};
use std::fmt::{Display, Formatter};
use std::ops::{Add, Sub};

/// A 2D vector generic over any numeric type.
///
/// Geographic quantities use `x` for longitude and `y` for latitude, so a position delta
/// reads as (Δlongitude, Δlatitude).
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Vec2D<T> {
    /// The x-component (longitude) of the vector.
    x: T,
    /// The y-component (latitude) of the vector.
    y: T,
}

impl<T: Copy> Vec2D<T> {
    /// Creates a new vector with the given x and y components.
    pub const fn new(x: T, y: T) -> Self { Self { x, y } }

    pub const fn x(&self) -> T { self.x }

    pub const fn y(&self) -> T { self.y }
}

impl<T> Vec2D<T>
where
    T: Float,
{
    /// Computes the magnitude of the vector.
    pub fn abs(&self) -> T { (self.x.powi(2) + self.y.powi(2)).sqrt() }

    /// Creates a vector pointing from the current vector (`self`) to another vector (`other`).
    ///
    /// # Arguments
    /// * `other` - The target vector.
    ///
    /// # Returns
    /// A new vector representing the direction from `self` to `other`.
    pub fn to(&self, other: &Vec2D<T>) -> Vec2D<T> {
        Vec2D::new(other.x - self.x, other.y - self.y)
    }

    /// Returns `true` if both components are exactly zero.
    pub fn is_zero(&self) -> bool { self.x.is_zero() && self.y.is_zero() }
}

impl<T: Num> Add for Vec2D<T> {
    type Output = Vec2D<T>;

    fn add(self, rhs: Self) -> Self::Output {
        Self::Output { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl<T: Num> Sub for Vec2D<T> {
    type Output = Vec2D<T>;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::Output { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl<T: Num> From<(T, T)> for Vec2D<T> {
    /// Creates a `Vec2D` from a tuple of (x, y) values.
    fn from(tuple: (T, T)) -> Self { Vec2D { x: tuple.0, y: tuple.1 } }
}

impl<T: Display> Display for Vec2D<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}
