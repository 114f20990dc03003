/*
    Sectograph
    https://github.com/dbalsom/sectograph

    Copyright 2025 Daniel Balsom

    Permission is hereby granted, free of charge, to any person obtaining a
    copy of this software and associated documentation files (the “Software”),
    to deal in the Software without restriction, including without limitation
    the rights to use, copy, modify, merge, publish, distribute, sublicense,
    and/or sell copies of the Software, and to permit persons to whom the
    Software is furnished to do so, subject to the following conditions:

    The above copyright notice and this permission notice shall be included in
    all copies or substantial portions of the Software.

    THE SOFTWARE IS PROVIDED “AS IS”, WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
    IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
    FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
    AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
    LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
    FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER
    DEALINGS IN THE SOFTWARE.

    --------------------------------------------------------------------------
*/

use std::fmt::{self, Display, Formatter};

use num_traits::Num;

/// A [Point2d] represents a point in 2D space, in the dial's coordinate
/// system: x grows right, y grows down (screen coordinates). It is generic
/// across numeric types, using `num_traits`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point2d<T> {
    pub x: T,
    pub y: T,
}

impl<T: Num + Copy + Default> Default for Point2d<T> {
    fn default() -> Self {
        Point2d {
            x: T::default(),
            y: T::default(),
        }
    }
}

impl<T: Num + Copy + Default> From<(T, T)> for Point2d<T> {
    fn from(tuple: (T, T)) -> Self {
        Point2d { x: tuple.0, y: tuple.1 }
    }
}

impl<T: Num + Copy + Default + Display> Display for Point2d<T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl<T: Num + Copy + Default> Point2d<T> {
    pub fn new(x: T, y: T) -> Self {
        Point2d { x, y }
    }

    pub fn to_tuple(&self) -> (T, T) {
        (self.x, self.y)
    }

    pub fn scale(&self, factor: T) -> Point2d<T> {
        Point2d {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    pub fn translate(&self, dx: T, dy: T) -> Point2d<T> {
        Point2d {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl Point2d<f32> {
    /// Return the point at `radius` and `angle` (radians) from `center`.
    /// With y growing downward, increasing angle sweeps clockwise on screen.
    #[inline]
    pub fn polar(center: Point2d<f32>, radius: f32, angle: f32) -> Point2d<f32> {
        let (sin, cos) = angle.sin_cos();
        Point2d {
            x: center.x + radius * cos,
            y: center.y + radius * sin,
        }
    }

    pub fn distance(&self, other: &Point2d<f32>) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A [Circle] is a center point and radius, used for the dial chrome rings.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Circle {
    pub center: Point2d<f32>,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Point2d<f32>, radius: f32) -> Circle {
        Circle { center, radius }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn polar_maps_cardinal_directions() {
        let center = Point2d::new(10.0, 10.0);
        let right = Point2d::polar(center, 5.0, 0.0);
        assert!((right.x - 15.0).abs() < 1e-5 && (right.y - 10.0).abs() < 1e-5);

        // -PI/2 is the top of a y-down dial.
        let top = Point2d::polar(center, 5.0, -FRAC_PI_2);
        assert!((top.x - 10.0).abs() < 1e-5);
        assert!((top.y - 5.0).abs() < 1e-5);
    }
}
