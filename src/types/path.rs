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

//! Declarative path primitives. A task arc is an ordered sequence of
//! [PathCommand]s describing a closed shape, so that any 2D backend (SVG,
//! canvas, GPU tessellation) can consume the geometry without this crate
//! depending on a specific vector-graphics API.

use crate::types::point::Point2d;

/// Direction of turn for a circular [PathCommand::ArcTo] segment. With the
/// dial's y-down coordinate system, `Clockwise` corresponds to increasing
/// dial angle (SVG sweep flag 1).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Sweep {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl Sweep {
    pub fn opposite(&self) -> Sweep {
        match self {
            Sweep::Clockwise => Sweep::CounterClockwise,
            Sweep::CounterClockwise => Sweep::Clockwise,
        }
    }

    /// SVG `sweep-flag` value for this direction.
    pub fn flag(&self) -> u8 {
        match self {
            Sweep::Clockwise => 1,
            Sweep::CounterClockwise => 0,
        }
    }
}

/// A single drawing primitive. Arc segments are circular (equal radii), since
/// every curve on the dial is a circle segment.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PathCommand {
    /// Begin a new subpath at the given point.
    MoveTo(Point2d<f32>),
    /// Straight line from the current point.
    LineTo(Point2d<f32>),
    /// Circular arc from the current point to `end`.
    ArcTo {
        radius: f32,
        /// Select the longer of the two candidate arcs (SVG large-arc flag).
        large_arc: bool,
        sweep: Sweep,
        end: Point2d<f32>,
    },
    /// Close the current subpath back to its `MoveTo` point.
    Close,
}

impl PathCommand {
    /// The endpoint this command leaves the pen at, if it has one.
    pub fn endpoint(&self) -> Option<Point2d<f32>> {
        match self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(*p),
            PathCommand::ArcTo { end, .. } => Some(*end),
            PathCommand::Close => None,
        }
    }
}
