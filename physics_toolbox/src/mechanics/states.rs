//! Geometric state types shared by every mechanics quantity.
//!
//! - `Point`  a fixed 3d coordinate
//! - `Vector` a directed segment from an origin `Point` to an end `Point`
//!
//! Components are plain `f64`, displacements are handed out as `NVec3`
//! (nalgebra) so callers can keep doing linear algebra on them.

use std::fmt;

use nalgebra::Vector3;
pub type NVec3 = Vector3<f64>;

#[derive(Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// World origin (0, 0, 0)
    pub const fn origin() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    pub fn to_nvec(&self) -> NVec3 {
        NVec3::new(self.x, self.y, self.z)
    }
}

impl From<[f64; 3]> for Point {
    fn from(c: [f64; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.x, self.y, self.z)
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point({},{},{})", self.x, self.y, self.z)
    }
}

/// Directed segment `origin -> end`
///
/// Only the two endpoints are stored; components and magnitude are
/// recomputed on every read.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector {
    pub origin: Point,
    pub end: Point,
}

impl Vector {
    /// Vector from the world origin to `end`
    pub const fn new(end: Point) -> Self {
        Self { origin: Point::origin(), end }
    }

    pub const fn between(origin: Point, end: Point) -> Self {
        Self { origin, end }
    }

    pub const fn zero() -> Self {
        Self::new(Point::origin())
    }

    /// `end - origin` along every axis
    pub fn displacement(&self) -> NVec3 {
        self.end.to_nvec() - self.origin.to_nvec()
    }

    pub fn magnitude(&self) -> f64 {
        self.displacement().norm()
    }

    pub fn x(&self) -> f64 {
        self.end.x - self.origin.x
    }

    pub fn y(&self) -> f64 {
        self.end.y - self.origin.y
    }

    pub fn z(&self) -> f64 {
        self.end.z - self.origin.z
    }
}

impl Default for Vector {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.origin, self.end)
    }
}
