use serde::Serialize;

/// Cartesian point in world or canonical coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    #[inline]
    pub fn from_array(a: [f64; 3]) -> Self {
        Self {
            x: a[0],
            y: a[1],
            z: a[2],
        }
    }

    /// Displacement vector `self - other`.
    #[inline]
    pub fn sub(self, other: Self) -> [f64; 3] {
        [self.x - other.x, self.y - other.y, self.z - other.z]
    }
}

/// Point in the canonical cylindrical frame: `theta` in `(-pi, pi]`, `r >= 0`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CylindricalPoint {
    pub theta: f64,
    pub r: f64,
    pub z: f64,
}

impl CylindricalPoint {
    pub fn new(theta: f64, r: f64, z: f64) -> Self {
        Self { theta, r, z }
    }

    /// Copy of this point with the radius scaled by `fraction`.
    #[inline]
    pub fn scale_radius(self, fraction: f64) -> Self {
        Self {
            theta: self.theta,
            r: self.r * fraction,
            z: self.z,
        }
    }
}

#[inline]
pub fn dot(a: [f64; 3], b: [f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

#[inline]
pub fn cross(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

#[inline]
pub fn norm(a: [f64; 3]) -> f64 {
    dot(a, a).sqrt()
}
