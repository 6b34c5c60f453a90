//! Cartesian ⇄ cylindrical conversion in the canonical frame.

use crate::frame::{self, Axis};
use crate::point::{CylindricalPoint, Point3};

/// Convert a canonical-frame Cartesian point to cylindrical coordinates.
///
/// `theta = atan2(y, x)`, `r = hypot(x, y)`. At `r = 0` the azimuth is
/// undefined and comes back as 0 on the return trip.
#[inline]
pub fn to_cylindrical(p: Point3) -> CylindricalPoint {
    CylindricalPoint {
        theta: p.y.atan2(p.x),
        r: p.x.hypot(p.y),
        z: p.z,
    }
}

/// Convert a cylindrical point back to canonical-frame Cartesian.
#[inline]
pub fn to_cartesian(c: CylindricalPoint) -> Point3 {
    Point3 {
        x: c.r * c.theta.cos(),
        y: c.r * c.theta.sin(),
        z: c.z,
    }
}

pub fn to_cylindrical_all(points: &[Point3]) -> Vec<CylindricalPoint> {
    points.iter().map(|&p| to_cylindrical(p)).collect()
}

pub fn to_cartesian_all(points: &[CylindricalPoint]) -> Vec<Point3> {
    points.iter().map(|&c| to_cartesian(c)).collect()
}

/// Express world points in the cylindrical frame of `axis` and sort them
/// lexicographically by `(theta, r, z)`.
///
/// Points coincident with either axis endpoint are excluded from the sort
/// and re-attached, in input order, at the front of the result.
pub fn sort_by_azimuth(points: &[Point3], axis: &Axis) -> Vec<CylindricalPoint> {
    const ENDPOINT_TOL: f64 = 1e-9;

    let on_axis_endpoint = |p: &Point3| {
        let near = |a: Point3, b: Point3| {
            (a.x - b.x).abs() <= ENDPOINT_TOL
                && (a.y - b.y).abs() <= ENDPOINT_TOL
                && (a.z - b.z).abs() <= ENDPOINT_TOL
        };
        near(*p, axis.tip()) || near(*p, axis.origin())
    };

    let cylindrical = to_cylindrical_all(&frame::to_canonical(points, axis));

    let mut pinned = Vec::new();
    let mut sortable = Vec::new();
    for (p, c) in points.iter().zip(cylindrical) {
        if on_axis_endpoint(p) {
            pinned.push(c);
        } else {
            sortable.push(c);
        }
    }
    sortable.sort_by(|a, b| {
        a.theta
            .total_cmp(&b.theta)
            .then(a.r.total_cmp(&b.r))
            .then(a.z.total_cmp(&b.z))
    });
    pinned.extend(sortable);
    pinned
}
