use crate::error::MeshError;
use crate::point::{cross, dot, norm, Point3};

/// 3×3 rotation matrix in row-major order.
pub type RotationMatrix = [[f64; 3]; 3];

/// Cylinder axis defined by two distinct points.
///
/// The canonical frame has its origin at `point2` and its z-axis along
/// `point1 - point2`, normalized.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Axis {
    point1: Point3,
    point2: Point3,
}

impl Axis {
    /// Build an axis from two points.
    ///
    /// # Errors
    /// Returns [`MeshError::DegenerateAxis`] when the points coincide.
    pub fn new(point1: Point3, point2: Point3) -> Result<Self, MeshError> {
        if norm(point1.sub(point2)) == 0.0 {
            return Err(MeshError::DegenerateAxis);
        }
        Ok(Self { point1, point2 })
    }

    /// Origin of the canonical frame.
    #[inline]
    pub fn origin(&self) -> Point3 {
        self.point2
    }

    /// The far endpoint the z-direction points toward.
    #[inline]
    pub fn tip(&self) -> Point3 {
        self.point1
    }

    /// Unit direction of the axis, measured from `point2` toward `point1`.
    pub fn direction(&self) -> [f64; 3] {
        let v = self.point1.sub(self.point2);
        let len = norm(v);
        [v[0] / len, v[1] / len, v[2] / len]
    }

    /// Rotation mapping the axis direction onto the canonical z-axis.
    ///
    /// Axis-angle (Rodrigues) construction: rotation axis is the cross
    /// product of the direction with z, rotation angle its arc cosine.
    /// When the cross product vanishes the identity is returned; an
    /// anti-parallel axis (direction = -z) is therefore NOT distinguished
    /// from a parallel one and produces no rotation. Known limitation.
    pub fn rotation_to_z(&self) -> RotationMatrix {
        let a = self.direction();
        let z = [0.0, 0.0, 1.0];
        let u = cross(a, z);
        let u_len = norm(u);
        if u_len == 0.0 {
            return identity();
        }
        let (ux, uy, uz) = (u[0] / u_len, u[1] / u_len, u[2] / u_len);
        let angle = dot(a, z).clamp(-1.0, 1.0).acos();
        let c = angle.cos();
        let s = angle.sin();
        [
            [
                c + ux * ux * (1.0 - c),
                ux * uy * (1.0 - c) - uz * s,
                ux * uz * (1.0 - c) + uy * s,
            ],
            [
                uy * ux * (1.0 - c) + uz * s,
                c + uy * uy * (1.0 - c),
                uy * uz * (1.0 - c) - ux * s,
            ],
            [
                uz * ux * (1.0 - c) - uy * s,
                uz * uy * (1.0 - c) + ux * s,
                c + uz * uz * (1.0 - c),
            ],
        ]
    }
}

fn identity() -> RotationMatrix {
    [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]
}

/// Transpose of a rotation matrix, i.e. its inverse.
pub fn transpose(m: &RotationMatrix) -> RotationMatrix {
    [
        [m[0][0], m[1][0], m[2][0]],
        [m[0][1], m[1][1], m[2][1]],
        [m[0][2], m[1][2], m[2][2]],
    ]
}

#[inline]
fn apply(m: &RotationMatrix, p: [f64; 3]) -> [f64; 3] {
    [dot(m[0], p), dot(m[1], p), dot(m[2], p)]
}

/// Transform world points into the canonical frame of `axis`.
///
/// Translates by the frame origin, then rotates the axis direction onto z.
///
/// # Arguments
/// * `points` - World-coordinate points.
/// * `axis` - Axis defining the canonical frame.
///
/// # Returns
/// Points expressed in the canonical frame, in input order.
pub fn to_canonical(points: &[Point3], axis: &Axis) -> Vec<Point3> {
    let rotation = axis.rotation_to_z();
    let origin = axis.origin();
    points
        .iter()
        .map(|p| Point3::from_array(apply(&rotation, p.sub(origin))))
        .collect()
}

/// Transform canonical-frame points back into world coordinates.
///
/// Applies the transposed rotation of [`to_canonical`], then translates by
/// the frame origin. The transpose of the same matrix (never a re-derived
/// signed one) keeps the round trip an exact inversion.
pub fn to_world(points: &[Point3], axis: &Axis) -> Vec<Point3> {
    let rotation = transpose(&axis.rotation_to_z());
    let origin = axis.origin();
    points
        .iter()
        .map(|p| {
            let r = apply(&rotation, p.to_array());
            Point3::new(r[0] + origin.x, r[1] + origin.y, r[2] + origin.z)
        })
        .collect()
}
