use crate::point::CylindricalPoint;

/// Default z tolerance for ring membership.
pub const DEFAULT_RING_TOL: f64 = 0.1;

/// Ordered set of cylindrical points sharing an axial coordinate within
/// tolerance, sorted by theta ascending.
#[derive(Clone, Debug, PartialEq)]
pub struct Ring {
    points: Vec<CylindricalPoint>,
}

impl Ring {
    #[inline]
    pub fn points(&self) -> &[CylindricalPoint] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// z value the ring is ordered by.
    #[inline]
    pub fn representative_z(&self) -> f64 {
        self.points[0].z
    }
}

/// Partition cylindrical points into rings by axial coordinate.
///
/// Repeatedly takes the first unassigned point and collects every remaining
/// point whose z lies within `tolerance` of it. The reference z is the
/// first-picked point's, not a running mean, so members may straddle the
/// reference by the full tolerance on either side and a ring's spread can
/// reach `2 * tolerance`. Contents are deterministic for a given input
/// order.
///
/// Rings come back sorted by the z of each ring's first-collected member,
/// and members within a ring sorted by theta ascending. Empty input yields
/// an empty vec.
pub fn group_into_rings(points: &[CylindricalPoint], tolerance: f64) -> Vec<Ring> {
    let mut pool: Vec<CylindricalPoint> = points.to_vec();
    let mut rings: Vec<Ring> = Vec::new();

    while let Some(&reference) = pool.first() {
        let mut members = Vec::new();
        pool.retain(|p| {
            if (p.z - reference.z).abs() <= tolerance {
                members.push(*p);
                false
            } else {
                true
            }
        });
        rings.push(Ring { points: members });
    }

    // Order rings before theta-sorting members: the representative is the
    // first-collected member, not the theta-minimal one.
    rings.sort_by(|a, b| a.representative_z().total_cmp(&b.representative_z()));
    for ring in &mut rings {
        ring.points.sort_by(|a, b| a.theta.total_cmp(&b.theta));
    }
    rings
}
