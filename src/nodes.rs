use serde::Serialize;

use crate::cylindrical;
use crate::error::MeshError;
use crate::frame::{self, Axis};
use crate::node_id::{NodeId, ANGULAR_FIELD_MAX, FRACTION_FIELD_MAX, RING_FIELD_MAX};
use crate::point::{CylindricalPoint, Point3};
use crate::rings::Ring;

/// Identified mesh node with world-frame coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Node {
    pub id: NodeId,
    pub position: Point3,
}

/// Assign structured ids to ring points and generate the synthetic radial
/// levels.
///
/// For each ring point (ring and angular positions 1-based) the original
/// node is emitted first with fraction field 00, followed by one synthetic
/// node per entry of `fractions`: same theta and z, radius scaled by the
/// fraction (values above 1 extend outward, values in (0, 1) move inward).
/// World coordinates come from converting the cylindrical points back to
/// canonical Cartesian and through the inverse frame transform of `axis`.
///
/// The emitted sequence is grouped ring → angular position → fraction
/// level, so id numeric order equals emission order.
///
/// # Errors
/// [`MeshError::TooManyRings`], [`MeshError::TooManyPointsInRing`], or
/// [`MeshError::TooManyFractions`] when a count would overflow its id field.
pub fn assign_node_ids(
    rings: &[Ring],
    fractions: &[f64],
    axis: &Axis,
) -> Result<Vec<Node>, MeshError> {
    if rings.len() > RING_FIELD_MAX {
        return Err(MeshError::TooManyRings { count: rings.len() });
    }
    for (ring_idx, ring) in rings.iter().enumerate() {
        if ring.len() > ANGULAR_FIELD_MAX {
            return Err(MeshError::TooManyPointsInRing {
                ring: ring_idx + 1,
                count: ring.len(),
            });
        }
    }
    if fractions.len() > FRACTION_FIELD_MAX {
        return Err(MeshError::TooManyFractions {
            count: fractions.len(),
        });
    }

    let levels = fractions.len() + 1;
    let total: usize = rings.iter().map(Ring::len).sum::<usize>() * levels;
    let mut ids: Vec<NodeId> = Vec::with_capacity(total);
    let mut cylindrical_out: Vec<CylindricalPoint> = Vec::with_capacity(total);

    for (ring_idx, ring) in rings.iter().enumerate() {
        let ring_field = ring_idx as u32 + 1;
        for (point_idx, &point) in ring.points().iter().enumerate() {
            let angular_field = point_idx as u32 + 1;
            ids.push(NodeId::encode(ring_field, angular_field, 0));
            cylindrical_out.push(point);
            for (frac_idx, &fraction) in fractions.iter().enumerate() {
                ids.push(NodeId::encode(ring_field, angular_field, frac_idx as u32 + 1));
                cylindrical_out.push(point.scale_radius(fraction));
            }
        }
    }

    let canonical = cylindrical::to_cartesian_all(&cylindrical_out);
    let world = frame::to_world(&canonical, axis);
    Ok(ids
        .into_iter()
        .zip(world)
        .map(|(id, position)| Node { id, position })
        .collect())
}

/// Helper trait to print node list summaries.
pub trait NodeListPrinter {
    fn print(&self);
}

impl NodeListPrinter for [Node] {
    fn print(&self) {
        for node in self {
            println!(
                "node {}: ({:.6}, {:.6}, {:.6})",
                node.id, node.position.x, node.position.y, node.position.z
            );
        }
    }
}

impl NodeListPrinter for Vec<Node> {
    fn print(&self) {
        self.as_slice().print();
    }
}
