//! End-to-end pipeline: raw world points to identified nodes and hex cells.

use tracing::debug;

use crate::connectivity::{build_elements, Element};
use crate::cylindrical;
use crate::error::MeshError;
use crate::frame::{self, Axis};
use crate::nodes::{assign_node_ids, Node};
use crate::point::Point3;
use crate::rings;

/// Run the full mesh generation pipeline.
///
/// Transforms the world points into the canonical cylindrical frame of
/// `axis`, groups them into rings with the given z `tolerance`, assigns
/// structured node ids (originals plus one synthetic level per entry of
/// `fractions`), and derives the hexahedral element connectivity. Pure
/// batch computation; identical input always produces identical output.
///
/// # Arguments
/// * `points` - World-coordinate input points, assumed to lie on coaxial
///   rings.
/// * `axis` - Cylinder axis the rings share.
/// * `fractions` - Radial multipliers for the synthetic levels, in order.
/// * `tolerance` - Ring membership tolerance
///   ([`rings::DEFAULT_RING_TOL`] when in doubt).
///
/// # Returns
/// The ordered node list and the ordered element list.
///
/// # Errors
/// [`MeshError::EmptyInput`] for an empty point set,
/// [`MeshError::StructuralMismatch`] when the rings come out with unequal
/// point counts, plus anything the id assigner or connectivity builder
/// reports.
pub fn generate_mesh(
    points: &[Point3],
    axis: &Axis,
    fractions: &[f64],
    tolerance: f64,
) -> Result<(Vec<Node>, Vec<Element>), MeshError> {
    if points.is_empty() {
        return Err(MeshError::EmptyInput);
    }

    let canonical = frame::to_canonical(points, axis);
    let cylindrical_points = cylindrical::to_cylindrical_all(&canonical);
    let rings = rings::group_into_rings(&cylindrical_points, tolerance);
    debug!(ring_count = rings.len(), "grouped points into rings");

    // Hex connectivity needs the same angular count on every layer.
    let angular_count = rings[0].len();
    for ring in &rings[1..] {
        if ring.len() != angular_count {
            return Err(MeshError::StructuralMismatch {
                quantity: "points per ring",
                expected: angular_count,
                found: ring.len(),
            });
        }
    }

    let nodes = assign_node_ids(&rings, fractions, axis)?;
    debug!(node_count = nodes.len(), "assigned node ids");

    let elements = build_elements(&nodes, rings.len(), angular_count, fractions.len() + 1)?;
    debug!(element_count = elements.len(), "built element connectivity");

    Ok((nodes, elements))
}
