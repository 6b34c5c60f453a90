use serde::Serialize;

use crate::error::MeshError;
use crate::node_id::NodeId;
use crate::nodes::Node;

/// Radial connection between two adjacent fraction levels of one point.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub a: NodeId,
    pub b: NodeId,
}

/// Hexahedral cell: 1-based sequential id plus eight node ids.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Element {
    pub id: u32,
    pub nodes: [NodeId; 8],
}

/// Extract radial edges from the flat, id-ordered node sequence.
///
/// The sequence is scanned cyclically (the last entry's successor is the
/// first) and an edge is emitted whenever two consecutive ids decode to the
/// same (ring, angular) group, i.e. they are adjacent fraction levels of
/// the same point. With `L` radial levels this yields `L - 1` edges per
/// angular position, in angular order within each ring.
pub fn extract_radial_edges(nodes: &[Node]) -> Vec<Edge> {
    let n = nodes.len();
    let mut edges = Vec::new();
    for i in 0..n {
        let a = nodes[i].id;
        let b = nodes[(i + 1) % n].id;
        if a.group() == b.group() {
            edges.push(Edge { a, b });
        }
    }
    edges
}

/// Derive hexahedral element connectivity from the id-ordered node list.
///
/// # Arguments
/// * `nodes` - Flat node sequence from the id assigner.
/// * `ring_count` - Number of axial layers.
/// * `angular_count` - Points per ring.
/// * `radial_levels` - Fraction levels per point, original included.
///
/// # Returns
/// Elements numbered sequentially from 1. Radial edges are chunked into
/// angular groups (one per point) and axial groups (one per ring); adjacent
/// angular groups pair into quad faces, the last group closing the loop
/// against the first, and quads of adjacent rings interleave into 8-node
/// cells. The axial direction stays open: no top-to-bottom wraparound.
///
/// # Errors
/// [`MeshError::StructuralMismatch`] when the node or edge counts disagree
/// with the declared ring/angular/radial sizes.
pub fn build_elements(
    nodes: &[Node],
    ring_count: usize,
    angular_count: usize,
    radial_levels: usize,
) -> Result<Vec<Element>, MeshError> {
    let expected_nodes = ring_count * angular_count * radial_levels;
    if nodes.len() != expected_nodes {
        return Err(MeshError::StructuralMismatch {
            quantity: "nodes",
            expected: expected_nodes,
            found: nodes.len(),
        });
    }
    if nodes.is_empty() || radial_levels < 2 {
        // Nothing to connect, or no radial pairs to form faces from.
        return Ok(Vec::new());
    }

    let edges = extract_radial_edges(nodes);
    let edges_per_position = radial_levels - 1;
    let edges_per_ring = angular_count * edges_per_position;
    let expected_edges = ring_count * edges_per_ring;
    if edges.len() != expected_edges {
        return Err(MeshError::StructuralMismatch {
            quantity: "radial edges",
            expected: expected_edges,
            found: edges.len(),
        });
    }

    // Quad faces: pair radially-aligned edges of adjacent angular positions,
    // cyclic in the angular direction, reordered (n0,n1,n2,n3) -> (n0,n3,n1,n2).
    let mut quads: Vec<[NodeId; 4]> = Vec::with_capacity(expected_edges);
    for ring_edges in edges.chunks(edges_per_ring) {
        let groups: Vec<&[Edge]> = ring_edges.chunks(edges_per_position).collect();
        for gi in 0..groups.len() {
            let curr = groups[gi];
            let next = groups[(gi + 1) % groups.len()];
            for j in 0..edges_per_position {
                quads.push([curr[j].a, next[j].b, curr[j].b, next[j].a]);
            }
        }
    }

    // Hex cells: same-position quads of adjacent rings, open in z.
    let layers: Vec<&[[NodeId; 4]]> = quads.chunks(edges_per_ring).collect();
    let mut elements = Vec::new();
    let mut element_id = 1u32;
    for pair in layers.windows(2) {
        let (lower, upper) = (pair[0], pair[1]);
        for j in 0..edges_per_ring {
            let q0 = lower[j];
            let q1 = upper[j];
            elements.push(Element {
                id: element_id,
                nodes: [q0[0], q0[1], q0[2], q0[3], q1[0], q1[1], q1[2], q1[3]],
            });
            element_id += 1;
        }
    }
    Ok(elements)
}

/// Helper trait to print element list summaries.
pub trait ElementListPrinter {
    fn print(&self);
}

impl ElementListPrinter for [Element] {
    fn print(&self) {
        for element in self {
            let ids: Vec<String> = element.nodes.iter().map(ToString::to_string).collect();
            println!("element {}: [{}]", element.id, ids.join(", "));
        }
    }
}

impl ElementListPrinter for Vec<Element> {
    fn print(&self) {
        self.as_slice().print();
    }
}
