pub mod connectivity;
pub mod cylindrical;
pub mod error;
pub mod frame;
pub mod generate;
pub mod node_id;
pub mod nodes;
pub mod point;
pub mod rings;

pub use connectivity::{
    build_elements, extract_radial_edges, Edge, Element, ElementListPrinter,
};
pub use cylindrical::{
    sort_by_azimuth, to_cartesian, to_cartesian_all, to_cylindrical, to_cylindrical_all,
};
pub use error::MeshError;
pub use frame::{to_canonical, to_world, Axis, RotationMatrix};
pub use generate::generate_mesh;
pub use node_id::{NodeId, ANGULAR_FIELD_MAX, FRACTION_FIELD_MAX, RING_FIELD_MAX};
pub use nodes::{assign_node_ids, Node, NodeListPrinter};
pub use point::{CylindricalPoint, Point3};
pub use rings::{group_into_rings, Ring, DEFAULT_RING_TOL};
