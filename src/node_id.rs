//! Fixed-width numeric node identifiers.
//!
//! A node id packs three decimal fields behind a constant prefix:
//!
//! ```text
//! 10 | ring (2 digits) | angular (3 digits) | fraction (2 digits)
//! ```
//!
//! Nine decimal digits total. `ring` and `angular` are the 1-based ring and
//! within-ring positions from the ring grouper; `fraction` is 0 for the
//! original point and the 1-based fraction list position for synthetic
//! points. Ids are unique and numerically ordered exactly like the node
//! emission order as long as every field stays within its width.

use serde::Serialize;
use std::fmt;

/// Highest value the 2-digit ring field can hold.
pub const RING_FIELD_MAX: usize = 99;
/// Highest value the 3-digit angular field can hold.
pub const ANGULAR_FIELD_MAX: usize = 999;
/// Highest value the 2-digit fraction field can hold.
pub const FRACTION_FIELD_MAX: usize = 99;

const PREFIX: u32 = 10;

/// Structured node identifier.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct NodeId(u32);

impl NodeId {
    /// Pack the three fields into an id.
    ///
    /// `ring` and `angular` are 1-based, `fraction` is 0-based. Field widths
    /// are checked by the node assigner before any id is built; they are
    /// debug-asserted here.
    #[inline]
    pub fn encode(ring: u32, angular: u32, fraction: u32) -> NodeId {
        debug_assert!(ring >= 1 && ring as usize <= RING_FIELD_MAX);
        debug_assert!(angular >= 1 && angular as usize <= ANGULAR_FIELD_MAX);
        debug_assert!(fraction as usize <= FRACTION_FIELD_MAX);
        NodeId(((PREFIX * 100 + ring) * 1000 + angular) * 100 + fraction)
    }

    /// Raw numeric value.
    #[inline]
    pub fn value(self) -> u32 {
        self.0
    }

    /// 1-based ring index field.
    #[inline]
    pub fn ring_index(self) -> u32 {
        self.0 / 100_000 % 100
    }

    /// 1-based angular position field.
    #[inline]
    pub fn angular_index(self) -> u32 {
        self.0 / 100 % 1000
    }

    /// Fraction level field: 0 for the original point, `k` for the k-th
    /// fraction.
    #[inline]
    pub fn fraction_index(self) -> u32 {
        self.0 % 100
    }

    /// The (ring, angular) pair shared by all radial levels of one point.
    #[inline]
    pub fn group(self) -> (u32, u32) {
        (self.ring_index(), self.angular_index())
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
