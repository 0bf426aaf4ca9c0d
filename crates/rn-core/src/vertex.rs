//! The vertex type of the path-finding graph.
//!
//! Roads are vertices, not edges: a single road may touch any number of
//! intersections, so the routable graph is bipartite.  An edge joins an
//! intersection to a road whenever the road is connected to it.  The two id
//! spaces overlap (intersection 3 and road 3 may both exist), hence the tag.

use std::fmt;

use crate::{IntersectionId, RoadId};

/// One vertex of the bipartite intersection/road graph.
///
/// Ordering puts every intersection before every road, then compares ids.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Vertex {
    Intersection(IntersectionId),
    Road(RoadId),
}

impl Vertex {
    #[inline]
    pub fn as_intersection(self) -> Option<IntersectionId> {
        match self {
            Vertex::Intersection(id) => Some(id),
            Vertex::Road(_) => None,
        }
    }

    #[inline]
    pub fn as_road(self) -> Option<RoadId> {
        match self {
            Vertex::Road(id) => Some(id),
            Vertex::Intersection(_) => None,
        }
    }

    #[inline]
    pub fn is_intersection(self) -> bool {
        matches!(self, Vertex::Intersection(_))
    }

    /// The untagged integer id, as it appears in an alternating raw path.
    #[inline]
    pub fn raw(self) -> u32 {
        match self {
            Vertex::Intersection(id) => id.0,
            Vertex::Road(id) => id.0,
        }
    }
}

impl From<IntersectionId> for Vertex {
    fn from(id: IntersectionId) -> Self {
        Vertex::Intersection(id)
    }
}

impl From<RoadId> for Vertex {
    fn from(id: RoadId) -> Self {
        Vertex::Road(id)
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Vertex::Intersection(id) => id.fmt(f),
            Vertex::Road(id) => id.fmt(f),
        }
    }
}
